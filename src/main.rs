use std::rc::Rc;

use log::{error, info};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod contact;
mod content;
mod error;
mod icons;
mod reveal;
mod components {
    pub mod contact_form;
    pub mod fade_in;
    pub mod skill_card;
    pub mod timeline_item;
    pub mod video_section;
}
mod pages {
    pub mod home;
    pub mod not_found;
}
mod quiz {
    pub mod bank;
    pub mod modal;
    pub mod score;
    pub mod session;
}

use icons::{Icon, IconGlyph};
use pages::{home::Home, not_found::NotFound};
use quiz::bank::QuestionBank;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route, bank: Option<Rc<QuestionBank>>) -> Html {
    match route {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home bank={bank} /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let scroll_callback = window.clone().map(|window| {
                    Closure::wrap(Box::new(move || {
                        let scroll_y = window.scroll_y().unwrap_or(0.0);
                        is_scrolled.set(scroll_y > config::NAV_SCROLL_THRESHOLD_PX as f64);
                    }) as Box<dyn FnMut()>)
                });

                if let (Some(window), Some(callback)) = (&window, &scroll_callback) {
                    if let Err(e) = window.add_event_listener_with_callback(
                        "scroll",
                        callback.as_ref().unchecked_ref(),
                    ) {
                        error!("Failed to watch scrolling: {:?}", e);
                    }
                }

                move || {
                    if let (Some(window), Some(callback)) = (window, scroll_callback) {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="#home" class="nav-logo">
                    <IconGlyph icon={Icon::MessageCircle} />
                    {content::SITE_TITLE}
                </a>
                <div class="nav-links">
                    { for content::NAV_LINKS.iter().map(|link| html! {
                        <a href={link.href} class="nav-link">{link.label}</a>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    width: 100%;
                    z-index: 40;
                    background: rgba(255, 255, 255, 0.6);
                    backdrop-filter: blur(12px);
                    border-bottom: 1px solid transparent;
                    transition: background 0.3s ease, border-color 0.3s ease;
                    animation: navSlideIn 0.5s ease-out;
                }
                .top-nav.scrolled {
                    background: rgba(255, 255, 255, 0.9);
                    border-bottom-color: #e5e7eb;
                }
                @keyframes navSlideIn {
                    from { transform: translateY(-100%); }
                    to { transform: translateY(0); }
                }
                .nav-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 2rem;
                    height: 4rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .nav-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-size: 1.25rem;
                    font-weight: bold;
                    color: #1f2937;
                    text-decoration: none;
                }
                .nav-links {
                    display: flex;
                    gap: 2rem;
                }
                .nav-link {
                    color: #4b5563;
                    text-decoration: none;
                    transition: color 0.2s;
                }
                .nav-link:hover {
                    color: #2563eb;
                }
                @media (max-width: 768px) {
                    .nav-links {
                        display: none;
                    }
                }
                "#}
            </style>
        </nav>
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub bank: Option<Rc<QuestionBank>>,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    let bank = props.bank.clone();

    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={move |route: Route| switch(route, bank.clone())} />
        </BrowserRouter>
    }
}

fn load_question_bank() -> Option<Rc<QuestionBank>> {
    match QuestionBank::builtin() {
        Ok(bank) => {
            info!("Loaded {} quiz questions", bank.len());
            Some(Rc::new(bank))
        }
        Err(e) => {
            error!("Question bank rejected, quiz disabled: {}", e);
            None
        }
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    let bank = load_question_bank();
    yew::Renderer::<App>::with_props(AppProps { bank }).render();
}

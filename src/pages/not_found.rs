use yew::prelude::*;
use yew_router::components::Link;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found-page">
            <h1>{"Page not found"}</h1>
            <p>{"Everything on this site lives on a single page."}</p>
            <Link<Route> to={Route::Home} classes="not-found-link">
                {"Back to the start"}
            </Link<Route>>
            <style>
                {r#"
                .not-found-page {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    color: #1f2937;
                }
                .not-found-link {
                    color: #2563eb;
                }
                "#}
            </style>
        </div>
    }
}

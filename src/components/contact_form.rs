use gloo_timers::callback::Timeout;
use log::{debug, warn};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::contact::ContactForm;
use crate::error::ContactField;
use crate::icons::{Icon, IconGlyph};

pub enum ContactMsg {
    Input(ContactField, String),
    Submit,
    AcknowledgementExpired,
}

/// "Share Your Thoughts" card. Submissions stay in the browser.
pub struct ContactCard {
    form: ContactForm,
    error: Option<String>,
    reset_timer: Option<Timeout>,
}

impl Component for ContactCard {
    type Message = ContactMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            form: ContactForm::new(),
            error: None,
            reset_timer: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ContactMsg::Input(field, value) => {
                self.form.set_field(field, value);
                self.error = None;
                true
            }
            ContactMsg::Submit => match self.form.submit() {
                Ok(()) => {
                    self.error = None;
                    let link = ctx.link().clone();
                    self.reset_timer = Some(Timeout::new(config::ACKNOWLEDGEMENT_MS, move || {
                        link.send_message(ContactMsg::AcknowledgementExpired);
                    }));
                    true
                }
                Err(e) => {
                    warn!("Contact form rejected: {}", e);
                    self.error = Some(e.to_string());
                    true
                }
            },
            ContactMsg::AcknowledgementExpired => {
                self.reset_timer = None;
                self.form.acknowledgement_expired();
                debug!("Contact acknowledgement expired, form reset");
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            ContactMsg::Submit
        });
        let text_input = |field: ContactField| {
            ctx.link().callback(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                ContactMsg::Input(field, input.value())
            })
        };
        let on_message = ctx.link().callback(|e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            ContactMsg::Input(ContactField::Message, input.value())
        });

        html! {
            <div class="contact-card">
                <h3>{"Share Your Thoughts"}</h3>
                if self.form.is_acknowledged() {
                    <div class="contact-thanks">
                        <IconGlyph icon={Icon::CheckCircle} class="thanks-icon" />
                        <h4>{"Thank You!"}</h4>
                        <p>{"Your message has been received. We appreciate your feedback!"}</p>
                    </div>
                } else {
                    <form class="contact-form" {onsubmit}>
                        if let Some(error) = &self.error {
                            <div class="error-message">{error}</div>
                        }
                        <div>
                            <label for="name">{ContactField::Name.label()}</label>
                            <input
                                type="text"
                                id="name"
                                name="name"
                                value={self.form.field(ContactField::Name).to_string()}
                                oninput={text_input(ContactField::Name)}
                                required=true
                            />
                        </div>
                        <div>
                            <label for="email">{ContactField::Email.label()}</label>
                            <input
                                type="email"
                                id="email"
                                name="email"
                                value={self.form.field(ContactField::Email).to_string()}
                                oninput={text_input(ContactField::Email)}
                                required=true
                            />
                        </div>
                        <div>
                            <label for="message">{ContactField::Message.label()}</label>
                            <textarea
                                id="message"
                                name="message"
                                rows="5"
                                placeholder="Share your communication challenges, successes, or questions..."
                                value={self.form.field(ContactField::Message).to_string()}
                                oninput={on_message}
                                required=true
                            />
                        </div>
                        <button type="submit" class="primary-button">
                            {"Send Message "}
                            <IconGlyph icon={Icon::Send} />
                        </button>
                    </form>
                }
            </div>
        }
    }
}

//! The testimonials section: published list, submission form, status line.

use api::HttpTestimonials;
use dioxus::core::Task;
use dioxus::prelude::*;

use crate::config::{page_origin, WidgetConfig};
use crate::controller::{self, ListView, SubmitFlag};
use crate::feedback::{expire_after, Feedback, MessageArea};

const TESTIMONIALS_CSS: Asset = asset!("/assets/styling/testimonials.css");

/// Element ids the page stylesheet and scripts rely on.
pub const LIST_ID: &str = "testimonials-list";
pub const FORM_ID: &str = "testimonial-form";
pub const AUTHOR_ID: &str = "author";
pub const TEXT_ID: &str = "text";
pub const MESSAGE_ID: &str = "testimonial-message";

/// Published testimonials plus a form to add one.
///
/// The list is fetched once when the widget mounts. A submission shows a
/// message that hides itself after `messages.hide_after_ms`; a newer message
/// replaces the pending hide instead of stacking another one. The submit
/// button stays disabled while a request is in flight.
#[component]
pub fn TestimonialsWidget(config: WidgetConfig) -> Element {
    let client = use_hook(|| HttpTestimonials::new(&config.api, &page_origin()));

    let mut list = use_signal(|| ListView::Loading);
    let mut author = use_signal(String::new);
    let mut text = use_signal(String::new);
    let mut area = use_signal(MessageArea::default);
    let mut submitting = use_signal(|| false);
    let mut hide_task = use_signal(|| None::<Task>);

    let loader = client.clone();
    use_future(move || {
        let loader = loader.clone();
        async move {
            list.set(controller::load_list(&loader).await);
        }
    });

    let hide_after = config.messages.hide_after();
    let mut show_feedback = move |feedback: Feedback| {
        let pending = hide_task.write().take();
        if let Some(pending) = pending {
            pending.cancel();
        }
        let ticket = area.write().show(feedback);
        let task = spawn(expire_after(hide_after, ticket, move |ticket| {
            area.write().expire(ticket);
        }));
        hide_task.set(Some(task));
    };

    let submit_messages = config.messages.clone();
    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        let messages = submit_messages.clone();
        async move {
            let outcome = controller::submit_guarded(
                &client,
                &mut submitting,
                &author(),
                &text(),
                &messages,
            )
            .await;

            let Some(outcome) = outcome else {
                return;
            };
            if outcome.reset_form {
                author.set(String::new());
                text.set(String::new());
            }
            show_feedback(outcome.feedback);
        }
    };

    let list_markup = list.read().markup(&config.messages);
    let (message_class, message_text) = {
        let area = area.read();
        (area.css_class(), area.text().to_string())
    };

    rsx! {
        document::Stylesheet { href: TESTIMONIALS_CSS }

        section {
            class: "testimonials",
            h3 { "What people are saying" }

            div {
                id: LIST_ID,
                class: "testimonials-list",
                dangerous_inner_html: "{list_markup}",
            }

            h4 { "Share your experience" }
            form {
                id: FORM_ID,
                onsubmit: onsubmit,

                div {
                    class: "form-group",
                    label { r#for: AUTHOR_ID, "Your name:" }
                    input {
                        id: AUTHOR_ID,
                        r#type: "text",
                        required: true,
                        placeholder: "Jane Doe",
                        value: "{author}",
                        oninput: move |evt: FormEvent| author.set(evt.value()),
                    }
                }

                div {
                    class: "form-group",
                    label { r#for: TEXT_ID, "Your testimonial:" }
                    textarea {
                        id: TEXT_ID,
                        required: true,
                        rows: "4",
                        value: "{text}",
                        oninput: move |evt: FormEvent| text.set(evt.value()),
                    }
                }

                button {
                    r#type: "submit",
                    disabled: submitting(),
                    if submitting() {
                        "Submitting..."
                    } else {
                        "Submit Testimonial"
                    }
                }
            }

            div {
                id: MESSAGE_ID,
                class: "{message_class}",
                "{message_text}"
            }
        }
    }
}

impl SubmitFlag for Signal<bool> {
    fn is_pending(&self) -> bool {
        *self.read()
    }

    fn set_pending(&mut self, pending: bool) {
        *self.write() = pending;
    }
}

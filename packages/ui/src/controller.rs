//! Load and submit flows behind [`TestimonialsWidget`](crate::TestimonialsWidget).
//!
//! Both flows are plain async functions over [`TestimonialsApi`] so the
//! component only has to move their results into signals.

use api::{SubmissionRequest, SubmitError, Testimonial, TestimonialsApi};

use crate::config::MessagesConfig;
use crate::feedback::Feedback;
use crate::markup::{render_notice, render_testimonials};

/// What the list container currently shows.
#[derive(Clone, Debug, PartialEq)]
pub enum ListView {
    Loading,
    Empty,
    Items(Vec<Testimonial>),
    Failed,
}

impl ListView {
    pub fn markup(&self, messages: &MessagesConfig) -> String {
        match self {
            ListView::Loading => render_notice("testimonials-loading", &messages.loading),
            ListView::Empty => render_notice("testimonials-empty", &messages.empty),
            ListView::Items(items) => render_testimonials(items),
            ListView::Failed => render_notice("testimonials-error", &messages.load_failed),
        }
    }
}

/// Fetch the list once and decide what to show.
pub async fn load_list<A: TestimonialsApi>(api: &A) -> ListView {
    match api.list().await {
        Ok(items) if items.is_empty() => ListView::Empty,
        Ok(items) => {
            tracing::debug!("Loaded {} testimonials", items.len());
            ListView::Items(items)
        }
        Err(e) => {
            tracing::error!("Failed to load testimonials: {}", e);
            ListView::Failed
        }
    }
}

/// Result of a submission that actually reached the network.
#[derive(Clone, Debug, PartialEq)]
pub struct SubmitOutcome {
    pub feedback: Feedback,
    /// Clear the form fields (only after the server accepted the entry).
    pub reset_form: bool,
}

/// Validate the form values and post them.
///
/// Returns `None` without touching the network when either field is blank
/// after trimming.
pub async fn submit<A: TestimonialsApi>(
    api: &A,
    author: &str,
    text: &str,
    messages: &MessagesConfig,
) -> Option<SubmitOutcome> {
    let request = SubmissionRequest::from_fields(author, text)?;

    let outcome = match api.submit(&request).await {
        Ok(ack) => {
            tracing::debug!("Testimonial accepted (id: {:?})", ack.id);
            let message = if ack.approved {
                &messages.submitted_published
            } else {
                &messages.submitted_pending
            };
            SubmitOutcome {
                feedback: Feedback::info(message.as_str()),
                reset_form: true,
            }
        }
        Err(e) => {
            match &e {
                SubmitError::Rejected { .. } => {
                    tracing::warn!("Testimonial rejected: {} ({:?})", e, e.detail())
                }
                SubmitError::Network(_) => tracing::error!("Failed to submit testimonial: {}", e),
            }
            let message = e.detail().unwrap_or(messages.submit_failed.as_str());
            SubmitOutcome {
                feedback: Feedback::error(message),
                reset_form: false,
            }
        }
    };
    Some(outcome)
}

/// Holder of the "submission pending" flag.
pub trait SubmitFlag {
    fn is_pending(&self) -> bool;
    fn set_pending(&mut self, pending: bool);
}

/// [`submit`], but a no-op while another submission holds `flag`.
///
/// The flag is cleared again whatever the outcome.
pub async fn submit_guarded<A: TestimonialsApi, F: SubmitFlag>(
    api: &A,
    flag: &mut F,
    author: &str,
    text: &str,
    messages: &MessagesConfig,
) -> Option<SubmitOutcome> {
    if flag.is_pending() {
        tracing::debug!("Submission already in flight, ignoring");
        return None;
    }
    flag.set_pending(true);
    let outcome = submit(api, author, text, messages).await;
    flag.set_pending(false);
    outcome
}

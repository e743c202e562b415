//! This crate contains the testimonials widget and the logic behind it.

pub mod config;
pub use config::{MessagesConfig, WidgetConfig};

pub mod controller;
pub use controller::{load_list, submit, submit_guarded, ListView, SubmitFlag, SubmitOutcome};

mod feedback;
pub use feedback::{expire_after, Feedback, FeedbackKind, MessageArea, HIDDEN_CLASS};

pub mod markup;
pub use markup::escape_html;

mod timer;

mod testimonials;
pub use testimonials::{TestimonialsWidget, AUTHOR_ID, FORM_ID, LIST_ID, MESSAGE_ID, TEXT_ID};

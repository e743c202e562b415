//! # API crate: the testimonials backend as seen from the browser
//!
//! The backend exposes a single collection resource:
//!
//! | Request | Body | Response |
//! |---------|------|----------|
//! | `GET /testimonials` | none | JSON array of `{author, text}` (extra fields ignored) |
//! | `POST /testimonials` | `{author, text}` as `application/json` | acknowledgment on success, `{detail}` on failure |
//!
//! [`TestimonialsApi`] is the seam the UI talks to; [`HttpTestimonials`] is
//! the `reqwest` implementation used in production.

pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use client::{HttpTestimonials, TestimonialsApi};
pub use config::ApiConfig;
pub use error::{LoadError, SubmitError};
pub use models::{ErrorBody, SubmissionRequest, SubmitAck, Testimonial};

//! HTTP access to the testimonials collection.

use std::future::Future;

use serde_json::Value;

use crate::config::ApiConfig;
use crate::error::{LoadError, SubmitError};
use crate::models::{testimonials_from_value, ErrorBody, SubmissionRequest, SubmitAck, Testimonial};

/// Async interface to the testimonials backend.
pub trait TestimonialsApi {
    /// Fetch the published testimonials, in server order.
    fn list(&self) -> impl Future<Output = Result<Vec<Testimonial>, LoadError>>;

    /// Submit a new testimonial for moderation.
    fn submit(
        &self,
        request: &SubmissionRequest,
    ) -> impl Future<Output = Result<SubmitAck, SubmitError>>;
}

/// [`TestimonialsApi`] over HTTP with `reqwest`.
#[derive(Clone, Debug)]
pub struct HttpTestimonials {
    client: reqwest::Client,
    url: String,
}

impl HttpTestimonials {
    pub fn new(config: &ApiConfig, fallback_origin: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: config.endpoint_url(fallback_origin),
        }
    }
}

impl PartialEq for HttpTestimonials {
    fn eq(&self, other: &Self) -> bool {
        self.url == other.url
    }
}

impl TestimonialsApi for HttpTestimonials {
    async fn list(&self) -> Result<Vec<Testimonial>, LoadError> {
        tracing::debug!("GET {}", self.url);
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        // An empty body is an absent list, not a malformed one.
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }
        let value: Value = serde_json::from_slice(&body)?;
        Ok(testimonials_from_value(value)?)
    }

    async fn submit(&self, request: &SubmissionRequest) -> Result<SubmitAck, SubmitError> {
        tracing::debug!("POST {} (author: {})", self.url, request.author);
        let response = self.client.post(&self.url).json(request).send().await?;

        let status = response.status();
        let body = response.bytes().await?;

        if status.is_success() {
            let ack = serde_json::from_slice(&body).unwrap_or_else(|e| {
                tracing::debug!("Unreadable submission acknowledgment: {}", e);
                SubmitAck::default()
            });
            return Ok(ack);
        }

        let detail = serde_json::from_slice::<ErrorBody>(&body)
            .ok()
            .and_then(ErrorBody::detail_text);
        Err(SubmitError::Rejected {
            status: status.as_u16(),
            detail,
        })
    }
}

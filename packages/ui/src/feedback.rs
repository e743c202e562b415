//! Transient status text shown under the submission form.

use std::time::Duration;

use crate::timer::sleep;

/// CSS class of the message area when nothing is shown.
pub const HIDDEN_CLASS: &str = "hidden";

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FeedbackKind {
    Info,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Feedback {
    pub kind: FeedbackKind,
    pub text: String,
}

impl Feedback {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: FeedbackKind::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: FeedbackKind::Error,
            text: text.into(),
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self.kind {
            FeedbackKind::Info => "info",
            FeedbackKind::Error => "error",
        }
    }
}

/// State of the message area.
///
/// Each [`show`](MessageArea::show) hands out a ticket; only the ticket of the
/// newest message can hide it, so a late hide for an older message is a no-op.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MessageArea {
    current: Option<Feedback>,
    shown: u64,
}

impl MessageArea {
    pub fn show(&mut self, feedback: Feedback) -> u64 {
        self.shown += 1;
        self.current = Some(feedback);
        self.shown
    }

    /// Hide the message if `ticket` is still the newest. Returns whether it hid.
    pub fn expire(&mut self, ticket: u64) -> bool {
        if ticket != self.shown || self.current.is_none() {
            return false;
        }
        self.current = None;
        true
    }

    pub fn current(&self) -> Option<&Feedback> {
        self.current.as_ref()
    }

    pub fn css_class(&self) -> &'static str {
        self.current.as_ref().map_or(HIDDEN_CLASS, Feedback::css_class)
    }

    pub fn text(&self) -> &str {
        self.current.as_ref().map_or("", |feedback| feedback.text.as_str())
    }
}

/// Wait `delay`, then hand `ticket` back to `expire`.
pub async fn expire_after(delay: Duration, ticket: u64, expire: impl FnOnce(u64)) {
    sleep(delay).await;
    expire(ticket);
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    const DELAY: Duration = Duration::from_millis(5000);

    #[test]
    fn test_hidden_by_default() {
        let area = MessageArea::default();
        assert_eq!(area.css_class(), HIDDEN_CLASS);
        assert_eq!(area.text(), "");
        assert!(area.current().is_none());
    }

    #[test]
    fn test_show_sets_class_and_text() {
        let mut area = MessageArea::default();
        area.show(Feedback::error("Too short"));
        assert_eq!(area.css_class(), "error");
        assert_eq!(area.text(), "Too short");
    }

    #[test]
    fn test_stale_ticket_does_not_hide() {
        let mut area = MessageArea::default();
        let first = area.show(Feedback::info("one"));
        let second = area.show(Feedback::info("two"));

        assert!(!area.expire(first));
        assert_eq!(area.text(), "two");
        assert!(area.expire(second));
        assert!(!area.expire(second));
        assert_eq!(area.css_class(), HIDDEN_CLASS);
    }

    #[tokio::test(start_paused = true)]
    async fn test_message_hides_after_delay() {
        let area = RefCell::new(MessageArea::default());
        let ticket = area.borrow_mut().show(Feedback::info("Thanks"));

        let hide = expire_after(DELAY, ticket, |ticket| {
            area.borrow_mut().expire(ticket);
        });
        tokio::pin!(hide);

        let early = tokio::time::timeout(DELAY - Duration::from_millis(1), &mut hide).await;
        assert!(early.is_err());
        assert_eq!(area.borrow().css_class(), "info");

        hide.await;
        assert_eq!(area.borrow().css_class(), HIDDEN_CLASS);
    }

    #[tokio::test(start_paused = true)]
    async fn test_newer_message_outlives_older_hide() {
        let area = RefCell::new(MessageArea::default());
        let first = area.borrow_mut().show(Feedback::info("first"));
        let first_hide = expire_after(DELAY, first, |ticket| {
            area.borrow_mut().expire(ticket);
        });
        tokio::pin!(first_hide);

        // Second message arrives three seconds in.
        let cut = tokio::time::timeout(Duration::from_secs(3), &mut first_hide).await;
        assert!(cut.is_err());
        let second = area.borrow_mut().show(Feedback::error("second"));

        first_hide.await;
        assert_eq!(area.borrow().text(), "second");

        let start = tokio::time::Instant::now();
        expire_after(DELAY, second, |ticket| {
            area.borrow_mut().expire(ticket);
        })
        .await;
        assert!(start.elapsed() >= DELAY);
        assert_eq!(area.borrow().css_class(), HIDDEN_CLASS);
    }
}

use std::time::Duration;

use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::HubError;
use crate::normalization;

/// The topic a contact message falls under.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    General,
    Custom,
    Technical,
    Feedback,
    Collaboration,
}

/// A single message submitted through the contact form. Transient:
/// held only for the duration of the simulated submission, never
/// persisted or transmitted.
#[derive(Clone, Debug, Deserialize)]
pub struct ContactSubmission {
    /// The name provided.
    #[serde(deserialize_with = "normalization::deserialize")]
    pub(crate) name: String,

    /// The email address provided.
    pub(crate) email: String,

    /// The subject line provided.
    #[serde(deserialize_with = "normalization::deserialize")]
    pub(crate) subject: String,

    /// The topic selected, if any.
    #[serde(default)]
    pub(crate) category: Option<Topic>,

    /// The message body provided.
    #[serde(deserialize_with = "normalization::deserialize")]
    pub(crate) message: String,
}

/// The acknowledgement returned for a successful submission.
#[derive(Clone, Debug, Serialize)]
pub struct Receipt {
    /// The ID assigned to the submission, for the toast on the client.
    pub(crate) id: Uuid,

    pub(crate) title: String,

    pub(crate) description: String,
}

impl Receipt {
    fn new() -> Self {
        Receipt {
            id: Uuid::new_v4(),
            title: "Message sent successfully!".to_owned(),
            description: "Thank you for reaching out. I will get back to you within 24 hours."
                .to_owned(),
        }
    }
}

/// Where submitted messages go.
pub trait Outbox {
    fn send(&self, submission: ContactSubmission) -> BoxFuture<Result<Receipt, HubError>>;
}

pub use self::stub::*;

mod stub {
    use futures::future::BoxFuture;
    use futures::FutureExt;

    use super::{ContactSubmission, Duration, HubError, Receipt};

    /// An outbox with no transport behind it: waits out a fixed delay,
    /// then unconditionally reports success and drops the message.
    /// Placeholder for a future backend integration.
    pub struct StubOutbox {
        delay: Duration,
    }

    impl StubOutbox {
        pub fn new(delay: Duration) -> Self {
            StubOutbox { delay }
        }
    }

    impl super::Outbox for StubOutbox {
        fn send(&self, _submission: ContactSubmission) -> BoxFuture<Result<Receipt, HubError>> {
            let delay = self.delay;

            async move {
                tokio::time::sleep(delay).await;

                Ok(Receipt::new())
            }
            .boxed()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use futures::poll;

    use super::{ContactSubmission, Outbox, StubOutbox, Topic};

    fn submission() -> ContactSubmission {
        serde_json::from_str(
            r#"{
                "name": "Sarah M.",
                "email": "sarah@example.com",
                "subject": "Custom worksheets",
                "category": "custom",
                "message": "Could you make a set for my daughter?"
            }"#,
        )
        .expect("parse submission")
    }

    #[tokio::test(start_paused = true)]
    async fn submission_is_pending_for_the_full_delay() {
        let outbox = StubOutbox::new(Duration::from_millis(1000));

        let mut send = Box::pin(outbox.send(submission()));
        assert!(poll!(&mut send).is_pending(), "resolved before the delay");

        tokio::time::advance(Duration::from_millis(999)).await;
        assert!(poll!(&mut send).is_pending(), "resolved during the delay");

        tokio::time::advance(Duration::from_millis(1)).await;
        let receipt = send.await.expect("submission succeeds");

        assert_eq!(receipt.title, "Message sent successfully!");
        assert_eq!(
            receipt.description,
            "Thank you for reaching out. I will get back to you within 24 hours."
        );
    }

    #[test]
    fn fields_are_normalized_on_deserialization() {
        let submission: ContactSubmission = serde_json::from_str(
            r#"{
                "name": "  Mike D.  ",
                "email": "mike@example.com",
                "subject": " Feedback ",
                "message": " Great resources for homeschooling. "
            }"#,
        )
        .expect("parse submission");

        assert_eq!(submission.name, "Mike D.");
        assert_eq!(submission.subject, "Feedback");
        assert_eq!(submission.message, "Great resources for homeschooling.");
        assert_eq!(submission.category, None);
    }

    #[test]
    fn missing_required_fields_fail_to_parse() {
        let result: Result<ContactSubmission, _> =
            serde_json::from_str(r#"{"name": "Lisa K.", "email": "lisa@example.com"}"#);

        assert!(result.is_err());
    }

    #[test]
    fn category_keys_match_the_form() {
        let topic: Topic = serde_json::from_str(r#""collaboration""#).expect("parse topic");

        assert_eq!(topic, Topic::Collaboration);
    }
}

//! Outgoing message model

use serde::{Serialize, Serializer};

/// Timestamp layout the message service expects for `created_at`.
const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A message ready to be posted to `message.create`.
///
/// `uuid` is the idempotency key. It is sent exactly as stored, so a caller
/// retrying a send must reuse the same value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutgoingMessage {
    pub bubble_id: u64,
    pub created_at: String,
    /// Always the literal string `"null"`; the server assigns the real ID.
    #[serde(rename = "id", serialize_with = "serialize_null_id")]
    placeholder_id: (),
    pub message: String,
    /// Always empty; attachments are not supported.
    pub messagemedia: Vec<serde_json::Value>,
    pub user_id: u64,
    pub uuid: String,
}

fn serialize_null_id<S: Serializer>(_: &(), serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str("null")
}

impl OutgoingMessage {
    /// New message with a fresh v4 idempotency UUID, stamped now (UTC).
    pub fn new(bubble_id: u64, user_id: u64, body: impl Into<String>) -> Self {
        Self::with_uuid(
            bubble_id,
            user_id,
            body,
            chrono::Utc::now().format(CREATED_AT_FORMAT).to_string(),
            uuid::Uuid::new_v4().to_string(),
        )
    }

    /// Message with caller-supplied timestamp and idempotency UUID.
    pub fn with_uuid(
        bubble_id: u64,
        user_id: u64,
        body: impl Into<String>,
        created_at: impl Into<String>,
        uuid: impl Into<String>,
    ) -> Self {
        Self {
            bubble_id,
            created_at: created_at.into(),
            placeholder_id: (),
            message: body.into(),
            messagemedia: Vec::new(),
            user_id,
            uuid: uuid.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_shape() {
        let msg = OutgoingMessage::with_uuid(
            11,
            22,
            "hello",
            "2024-09-22 18:07:12",
            "A1B2C3D4-0000-4000-8000-000000000000",
        );
        assert_eq!(
            serde_json::to_value(&msg).unwrap(),
            json!({
                "bubble_id": 11,
                "created_at": "2024-09-22 18:07:12",
                "id": "null",
                "message": "hello",
                "messagemedia": [],
                "user_id": 22,
                "uuid": "A1B2C3D4-0000-4000-8000-000000000000"
            })
        );
    }

    #[test]
    fn test_new_generates_distinct_uuids() {
        let a = OutgoingMessage::new(1, 2, "x");
        let b = OutgoingMessage::new(1, 2, "x");
        assert_ne!(a.uuid, b.uuid);
        assert!(uuid::Uuid::parse_str(&a.uuid).is_ok());
        assert!(chrono::NaiveDateTime::parse_from_str(&a.created_at, CREATED_AT_FORMAT).is_ok());
    }
}

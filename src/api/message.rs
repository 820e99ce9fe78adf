//! Message endpoints

use serde_json::{json, Value};

use super::client::ProntoClient;
use crate::error::Result;
use crate::models::OutgoingMessage;

const CREATE: &str = "api/v1/message.create";
const ADD_REACTION: &str = "api/v1/message.addreaction";
const REMOVE_REACTION: &str = "api/v1/message.removereaction";
const EDIT: &str = "api/v1/message.edit";
const DELETE: &str = "api/v1/message.delete";

impl ProntoClient {
    /// Post a message to a bubble.
    ///
    /// The message's `uuid` is the idempotency key; build the message once and
    /// reuse it if the caller decides to resend.
    pub async fn send_message(&self, message: &OutgoingMessage) -> Result<Value> {
        self.authed_post(CREATE, message).await
    }

    /// React to a message with the given reaction type.
    pub async fn add_reaction(&self, message_id: u64, reaction_type_id: u64) -> Result<Value> {
        self.authed_post(ADD_REACTION, &reaction_body(message_id, reaction_type_id))
            .await
    }

    /// Withdraw a reaction previously added with [`add_reaction`](Self::add_reaction).
    pub async fn remove_reaction(&self, message_id: u64, reaction_type_id: u64) -> Result<Value> {
        self.authed_post(REMOVE_REACTION, &reaction_body(message_id, reaction_type_id))
            .await
    }

    /// Replace the body of a message the current user sent.
    pub async fn edit_message(&self, message_id: u64, body: &str) -> Result<Value> {
        let payload = json!({
            "message": body,
            "message_id": message_id,
        });
        self.authed_post(EDIT, &payload).await
    }

    /// Delete a message the current user sent.
    pub async fn delete_message(&self, message_id: u64) -> Result<Value> {
        self.authed_post(DELETE, &json!({ "message_id": message_id }))
            .await
    }
}

fn reaction_body(message_id: u64, reaction_type_id: u64) -> Value {
    json!({
        "message_id": message_id,
        "reactiontype_id": reaction_type_id,
    })
}

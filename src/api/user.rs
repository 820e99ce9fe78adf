//! User profile endpoints

use serde_json::{json, Value};

use super::client::ProntoClient;
use crate::error::Result;

const INFO: &str = "api/v1/user.info";
const MUTUAL_GROUPS: &str = "api/v1/user.mutualgroups";

impl ProntoClient {
    /// Fetch a user's profile.
    pub async fn user_info(&self, user_id: u64) -> Result<Value> {
        self.authed_post(INFO, &json!({ "id": user_id })).await
    }

    /// Bubbles shared between the current user and `user_id`.
    pub async fn mutual_groups(&self, user_id: u64) -> Result<Value> {
        self.authed_post(MUTUAL_GROUPS, &json!({ "id": user_id }))
            .await
    }
}

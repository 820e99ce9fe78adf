//! Bubble (conversation) endpoints

use serde_json::{json, Value};

use super::client::ProntoClient;
use crate::error::Result;
use crate::models::{CreateBubbleRequest, HistoryRequest, InviteRequest};

const LIST: &str = "api/v3/bubble.list";
const HISTORY: &str = "api/v1/bubble.history";
const INFO: &str = "api/v2/bubble.info";
const MARK: &str = "api/v1/bubble.mark";
const DM_CREATE: &str = "api/v1/dm.create";
const CREATE: &str = "api/v1/bubble.create";
const INVITE: &str = "api/v1/bubble.invite";
const KICK: &str = "api/v1/bubble.kick";

impl ProntoClient {
    /// List every bubble the current user belongs to.
    pub async fn list_bubbles(&self) -> Result<Value> {
        self.authed_post_empty(LIST).await
    }

    /// Fetch the most recent page of messages in a bubble, or the page sent
    /// before `latest` when a message ID is given.
    pub async fn bubble_history(&self, bubble_id: u64, latest: Option<u64>) -> Result<Value> {
        self.authed_post(HISTORY, &HistoryRequest { bubble_id, latest })
            .await
    }

    /// Fetch a bubble's details (title, category, membership).
    pub async fn bubble_info(&self, bubble_id: u64) -> Result<Value> {
        self.authed_post(INFO, &json!({ "bubble_id": bubble_id }))
            .await
    }

    /// Mark every message in a bubble as read.
    pub async fn mark_bubble_read(&self, bubble_id: u64) -> Result<Value> {
        self.authed_post(MARK, &json!({ "bubble_id": bubble_id }))
            .await
    }

    /// Open (or fetch) a direct-message bubble with one user.
    pub async fn create_dm(&self, organization_id: u64, user_id: u64) -> Result<Value> {
        let body = json!({
            "organization_id": organization_id,
            "user_id": user_id,
        });
        self.authed_post(DM_CREATE, &body).await
    }

    /// Create a group bubble, optionally filed under a category.
    pub async fn create_bubble(
        &self,
        organization_id: u64,
        title: &str,
        category_id: Option<u64>,
    ) -> Result<Value> {
        let body = CreateBubbleRequest {
            organization_id,
            title,
            category_id,
        };
        self.authed_post(CREATE, &body).await
    }

    /// Invite users to a bubble, optionally notifying them by email or SMS.
    pub async fn invite_members(
        &self,
        bubble_id: u64,
        user_ids: &[u64],
        send_emails: bool,
        send_sms: bool,
    ) -> Result<Value> {
        let body = InviteRequest::new(bubble_id, user_ids, send_emails, send_sms);
        self.authed_post(INVITE, &body).await
    }

    /// Remove users from a bubble.
    pub async fn kick_members(&self, bubble_id: u64, user_ids: &[u64]) -> Result<Value> {
        let body = json!({
            "bubble_id": bubble_id,
            "users": user_ids,
        });
        self.authed_post(KICK, &body).await
    }
}

#[cfg(test)]
mod tests {
    use crate::api::client::test_support::{mock_client, RecordingObserver, TOKEN};
    use crate::error::ProntoError;
    use mockito::Matcher;
    use serde_json::json;

    #[tokio::test]
    async fn test_list_bubbles_returns_body() {
        let mut server = mockito::Server::new_async().await;
        let body = json!({ "bubbles": [{ "id": 1, "title": "General" }] });
        let mock = server
            .mock("POST", "/api/v3/bubble.list")
            .match_header("authorization", format!("Bearer {}", TOKEN).as_str())
            .with_status(200)
            .with_body(body.to_string())
            .create_async()
            .await;

        let client = mock_client(&server.url());
        assert_eq!(client.list_bubbles().await.unwrap(), body);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_list_bubbles_unauthorized_is_not_retried() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/v3/bubble.list")
            .with_status(401)
            .with_body(r#"{"error": "unauthenticated"}"#)
            .expect(1)
            .create_async()
            .await;

        let observer = RecordingObserver::new();
        let client = mock_client(&server.url()).with_observer(observer.clone());
        let err = client.list_bubbles().await.unwrap_err();
        assert!(err.is_unauthorized());
        assert!(err.to_string().contains("401"));
        assert_eq!(
            observer
                .events()
                .iter()
                .filter(|e| e.starts_with("request"))
                .count(),
            1
        );
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_history_without_cursor_omits_latest() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/v1/bubble.history")
            .match_body(Matcher::Json(json!({ "bubble_id": 3640189 })))
            .with_status(200)
            .with_body(r#"{"messages": []}"#)
            .create_async()
            .await;

        let client = mock_client(&server.url());
        client.bubble_history(3640189, None).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_history_with_cursor_sends_exact_value() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/v1/bubble.history")
            .match_body(Matcher::Json(json!({
                "bubble_id": 3640189,
                "latest": 78912345
            })))
            .with_status(200)
            .with_body(r#"{"messages": []}"#)
            .create_async()
            .await;

        let client = mock_client(&server.url());
        client.bubble_history(3640189, Some(78912345)).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_info_and_mark_hit_their_versions() {
        let mut server = mockito::Server::new_async().await;
        let info = server
            .mock("POST", "/api/v2/bubble.info")
            .match_body(Matcher::Json(json!({ "bubble_id": 5 })))
            .with_status(200)
            .with_body(r#"{"bubble": {"id": 5}}"#)
            .create_async()
            .await;
        let mark = server
            .mock("POST", "/api/v1/bubble.mark")
            .match_body(Matcher::Json(json!({ "bubble_id": 5 })))
            .with_status(200)
            .with_body(r#"{"ok": true}"#)
            .create_async()
            .await;

        let client = mock_client(&server.url());
        assert_eq!(client.bubble_info(5).await.unwrap()["bubble"]["id"], 5);
        client.mark_bubble_read(5).await.unwrap();
        info.assert_async().await;
        mark.assert_async().await;
    }

    #[tokio::test]
    async fn test_create_dm_payload() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/v1/dm.create")
            .match_body(Matcher::Json(json!({
                "organization_id": 2245,
                "user_id": 5302519
            })))
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        let client = mock_client(&server.url());
        client.create_dm(2245, 5302519).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_create_bubble_category_optional() {
        let mut server = mockito::Server::new_async().await;
        let without = server
            .mock("POST", "/api/v1/bubble.create")
            .match_body(Matcher::Json(json!({
                "organization_id": 2245,
                "title": "Study group"
            })))
            .with_status(200)
            .with_body("{}")
            .expect(1)
            .create_async()
            .await;
        let with = server
            .mock("POST", "/api/v1/bubble.create")
            .match_body(Matcher::Json(json!({
                "organization_id": 2245,
                "title": "Study group",
                "category_id": 77
            })))
            .with_status(200)
            .with_body("{}")
            .expect(1)
            .create_async()
            .await;

        let client = mock_client(&server.url());
        client.create_bubble(2245, "Study group", None).await.unwrap();
        client
            .create_bubble(2245, "Study group", Some(77))
            .await
            .unwrap();
        without.assert_async().await;
        with.assert_async().await;
    }

    #[tokio::test]
    async fn test_invite_members_payload() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/v1/bubble.invite")
            .match_body(Matcher::Json(json!({
                "bubbleID": 10,
                "invitations": [{ "user_id": 5302519 }, { "user_id": 5302367 }],
                "sendemails": false,
                "sendsms": true
            })))
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        let client = mock_client(&server.url());
        client
            .invite_members(10, &[5302519, 5302367], false, true)
            .await
            .unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_kick_members_uses_users_key() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/v1/bubble.kick")
            .match_body(Matcher::Json(json!({
                "bubble_id": 10,
                "users": [5302519]
            })))
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        let client = mock_client(&server.url());
        client.kick_members(10, &[5302519]).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_forbidden_invite_surfaces_status() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/api/v1/bubble.invite")
            .with_status(403)
            .create_async()
            .await;

        let client = mock_client(&server.url());
        let err = client.invite_members(1, &[2], true, true).await.unwrap_err();
        assert_eq!(err.status(), Some(403));
        assert!(matches!(err, ProntoError::Status { .. }));
    }
}

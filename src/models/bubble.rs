//! Bubble (conversation) request bodies

use serde::Serialize;

/// Body of `bubble.history`. `latest` pages backwards from that message.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryRequest {
    pub bubble_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest: Option<u64>,
}

/// Body of `bubble.create`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateBubbleRequest<'a> {
    pub organization_id: u64,
    pub title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<u64>,
}

/// A single entry in a `bubble.invite` invitation list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Invitation {
    pub user_id: u64,
}

/// Body of `bubble.invite`.
#[derive(Debug, Clone, Serialize)]
pub struct InviteRequest {
    #[serde(rename = "bubbleID")]
    pub bubble_id: u64,
    pub invitations: Vec<Invitation>,
    pub sendemails: bool,
    pub sendsms: bool,
}

impl InviteRequest {
    /// One invitation per user, in the given order.
    pub fn new(bubble_id: u64, user_ids: &[u64], send_emails: bool, send_sms: bool) -> Self {
        Self {
            bubble_id,
            invitations: user_ids
                .iter()
                .map(|&user_id| Invitation { user_id })
                .collect(),
            sendemails: send_emails,
            sendsms: send_sms,
        }
    }
}

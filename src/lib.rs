//! Pronto client - thin typed wrapper over the Pronto chat HTTP API
//!
//! Each call builds one JSON request, POSTs it, and hands back the response
//! body as `serde_json::Value`.
//!
//! ```no_run
//! # async fn demo() -> pronto_client::Result<()> {
//! use pronto_client::{OutgoingMessage, ProntoClient};
//!
//! let client = ProntoClient::new()?.with_access_token("token");
//! let bubbles = client.list_bubbles().await?;
//! println!("{}", bubbles);
//! client
//!     .send_message(&OutgoingMessage::new(3640189, 5302519, "hello"))
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod models;

pub use api::{NoopObserver, ProntoClient, RequestObserver, TracingObserver};
pub use config::Config;
pub use error::{ProntoError, Result};
pub use models::{DeviceInfo, Invitation, OutgoingMessage};

//! API client for Pronto
//!
//! Every operation is an async method on [`ProntoClient`], grouped by the
//! endpoint family it belongs to.

mod auth;
mod bubble;
pub mod client;
mod message;
pub mod observer;
mod user;

pub use client::{ProntoClient, DEFAULT_ACCOUNTS_BASE, DEFAULT_API_BASE};
pub use observer::{NoopObserver, RequestObserver, TracingObserver};

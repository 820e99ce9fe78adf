//! Request payload models for Pronto entities

mod bubble;
mod device;
mod message;

pub use bubble::*;
pub use device::*;
pub use message::*;

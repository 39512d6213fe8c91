//! Conversation session management.
//!
//! A `Session` owns the conversation history, checks connectivity once at
//! startup, and runs one exchange with the chat service at a time.
//! Presentation layers follow along through [`Session::subscribe`].

mod chat;
mod lifecycle;
mod manager;
mod types;


pub use manager::Session;
pub use types::{ExchangeOutcome, IgnoreReason, Submission};

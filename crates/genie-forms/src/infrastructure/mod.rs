//! Infrastructure layer
//!
//! Adapters behind the outbound ports.

pub mod notify;
pub mod persistence;

pub use notify::{HttpNotificationGateway, RecordingNotificationGateway};
pub use persistence::{InMemoryStore, NoOpEventPublisher};

//! v1 API Data Transfer Objects.
//!
//! These types define the wire format for the v1 REST API. They are kept
//! separate from the domain models in `src/models/` and handle serialization,
//! deserialization, and domain-model conversion.

pub mod auth;
pub mod chats;
pub mod common;
pub mod content;
pub mod favorites;
pub mod matching;
pub mod profile;

// Re-export all public types for convenient access via `dto::*`.
pub use auth::*;
pub use chats::*;
pub use common::*;
pub use content::*;
pub use favorites::*;
pub use matching::*;
pub use profile::*;

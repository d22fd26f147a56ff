//! Domain layer containing navigation entities and collaborator contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Route entries, views, decisions, sessions
//! - [`guard`] - The [`guard::Guard`] contract consulted before activation
//! - [`repositories`] - Data access trait definitions
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Traits define contracts implemented by the application and infrastructure layers
//! - Resolution logic lives in [`crate::application::services`]

pub mod entities;
pub mod guard;
pub mod repositories;

#[cfg(test)]
pub use guard::MockGuard;

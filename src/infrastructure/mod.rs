//! Infrastructure layer for storage integrations.
//!
//! Implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - Session repository implementations

pub mod persistence;

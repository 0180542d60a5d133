//! # QuickServe Core
//!
//! Domain models and availability calculations for the QuickServe service
//! marketplace. This crate is pure: it performs no I/O and holds no state,
//! so every operation can be called concurrently without coordination.
//!
//! The central piece is [`availability::generate_slots`], which expands a
//! provider's weekly working-hours template into the bookable one-hour slots
//! for a given calendar date. Everything else supports that calculation:
//! the model types, the timezone anchoring used when a chosen slot is turned
//! into an absolute booking window, and the shared error taxonomy.

/// Slot generation and availability queries
pub mod availability;
/// Error types shared across the workspace
pub mod errors;
/// Domain models and wire DTOs
pub mod models;

//! # QuickServe Client
//!
//! Client-side support for the QuickServe views: environment-driven
//! configuration, an explicit session store replacing ad-hoc browser
//! storage, and composition of booking payloads from a chosen calendar
//! slot. The actual HTTP requests stay with the caller; this crate only
//! prepares what goes on the wire.

/// Booking draft composition
pub mod booking;
/// Environment configuration and endpoint URLs
pub mod config;
/// Session lifecycle and credentials
pub mod session;

//! SafeCart Core - Shared types library.
//!
//! This crate provides common types used across all SafeCart components:
//! - `api` - Order-placement HTTP service
//! - `client` - Dashboard view-model and API client
//! - `cli` - Command-line tools for migrations and management
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no database
//! access, no HTTP clients. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for IDs and subject identifiers, the delivery
//!   slot and order status enumerations, and the wire-format user/order records
//! - [`sanitize`] - Markup neutralization for untrusted free-text fields

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod sanitize;
pub mod types;

pub use types::*;

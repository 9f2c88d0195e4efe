//! Tulsi Core - Shared domain types.
//!
//! This crate provides common types used across all Tulsi Botanicals components:
//! - `site` - Public marketing site and admin API
//! - `cli` - Command-line tools for migrations and management
//!
//! # Architecture
//!
//! The core crate contains only types and parsing logic - no I/O, no database
//! access, no HTTP clients. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, emails, prices, and
//!   product categories

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;

//! Clementine Core - Shared types library.
//!
//! This crate provides common types used across the Clementine storefront
//! demo:
//! - `storefront` - Catalog client, cart/wishlist and identity services
//! - `integration-tests` - Cross-crate behavior tests
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no storage
//! access. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, ratings,
//!   and load phases

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;

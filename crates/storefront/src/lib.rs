//! Clementine Storefront - headless state layer for a storefront demo.
//!
//! # Architecture
//!
//! - Products come from a public read-only REST catalog (fakestoreapi-style)
//!   via [`catalog::CatalogClient`]
//! - Cart, wishlist, and the mock identity directory persist through a
//!   synchronous string-keyed [`storage::KeyValueStore`]
//! - View-facing providers ([`services`]) own their collections and derived
//!   state; the persistent store is a durability mirror, never a second
//!   writer
//! - [`state::AppState`] wires everything together once at startup and
//!   hands out hydrated provider objects
//!
//! The view layer itself (routing, templates, styling) is out of scope.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod storage;

//! Bodega Core - Shared types library.
//!
//! This crate provides the domain types used by the shop server:
//! products, categories, credential roles, and checkout receipts.
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP, no storage
//! access. This keeps it lightweight and allows it to be used anywhere.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;

//! Core domain types for the bodega shop.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod category;
pub mod id;
pub mod product;
pub mod receipt;
pub mod role;

pub use category::Category;
pub use id::*;
pub use product::Product;
pub use receipt::{Receipt, ReceiptItem};
pub use role::Role;

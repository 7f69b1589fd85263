//! Bodega shop server library.
//!
//! This crate provides the shop server as a library, allowing it to be
//! tested end-to-end without starting a network listener.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod seed;
pub mod state;
pub mod store;

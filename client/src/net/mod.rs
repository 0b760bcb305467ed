//! Networking modules for the catalog REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the `/product` calls and `types` defines the wire schema they
//! exchange.

pub mod api;
pub mod types;

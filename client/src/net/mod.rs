//! Networking modules for the query endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the REST call and `types` defines the wire schema shared
//! with the server's `/query` route.

pub mod api;
pub mod types;

//! Networking modules for the external rental API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the REST calls and classifies failures; `types` defines the
//! JSON records exchanged with the backend.

pub mod api;
pub mod types;

//! Networking modules for the cookie-session API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the REST calls, `csrf` manages the double-submit token the
//! API requires, `download` handles credentialed document retrieval, and
//! `types` defines the wire schema.

pub mod api;
pub mod csrf;
pub mod download;
pub mod types;

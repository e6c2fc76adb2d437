//! Networking modules for the authentication API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` abstracts the HTTP call, `api` holds endpoint and body
//! helpers, `auth` runs the candidate-base login loop, `error` defines the
//! failure kinds, and `types` defines the wire schema.

pub mod api;
pub mod auth;
pub mod error;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;

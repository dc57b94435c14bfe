//! solace-inquiries
//!
//! Read-only client for the enquiry service's REST API. Blocking; call it
//! from `spawn_blocking` inside async code.

pub mod client;
pub mod error;
pub mod payload;

//! solace-export
//!
//! CSV downloads of admin tables.

pub mod csv;
pub mod error;

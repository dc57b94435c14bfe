//! solace-storage
//!
//! Key/value backends (local filesystem, S3, in-memory) and the typed
//! collection and repository layers on top of them.

pub mod any;
pub mod collection;
pub mod error;
pub mod local;
pub mod memory;
pub mod repository;
pub mod s3;
pub mod store;

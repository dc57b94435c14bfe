//! solace-core
//!
//! Pure domain types, storage key conventions, seed data, and the
//! filter/paginate and form-editing logic shared by every admin screen.
//! No I/O. Shared vocabulary of the Solace admin system.

pub mod entity;
pub mod error;
pub mod form;
pub mod id;
pub mod image;
pub mod keys;
pub mod models;
pub mod seed;
pub mod validation;
pub mod view;

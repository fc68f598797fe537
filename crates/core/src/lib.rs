//! Domain rules shared by the Taskboard database and API crates.
//!
//! This crate performs no I/O. It owns the identifier format, the task
//! status set, due-date parsing and the payload validation rules that run
//! before anything reaches the store.

pub mod error;
pub mod messages;
pub mod object_id;
pub mod status;
pub mod types;
pub mod validation;

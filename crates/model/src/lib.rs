//! Shared data types for console form validation: form records, engine kinds,
//! validation results and the wire payloads exchanged with the console.

pub mod core;
pub mod error;
pub mod execution;
pub mod form;
pub mod validation;

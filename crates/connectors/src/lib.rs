//! Clients for the console endpoints the form validators depend on.

pub mod config;
pub mod console;
pub mod error;
pub mod lookup;
pub mod retry;

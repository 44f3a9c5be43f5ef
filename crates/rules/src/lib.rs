//! Client-side validation rules for the console's connection and transfer forms.
//!
//! Each validator evaluates every rule against the whole record, collects the
//! violations in rule order and awaits at most one console lookup. Rendering
//! the outcome is left to [`feedback`].

pub mod connection;
pub mod feedback;
pub mod messages;
pub mod rule_set;
pub mod transfer;

pub use connection::{validate_connection_create, validate_connection_edit};
pub use transfer::validate_create_transfer;

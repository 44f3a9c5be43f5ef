pub mod client;

pub use client::ConsoleClient;

pub mod client;
pub mod headers;

pub use client::{StatusClient, StatusSource};

//! Account API adapter.

mod client;
mod dto;

pub use client::{DEFAULT_API_BASE, HttpAuthClient};

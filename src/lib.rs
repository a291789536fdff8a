#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod arena;
mod error;
mod ipv6;
mod parsed_url;
mod parser;
mod scheme;

// Public API
pub use error::ParseError;
pub use parsed_url::ParsedUrl;

pub type Result<T> = core::result::Result<T, ParseError>;

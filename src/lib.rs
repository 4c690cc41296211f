//! Rope text storage with sub-linear indexing, splitting and concatenation.

pub mod config;
pub mod error;
pub mod rope;

pub use self::config::Config;
pub use self::error::{Result, RopeError};
pub use self::rope::{Chars, Chunks, Rope};

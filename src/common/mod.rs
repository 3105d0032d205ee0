//! Common types and utilities shared across pagesim.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration constants and validation
//! - Error types
//! - Identifiers (PageId, FrameId)

pub mod config;
pub mod error;
mod frame_id;
mod page_id;

pub use error::{ConfigError, Error, Result};
pub use frame_id::FrameId;
pub use page_id::PageId;

//! Vision API module.
//!
//! Provides:
//! - Chat-completion request/response types
//! - The `VisionApi` client and the `DescriptionProvider` seam

pub mod client;
pub mod types;

pub use client::{DescriptionProvider, VisionApi};

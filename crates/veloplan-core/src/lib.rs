//! Core motion-planning utilities shared across veloplan components.
//!
//! This crate intentionally avoids any transport- or CLI-specific
//! dependencies.

pub mod filter;
pub mod profile;

/// URL for premium features and documentation.
pub const DOCS_URL: &str = "https://supermaker.ai/blog/what-is-kling-motion-control-ai-how-to-use-motion-control-ai-free-online/";

/// Return the documentation URL.
pub fn docs_url() -> &'static str {
    DOCS_URL
}

//! Content selector chain
//!
//! These rules identify the main documentation body on a component page.

use super::SelectorStrategy;

/// Content strategies in priority order
/// First container with non-empty inner HTML wins
pub static CONTENT_STRATEGIES: &[SelectorStrategy] = &[
    // VitePress documentation body
    SelectorStrategy::new("vp-doc", ".vp-doc"),
    SelectorStrategy::new("content-container", "main .content-container"),
    SelectorStrategy::new("body", "body"),
];

//! Navigation selector chain
//!
//! Sidebar links of VitePress/VuePress-style themes first, then generic
//! menu and `<nav>` anchors.

use super::SelectorStrategy;

/// Navigation strategies in priority order. First non-empty set wins.
pub static NAVIGATION_STRATEGIES: &[SelectorStrategy] = &[
    SelectorStrategy::new("sidebar", ".VPSidebarNav .VPLink, .sidebar .sidebar-link"),
    SelectorStrategy::new("menu", ".menu-item, .nav-item a, nav a"),
];

//! Site profiles: the static tables that separate component pages from
//! documentation chrome.
//!
//! These tables encode one documentation site's conventions (labels are in
//! the site's own language). They do not generalise to other sites without a
//! new profile.

use crate::result::NavigationEntry;

/// Conventions of one documentation site's navigation tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteProfile {
    /// Short identifier used in logs.
    pub name: &'static str,

    /// Labels of scaffold pages, compared for exact equality.
    pub chrome_labels: &'static [&'static str],

    /// Label prefixes of pager links ("previous article", "next article").
    pub chrome_prefixes: &'static [&'static str],

    /// Path segment every component page URL contains.
    pub component_segment: &'static str,

    /// URL suffixes of non-component pages living under the component segment.
    pub excluded_suffixes: &'static [&'static str],
}

/// TuniaoUI (Vue 2) documentation at vue2.tuniaokj.com.
pub static TUNIAO_VUE2: SiteProfile = SiteProfile {
    name: "tuniao-vue2",
    chrome_labels: &[
        "介绍",         // introduction
        "安装",         // installation
        "配置",         // configuration
        "快速上手",     // quick start
        "内置样式",     // built-in styles
        "注意事项",     // notes
        "加群交流反馈", // feedback group
    ],
    chrome_prefixes: &[
        "上一篇", // previous article
        "下一篇", // next article
    ],
    component_segment: "/components/",
    excluded_suffixes: &[
        "install.html",
        "intro.html",
        "setting.html",
        "quickstart.html",
        "common.html",
        "feature.html",
        "addQQGroup.html",
    ],
};

impl Default for SiteProfile {
    fn default() -> Self {
        TUNIAO_VUE2
    }
}

impl SiteProfile {
    /// Whether a label belongs to site chrome rather than a component.
    #[must_use]
    pub fn is_chrome_label(&self, name: &str) -> bool {
        self.chrome_labels.contains(&name)
            || self.chrome_prefixes.iter().any(|prefix| name.starts_with(prefix))
    }

    /// Whether a URL points at a component's own reference page.
    #[must_use]
    pub fn is_component_url(&self, url: &str) -> bool {
        url.contains(self.component_segment)
            && !self.excluded_suffixes.iter().any(|suffix| url.ends_with(suffix))
    }

    /// Whether a navigation entry represents a genuine component page.
    #[must_use]
    pub fn is_component(&self, entry: &NavigationEntry) -> bool {
        !self.is_chrome_label(&entry.name) && self.is_component_url(&entry.url)
    }
}

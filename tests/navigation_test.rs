use rs_docnav::{extract_navigation, extract_navigation_with_profile, extract_raw_navigation, SiteProfile};

/// Five component links mixed with three chrome links.
const SIDEBAR_PAGE: &str = r#"
<!DOCTYPE html>
<html>
<head><title>TuniaoUI</title></head>
<body>
  <header>
    <nav class="VPNav"><a href="/">Home</a><a href="/guide/">Guide</a></nav>
  </header>
  <aside>
    <nav class="VPSidebarNav">
      <a class="VPLink" href="/components/intro.html">介绍</a>
      <a class="VPLink" href="/components/install.html">安装</a>
      <a class="VPLink" href="/components/button.html">Button 按钮</a>
      <a class="VPLink" href="/components/icon.html">Icon 图标</a>
      <a class="VPLink" href="/components/checkbox.html">Checkbox 复选框</a>
      <a class="VPLink" href="/components/code.html">Code 验证码</a>
      <a class="VPLink" href="/components/keyboard.html">Keyboard 键盘</a>
      <a class="VPLink" href="/components/addQQGroup.html">加群交流反馈</a>
    </nav>
  </aside>
  <main><div class="vp-doc"><p>Setting up</p></div></main>
</body>
</html>
"#;

#[test]
fn sidebar_fixture_yields_only_components() {
    let entries = extract_navigation(SIDEBAR_PAGE);
    let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();

    assert_eq!(
        names,
        vec!["Button 按钮", "Icon 图标", "Checkbox 复选框", "Code 验证码", "Keyboard 键盘"]
    );
    assert!(entries.iter().all(|e| e.url.contains("/components/")));
}

#[test]
fn sidebar_wins_over_header_nav() {
    // The header <nav> would match the menu strategy, but the sidebar is found first
    let raw = extract_raw_navigation(SIDEBAR_PAGE);
    assert_eq!(raw.len(), 8);
    assert!(raw.iter().all(|e| e.url.starts_with("/components/")));
}

#[test]
fn indices_are_discovery_positions() {
    let indices: Vec<usize> = extract_navigation(SIDEBAR_PAGE).iter().map(|e| e.index).collect();
    assert_eq!(indices, vec![2, 3, 4, 5, 6]);
}

#[test]
fn menu_strategy_used_when_no_sidebar() {
    let html = r#"
        <html><body>
          <nav>
            <a href="/components/button.html">Button</a>
            <a href="/components/slider.html">Slider</a>
          </nav>
          <div class="sidebar"><a href="/components/hidden.html">Not a sidebar-link</a></div>
        </body></html>
    "#;
    let entries = extract_navigation(html);
    let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();

    assert_eq!(names, vec!["Button", "Slider"]);
}

#[test]
fn strategies_are_never_merged() {
    let html = r#"
        <html><body>
          <div class="sidebar">
            <a class="sidebar-link" href="/components/button.html">Button</a>
          </div>
          <nav><a href="/components/slider.html">Slider</a></nav>
        </body></html>
    "#;
    let entries = extract_navigation(html);

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].name, "Button");
}

#[test]
fn sidebar_of_only_chrome_does_not_fall_back() {
    // The sidebar set is non-empty, so the menu set is ignored even though
    // filtering leaves nothing.
    let html = r#"
        <html><body>
          <div class="VPSidebarNav"><a class="VPLink" href="/components/intro.html">介绍</a></div>
          <nav><a href="/components/button.html">Button</a></nav>
        </body></html>
    "#;
    assert!(extract_navigation(html).is_empty());
}

#[test]
fn menu_items_and_nav_item_links() {
    let html = r#"
        <html><body>
          <ul>
            <li><a class="menu-item" href="/components/tabs.html">Tabs</a></li>
          </ul>
          <div class="nav-item"><a href="/components/toast.html">Toast</a></div>
        </body></html>
    "#;
    let entries = extract_navigation(html);
    let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();

    assert_eq!(names, vec!["Tabs", "Toast"]);
}

#[test]
fn pager_links_are_dropped() {
    let html = r#"
        <html><body><nav>
          <a href="/components/button.html">上一篇 Button</a>
          <a href="/components/checkbox.html">下一篇 Checkbox</a>
          <a href="/components/radio.html">Radio</a>
        </nav></body></html>
    "#;
    let entries = extract_navigation(html);

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].name, "Radio");
    assert_eq!(entries[0].index, 2);
}

#[test]
fn non_component_urls_are_dropped() {
    let html = r#"
        <html><body><nav>
          <a href="/guide/button.html">Button guide</a>
          <a href="/components/setting.html">Settings</a>
          <a href="/components/common.html">Common</a>
          <a href="/components/feature.html">Features</a>
          <a href="/components/quickstart.html">Start</a>
          <a href="https://x.com/components/badge.html">Badge</a>
        </nav></body></html>
    "#;
    let entries = extract_navigation(html);

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].url, "https://x.com/components/badge.html");
}

#[test]
fn custom_profile_changes_filtering() {
    static DOCS: SiteProfile = SiteProfile {
        name: "docs",
        chrome_labels: &["Overview"],
        chrome_prefixes: &["Prev:"],
        component_segment: "/widgets/",
        excluded_suffixes: &["index.html"],
    };

    let html = r#"
        <html><body><nav>
          <a href="/widgets/index.html">All widgets</a>
          <a href="/widgets/overview.html">Overview</a>
          <a href="/widgets/slider.html">Prev: Slider</a>
          <a href="/widgets/button.html">Button</a>
          <a href="/components/button.html">Old button</a>
        </nav></body></html>
    "#;
    let entries = extract_navigation_with_profile(html, &DOCS);

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].name, "Button");
}

#[test]
fn extraction_is_idempotent() {
    assert_eq!(extract_navigation(SIDEBAR_PAGE), extract_navigation(SIDEBAR_PAGE));
}

#[test]
fn no_navigation_is_empty_not_error() {
    assert!(extract_navigation("<html><body><div>plain</div></body></html>").is_empty());
}

#[test]
fn utf16_meta_page_still_lists_components() {
    let body = r#"<html><head><meta charset="utf-16"></head><body>
        <nav class="VPSidebarNav"><a class="VPLink" href="/components/button.html">Button 按钮</a></nav>
        </body></html>"#;
    let html = rs_docnav::encoding::decode_html(body.as_bytes(), None);
    let entries = extract_navigation(&html);

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].name, "Button 按钮");
}

//! Component name resolution.

use crate::error::{Error, Result};
use crate::result::NavigationEntry;

/// Trim a user-supplied component name, rejecting blank input.
///
/// An empty target would match every entry, so callers taking names from
/// users check them here before resolving.
pub fn validate_component_name(name: &str) -> Result<&str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::InvalidInput("Please provide valid component name".to_string()));
    }
    Ok(name)
}

/// Find the first entry whose name contains `target`, ignoring case.
///
/// Matching is first-come rather than best-fit: with entries `Checkbox` and
/// `CheckboxGroup`, the target `check` resolves to whichever comes first.
///
/// # Example
///
/// ```rust
/// use rs_docnav::{find_component, NavigationEntry};
///
/// let entries: Vec<NavigationEntry> = ["Button", "Checkbox", "CheckboxGroup"]
///     .iter()
///     .enumerate()
///     .map(|(index, name)| NavigationEntry {
///         name: name.to_string(),
///         url: format!("/components/{}.html", name.to_lowercase()),
///         index,
///     })
///     .collect();
///
/// assert_eq!(find_component(&entries, "check")?.name, "Checkbox");
/// # Ok::<(), rs_docnav::Error>(())
/// ```
pub fn find_component<'a>(entries: &'a [NavigationEntry], target: &str) -> Result<&'a NavigationEntry> {
    if entries.is_empty() {
        return Err(Error::NotFound("No components found in the navigation".to_string()));
    }

    let needle = target.to_lowercase();
    entries
        .iter()
        .find(|entry| entry.name.to_lowercase().contains(&needle))
        .ok_or_else(|| Error::NotFound(format!("Component \"{target}\" not found in the navigation")))
}

//! File-name slugs for batch items.

use config::constants::DEFAULT_SLUG;

/// Turns a washer name into a lowercase token safe for file names.
///
/// Every run of characters outside `[a-z0-9._-]` becomes a single `-`,
/// and leading or trailing hyphens are dropped.
///
/// ```
/// use washer_cli::slug::slugify;
///
/// assert_eq!(slugify("  M6 Washer (Steel) "), "m6-washer-steel");
/// assert_eq!(slugify("???"), "washer");
/// ```
pub fn slugify(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    let mut in_gap = false;
    for ch in value.trim().to_lowercase().chars() {
        if matches!(ch, 'a'..='z' | '0'..='9' | '.' | '_' | '-') {
            slug.push(ch);
            in_gap = false;
        } else if !in_gap {
            slug.push('-');
            in_gap = true;
        }
    }

    let slug = slug.trim_matches('-');
    if slug.is_empty() {
        DEFAULT_SLUG.to_string()
    } else {
        slug.to_string()
    }
}

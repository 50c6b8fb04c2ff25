//! Bullet-list extraction with a whole-text fallback scan.
//!
//! Primary rule: keep the lines of the section substring whose trimmed form
//! starts with the bullet prefix `"- "`, stripped and trimmed, in order,
//! duplicates preserved.
//!
//! Fallback rule: when the primary rule yields nothing (the header was
//! missing or mislabeled), scan the entire raw text for the first contiguous
//! run of bullet lines after a case-insensitive occurrence of the section
//! label. The fallback is a heuristic: a second, unrelated mention of the
//! label elsewhere in the text can capture the wrong run. If nothing
//! matches, the list is empty; extraction never fails.

/// Extract an ordered bullet list for a labeled section.
pub fn extract_list(section_raw: &str, full_raw: &str, label: &str) -> Vec<String> {
    let items = bullet_items(section_raw);
    if !items.is_empty() {
        return items;
    }
    fallback_bullet_run(full_raw, label)
}

/// Stripped and trimmed bullet lines of `text`, in order.
fn bullet_items(text: &str) -> Vec<String> {
    text.lines()
        .filter_map(|line| line.trim().strip_prefix("- "))
        .map(|item| item.trim().to_string())
        .collect()
}

/// First contiguous bullet run on the lines after a case-insensitive
/// occurrence of `label`, anywhere in the full text.
fn fallback_bullet_run(full_raw: &str, label: &str) -> Vec<String> {
    let needle = label.to_lowercase();
    let lines: Vec<&str> = full_raw.lines().collect();
    let Some(anchor) = lines
        .iter()
        .position(|line| line.to_lowercase().contains(&needle))
    else {
        return Vec::new();
    };

    let mut items = Vec::new();
    for line in &lines[anchor + 1..] {
        match line.trim().strip_prefix("- ") {
            Some(item) => items.push(item.trim().to_string()),
            None if !items.is_empty() => break,
            None => continue,
        }
    }
    items
}

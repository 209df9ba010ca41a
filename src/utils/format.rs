//! Output formatting utilities

/// Truncate a string to a maximum length
#[must_use]
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    if max_len >= 3 {
        let trimmed = s.chars().take(max_len - 3).collect::<String>();
        format!("{trimmed}...")
    } else {
        "...".to_string()
    }
}

/// Text progress bar, e.g. `[#####-----]` for 50% at width 10.
#[must_use]
pub fn percent_bar(percent: u32, width: usize) -> String {
    let percent = usize::try_from(percent.min(100)).unwrap_or(100);
    let filled = (percent * width + 50) / 100;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

/// `1 star` / `3 stars`
#[must_use]
pub fn pluralize(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

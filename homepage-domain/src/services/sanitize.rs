//! Text helpers shared by every widget fragment.

pub const DESCRIPTION_LIMIT: usize = 150;
pub const ELLIPSIS: &str = "...";

/// Encodes `value` so it is inert inside element content and quoted attributes.
pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Cuts `value` to [`DESCRIPTION_LIMIT`] characters and appends [`ELLIPSIS`]
/// when it is longer; shorter values come back unchanged.
pub fn truncate_description(value: &str) -> String {
    truncate_chars(value, DESCRIPTION_LIMIT)
}

pub fn truncate_chars(value: &str, limit: usize) -> String {
    match value.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}{}", &value[..cut], ELLIPSIS),
        None => value.to_string(),
    }
}

/// Groups digits the German way: `1234567` becomes `1.234.567`.
pub fn format_downloads(count: u64) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

use super::{PREVIEW_MAX_CHARS, PREVIEW_MAX_LINES};

/// Human-readable form of backend snippet ids like `d1_paragraph_3`.
pub(super) fn readable_id(id: &str) -> String {
    match id.split_once("_paragraph_") {
        Some((document, part)) if !part.is_empty() => format!("{document} \u{b6}{part}"),
        _ => id.to_string(),
    }
}

pub(super) fn marker(active: bool) -> &'static str {
    if active {
        "[x]"
    } else {
        "[ ]"
    }
}

pub(super) fn truncate_text(text: &str, max_len: usize) -> String {
    if text.len() <= max_len || max_len <= 3 {
        return text.to_string();
    }
    let mut truncated = text[..max_len.saturating_sub(3)].to_string();
    truncated.push_str("...");
    truncated
}

pub(super) fn preview_text(text: &str) -> String {
    if text.trim().is_empty() {
        return "<empty>".to_string();
    }
    let mut out = String::new();
    for (idx, line) in text.lines().enumerate() {
        if idx >= PREVIEW_MAX_LINES {
            break;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(line.trim());
    }
    truncate_text(&out, PREVIEW_MAX_CHARS)
}

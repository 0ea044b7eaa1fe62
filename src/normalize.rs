/// Normalize an option name to its canonical camel-style key.
///
/// `ERROR_ON_REGEX`, `error-on-regex`, `error on regex` and `errorOnRegex`
/// all become `errorOnRegex`. A token without separators that is entirely
/// upper-case is lower-cased wholesale (`SILENT` → `silent`); otherwise only
/// its first character is lowered.
pub fn normalize_option_key(key: &str) -> String {
    let trimmed = key.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    if trimmed.chars().any(is_separator) {
        return join_segments(&trimmed.to_lowercase());
    }

    if trimmed == trimmed.to_uppercase() {
        return trimmed.to_lowercase();
    }

    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Map a canonical option key onto the snake_case field it configures:
/// `errorOnMissing` → `error_on_missing`.
pub fn field_name(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_uppercase() {
            out.push('_');
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

fn is_separator(c: char) -> bool {
    c == '_' || c == '-' || c.is_whitespace()
}

// A separator run followed by [a-z0-9] collapses into that character upper-cased.
// A run with nothing joinable after it is kept as-is.
fn join_segments(lowered: &str) -> String {
    let mut out = String::with_capacity(lowered.len());
    let mut chars = lowered.chars().peekable();

    while let Some(c) = chars.next() {
        if !is_separator(c) {
            out.push(c);
            continue;
        }

        let mut run = String::from(c);
        while let Some(&next) = chars.peek() {
            if !is_separator(next) {
                break;
            }
            run.push(next);
            chars.next();
        }

        match chars.peek() {
            Some(&next) if next.is_ascii_lowercase() || next.is_ascii_digit() => {
                out.push(next.to_ascii_uppercase());
                chars.next();
            }
            _ => out.push_str(&run),
        }
    }
    out
}

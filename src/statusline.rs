/// Converts a kilobyte count (decimal string) to a human-readable size.
/// Invalid, zero, or negative input renders as "0M". Values of 1024 MB or
/// more render as "<whole>.<tenth>G" with the decimal truncated, not rounded.
pub fn format_memory(kb: &str) -> String {
    let kb_val: i64 = match kb.trim().parse() {
        Ok(v) => v,
        Err(_) => return "0M".to_string(),
    };
    if kb_val <= 0 {
        return "0M".to_string();
    }

    let mb = kb_val / 1024;
    if mb >= 1024 {
        let gb_tenths = mb * 10 / 1024;
        format!("{}.{}G", gb_tenths / 10, gb_tenths % 10)
    } else {
        format!("{mb}M")
    }
}

/// Extracts the value of the last `"current_dir":"…"` occurrence from a JSON
/// blob. Line endings are normalized away first so the scan sees a single
/// line. Returns an empty string when the key is absent or unterminated.
pub fn extract_current_dir(json: &str) -> String {
    const KEY: &str = "\"current_dir\":\"";

    let normalized = json.replace("\r\n", "\n").replace('\n', "");

    let mut result = "";
    for (idx, _) in normalized.match_indices(KEY) {
        let rest = &normalized[idx + KEY.len()..];
        if let Some(end) = rest.find('"') {
            result = &rest[..end];
        }
    }
    result.to_string()
}

#[cfg(test)]
#[path = "tests/statusline_tests.rs"]
mod tests;

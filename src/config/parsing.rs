/// What: Strip an inline comment (`//` or `#`) from a config value.
///
/// Inputs:
/// - `s`: Raw value text after the `=`
///
/// Output:
/// - Trimmed value without trailing comment.
///
/// Details:
/// - A leading `#` is kept so values such as `#fff` survive; a second `#` starts a comment.
pub(crate) fn strip_inline_comment(mut s: &str) -> &str {
    if let Some(i) = s.find("//") {
        s = &s[..i];
    }
    if let Some(i_rel) = if let Some(stripped) = s.strip_prefix('#') {
        stripped.find('#').map(|j| j + 1)
    } else {
        s.find('#')
    } {
        s = &s[..i_rel];
    }
    s.trim()
}

/// Interpret common truthy spellings (`true`, `1`, `yes`, `on`).
pub(crate) fn parse_bool(val: &str) -> bool {
    let lv = val.to_ascii_lowercase();
    lv == "true" || lv == "1" || lv == "yes" || lv == "on"
}

//! Input validation for names coming from clients.

/// Reduce a client supplied file name to its final path component.
///
/// Both `/` and `\` count as separators, since browsers on Windows send full
/// paths. Returns `None` when nothing usable is left (empty, `.` or `..`).
///
/// # Examples
///
/// ```rust
/// use yoloset_core::utils::sanitize_file_name;
///
/// assert_eq!(sanitize_file_name("cat.jpg"), Some("cat.jpg".to_string()));
/// assert_eq!(sanitize_file_name("C:\\photos\\cat.jpg"), Some("cat.jpg".to_string()));
/// assert_eq!(sanitize_file_name("../"), None);
/// ```
pub fn sanitize_file_name(raw: &str) -> Option<String> {
    let last = raw
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .trim()
        .trim_matches('\0');
    if last.is_empty() || last == "." || last == ".." || last.contains('\0') {
        return None;
    }
    Some(last.to_string())
}

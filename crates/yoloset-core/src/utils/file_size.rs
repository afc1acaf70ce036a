//! Human readable file sizes.

const KB: u64 = 1024;
const MB: u64 = KB * 1024;
const GB: u64 = MB * 1024;
const TB: u64 = GB * 1024;

/// Format a byte count with binary units, truncating to whole units.
///
/// # Examples
///
/// ```rust
/// use yoloset_core::utils::format_file_size;
///
/// assert_eq!(format_file_size(512), "512Bytes");
/// assert_eq!(format_file_size(1536), "1KB");
/// assert_eq!(format_file_size(5 * 1024 * 1024), "5MB");
/// ```
pub fn format_file_size(bytes: u64) -> String {
    match bytes {
        b if b >= TB => format!("{}TB", b / TB),
        b if b >= GB => format!("{}GB", b / GB),
        b if b >= MB => format!("{}MB", b / MB),
        b if b >= KB => format!("{}KB", b / KB),
        b => format!("{b}Bytes"),
    }
}

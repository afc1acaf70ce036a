//! Terminal rendering helpers.

use yoloset_core::{Gallery, PageWindow};

/// Print a horizontal separator line.
pub fn print_separator(width: usize) {
    println!("{}", "-".repeat(width));
}

/// Render the page links around the current page, e.g. `1 .. [3] 4 5 .. 9`.
pub fn format_window(page: u64, last_page: u64, window: &PageWindow) -> String {
    let mut parts = Vec::new();
    if page > 1 {
        parts.push("1".to_string());
        if window.before.first().is_some_and(|&first| first > 2) {
            parts.push("..".to_string());
        }
    }
    parts.extend(window.before.iter().map(u64::to_string));
    parts.push(format!("[{page}]"));
    parts.extend(window.after.iter().map(u64::to_string));
    if page < last_page {
        if window.after.last().is_some_and(|&last| last + 1 < last_page) {
            parts.push("..".to_string());
        }
        parts.push(last_page.to_string());
    }
    parts.join(" ")
}

/// Print one gallery page as a numbered list.
pub fn print_gallery(gallery: &Gallery) {
    let state = &gallery.pagination;
    println!(
        "{} / {}: page {} of {} ({} images)",
        gallery.dataset,
        gallery.kind.tag(),
        state.page,
        state.last_page.max(1),
        state.total_items
    );
    print_separator(60);

    if gallery.entries.is_empty() {
        println!("No images.");
    }
    let first = state.start_index();
    for (offset, entry) in (1u64..).zip(&gallery.entries) {
        println!("{:>5}  {}", first + offset, entry.name());
    }

    print_separator(60);
    println!(
        "{}",
        format_window(state.page, state.last_page.max(1), &gallery.window)
    );
}

//! Focus containment for the lightbox dialog.

/// Where Tab / Shift+Tab should move focus so it stays inside a dialog
/// with `len` focusable elements. `current` is the index of the focused
/// element within that list, if any.
///
/// Returns `Some(index)` when the trap must intervene (wrap around, or pull
/// focus back in from outside) and `None` when the browser default is fine.
pub fn next_trapped_focus(len: usize, current: Option<usize>, shift: bool) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let last = len - 1;
    match (current, shift) {
        (None, false) => Some(0),
        (None, true) => Some(last),
        (Some(0), true) => Some(last),
        (Some(i), false) if i == last => Some(0),
        (Some(i), _) if i > last => Some(0),
        _ => None,
    }
}

/// Live-region text for a newly opened project.
pub fn open_announcement(title: &str) -> String {
    format!("Opened project: {}", title)
}

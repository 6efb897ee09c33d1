//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use web_sys::Window;

use crate::config::cell;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Character grid that fits a viewport of `width` x `height` pixels.
///
/// Always at least one cell in each direction.
pub fn grid_size(width: f64, height: f64) -> (u16, u16) {
    let cells = |px: f64, cell_px: f64| {
        let n = (px / cell_px).floor();
        if n.is_finite() {
            n.clamp(1.0, u16::MAX as f64) as u16
        } else {
            1
        }
    };
    (cells(width, cell::WIDTH_PX), cells(height, cell::HEIGHT_PX))
}

/// Grid for the current window size, if the window can be measured.
pub fn viewport_grid() -> Option<(u16, u16)> {
    let window = window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some(grid_size(width, height))
}

// =============================================================================
// Browser Navigation
// =============================================================================

/// Open `url` in a new tab.
pub fn open_in_new_tab(url: &str) {
    let Some(window) = window() else {
        log::warn!("cannot open {url}: no window");
        return;
    };
    if let Err(e) = window.open_with_url_and_target(url, "_blank") {
        log::warn!("window.open failed for {url}: {e:?}");
    }
}

/// Reload the current page.
pub fn reload() {
    if let Some(window) = window()
        && let Err(e) = window.location().reload()
    {
        log::warn!("reload failed: {e:?}");
    }
}

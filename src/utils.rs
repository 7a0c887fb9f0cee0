//! Utility functions

use crate::constants::{DATA_DIR_NAME, FORCE_CONSOLE_ENV};
use std::path::PathBuf;

// Teal gradient disc with a checkmark motif. Kept inline so the binary
// never depends on external image files.
pub const BRAND_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 56 56"><defs><linearGradient id="g" x1="0" y1="0" x2="1" y2="1"><stop offset="0" stop-color="#19a7a1"/><stop offset="1" stop-color="#0f766e"/></linearGradient></defs><circle cx="28" cy="28" r="28" fill="url(#g)"/><circle cx="28" cy="28" r="23.3" fill="none" stroke="#ffffff" stroke-opacity="0.16" stroke-width="2"/><polyline points="14,28 28,37.3 46.7,18.7" fill="none" stroke="#ffffff" stroke-opacity="0.7" stroke-width="3.5" stroke-linecap="round" stroke-linejoin="round"/></svg>"##;

/// Rasterize the brand SVG to a square RGBA image (window icon, in-app logo).
pub fn rasterize_brand(size: u32) -> (Vec<u8>, u32, u32) {
    let tree = resvg::usvg::Tree::from_str(BRAND_SVG, &resvg::usvg::Options::default())
        .expect("brand SVG is valid");
    let scale = size as f32 / tree.size().width();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size, size).expect("non-zero icon size");
    resvg::render(
        &tree,
        resvg::usvg::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    (premul_to_straight(&pixmap), size, size)
}

fn premul_to_straight(pixmap: &resvg::tiny_skia::Pixmap) -> Vec<u8> {
    pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let a = p.alpha();
            if a == 0 {
                [0, 0, 0, 0]
            } else {
                let r = (p.red() as u16 * 255 / a as u16) as u8;
                let g = (p.green() as u16 * 255 / a as u16) as u8;
                let b = (p.blue() as u16 * 255 / a as u16) as u8;
                [r, g, b, a]
            }
        })
        .collect()
}

/// App data directory (settings + logs).
pub fn data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DATA_DIR_NAME)
}

/// Whether to run the graphical frontend. Console mode is used when the
/// environment has no display, or when forced via GRADE_CALCULATOR_CONSOLE.
pub fn graphics_available() -> bool {
    if std::env::var_os(FORCE_CONSOLE_ENV).is_some() {
        return false;
    }
    desktop_present()
}

#[cfg(all(unix, not(target_os = "macos")))]
fn desktop_present() -> bool {
    std::env::var_os("DISPLAY").is_some() || std::env::var_os("WAYLAND_DISPLAY").is_some()
}

#[cfg(any(not(unix), target_os = "macos"))]
fn desktop_present() -> bool {
    true
}

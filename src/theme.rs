//! Centralized theme constants for Grade Calculator
//! All colors, sizes, and styling should reference these constants

use crate::grades::Letter;
use egui::Color32;

// =============================================================================
// COLORS - Backgrounds
// =============================================================================
pub const BG_BASE: Color32 = Color32::from_rgb(0x0b, 0x12, 0x20); // deep slate
pub const BG_ELEVATED: Color32 = Color32::from_rgb(0x10, 0x18, 0x27); // slate panel
pub const BG_SURFACE: Color32 = Color32::from_rgb(0x16, 0x22, 0x35); // raised slate
pub const BG_HOVER: Color32 = Color32::from_rgb(0x13, 0x20, 0x2e); // subtle teal hover

// =============================================================================
// COLORS - Accent (Teal)
// =============================================================================
pub const ACCENT: Color32 = Color32::from_rgb(0x19, 0xa7, 0xa1);
pub const ACCENT_DEEP: Color32 = Color32::from_rgb(0x0f, 0x76, 0x6e);

// =============================================================================
// COLORS - Text
// =============================================================================
pub const TEXT_PRIMARY: Color32 = Color32::WHITE;
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0xe5, 0xe7, 0xeb); // light gray
pub const TEXT_MUTED: Color32 = Color32::from_rgb(0xa1, 0xa8, 0xb5);
pub const TEXT_DIM: Color32 = Color32::from_rgb(0x6b, 0x74, 0x85);

// =============================================================================
// COLORS - Borders
// =============================================================================
pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(0x1d, 0x28, 0x3c);
pub const BORDER_DEFAULT: Color32 = Color32::from_rgb(0x2c, 0x3a, 0x52);

// =============================================================================
// COLORS - Status
// =============================================================================
pub const ERROR_BG: Color32 = Color32::from_rgb(0x2d, 0x0a, 0x0a);
pub const ERROR_BORDER: Color32 = Color32::from_rgb(0x7f, 0x1d, 0x1d);
pub const ERROR_TEXT: Color32 = Color32::from_rgb(0xfc, 0xa5, 0xa5);

// =============================================================================
// COLORS - Buttons
// =============================================================================
pub const BTN_DEFAULT: Color32 = Color32::from_rgb(0x16, 0x22, 0x35);
pub const BTN_ACCENT: Color32 = ACCENT;
pub const BTN_ACCENT_TEXT: Color32 = Color32::from_rgb(0x03, 0x26, 0x24);

// =============================================================================
// COLORS - Letter grade badges
// =============================================================================
pub fn letter_colors(letter: Letter) -> (Color32, Color32) {
    // Returns (badge bg ~6% alpha, text_color)
    match letter {
        Letter::A => (
            Color32::from_rgba_unmultiplied(0x34, 0xd3, 0x99, 14),
            Color32::from_rgb(0x34, 0xd3, 0x99),
        ),
        Letter::B => (
            Color32::from_rgba_unmultiplied(0x38, 0xbd, 0xf8, 14),
            Color32::from_rgb(0x38, 0xbd, 0xf8),
        ),
        Letter::C => (
            Color32::from_rgba_unmultiplied(0xfb, 0xbf, 0x24, 14),
            Color32::from_rgb(0xfb, 0xbf, 0x24),
        ),
        Letter::D => (
            Color32::from_rgba_unmultiplied(0xfb, 0x92, 0x3c, 14),
            Color32::from_rgb(0xfb, 0x92, 0x3c),
        ),
        Letter::F => (
            Color32::from_rgba_unmultiplied(0xf8, 0x71, 0x71, 14),
            Color32::from_rgb(0xf8, 0x71, 0x71),
        ),
    }
}

// =============================================================================
// TYPOGRAPHY - Font Sizes
// =============================================================================
pub const FONT_TITLE: f32 = 18.0;
pub const FONT_HEADING: f32 = 16.0;
pub const FONT_LABEL: f32 = 13.0;
pub const FONT_SMALL: f32 = 11.0;

// =============================================================================
// CORNER RADIUS
// =============================================================================
pub const RADIUS_DEFAULT: f32 = 4.0;
pub const RADIUS_LARGE: f32 = 8.0;

// =============================================================================
// STROKE WIDTHS
// =============================================================================
pub const STROKE_DEFAULT: f32 = 1.0;
pub const STROKE_MEDIUM: f32 = 1.5;

// =============================================================================
// SPACING
// =============================================================================
pub const SPACING_SM: f32 = 4.0;
pub const SPACING_MD: f32 = 8.0;
pub const SPACING_LG: f32 = 12.0;
pub const SPACING_XL: f32 = 16.0;

// =============================================================================
// DIMENSIONS
// =============================================================================
pub const MODAL_WIDTH: f32 = 340.0;
pub const LOGO_SIZE: f32 = 56.0;

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================
pub fn apply_visuals(ctx: &egui::Context) {
    ctx.set_visuals(egui::Visuals {
        dark_mode: true,
        panel_fill: BG_BASE,
        window_fill: BG_ELEVATED,
        extreme_bg_color: BG_BASE,
        faint_bg_color: BG_ELEVATED,
        hyperlink_color: ACCENT,
        selection: egui::style::Selection {
            bg_fill: ACCENT_DEEP,
            stroke: egui::Stroke::NONE,
        },
        widgets: egui::style::Widgets {
            noninteractive: egui::style::WidgetVisuals {
                bg_fill: BG_ELEVATED,
                weak_bg_fill: BG_SURFACE,
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_PRIMARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            inactive: egui::style::WidgetVisuals {
                bg_fill: Color32::TRANSPARENT,
                weak_bg_fill: BG_ELEVATED,
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_SECONDARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            hovered: egui::style::WidgetVisuals {
                bg_fill: BG_HOVER,
                weak_bg_fill: BG_SURFACE,
                bg_stroke: egui::Stroke::NONE,
                fg_stroke: egui::Stroke::new(STROKE_MEDIUM, TEXT_PRIMARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            active: egui::style::WidgetVisuals {
                bg_fill: BG_SURFACE,
                weak_bg_fill: BG_SURFACE,
                bg_stroke: egui::Stroke::NONE,
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_PRIMARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: -2.0,
            },
            open: egui::style::WidgetVisuals {
                bg_fill: BG_SURFACE,
                weak_bg_fill: BG_ELEVATED,
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_PRIMARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
        },
        striped: false,
        interact_cursor: Some(egui::CursorIcon::PointingHand),
        popup_shadow: egui::epaint::Shadow {
            offset: [0, 4],
            blur: 12,
            spread: 0,
            color: Color32::from_black_alpha(80),
        },
        window_stroke: egui::Stroke::new(STROKE_DEFAULT, BORDER_DEFAULT),
        window_corner_radius: egui::CornerRadius::same(8),
        menu_corner_radius: egui::CornerRadius::same(8),
        ..egui::Visuals::dark()
    });

    ctx.style_mut(|style| {
        style.interaction.selectable_labels = false;
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.button_padding = egui::vec2(12.0, 6.0);
    });
}

// =============================================================================
// HELPER - Modal frame
// =============================================================================
pub fn modal_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_ELEVATED)
        .stroke(egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE))
        .corner_radius(RADIUS_LARGE)
        .inner_margin(SPACING_XL)
}

// =============================================================================
// HELPER - Error banner frame
// =============================================================================
pub fn error_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(ERROR_BG)
        .corner_radius(RADIUS_DEFAULT)
        .inner_margin(egui::Margin::same(10))
        .stroke(egui::Stroke::new(STROKE_DEFAULT, ERROR_BORDER))
}

// =============================================================================
// HELPER - Button styles
// =============================================================================

/// Default slate button
pub fn button(text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(text.into())
        .fill(BTN_DEFAULT)
        .corner_radius(RADIUS_DEFAULT)
}

/// Accent teal button (for primary actions like OK / Yes)
pub fn button_accent(text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.into()).color(BTN_ACCENT_TEXT))
        .fill(BTN_ACCENT)
        .corner_radius(RADIUS_DEFAULT)
}

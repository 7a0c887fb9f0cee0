//! App module - graphical frontend state

mod dialogs;

use crate::session::Session;
use crate::settings::Settings;
use crate::theme;
use crate::utils;
use eframe::egui;
use std::path::PathBuf;

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) session: Session,
    /// Text buffer shared by the menu and grade-entry dialogs.
    pub(crate) input: String,
    pub(crate) focus_input: bool,
    pub(crate) logo_texture: Option<egui::TextureHandle>,
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub needs_center: bool,
    pub(crate) data_dir: PathBuf,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, data_dir: PathBuf) -> Self {
        // Force dark theme
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Add Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        // Apply theme from theme.rs
        theme::apply_visuals(&cc.egui_ctx);

        Self {
            session: Session::new(),
            input: String::new(),
            focus_input: true,
            logo_texture: None,
            window_pos: None,
            window_size: None,
            needs_center: false,
            data_dir,
        }
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
        };
        settings.save(&self.data_dir);
    }

    /// Brand logo texture, rasterized from the inline SVG on first use.
    pub(crate) fn logo(&mut self, ctx: &egui::Context) -> egui::TextureHandle {
        self.logo_texture
            .get_or_insert_with(|| {
                let (pixels, w, h) = utils::rasterize_brand((theme::LOGO_SIZE * 2.0) as u32);
                ctx.load_texture(
                    "brand",
                    egui::ColorImage::from_rgba_unmultiplied([w as usize, h as usize], &pixels),
                    egui::TextureOptions::LINEAR,
                )
            })
            .clone()
    }
}

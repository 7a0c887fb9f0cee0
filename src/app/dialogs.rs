//! Modal dialog rendering
//!
//! The graphical frontend shows exactly one modal at a time, chosen by the
//! session's current prompt. Button clicks and Enter/Escape map to session
//! replies; closing a dialog is the cancel reply for that prompt.

use super::App;
use crate::constants::APP_NAME;
use crate::grades::format_score;
use crate::session::{Prompt, Reply, MENU_ITEMS, NO_GRADES_MSG};
use crate::theme;
use eframe::egui;
use tracing::info;

impl App {
    pub fn render_prompt(&mut self, ctx: &egui::Context) {
        let prompt = self.session.prompt();
        if prompt == Prompt::Done {
            return;
        }

        let logo = self.logo(ctx);
        let mut reply: Option<Reply> = None;

        let modal_area = egui::Modal::default_area(egui::Id::new("prompt_modal"))
            .default_width(theme::MODAL_WIDTH + theme::SPACING_XL * 2.0);
        let modal = egui::Modal::new(egui::Id::new("prompt_modal"))
            .area(modal_area)
            .backdrop_color(egui::Color32::from_black_alpha(180))
            .frame(theme::modal_frame());

        let modal_response = modal.show(ctx, |ui| {
            ui.set_min_width(theme::MODAL_WIDTH);
            ui.set_max_width(theme::MODAL_WIDTH);

            match &prompt {
                Prompt::Welcome => {
                    ui.vertical_centered(|ui| {
                        ui.add_space(theme::SPACING_SM);
                        ui.image(egui::load::SizedTexture::new(
                            logo.id(),
                            egui::vec2(theme::LOGO_SIZE, theme::LOGO_SIZE),
                        ));
                        ui.add_space(theme::SPACING_MD);
                        ui.label(
                            egui::RichText::new(APP_NAME)
                                .size(theme::FONT_TITLE)
                                .strong(),
                        );
                        ui.add_space(theme::SPACING_SM);
                        ui.label(
                            egui::RichText::new(
                                "Track grades and see your running average & letter grade. \
                                 Add as many grades as you like.",
                            )
                            .color(theme::TEXT_MUTED),
                        );
                        ui.add_space(theme::SPACING_XL);
                        let ok = ui.add(theme::button_accent(format!(
                            "{}  Get Started",
                            egui_phosphor::regular::CHECK
                        )));
                        if ok.clicked() {
                            reply = Some(Reply::Ack);
                        }
                    });
                }

                Prompt::Menu { error } => {
                    ui.label(
                        egui::RichText::new("Menu")
                            .size(theme::FONT_HEADING)
                            .strong(),
                    );
                    ui.add_space(theme::SPACING_SM);
                    for (i, item) in MENU_ITEMS.iter().enumerate() {
                        ui.label(
                            egui::RichText::new(format!("{}.  {}", i + 1, item))
                                .color(theme::TEXT_SECONDARY),
                        );
                    }
                    if let Some(e) = error {
                        render_error_banner(ui, &e.to_string());
                    }
                    ui.add_space(theme::SPACING_MD);
                    ui.label(
                        egui::RichText::new("Enter a number (1-4):")
                            .size(theme::FONT_LABEL)
                            .color(theme::TEXT_MUTED),
                    );
                    let submitted = self.input_row(ui);
                    ui.add_space(theme::SPACING_LG);
                    ui.horizontal(|ui| {
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            let ok = ui.add(theme::button_accent(format!(
                                "{}  OK",
                                egui_phosphor::regular::CHECK
                            )));
                            if ok.clicked() || submitted {
                                reply = Some(Reply::Text(self.input.clone()));
                            }
                            ui.add_space(theme::SPACING_MD);
                            let exit = ui.add(theme::button(format!(
                                "{}  Exit",
                                egui_phosphor::regular::SIGN_OUT
                            )));
                            if exit.clicked() {
                                reply = Some(Reply::Cancel);
                            }
                        });
                    });
                }

                Prompt::GradeEntry { error } => {
                    ui.label(
                        egui::RichText::new("Add Grade")
                            .size(theme::FONT_HEADING)
                            .strong(),
                    );
                    ui.add_space(theme::SPACING_SM);
                    ui.label(
                        egui::RichText::new("Enter a grade (0-100). Stop to go back to the menu.")
                            .color(theme::TEXT_MUTED),
                    );
                    if let Some(e) = error {
                        render_error_banner(ui, &e.to_string());
                    }
                    ui.add_space(theme::SPACING_MD);
                    let submitted = self.input_row(ui);
                    ui.add_space(theme::SPACING_LG);
                    ui.horizontal(|ui| {
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            let ok = ui.add(theme::button_accent(format!(
                                "{}  Add",
                                egui_phosphor::regular::CHECK
                            )));
                            if ok.clicked() || submitted {
                                reply = Some(Reply::Text(self.input.clone()));
                            }
                            ui.add_space(theme::SPACING_MD);
                            let stop = ui.add(theme::button(format!(
                                "{}  Stop",
                                egui_phosphor::regular::X
                            )));
                            if stop.clicked() {
                                reply = Some(Reply::Cancel);
                            }
                        });
                    });
                }

                Prompt::GradeAdded { value } => {
                    ui.vertical_centered(|ui| {
                        ui.add_space(theme::SPACING_MD);
                        ui.label(
                            egui::RichText::new(egui_phosphor::regular::CHECK_CIRCLE)
                                .size(36.0)
                                .color(theme::ACCENT),
                        );
                        ui.add_space(theme::SPACING_MD);
                        ui.label(
                            egui::RichText::new(format!("Grade {} added.", format_score(*value)))
                                .size(theme::FONT_HEADING)
                                .strong(),
                        );
                        ui.add_space(theme::SPACING_XL);
                        let ok = ui.add(theme::button_accent(format!(
                            "{}  OK",
                            egui_phosphor::regular::CHECK
                        )));
                        if ok.clicked() {
                            reply = Some(Reply::Ack);
                        }
                    });
                }

                Prompt::AskAnother => {
                    ui.vertical_centered(|ui| {
                        ui.add_space(theme::SPACING_MD);
                        ui.label(
                            egui::RichText::new("Add another grade?")
                                .size(theme::FONT_HEADING)
                                .strong(),
                        );
                        ui.add_space(theme::SPACING_XL);
                        ui.horizontal(|ui| {
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    let yes = ui.add(theme::button_accent(format!(
                                        "{}  Yes",
                                        egui_phosphor::regular::CHECK
                                    )));
                                    if yes.clicked() {
                                        reply = Some(Reply::Yes);
                                    }
                                    ui.add_space(theme::SPACING_MD);
                                    let no = ui.add(theme::button(format!(
                                        "{}  No",
                                        egui_phosphor::regular::X
                                    )));
                                    if no.clicked() {
                                        reply = Some(Reply::No);
                                    }
                                },
                            );
                        });
                    });
                }

                Prompt::Average(summary) => {
                    ui.label(
                        egui::RichText::new("Average")
                            .size(theme::FONT_HEADING)
                            .strong(),
                    );
                    ui.add_space(theme::SPACING_MD);
                    match summary {
                        Some(s) => {
                            ui.label(
                                egui::RichText::new(format!(
                                    "Current Average: {}%",
                                    format_score(s.average)
                                ))
                                .size(theme::FONT_HEADING)
                                .color(theme::ACCENT),
                            );
                        }
                        None => {
                            ui.label(egui::RichText::new(NO_GRADES_MSG).color(theme::TEXT_MUTED));
                        }
                    }
                    ui.add_space(theme::SPACING_XL);
                    render_ok_row(ui, &mut reply);
                }

                Prompt::LetterGrade(summary) => {
                    ui.label(
                        egui::RichText::new("Letter Grade")
                            .size(theme::FONT_HEADING)
                            .strong(),
                    );
                    ui.add_space(theme::SPACING_MD);
                    match summary {
                        Some(s) => {
                            ui.horizontal(|ui| {
                                render_letter_badge(ui, s.letter);
                                ui.add_space(theme::SPACING_MD);
                                ui.label(
                                    egui::RichText::new(format!(
                                        "Average: {}%",
                                        format_score(s.average)
                                    ))
                                    .color(theme::TEXT_SECONDARY),
                                );
                            });
                        }
                        None => {
                            ui.label(egui::RichText::new(NO_GRADES_MSG).color(theme::TEXT_MUTED));
                        }
                    }
                    ui.add_space(theme::SPACING_XL);
                    render_ok_row(ui, &mut reply);
                }

                Prompt::Goodbye(summary) => {
                    ui.vertical_centered(|ui| {
                        ui.add_space(theme::SPACING_SM);
                        ui.image(egui::load::SizedTexture::new(
                            logo.id(),
                            egui::vec2(theme::LOGO_SIZE, theme::LOGO_SIZE),
                        ));
                        ui.add_space(theme::SPACING_MD);
                        ui.label(
                            egui::RichText::new(format!("Thank you for using {}!", APP_NAME))
                                .size(theme::FONT_HEADING)
                                .strong(),
                        );
                    });
                    if let Some(s) = summary {
                        ui.add_space(theme::SPACING_LG);
                        ui.separator();
                        ui.add_space(theme::SPACING_SM);
                        ui.label(egui::RichText::new("Final Statistics").strong());
                        ui.label(
                            egui::RichText::new(format!("Total Grades: {}", s.count))
                                .color(theme::TEXT_SECONDARY),
                        );
                        ui.label(
                            egui::RichText::new(format!(
                                "Final Average: {}%",
                                format_score(s.average)
                            ))
                            .color(theme::TEXT_SECONDARY),
                        );
                        ui.horizontal(|ui| {
                            ui.label(
                                egui::RichText::new("Letter Grade:").color(theme::TEXT_SECONDARY),
                            );
                            render_letter_badge(ui, s.letter);
                        });
                    }
                    ui.add_space(theme::SPACING_XL);
                    ui.vertical_centered(|ui| {
                        let close = ui.add(theme::button_accent(format!(
                            "{}  Close",
                            egui_phosphor::regular::SIGN_OUT
                        )));
                        if close.clicked() {
                            reply = Some(Reply::Ack);
                        }
                    });
                }

                Prompt::Done => {}
            }
        });

        // Escape / click-outside maps to the cancel reply for the prompt.
        if reply.is_none() && modal_response.should_close() {
            reply = Some(match prompt {
                Prompt::Menu { .. } | Prompt::GradeEntry { .. } => Reply::Cancel,
                Prompt::AskAnother => Reply::No,
                _ => Reply::Ack,
            });
        }

        if let Some(reply) = reply {
            self.input.clear();
            self.focus_input = true;
            self.session.handle(reply);
            if self.session.is_done() {
                info!("Session complete, closing window");
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
        }
    }

    /// Single-line input. Returns true when submitted with Enter.
    fn input_row(&mut self, ui: &mut egui::Ui) -> bool {
        let te = ui.add(
            egui::TextEdit::singleline(&mut self.input)
                .desired_width(f32::INFINITY)
                .hint_text("e.g., 88 or 92.5"),
        );
        if self.focus_input {
            te.request_focus();
            self.focus_input = false;
        }
        te.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter))
    }
}

fn render_error_banner(ui: &mut egui::Ui, message: &str) {
    ui.add_space(theme::SPACING_MD);
    theme::error_frame().show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        let text = format!("{}  {}", egui_phosphor::regular::WARNING, message);
        ui.add(egui::Label::new(egui::RichText::new(text).color(theme::ERROR_TEXT)).wrap());
    });
}

fn render_ok_row(ui: &mut egui::Ui, reply: &mut Option<Reply>) {
    ui.horizontal(|ui| {
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let ok = ui.add(theme::button_accent(format!(
                "{}  OK",
                egui_phosphor::regular::CHECK
            )));
            if ok.clicked() {
                *reply = Some(Reply::Ack);
            }
        });
    });
}

fn render_letter_badge(ui: &mut egui::Ui, letter: crate::grades::Letter) {
    let (bg, fg) = theme::letter_colors(letter);
    egui::Frame::new()
        .fill(bg)
        .corner_radius(theme::RADIUS_DEFAULT)
        .inner_margin(egui::Margin::symmetric(10, 4))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(letter.as_str())
                    .size(theme::FONT_HEADING)
                    .strong()
                    .color(fg),
            );
        });
}

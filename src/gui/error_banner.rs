use eframe::egui;

use crate::gui::theme::Theme;

pub struct ErrorBanner;

impl ErrorBanner {
    /// Returns `true` when the banner was clicked away.
    pub fn show(ctx: &egui::Context, theme: &Theme, message: Option<&str>) -> bool {
        let Some(message) = message else {
            return false;
        };

        let mut dismissed = false;

        egui::TopBottomPanel::top("error_banner").exact_height(30.0).show(ctx, |ui| {
            let frame = egui::Frame::NONE.fill(theme.red(ctx));

            frame.show(ui, |ui| {
                ui.vertical_centered_justified(|ui| {
                    let response = ui.add(
                        egui::Label::new(
                            egui::RichText::new(format!("⚠ {message}"))
                                .size(14.0)
                                .color(egui::Color32::WHITE),
                        )
                        .sense(egui::Sense::click()),
                    );

                    if response.hovered() {
                        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                    }

                    if response.clicked() {
                        dismissed = true;
                    }
                });
            });
        });

        dismissed
    }
}

use eframe::egui::{
    self,
    Color32,
    RichText,
};

use super::{
    theme::Theme,
    view_state::ViewState,
};
use crate::core::render::Card;

const SECONDARY_TEXT_SIZE: f32 = 20.0;

pub fn card_list(ui: &mut egui::Ui, view: &mut ViewState, theme: &Theme) {
    let mut area = egui::ScrollArea::vertical().auto_shrink([false, false]);
    if let Some(offset) = view.anchor.take_correction() {
        area = area.vertical_scroll_offset(offset);
        ui.ctx().request_repaint();
    }

    let output = area.show(ui, |ui| {
        for card in &view.cards {
            card_frame(ui, card, theme);
            ui.add_space(12.0);
        }
    });

    view.anchor.observe(output.state.offset.y, output.content_size.y);
}

fn card_frame(ui: &mut egui::Ui, card: &Card, theme: &Theme) {
    let ctx = ui.ctx().clone();
    let stroke = if card.is_main {
        egui::Stroke::new(2.0, theme.accent(&ctx))
    } else {
        egui::Stroke::new(1.0, theme.muted(&ctx))
    };

    egui::Frame::group(ui.style())
        .fill(theme.card_fill(&ctx))
        .stroke(stroke)
        .corner_radius(egui::CornerRadius::same(8))
        .inner_margin(egui::Margin::same(14))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());

            ui.horizontal(|ui| {
                ui.label(RichText::new(&card.collection_name).strong());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(RichText::new(&card.badge).monospace().color(theme.badge(&ctx)));
                });
            });
            ui.label(RichText::new(&card.section_name).italics().color(theme.muted(&ctx)));

            ui.add_space(10.0);
            ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                ui.add(
                    egui::Label::new(RichText::new(&card.secondary_text).size(SECONDARY_TEXT_SIZE))
                        .wrap(),
                );
            });

            ui.add_space(8.0);
            ui.add(egui::Label::new(card.primary_text.as_str()).wrap());

            if !card.grades.is_empty() {
                ui.add_space(10.0);
                ui.horizontal_wrapped(|ui| {
                    for chip in &card.grades {
                        let [r, g, b] = chip.tone.rgb();
                        ui.label(RichText::new(&chip.label).strong().color(Color32::from_rgb(r, g, b)));
                        ui.label(RichText::new(format!("({})", chip.source)).weak());
                        ui.add_space(12.0);
                    }
                });
            }
        });
}

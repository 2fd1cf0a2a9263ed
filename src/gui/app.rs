use std::{
    fs,
    sync::Arc,
    time::Duration,
};

use eframe::egui;
use tracing::{
    info,
    warn,
};

use super::{
    cards::card_list,
    error_banner::ErrorBanner,
    message_overlay::MessageOverlay,
    theme::{
        set_theme,
        Theme,
    },
    view_state::ViewState,
};
use crate::core::{
    http::HttpSectionSource,
    session::NavButton,
    settings::AppSettings,
    tasks::{
        TaskManager,
        TaskResult,
    },
    view::ViewSink,
    Controller,
    Direction,
    HadithError,
};

const ARABIC_FONT: &str = "arabic";

enum UiAction {
    Generate,
    Navigate(Direction),
    DismissError,
}

pub struct HadithApp {
    controller: Controller<HttpSectionSource>,
    view: ViewState,
    theme: Theme,
    message_overlay: MessageOverlay,
    task_manager: TaskManager,
}

impl HadithApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: AppSettings) -> Result<Self, HadithError> {
        let source = HttpSectionSource::new(&settings)?;
        let task_manager = TaskManager::new()?;

        let app = Self {
            controller: Controller::new(source, settings.attempts()),
            view: ViewState::default(),
            theme: Theme::dracula(),
            message_overlay: MessageOverlay::new("Fetching hadith..."),
            task_manager,
        };

        app.setup_fonts(cc, &settings);
        set_theme(&cc.egui_ctx, &app.theme);
        cc.egui_ctx.set_zoom_factor(cc.egui_ctx.zoom_factor() + 0.2);

        Ok(app)
    }

    fn setup_fonts(&self, cc: &eframe::CreationContext<'_>, settings: &AppSettings) {
        let Some(path) = &settings.arabic_font_path else {
            warn!("No arabic_font_path configured; Arabic text may render as boxes");
            return;
        };

        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!("Failed to read font {}: {}", path.display(), e);
                return;
            }
        };

        let mut fonts = egui::FontDefinitions::default();
        fonts
            .font_data
            .insert(ARABIC_FONT.to_owned(), Arc::new(egui::FontData::from_owned(bytes)));

        // Fallback after the default fonts so Latin text keeps its usual face.
        for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
            fonts.families.entry(family).or_default().push(ARABIC_FONT.to_owned());
        }

        cc.egui_ctx.set_fonts(fonts);
        info!("Loaded Arabic font from {}", path.display());
    }

    fn generate(&mut self) {
        if self.controller.begin_generate(&mut self.view) {
            self.task_manager.generate(self.controller.source().clone(), self.controller.max_attempts());
        }
    }

    fn handle_task_result(&mut self, result: TaskResult) {
        match result {
            TaskResult::Generated(result) => {
                // Failures are already logged and shown by the controller.
                let _ = self.controller.finish_generate(result, &mut self.view);
            }
        }
    }

    fn apply(&mut self, action: UiAction) {
        match action {
            UiAction::Generate => self.generate(),
            UiAction::Navigate(direction) => {
                self.controller.navigate(direction, &mut self.view);
            }
            UiAction::DismissError => self.view.hide_error(),
        }
    }

    fn keyboard_action(&self, ctx: &egui::Context) -> Option<UiAction> {
        if self.view.busy || ctx.wants_keyboard_input() {
            return None;
        }

        ctx.input(|i| {
            if i.key_pressed(egui::Key::Enter) && self.view.generate_enabled {
                Some(UiAction::Generate)
            } else if self.view.navigation.is_none() {
                None
            } else if i.key_pressed(egui::Key::ArrowUp) {
                Some(UiAction::Navigate(Direction::Previous))
            } else if i.key_pressed(egui::Key::ArrowDown) {
                Some(UiAction::Navigate(Direction::Next))
            } else {
                None
            }
        })
    }
}

fn nav_button(ui: &mut egui::Ui, button: &NavButton) -> bool {
    ui.scope(|ui| {
        if !button.enabled {
            ui.set_opacity(0.5);
        }
        let widget = egui::Button::new(button.label).min_size(egui::vec2(ui.available_width(), 32.0));
        ui.add_enabled(button.enabled, widget).clicked()
    })
    .inner
}

impl eframe::App for HadithApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for result in self.task_manager.poll_results() {
            self.handle_task_result(result);
        }

        let mut actions = Vec::new();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(self.theme.heading(ctx, "Hadith Viewer"));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    egui::widgets::global_theme_preference_switch(ui);
                    let generate = egui::Button::new("Generate Random Hadith");
                    if ui.add_enabled(self.view.generate_enabled, generate).clicked() {
                        actions.push(UiAction::Generate);
                    }
                });
            });
        });

        if ErrorBanner::show(ctx, &self.theme, self.view.error.as_deref()) {
            actions.push(UiAction::DismissError);
        }

        if let Some(navigation) = &self.view.navigation {
            egui::TopBottomPanel::top("previous_panel").show(ctx, |ui| {
                if nav_button(ui, &navigation.previous) {
                    actions.push(UiAction::Navigate(Direction::Previous));
                }
            });
            egui::TopBottomPanel::bottom("next_panel").show(ctx, |ui| {
                if nav_button(ui, &navigation.next) {
                    actions.push(UiAction::Navigate(Direction::Next));
                }
            });
        }

        actions.extend(self.keyboard_action(ctx));

        for action in actions {
            self.apply(action);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.view.cards.is_empty() && !self.view.busy {
                ui.centered_and_justified(|ui| {
                    ui.label(
                        egui::RichText::new("Press Generate to read a random hadith")
                            .color(self.theme.muted(ctx)),
                    );
                });
            } else {
                card_list(ui, &mut self.view, &self.theme);
            }
        });

        if self.view.busy {
            self.message_overlay.show(ctx, &self.theme);
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}

//! The two presentations behind the tab switch
//!
//! `Custom` is the full status page. `Console` is the compact voice-agent
//! layout: visualizer, control bar, config strip, and an error line when
//! the last connect failed.

use crate::ui::components::{
    AudioControl, ConfigDisplay, ConnectButton, CostCard, StatusBanner, Visualizer,
};
use crate::ui::state::AppState;
use crate::ui::theme::Theme;
use egui::{self, RichText};

const FEATURE_CHIPS: [&str; 3] = ["Hindi Support", "Affordable Pricing", "Powered by Pipecat"];

/// Full status page
pub struct CustomView<'a> {
    state: &'a mut AppState,
    theme: &'a Theme,
}

impl<'a> CustomView<'a> {
    pub fn new(state: &'a mut AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    pub fn show(self, ui: &mut egui::Ui) {
        let theme = self.theme;
        let state = self.state;

        ui.vertical_centered(|ui| {
            ui.set_max_width(800.0);
            ui.add_space(theme.spacing_lg);

            ui.label(
                RichText::new("Vaani Voice AI Platform")
                    .size(40.0)
                    .strong()
                    .color(theme.primary),
            );
            ui.label(
                RichText::new("Voice AI agent console")
                    .size(18.0)
                    .color(theme.text_muted),
            );

            ui.add_space(theme.spacing_lg);

            egui::Frame::none()
                .fill(theme.bg_secondary)
                .rounding(theme.card_rounding)
                .inner_margin(theme.spacing_lg)
                .show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.label(
                            RichText::new("🎤 Voice Interface Status")
                                .size(20.0)
                                .strong()
                                .color(theme.text_primary),
                        );
                        ui.add_space(theme.spacing);

                        StatusBanner::new(state, theme).show(ui);
                        ui.add_space(theme.spacing);

                        ConfigDisplay::new(state.session_config(), theme).show(ui);
                        ui.add_space(theme.spacing);

                        CostCard::new(&state.cost, theme).show(ui);
                        ui.add_space(theme.spacing);

                        ConnectButton::new(state, theme).show(ui);
                    });
                });

            ui.add_space(theme.spacing_lg);
            feature_chips(ui, theme);

            ui.add_space(theme.spacing_lg);
            let footer = format!("Backend: {}", state.backend_url);
            let response = ui.label(RichText::new(&footer).size(13.0).color(theme.text_muted));
            response.widget_info(|| {
                egui::WidgetInfo::labeled(egui::WidgetType::Label, true, &footer)
            });
            ui.label(
                RichText::new("Ready for Sarvam AI integration")
                    .size(13.0)
                    .color(theme.text_muted),
            );
        });
    }
}

fn feature_chips(ui: &mut egui::Ui, theme: &Theme) {
    egui::Frame::none()
        .fill(theme.bg_secondary)
        .rounding(theme.card_rounding)
        .inner_margin(theme.spacing)
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new("India-First Voice AI Platform")
                        .strong()
                        .color(theme.text_primary),
                );
                ui.add_space(theme.spacing_sm);
                ui.horizontal_wrapped(|ui| {
                    let colors = [theme.success, theme.primary, theme.secondary];
                    for (chip, color) in FEATURE_CHIPS.iter().zip(colors) {
                        egui::Frame::none()
                            .fill(color.gamma_multiply(0.15))
                            .rounding(theme.chip_rounding)
                            .inner_margin(egui::Margin::symmetric(theme.spacing, 6.0))
                            .show(ui, |ui| {
                                ui.label(RichText::new(*chip).size(13.0).color(color));
                            });
                    }
                });
            });
        });
}

/// Compact voice-agent layout
pub struct ConsoleView<'a> {
    state: &'a mut AppState,
    theme: &'a Theme,
}

impl<'a> ConsoleView<'a> {
    pub fn new(state: &'a mut AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    pub fn show(self, ui: &mut egui::Ui) {
        let theme = self.theme;
        let state = self.state;

        ui.vertical_centered(|ui| {
            ui.set_max_width(640.0);
            ui.add_space(theme.spacing_lg);

            Visualizer::new(state, theme).height(160.0).show(ui);
            ui.add_space(theme.spacing);

            egui::Frame::none()
                .fill(theme.bg_secondary)
                .rounding(theme.card_rounding)
                .inner_margin(theme.spacing_sm)
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        AudioControl::new(state, theme).show(ui);
                        ui.add_space(theme.spacing_sm);
                        ConnectButton::new(state, theme).small().show(ui);
                    });
                });

            ui.add_space(theme.spacing);
            ConfigDisplay::new(state.session_config(), theme)
                .compact(true)
                .show(ui);

            if let Some(message) = state.error_message() {
                ui.add_space(theme.spacing_sm);
                let response =
                    ui.label(RichText::new(format!("⚠ {}", message)).color(theme.error));
                response.widget_info(|| {
                    egui::WidgetInfo::labeled(
                        egui::WidgetType::Label,
                        true,
                        format!("Error: {}", message),
                    )
                });
            }
        });
    }
}

//! Debug panel component
//!
//! Displays connection internals and recent log lines.

use crate::ui::state::AppState;
use crate::ui::theme::Theme;
use egui::{self, RichText, ScrollArea};

/// Debug panel component
pub struct DebugPanel<'a> {
    state: &'a AppState,
    theme: &'a Theme,
}

impl<'a> DebugPanel<'a> {
    pub fn new(state: &'a AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    pub fn show(self, ui: &mut egui::Ui) {
        egui::Frame::none()
            .fill(self.theme.bg_secondary)
            .rounding(self.theme.card_rounding)
            .inner_margin(self.theme.spacing)
            .show(ui, |ui| {
                ui.vertical(|ui| {
                    ui.label(
                        RichText::new("Debug Panel")
                            .strong()
                            .color(self.theme.text_primary),
                    );

                    ui.separator();

                    egui::Grid::new("debug_stats")
                        .num_columns(2)
                        .spacing([20.0, 4.0])
                        .show(ui, |ui| {
                            let connection = &self.state.connection;
                            let mic = if self.state.mic_enabled { "on" } else { "muted" };

                            self.stat_row(ui, "Connection", &connection.state().to_string());
                            self.stat_row(ui, "Pending", &connection.is_pending().to_string());
                            self.stat_row(ui, "Failures", &connection.failures().to_string());
                            self.stat_row(ui, "Session", &self.session_summary());
                            self.stat_row(ui, "Microphone", mic);
                            self.stat_row(ui, "Backend", &self.state.backend_url);
                        });

                    if let Some(error) = self.state.connection.last_error() {
                        ui.add_space(self.theme.spacing_sm);
                        ui.horizontal(|ui| {
                            ui.label(RichText::new("⚠").color(self.theme.error));
                            ui.label(
                                RichText::new(error.to_string())
                                    .size(12.0)
                                    .color(self.theme.error),
                            );
                        });
                    }

                    ui.add_space(self.theme.spacing_sm);
                    ui.separator();

                    ui.label(
                        RichText::new("Recent Logs")
                            .size(12.0)
                            .strong()
                            .color(self.theme.text_secondary),
                    );

                    ScrollArea::vertical()
                        .max_height(160.0)
                        .auto_shrink([false, false])
                        .stick_to_bottom(true)
                        .show(ui, |ui| {
                            for msg in &self.state.debug_info.log_messages {
                                ui.label(
                                    RichText::new(msg)
                                        .size(11.0)
                                        .family(egui::FontFamily::Monospace)
                                        .color(self.theme.text_muted),
                                );
                            }

                            if self.state.debug_info.log_messages.is_empty() {
                                ui.label(
                                    RichText::new("No log messages")
                                        .size(11.0)
                                        .color(self.theme.text_muted)
                                        .italics(),
                                );
                            }
                        });
                });
            });
    }

    fn stat_row(&self, ui: &mut egui::Ui, label: &str, value: &str) {
        ui.label(RichText::new(label).size(12.0).color(self.theme.text_muted));

        let display_value = if value.is_empty() { "—" } else { value };

        ui.label(
            RichText::new(display_value)
                .size(12.0)
                .family(egui::FontFamily::Monospace)
                .color(self.theme.text_primary),
        );

        ui.end_row();
    }

    fn session_summary(&self) -> String {
        match self.state.connection.session() {
            Some(session) => format!(
                "{} since {}",
                &session.request_id.to_string()[..8],
                session.started_at.format("%H:%M:%S")
            ),
            None => String::new(),
        }
    }
}

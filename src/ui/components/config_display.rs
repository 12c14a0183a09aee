//! Read-only view of the session configuration
//!
//! Values are shown exactly as stored. Each value label carries an
//! accessibility name of the form `Language: hi-IN`.

use crate::config::SessionConfig;
use crate::ui::theme::Theme;
use egui::{self, RichText, Vec2};

/// Grid of labelled config cards
pub struct ConfigDisplay<'a> {
    config: &'a SessionConfig,
    theme: &'a Theme,
    compact: bool,
}

impl<'a> ConfigDisplay<'a> {
    pub fn new(config: &'a SessionConfig, theme: &'a Theme) -> Self {
        Self {
            config,
            theme,
            compact: false,
        }
    }

    /// Single row of small cards, used by the console view
    pub fn compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    pub fn show(self, ui: &mut egui::Ui) {
        let rows = self.config.display_rows();
        let card_width = if self.compact { 110.0 } else { 150.0 };
        let columns = ((ui.available_width() / (card_width + self.theme.spacing)) as usize)
            .clamp(1, rows.len().max(1));

        egui::Grid::new(if self.compact {
            "config_display_compact"
        } else {
            "config_display"
        })
        .num_columns(columns)
        .spacing(Vec2::splat(self.theme.spacing))
        .show(ui, |ui| {
            for (i, (label, value)) in rows.iter().enumerate() {
                self.card(ui, label, value, card_width);
                if (i + 1) % columns == 0 {
                    ui.end_row();
                }
            }
        });
    }

    fn card(&self, ui: &mut egui::Ui, label: &str, value: &str, width: f32) {
        egui::Frame::none()
            .fill(self.theme.bg_tertiary)
            .rounding(self.theme.button_rounding)
            .inner_margin(if self.compact {
                self.theme.spacing_sm
            } else {
                self.theme.spacing
            })
            .show(ui, |ui| {
                ui.set_min_width(width);
                ui.vertical(|ui| {
                    ui.label(
                        RichText::new(format!("{}:", label))
                            .strong()
                            .color(self.theme.text_primary),
                    );

                    let response = ui.label(
                        RichText::new(value)
                            .size(if self.compact { 13.0 } else { 15.0 })
                            .color(self.theme.field_color(label)),
                    );
                    let accessible = format!("{}: {}", label, value);
                    response.widget_info(|| {
                        egui::WidgetInfo::labeled(egui::WidgetType::Label, true, &accessible)
                    });
                });
            });
    }
}

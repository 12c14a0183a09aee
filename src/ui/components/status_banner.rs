//! Status banner above the config grid

use crate::ui::state::AppState;
use crate::ui::theme::Theme;
use egui::{self, RichText};

pub struct StatusBanner<'a> {
    state: &'a AppState,
    theme: &'a Theme,
}

impl<'a> StatusBanner<'a> {
    pub fn new(state: &'a AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    pub fn show(self, ui: &mut egui::Ui) {
        let connected = self.state.connection.is_connected();
        let (icon, fill, color) = if connected {
            ("✅", self.theme.connected_bg, self.theme.success)
        } else {
            ("⏳", self.theme.ready_bg, self.theme.warning)
        };
        let text = self.state.status_text();

        egui::Frame::none()
            .fill(fill)
            .rounding(self.theme.button_rounding)
            .inner_margin(self.theme.spacing)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    let response =
                        ui.label(RichText::new(format!("{} {}", icon, text)).strong().color(color));
                    response.widget_info(|| {
                        egui::WidgetInfo::labeled(
                            egui::WidgetType::Label,
                            true,
                            format!("Status: {}", text),
                        )
                    });
                });
            });
    }
}

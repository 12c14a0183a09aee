//! Console/Custom tab switch

use crate::config::ViewMode;
use crate::ui::theme::Theme;
use egui::{self, RichText};

pub struct ModeTabs<'a> {
    mode: &'a mut ViewMode,
    theme: &'a Theme,
}

impl<'a> ModeTabs<'a> {
    pub fn new(mode: &'a mut ViewMode, theme: &'a Theme) -> Self {
        Self { mode, theme }
    }

    pub fn show(self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            for mode in [ViewMode::Console, ViewMode::Custom] {
                let selected = *self.mode == mode;
                let color = if selected {
                    self.theme.primary
                } else {
                    self.theme.text_muted
                };

                let response =
                    ui.selectable_label(selected, RichText::new(mode.to_string()).color(color));
                response.widget_info(|| {
                    egui::WidgetInfo::selected(
                        egui::WidgetType::SelectableLabel,
                        true,
                        selected,
                        format!("{} tab", mode),
                    )
                });

                if response.clicked() && !selected {
                    tracing::debug!("[UI] Switched to {} view", mode);
                    *self.mode = mode;
                }
            }
        });
    }
}

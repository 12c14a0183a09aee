//! Microphone switch for the console view
//!
//! Only flips a local flag; the audio path itself belongs to the external
//! platform.

use crate::ui::state::AppState;
use crate::ui::theme::Theme;
use egui::{self, RichText, Vec2};

pub const MUTE_LABEL: &str = "Mute microphone";
pub const UNMUTE_LABEL: &str = "Unmute microphone";

pub struct AudioControl<'a> {
    state: &'a mut AppState,
    theme: &'a Theme,
}

impl<'a> AudioControl<'a> {
    pub fn new(state: &'a mut AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    pub fn show(self, ui: &mut egui::Ui) -> egui::Response {
        let enabled = self.state.mic_enabled;
        let (icon, label, color) = if enabled {
            ("🎤", MUTE_LABEL, self.theme.text_primary)
        } else {
            ("🔇", UNMUTE_LABEL, self.theme.error)
        };

        let button = egui::Button::new(RichText::new(icon).size(18.0).color(color))
            .min_size(Vec2::splat(36.0))
            .rounding(self.theme.button_rounding);

        let response = ui.add(button);
        response.widget_info(|| egui::WidgetInfo::labeled(egui::WidgetType::Button, true, label));

        if response.clicked() {
            self.state.toggle_mic();
        }

        response.on_hover_text(label)
    }
}

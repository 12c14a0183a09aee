//! Connect/disconnect button
//!
//! Blue "Start Voice Agent" while disconnected, red "Disconnect" while
//! connected, greyed out while a request is in flight.

use crate::ui::state::AppState;
use crate::ui::theme::Theme;
use egui::{self, Color32, RichText, Vec2};

/// Accessibility name of the button in each state
pub const START_LABEL: &str = "Start Voice Agent";
pub const DISCONNECT_LABEL: &str = "Disconnect";
pub const CONNECTING_LABEL: &str = "Connecting";

/// Toggle button bound to the app state
pub struct ConnectButton<'a> {
    state: &'a mut AppState,
    theme: &'a Theme,
    large: bool,
}

impl<'a> ConnectButton<'a> {
    pub fn new(state: &'a mut AppState, theme: &'a Theme) -> Self {
        Self {
            state,
            theme,
            large: true,
        }
    }

    /// Smaller variant for the console control bar
    pub fn small(mut self) -> Self {
        self.large = false;
        self
    }

    /// Show the button and act on clicks
    pub fn show(self, ui: &mut egui::Ui) -> egui::Response {
        let connected = self.state.connection.is_connected();
        let pending = self.state.connection.is_pending();

        let (icon, label, fill) = if connected {
            ("🛑", DISCONNECT_LABEL, self.theme.error)
        } else if pending {
            ("⏳", CONNECTING_LABEL, self.theme.text_muted)
        } else {
            ("🚀", START_LABEL, self.theme.primary)
        };

        let text_size = if self.large { 18.0 } else { 14.0 };
        let min_size = if self.large {
            Vec2::new(220.0, 52.0)
        } else {
            Vec2::new(140.0, 36.0)
        };

        let button = egui::Button::new(
            RichText::new(format!("{} {}", icon, label))
                .size(text_size)
                .strong()
                .color(Color32::WHITE),
        )
        .min_size(min_size)
        .rounding(self.theme.button_rounding)
        .fill(fill);

        let response = ui.add_enabled(!pending, button);
        response.widget_info(|| {
            egui::WidgetInfo::labeled(egui::WidgetType::Button, !pending, label)
        });

        if response.clicked() {
            self.state.toggle_connection();
        }

        response
    }
}

//! Agent activity visualizer
//!
//! No audio reaches this process, so the bars are driven by connection
//! state alone: flat when disconnected, a sweep while connecting, a slow
//! pulse when connected. Muting the microphone dims the bars.

use crate::ui::state::AppState;
use crate::ui::theme::Theme;
use egui::{Color32, Pos2, Rect, Vec2};

const BAR_COUNT: usize = 7;

/// What the bars should show
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VisualizerMode {
    Idle,
    Connecting,
    Active,
}

impl VisualizerMode {
    pub fn from_state(state: &AppState) -> Self {
        if state.connection.is_connected() {
            VisualizerMode::Active
        } else if state.connection.is_pending() {
            VisualizerMode::Connecting
        } else {
            VisualizerMode::Idle
        }
    }

    /// Whether the widget needs continuous repaints
    pub fn is_animated(&self) -> bool {
        !matches!(self, VisualizerMode::Idle)
    }
}

/// Bar heights in `0.0..=1.0` for a mode at time `t` seconds
pub fn bar_levels(mode: VisualizerMode, t: f64) -> [f32; BAR_COUNT] {
    let mut levels = [0.0f32; BAR_COUNT];
    for (i, level) in levels.iter_mut().enumerate() {
        *level = match mode {
            VisualizerMode::Idle => 0.1,
            VisualizerMode::Connecting => {
                // one lit bar travelling left to right
                let head = ((t * 6.0) as usize) % BAR_COUNT;
                if i == head {
                    0.6
                } else {
                    0.15
                }
            }
            VisualizerMode::Active => {
                let phase = t * 2.5 + i as f64 * 0.9;
                (0.35 + 0.45 * ((phase.sin() + 1.0) / 2.0)) as f32
            }
        };
    }
    levels
}

pub struct Visualizer<'a> {
    state: &'a AppState,
    theme: &'a Theme,
    height: f32,
}

impl<'a> Visualizer<'a> {
    pub fn new(state: &'a AppState, theme: &'a Theme) -> Self {
        Self {
            state,
            theme,
            height: 120.0,
        }
    }

    pub fn height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    pub fn show(self, ui: &mut egui::Ui) -> egui::Response {
        let mode = VisualizerMode::from_state(self.state);
        let desired_size = Vec2::new(ui.available_width(), self.height);
        let (rect, response) = ui.allocate_exact_size(desired_size, egui::Sense::hover());

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            painter.rect_filled(rect, self.theme.card_rounding, self.theme.bg_secondary);

            let t = ui.ctx().input(|i| i.time);
            let levels = bar_levels(mode, t);
            let color = self.bar_color(mode);

            let bar_width = 18.0;
            let gap = 10.0;
            let total_width = BAR_COUNT as f32 * bar_width + (BAR_COUNT - 1) as f32 * gap;
            let left = rect.center().x - total_width / 2.0;
            let max_height = rect.height() - 24.0;

            for (i, level) in levels.iter().enumerate() {
                let x = left + i as f32 * (bar_width + gap) + bar_width / 2.0;
                let bar = Rect::from_center_size(
                    Pos2::new(x, rect.center().y),
                    Vec2::new(bar_width, (level * max_height).max(bar_width)),
                );
                painter.rect_filled(bar, bar_width / 2.0, color);
            }
        }

        if mode.is_animated() {
            ui.ctx().request_repaint();
        }

        response.widget_info(|| {
            egui::WidgetInfo::labeled(
                egui::WidgetType::Other,
                true,
                format!("Visualizer: {:?}", mode),
            )
        });
        response
    }

    fn bar_color(&self, mode: VisualizerMode) -> Color32 {
        let base = match mode {
            VisualizerMode::Idle => self.theme.visualizer_inactive,
            VisualizerMode::Connecting | VisualizerMode::Active => self.theme.visualizer_active,
        };
        if self.state.mic_enabled {
            base
        } else {
            base.gamma_multiply(0.4)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_is_flat() {
        let a = bar_levels(VisualizerMode::Idle, 0.0);
        let b = bar_levels(VisualizerMode::Idle, 12.3);
        assert_eq!(a, b);
        assert!(a.iter().all(|l| *l == a[0]));
    }

    #[test]
    fn test_connecting_has_one_lit_bar() {
        let levels = bar_levels(VisualizerMode::Connecting, 0.5);
        assert_eq!(levels.iter().filter(|l| **l > 0.5).count(), 1);
    }

    #[test]
    fn test_active_levels_in_range() {
        for step in 0..50 {
            let levels = bar_levels(VisualizerMode::Active, step as f64 * 0.13);
            assert!(levels.iter().all(|l| (0.35..=0.8).contains(l)));
        }
    }

    #[test]
    fn test_mode_from_state() {
        let mut state = AppState::new();
        assert_eq!(VisualizerMode::from_state(&state), VisualizerMode::Idle);
        state.connection.begin_connect();
        assert_eq!(VisualizerMode::from_state(&state), VisualizerMode::Connecting);
    }
}

//! Theme and styling for the Vaani UI
//!
//! This module provides colors, fonts, and visual styling for the application.

use crate::config::ThemeChoice;
use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Vec2, Visuals};

/// Application theme configuration
#[derive(Clone, Debug)]
pub struct Theme {
    /// Whether egui's dark base visuals are used
    pub dark: bool,

    /// Primary accent color (start button, title)
    pub primary: Color32,
    /// Secondary accent color
    pub secondary: Color32,
    /// Success color (green)
    pub success: Color32,
    /// Warning color (yellow/orange)
    pub warning: Color32,
    /// Error color (red)
    pub error: Color32,

    /// Background colors
    pub bg_primary: Color32,
    pub bg_secondary: Color32,
    pub bg_tertiary: Color32,

    /// Text colors
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub text_muted: Color32,

    /// Status banner fills
    pub connected_bg: Color32,
    pub ready_bg: Color32,
    /// Cost card fill and text
    pub cost_bg: Color32,
    pub cost_text: Color32,

    /// Per-field value colors in the config grid
    pub language_color: Color32,
    pub stt_color: Color32,
    pub tts_color: Color32,
    pub llm_color: Color32,

    /// Visualizer bars
    pub visualizer_active: Color32,
    pub visualizer_inactive: Color32,

    /// Border radius for buttons
    pub button_rounding: Rounding,
    /// Border radius for cards/panels
    pub card_rounding: Rounding,
    /// Border radius for feature chips
    pub chip_rounding: Rounding,

    /// Standard spacing
    pub spacing: f32,
    /// Large spacing
    pub spacing_lg: f32,
    /// Small spacing
    pub spacing_sm: f32,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    pub fn from_choice(choice: ThemeChoice) -> Self {
        match choice {
            ThemeChoice::Dark => Self::dark(),
            ThemeChoice::Light => Self::light(),
        }
    }

    /// Create a dark theme
    pub fn dark() -> Self {
        Self {
            dark: true,

            primary: Color32::from_rgb(59, 130, 246),   // Blue
            secondary: Color32::from_rgb(139, 92, 246), // Purple
            success: Color32::from_rgb(34, 197, 94),    // Green
            warning: Color32::from_rgb(234, 179, 8),    // Yellow
            error: Color32::from_rgb(239, 68, 68),      // Red

            bg_primary: Color32::from_rgb(17, 24, 39),
            bg_secondary: Color32::from_rgb(31, 41, 55),
            bg_tertiary: Color32::from_rgb(55, 65, 81),

            text_primary: Color32::from_rgb(249, 250, 251),
            text_secondary: Color32::from_rgb(209, 213, 219),
            text_muted: Color32::from_rgb(156, 163, 175),

            connected_bg: Color32::from_rgb(20, 83, 45),
            ready_bg: Color32::from_rgb(113, 63, 18),
            cost_bg: Color32::from_rgb(6, 78, 59),
            cost_text: Color32::from_rgb(110, 231, 183),

            language_color: Color32::from_rgb(96, 165, 250),
            stt_color: Color32::from_rgb(52, 211, 153),
            tts_color: Color32::from_rgb(251, 191, 36),
            llm_color: Color32::from_rgb(167, 139, 250),

            visualizer_active: Color32::from_rgb(59, 130, 246),
            visualizer_inactive: Color32::from_rgb(75, 85, 99),

            button_rounding: Rounding::same(8.0),
            card_rounding: Rounding::same(16.0),
            chip_rounding: Rounding::same(20.0),

            spacing: 16.0,
            spacing_lg: 32.0,
            spacing_sm: 8.0,
        }
    }

    /// Create a light theme
    pub fn light() -> Self {
        Self {
            dark: false,

            primary: Color32::from_rgb(59, 130, 246),   // #3b82f6
            secondary: Color32::from_rgb(139, 92, 246), // #8b5cf6
            success: Color32::from_rgb(22, 163, 74),    // #16a34a
            warning: Color32::from_rgb(202, 138, 4),    // #ca8a04
            error: Color32::from_rgb(239, 68, 68),      // #ef4444

            bg_primary: Color32::from_rgb(240, 249, 255),
            bg_secondary: Color32::from_rgb(255, 255, 255),
            bg_tertiary: Color32::from_rgb(249, 250, 251),

            text_primary: Color32::from_rgb(31, 41, 55),
            text_secondary: Color32::from_rgb(55, 65, 81),
            text_muted: Color32::from_rgb(107, 114, 128),

            connected_bg: Color32::from_rgb(220, 252, 231), // #dcfce7
            ready_bg: Color32::from_rgb(254, 243, 199),     // #fef3c7
            cost_bg: Color32::from_rgb(236, 253, 245),      // #ecfdf5
            cost_text: Color32::from_rgb(5, 150, 105),      // #059669

            language_color: Color32::from_rgb(59, 130, 246),
            stt_color: Color32::from_rgb(16, 185, 129),
            tts_color: Color32::from_rgb(245, 158, 11),
            llm_color: Color32::from_rgb(139, 92, 246),

            visualizer_active: Color32::from_rgb(59, 130, 246),
            visualizer_inactive: Color32::from_rgb(209, 213, 219),

            button_rounding: Rounding::same(8.0),
            card_rounding: Rounding::same(16.0),
            chip_rounding: Rounding::same(20.0),

            spacing: 16.0,
            spacing_lg: 32.0,
            spacing_sm: 8.0,
        }
    }

    /// Value color for a config grid label
    pub fn field_color(&self, label: &str) -> Color32 {
        match label {
            "Language" => self.language_color,
            "STT" => self.stt_color,
            "TTS" => self.tts_color,
            "LLM" => self.llm_color,
            _ => self.text_secondary,
        }
    }

    /// Apply this theme to egui
    pub fn apply(&self, ctx: &egui::Context) {
        let mut visuals = if self.dark {
            Visuals::dark()
        } else {
            Visuals::light()
        };

        // Panel backgrounds
        visuals.panel_fill = self.bg_primary;
        visuals.window_fill = self.bg_secondary;
        visuals.extreme_bg_color = self.bg_tertiary;

        // Widget colors
        visuals.widgets.noninteractive.bg_fill = self.bg_secondary;
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, self.text_muted);

        visuals.widgets.inactive.bg_fill = self.bg_tertiary;
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, self.text_secondary);

        visuals.widgets.hovered.bg_fill = self.primary.gamma_multiply(0.8);
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, self.text_primary);

        visuals.widgets.active.bg_fill = self.primary;
        visuals.widgets.active.fg_stroke = Stroke::new(1.0, self.text_primary);

        visuals.selection.bg_fill = self.primary.gamma_multiply(0.3);
        visuals.selection.stroke = Stroke::new(1.0, self.primary);

        visuals.hyperlink_color = self.primary;

        visuals.window_rounding = self.card_rounding;
        visuals.window_stroke = Stroke::new(1.0, self.bg_tertiary);

        ctx.set_visuals(visuals);
        ctx.set_fonts(egui::FontDefinitions::default());

        let mut style = (*ctx.style()).clone();
        style.spacing.item_spacing = Vec2::splat(self.spacing_sm);
        style.spacing.window_margin = egui::Margin::same(self.spacing);
        style.spacing.button_padding = Vec2::new(self.spacing, self.spacing_sm);

        style.text_styles.insert(
            egui::TextStyle::Heading,
            FontId::new(24.0, FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Body,
            FontId::new(14.0, FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Monospace,
            FontId::new(13.0, FontFamily::Monospace),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            FontId::new(16.0, FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Small,
            FontId::new(12.0, FontFamily::Proportional),
        );

        ctx.set_style(style);
    }
}

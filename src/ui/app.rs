//! Main application struct and eframe integration
//!
//! This module contains the VaaniApp that implements eframe::App.

use crate::config::ViewMode;
use crate::ui::components::{DebugPanel, ModeTabs};
use crate::ui::state::AppState;
use crate::ui::theme::Theme;
use crate::ui::views::{ConsoleView, CustomView};
use egui::{self, CentralPanel, RichText, ScrollArea, SidePanel, TopBottomPanel};
use tracing::info;

/// Main Vaani application
pub struct VaaniApp {
    /// Application state
    state: AppState,
    /// Visual theme
    theme: Theme,
    /// Whether the app has been initialized
    initialized: bool,
}

impl VaaniApp {
    /// Create the app around a prepared state
    pub fn new(cc: &eframe::CreationContext<'_>, state: AppState, theme: Theme) -> Self {
        theme.apply(&cc.egui_ctx);

        Self {
            state,
            theme,
            initialized: false,
        }
    }

    /// Called on the first frame
    fn initialize(&mut self) {
        if self.initialized {
            return;
        }

        self.state
            .debug_info
            .add_log(format!("Vaani UI initialized, backend {}", self.state.backend_url));
        info!("[UI] Initialized in {} mode", self.state.view_mode);
        self.initialized = true;
    }

    /// Top bar with the tab switch and debug toggle
    fn show_header(&mut self, ctx: &egui::Context) {
        TopBottomPanel::top("header")
            .frame(
                egui::Frame::none()
                    .fill(self.theme.bg_secondary)
                    .inner_margin(12.0),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new("Vaani")
                            .size(20.0)
                            .strong()
                            .color(self.theme.text_primary),
                    );

                    ui.add_space(self.theme.spacing);
                    ModeTabs::new(&mut self.state.view_mode, &self.theme).show(ui);

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("🔍").on_hover_text("Toggle Debug Panel").clicked() {
                            self.state.show_debug_panel = !self.state.show_debug_panel;
                        }
                    });
                });
            });
    }

    fn show_debug_panel(&mut self, ctx: &egui::Context) {
        if !self.state.show_debug_panel {
            return;
        }

        SidePanel::right("debug_panel")
            .resizable(true)
            .default_width(300.0)
            .min_width(250.0)
            .max_width(500.0)
            .frame(
                egui::Frame::none()
                    .fill(self.theme.bg_primary)
                    .inner_margin(self.theme.spacing),
            )
            .show(ctx, |ui| {
                DebugPanel::new(&self.state, &self.theme).show(ui);
            });
    }

    fn show_content(&mut self, ctx: &egui::Context) {
        CentralPanel::default()
            .frame(egui::Frame::none().fill(self.theme.bg_primary))
            .show(ctx, |ui| {
                ScrollArea::vertical().show(ui, |ui| match self.state.view_mode {
                    ViewMode::Custom => CustomView::new(&mut self.state, &self.theme).show(ui),
                    ViewMode::Console => ConsoleView::new(&mut self.state, &self.theme).show(ui),
                });
            });
    }
}

impl eframe::App for VaaniApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.initialize();

        // Poll the session worker
        self.state.poll_events();

        self.show_header(ctx);
        self.show_debug_panel(ctx);
        self.show_content(ctx);

        if self.state.needs_periodic_repaint() {
            ctx.request_repaint_after(std::time::Duration::from_millis(50));
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("[UI] Shutting down");
        self.state.shutdown();
    }
}

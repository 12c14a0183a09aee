//! UI components and application module
//!
//! This module provides the egui/eframe-based user interface for Vaani.

mod app;
pub mod components;
mod state;
mod theme;
mod views;

pub use app::VaaniApp;
pub use components::{
    AudioControl, ConfigDisplay, ConnectButton, CostCard, StatusBanner, Visualizer,
};
pub use state::{AppState, DebugInfo};
pub use theme::Theme;
pub use views::{ConsoleView, CustomView};

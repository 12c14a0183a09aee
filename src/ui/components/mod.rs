//! UI components module
//!
//! This module provides reusable UI components for the Vaani console.

pub mod audio_control;
pub mod config_display;
pub mod connect_button;
pub mod cost_card;
pub mod debug_panel;
pub mod mode_tabs;
pub mod status_banner;
pub mod visualizer;

pub use audio_control::AudioControl;
pub use config_display::ConfigDisplay;
pub use connect_button::ConnectButton;
pub use cost_card::CostCard;
pub use debug_panel::DebugPanel;
pub use mode_tabs::ModeTabs;
pub use status_banner::StatusBanner;
pub use visualizer::{Visualizer, VisualizerMode};

//! Cost estimate card

use crate::cost::CostEstimate;
use crate::ui::theme::Theme;
use egui::{self, RichText, Stroke};

pub struct CostCard<'a> {
    estimate: &'a CostEstimate,
    theme: &'a Theme,
}

impl<'a> CostCard<'a> {
    pub fn new(estimate: &'a CostEstimate, theme: &'a Theme) -> Self {
        Self { estimate, theme }
    }

    pub fn show(self, ui: &mut egui::Ui) {
        let summary = self.estimate.summary();

        egui::Frame::none()
            .fill(self.theme.cost_bg)
            .stroke(Stroke::new(1.0, self.theme.cost_text.gamma_multiply(0.3)))
            .rounding(self.theme.button_rounding)
            .inner_margin(self.theme.spacing)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new(format!("💰 {}", self.estimate.title()))
                            .strong()
                            .color(self.theme.cost_text),
                    );
                    let response = ui.label(
                        RichText::new(&summary)
                            .size(13.0)
                            .color(self.theme.cost_text),
                    );
                    response.widget_info(|| {
                        egui::WidgetInfo::labeled(
                            egui::WidgetType::Label,
                            true,
                            format!("Cost estimate: {}", summary),
                        )
                    });
                });
            });
    }
}

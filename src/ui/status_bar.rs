use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::capture::ActiveCapture;
use crate::document::DocumentState;

/// Bottom bar with image details, region counts and the active tool hint
pub fn status_bar_ui(
    mut contexts: EguiContexts,
    document: Res<DocumentState>,
    active: Res<ActiveCapture>,
) -> Result {
    egui::TopBottomPanel::bottom("status_bar")
        .frame(
            egui::Frame::side_top_panel(&contexts.ctx_mut()?.style())
                .inner_margin(egui::Margin::symmetric(12, 4)),
        )
        .show(contexts.ctx_mut()?, |ui| {
            ui.horizontal(|ui| {
                match document.image() {
                    Some(image) => {
                        ui.label(format!(
                            "{} ({} × {})",
                            image.display_name(),
                            image.width,
                            image.height
                        ));
                    }
                    None => {
                        ui.label(egui::RichText::new("No image loaded").weak().italics());
                    }
                }

                ui.separator();
                ui.label(format!(
                    "AOI regions: {}   Features: {}",
                    document.aoi_regions().len(),
                    document.feature_regions().len()
                ));

                if let Some(tool) = active.tool() {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new(tool.hint())
                                .color(egui::Color32::GRAY)
                                .size(11.0),
                        );
                    });
                }
            });
        });
    Ok(())
}

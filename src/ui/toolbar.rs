use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use super::result::{self, CoverageDisplay};
use crate::canvas::{ImagePickerState, OpenImageRequest};
use crate::config::{AppConfig, SaveConfigRequest};
use crate::document::DocumentState;
use crate::region::ShapeKind;

/// Main toolbar with image, drawing and calculation controls
pub fn toolbar_ui(
    mut contexts: EguiContexts,
    mut document: ResMut<DocumentState>,
    mut display: ResMut<CoverageDisplay>,
    mut config: ResMut<AppConfig>,
    picker: Res<ImagePickerState>,
    mut open_events: MessageWriter<OpenImageRequest>,
    mut save_events: MessageWriter<SaveConfigRequest>,
) -> Result {
    egui::TopBottomPanel::top("main_toolbar")
        .frame(
            egui::Frame::side_top_panel(&contexts.ctx_mut()?.style())
                .inner_margin(egui::Margin::symmetric(12, 8)),
        )
        .show(contexts.ctx_mut()?, |ui| {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 4.0;

                if ui
                    .add_enabled(!picker.is_open(), egui::Button::new("Open Image..."))
                    .clicked()
                {
                    open_events.write(OpenImageRequest);
                }

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                // AOI drawing
                let mut aoi_enabled = document.aoi_drawing_enabled();
                if ui
                    .toggle_value(&mut aoi_enabled, "Draw AOI")
                    .on_hover_text("A")
                    .changed()
                {
                    document.set_aoi_drawing_enabled(aoi_enabled);
                }

                let current_shape = document.aoi_shape();
                let mut selected_shape = current_shape;
                egui::ComboBox::from_id_salt("aoi_shape_select")
                    .selected_text(current_shape.display_name())
                    .width(90.0)
                    .show_ui(ui, |ui| {
                        for kind in ShapeKind::all() {
                            ui.selectable_value(&mut selected_shape, *kind, kind.display_name());
                        }
                    });
                if selected_shape != current_shape {
                    document.set_aoi_shape_type(selected_shape);
                    config.data.default_aoi_shape = selected_shape;
                    config.dirty = true;
                    save_events.write(SaveConfigRequest);
                }

                ui.add_space(8.0);

                // Feature drawing
                let mut feature_enabled = document.feature_drawing_enabled();
                if ui
                    .toggle_value(&mut feature_enabled, "Draw Features")
                    .on_hover_text("F")
                    .changed()
                {
                    document.set_feature_drawing_enabled(feature_enabled);
                }

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                if ui
                    .add_enabled(!document.aoi_regions().is_empty(), egui::Button::new("Clear AOI"))
                    .clicked()
                {
                    result::clear_aoi(&mut document, &mut display);
                }
                if ui
                    .add_enabled(
                        !document.feature_regions().is_empty(),
                        egui::Button::new("Clear Features"),
                    )
                    .clicked()
                {
                    result::clear_features(&mut document, &mut display);
                }

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                if ui
                    .add(egui::Button::new(egui::RichText::new("Calculate").strong()))
                    .on_hover_text("C")
                    .clicked()
                {
                    result::run_calculation(&document, &mut display);
                }

                if let Some(label) = display.label() {
                    let color = if display.is_error() {
                        egui::Color32::from_rgb(230, 120, 80)
                    } else {
                        egui::Color32::from_rgb(100, 200, 100)
                    };
                    ui.label(egui::RichText::new(label).color(color).strong());
                }
            });
        });
    Ok(())
}

/// A/F/C keyboard shortcuts for the toolbar actions
pub fn handle_toolbar_shortcuts(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut document: ResMut<DocumentState>,
    mut display: ResMut<CoverageDisplay>,
    mut contexts: EguiContexts,
) {
    // Don't react while typing in a text field
    if let Ok(ctx) = contexts.ctx_mut()
        && ctx.wants_keyboard_input()
    {
        return;
    }

    if keyboard.just_pressed(KeyCode::KeyA) {
        let enabled = document.toggle_aoi_drawing();
        debug!("AOI drawing {}", if enabled { "on" } else { "off" });
    }
    if keyboard.just_pressed(KeyCode::KeyF) {
        let enabled = document.toggle_feature_drawing();
        debug!("Feature drawing {}", if enabled { "on" } else { "off" });
    }
    if keyboard.just_pressed(KeyCode::KeyC) {
        result::run_calculation(&document, &mut display);
    }
}

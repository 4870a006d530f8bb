mod dialogs;
mod result;
mod status_bar;
mod toolbar;

pub use result::CoverageDisplay;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

use crate::document::forward_surface_requests;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CoverageDisplay>()
            .add_systems(
                EguiPrimaryContextPass,
                (
                    // Panels first so dialogs float above them
                    toolbar::toolbar_ui,
                    status_bar::status_bar_ui,
                    dialogs::image_load_error_ui,
                    dialogs::config_reset_notification_ui,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                toolbar::handle_toolbar_shortcuts.before(forward_surface_requests),
            );
    }
}

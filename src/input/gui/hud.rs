use egui::{Align2, Color32, Context, Frame, RichText};

use crate::controllers::frame_loop::data::hud_status::HudStatus;

const HUD_MARGIN: f32 = 40.0;
const HUD_TEXT_SIZE: f32 = 22.0;

/// Draws the overlay text in the top-left corner.
pub fn draw_hud(ctx: &Context, hud: &HudStatus) {
    egui::Area::new(egui::Id::new("hud"))
        .anchor(Align2::LEFT_TOP, [HUD_MARGIN, HUD_MARGIN])
        .interactable(false)
        .show(ctx, |ui| {
            Frame::none()
                .fill(Color32::from_black_alpha(160))
                .inner_margin(8.0)
                .rounding(4.0)
                .show(ui, |ui| {
                    for line in hud.lines() {
                        ui.label(RichText::new(line).size(HUD_TEXT_SIZE).color(Color32::WHITE));
                    }
                });
        });
}

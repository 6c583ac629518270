use egui::{Color32, Sense, Vec2};

use crate::ui::slide_frame::IndicatorDot;

const DOT_RADIUS: f32 = 5.0;
const DOT_SPACING: f32 = 8.0;

/// Dibuja la fila de puntos centrada. Devuelve el índice del punto pulsado.
pub fn show_indicator_dots(ui: &mut egui::Ui, dots: &[IndicatorDot]) -> Option<usize> {
    let mut clicked = None;
    let diameter = DOT_RADIUS * 2.0;
    let row_width = dots.len() as f32 * (diameter + DOT_SPACING) - DOT_SPACING;

    ui.horizontal(|ui| {
        ui.add_space(((ui.available_width() - row_width) / 2.0).max(0.0));
        ui.spacing_mut().item_spacing.x = DOT_SPACING;

        for (index, dot) in dots.iter().enumerate() {
            let (rect, response) = ui.allocate_exact_size(Vec2::splat(diameter), Sense::click());
            let color = if dot.is_active() {
                ui.visuals().selection.bg_fill
            } else if response.hovered() {
                ui.visuals().widgets.hovered.bg_fill
            } else {
                Color32::from_gray(110)
            };
            ui.painter().circle_filled(rect.center(), DOT_RADIUS, color);

            if response.on_hover_cursor(egui::CursorIcon::PointingHand).clicked() {
                clicked = Some(index);
            }
        }
    });

    clicked
}

/// Proportional size bar widget.
use egui::{Color32, Rect, Ui, Vec2};

/// Draw a horizontal bar filled to `percent` (0.0–100.0) in `fill`.
pub fn size_bar(ui: &mut Ui, percent: f32, width: f32, height: f32, track: Color32, fill: Color32) {
    let (rect, _response) = ui.allocate_exact_size(Vec2::new(width, height), egui::Sense::hover());
    let painter = ui.painter_at(rect);

    painter.rect_filled(rect, 2.0, track);

    let fill_w = width * (percent / 100.0).clamp(0.0, 1.0);
    if fill_w > 0.5 {
        let fill_rect = Rect::from_min_size(rect.min, Vec2::new(fill_w, height));
        painter.rect_filled(fill_rect, 2.0, fill);
    }
}

//! FolderSleuth application icon generator.
//!
//! Produces a procedural icon: an amber folder with a tab, carrying three
//! horizontal bars in category colours (the analytics breakdown). Rendered
//! at any resolution as RGBA pixel data for the window icon.

/// Generate a FolderSleuth icon as egui `IconData`.
pub fn generate_icon(size: u32) -> egui::IconData {
    let rgba = render_icon(size);
    egui::IconData {
        rgba,
        width: size,
        height: size,
    }
}

/// Render the icon into an RGBA pixel buffer (top-to-bottom row order).
pub fn render_icon(size: u32) -> Vec<u8> {
    let s = size as f32;
    let mut pixels = vec![0u8; (size * size * 4) as usize];

    // ── Layout ──────────────────────────────────────────────────
    let body = RoundRect::new(s * 0.08, s * 0.24, s * 0.92, s * 0.86, s * 0.07);
    let tab = RoundRect::new(s * 0.08, s * 0.14, s * 0.44, s * 0.32, s * 0.05);

    let folder_top = [0xf9, 0xe2, 0xaf];
    let folder_bottom = [0xe0, 0xb0, 0x60];
    let tab_color = [0xd8, 0xa8, 0x58];

    // Bars: (fraction of the available width, colour).
    let bars: &[(f32, [u8; 3])] = &[
        (0.85, [0x89, 0xb4, 0xfa]), // Document
        (0.60, [0xa6, 0xe3, 0xa1]), // Code
        (0.35, [0xf3, 0x8b, 0xa8]), // Video
    ];
    let bar_left = s * 0.18;
    let bar_max_w = s * 0.64;
    let bar_h = s * 0.09;
    let bar_gap = s * 0.05;
    let bars_top = s * 0.40;

    // ── Per-pixel rendering ─────────────────────────────────────
    for y in 0..size {
        for x in 0..size {
            let px = x as f32 + 0.5;
            let py = y as f32 + 0.5;

            let mut rgb = [0u8; 3];
            let mut alpha = 0.0f32;

            // 1. Tab, behind the body.
            let tab_aa = smooth_edge(tab.distance(px, py), 0.0);
            if tab_aa > 0.0 {
                rgb = tab_color;
                alpha = tab_aa;
            }

            // 2. Folder body with a vertical gradient.
            let body_aa = smooth_edge(body.distance(px, py), 0.0);
            if body_aa > 0.0 {
                let t = ((py - body.y0) / (body.y1 - body.y0)).clamp(0.0, 1.0);
                let col = lerp_rgb(folder_top, folder_bottom, t);
                rgb = lerp_rgb(rgb, col, body_aa);
                alpha = alpha + (1.0 - alpha) * body_aa;
            }

            // 3. Category bars on the body.
            for (i, &(fraction, col)) in bars.iter().enumerate() {
                let top = bars_top + i as f32 * (bar_h + bar_gap);
                let bar = RoundRect::new(
                    bar_left,
                    top,
                    bar_left + bar_max_w * fraction,
                    top + bar_h,
                    bar_h * 0.5,
                );
                let bar_aa = smooth_edge(bar.distance(px, py), 0.0) * body_aa;
                if bar_aa > 0.0 {
                    rgb = lerp_rgb(rgb, col, bar_aa);
                }
            }

            let idx = ((y * size + x) * 4) as usize;
            pixels[idx] = rgb[0];
            pixels[idx + 1] = rgb[1];
            pixels[idx + 2] = rgb[2];
            pixels[idx + 3] = (alpha * 255.0).clamp(0.0, 255.0) as u8;
        }
    }

    pixels
}

// ── Helpers ─────────────────────────────────────────────────────

/// Axis-aligned rectangle with rounded corners.
struct RoundRect {
    x0: f32,
    y0: f32,
    x1: f32,
    y1: f32,
    radius: f32,
}

impl RoundRect {
    fn new(x0: f32, y0: f32, x1: f32, y1: f32, radius: f32) -> Self {
        Self {
            x0,
            y0,
            x1,
            y1,
            radius,
        }
    }

    /// Signed distance from the outline: negative inside, positive outside.
    fn distance(&self, px: f32, py: f32) -> f32 {
        let cx = (self.x0 + self.x1) * 0.5;
        let cy = (self.y0 + self.y1) * 0.5;
        let hx = (self.x1 - self.x0) * 0.5 - self.radius;
        let hy = (self.y1 - self.y0) * 0.5 - self.radius;
        let qx = (px - cx).abs() - hx;
        let qy = (py - cy).abs() - hy;
        let outside = (qx.max(0.0).powi(2) + qy.max(0.0).powi(2)).sqrt();
        let inside = qx.max(qy).min(0.0);
        outside + inside - self.radius
    }
}

/// Smooth anti-aliased edge (1 → 0 as `dist` crosses `edge`).
fn smooth_edge(dist: f32, edge: f32) -> f32 {
    let d = dist - edge;
    if d < -1.0 {
        1.0
    } else if d > 1.0 {
        0.0
    } else {
        0.5 - d * 0.5
    }
}

fn lerp_rgb(a: [u8; 3], b: [u8; 3], t: f32) -> [u8; 3] {
    [lerp_c(a[0], b[0], t), lerp_c(a[1], b[1], t), lerp_c(a[2], b[2], t)]
}

/// Linear interpolation for a single colour channel.
fn lerp_c(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 * (1.0 - t) + b as f32 * t).clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_has_rgba_size() {
        assert_eq!(render_icon(32).len(), 32 * 32 * 4);
    }

    #[test]
    fn corners_are_transparent_and_centre_is_opaque() {
        let size = 64;
        let px = render_icon(size);
        let alpha = |x: u32, y: u32| px[((y * size + x) * 4 + 3) as usize];
        assert_eq!(alpha(0, 0), 0);
        assert_eq!(alpha(size - 1, size - 1), 0);
        assert_eq!(alpha(size / 2, size / 2), 255);
    }
}

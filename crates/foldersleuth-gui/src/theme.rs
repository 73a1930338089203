/// Colour palette for FolderSleuth.
///
/// Widgets take their text colours from egui's visuals so they follow the
/// dark/light toggle automatically; the semantic colours that egui has no
/// slot for (folder icons, size bars, category swatches) live here.
use egui::{Color32, Visuals};
use foldersleuth_core::analysis::Category;

/// Semantic colours for one theme.
pub struct Palette {
    pub folder_icon: Color32,
    pub file_icon: Color32,
    pub warning: Color32,
    pub success: Color32,
    pub bar_track: Color32,
    pub bar_small: Color32,
    pub bar_large: Color32,
    pub header_bg: Color32,
    pub row_hover: Color32,
}

impl Palette {
    pub fn dark() -> Self {
        Self {
            folder_icon: Color32::from_rgb(0xf9, 0xe2, 0xaf),
            file_icon: Color32::from_rgb(0x89, 0xb4, 0xfa),
            warning: Color32::from_rgb(0xfa, 0xb3, 0x87),
            success: Color32::from_rgb(0xa6, 0xe3, 0xa1),
            bar_track: Color32::from_rgb(0x2a, 0x2a, 0x3c),
            bar_small: Color32::from_rgb(0xa6, 0xe3, 0xa1),
            bar_large: Color32::from_rgb(0xf3, 0x8b, 0xa8),
            header_bg: Color32::from_rgb(0x22, 0x22, 0x34),
            row_hover: Color32::from_rgb(0x35, 0x35, 0x4a),
        }
    }

    pub fn light() -> Self {
        Self {
            folder_icon: Color32::from_rgb(0xc0, 0x98, 0x20),
            file_icon: Color32::from_rgb(0x3a, 0x6f, 0xd8),
            warning: Color32::from_rgb(0xd0, 0x80, 0x20),
            success: Color32::from_rgb(0x30, 0x98, 0x30),
            bar_track: Color32::from_gray(210),
            bar_small: Color32::from_rgb(0x60, 0xb0, 0x60),
            bar_large: Color32::from_rgb(0xd0, 0x50, 0x60),
            header_bg: Color32::from_rgb(0xe8, 0xe8, 0xf0),
            row_hover: Color32::from_rgb(0xe8, 0xe8, 0xef),
        }
    }

    /// Palette matching the active egui visuals.
    pub fn for_visuals(visuals: &Visuals) -> Self {
        if visuals.dark_mode {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Bar colour from `bar_small` to `bar_large` by percentage (0.0 to 100.0).
    pub fn bar_color(&self, percent: f32) -> Color32 {
        lerp_color(self.bar_small, self.bar_large, percent / 100.0)
    }
}

/// Swatch colour for a file category.
pub fn category_color(category: Category) -> Color32 {
    match category {
        Category::Image => Color32::from_rgb(0xf9, 0xe2, 0xaf),
        Category::Audio => Color32::from_rgb(0xcb, 0xa6, 0xf7),
        Category::Video => Color32::from_rgb(0xf3, 0x8b, 0xa8),
        Category::Document => Color32::from_rgb(0x89, 0xb4, 0xfa),
        Category::Archive => Color32::from_rgb(0xfa, 0xb3, 0x87),
        Category::Code => Color32::from_rgb(0xa6, 0xe3, 0xa1),
        Category::Other => Color32::from_rgb(0x6c, 0x70, 0x86),
    }
}

/// Linear interpolation between two colours.
fn lerp_color(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    Color32::from_rgb(
        (a.r() as f32 * (1.0 - t) + b.r() as f32 * t) as u8,
        (a.g() as f32 * (1.0 - t) + b.g() as f32 * t) as u8,
        (a.b() as f32 * (1.0 - t) + b.b() as f32 * t) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_color_endpoints() {
        let p = Palette::dark();
        assert_eq!(p.bar_color(0.0), p.bar_small);
        assert_eq!(p.bar_color(100.0), p.bar_large);
        assert_eq!(p.bar_color(250.0), p.bar_large);
    }

    #[test]
    fn categories_have_distinct_colours() {
        let mut seen: Vec<Color32> = Category::ALL.iter().map(|&c| category_color(c)).collect();
        seen.sort_by_key(|c| c.to_array());
        seen.dedup();
        assert_eq!(seen.len(), Category::ALL.len());
    }
}

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::Species;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: species → Color32
// ---------------------------------------------------------------------------

/// Fixed colour per species, used as the hue in every chart and as the
/// swatch next to the sidebar checkboxes.
#[derive(Debug, Clone)]
pub struct SpeciesColors {
    colors: [Color32; 3],
}

impl SpeciesColors {
    pub fn new() -> Self {
        let palette = generate_palette(Species::ALL.len());
        let mut colors = [Color32::GRAY; 3];
        for (slot, color) in colors.iter_mut().zip(palette) {
            *slot = color;
        }
        SpeciesColors { colors }
    }

    /// Look up the colour for a species.
    pub fn color_for(&self, species: Species) -> Color32 {
        self.colors[species as usize]
    }
}

impl Default for SpeciesColors {
    fn default() -> Self {
        Self::new()
    }
}

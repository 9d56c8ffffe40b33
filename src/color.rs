use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::CellValue;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues, starting
/// at green so a two-bucket Sí / No chart reads green / purple.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = 120.0 + (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.65, 0.5);
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
// Color mapping: bucket value → Color32
// ---------------------------------------------------------------------------

/// Maps the chart buckets (the configured count order) to distinct colours,
/// shared by the bar charts and the filter checkboxes.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: BTreeMap<CellValue, Color32>,
    default_color: Color32,
}

impl ColorMap {
    pub fn new(values: &[CellValue]) -> Self {
        let palette = generate_palette(values.len());
        let mapping = values.iter().cloned().zip(palette).collect();

        ColorMap {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a given value.
    pub fn color_for(&self, value: &CellValue) -> Color32 {
        self.mapping
            .get(value)
            .copied()
            .unwrap_or(self.default_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_size() {
        assert!(generate_palette(0).is_empty());
        let colors = generate_palette(2);
        assert_eq!(colors.len(), 2);
        assert_ne!(colors[0], colors[1]);
    }

    #[test]
    fn unknown_values_fall_back_to_gray() {
        let map = ColorMap::new(&[CellValue::from("Sí"), CellValue::from("No")]);
        assert_ne!(map.color_for(&CellValue::from("Sí")), Color32::GRAY);
        assert_eq!(map.color_for(&CellValue::from("PENDIENTE")), Color32::GRAY);
    }
}

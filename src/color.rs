use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

fn hsl_to_color32(hsl: Hsl) -> Color32 {
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red.clamp(0.0, 1.0) * 255.0) as u8,
        (rgb.green.clamp(0.0, 1.0) * 255.0) as u8,
        (rgb.blue.clamp(0.0, 1.0) * 255.0) as u8,
    )
}

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            hsl_to_color32(Hsl::new(hue, 0.75, 0.55))
        })
        .collect()
}

/// Sequential scale from deep violet (t = 0) to yellow (t = 1), used for the
/// year colouring of the scatter plot.
pub fn sequential_color(t: f64) -> Color32 {
    let t = t.clamp(0.0, 1.0) as f32;
    let hue = 270.0 - t * 210.0;
    let lightness = 0.30 + t * 0.35;
    hsl_to_color32(Hsl::new(hue, 0.70, lightness))
}

/// Colour of `year` on the sequential scale spanning `min..=max`.
pub fn year_color(year: i32, min: i32, max: i32) -> Color32 {
    if max <= min {
        return sequential_color(0.5);
    }
    sequential_color(f64::from(year - min) / f64::from(max - min))
}

// ---------------------------------------------------------------------------
// Genre colours
// ---------------------------------------------------------------------------

/// Stable genre → colour assignment. Built from the full genre list so a
/// genre keeps its colour while the selection changes.
#[derive(Debug, Clone)]
pub struct GenreColors {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl GenreColors {
    pub fn new<'a>(genres: impl IntoIterator<Item = &'a String>) -> Self {
        let genres: Vec<&String> = genres.into_iter().collect();
        let palette = generate_palette(genres.len());
        let mapping = genres
            .into_iter()
            .zip(palette)
            .map(|(g, c)| (g.clone(), c))
            .collect();

        GenreColors {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    pub fn color_for(&self, genre: &str) -> Color32 {
        self.mapping
            .get(genre)
            .copied()
            .unwrap_or(self.default_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_distinct_colours() {
        let p = generate_palette(5);
        assert_eq!(p.len(), 5);
        for (i, a) in p.iter().enumerate() {
            assert!(p[i + 1..].iter().all(|b| a != b));
        }
        assert!(generate_palette(0).is_empty());
    }

    #[test]
    fn unknown_genre_is_gray() {
        let genres = vec!["pop".to_string(), "rock".to_string()];
        let colors = GenreColors::new(&genres);
        assert_ne!(colors.color_for("pop"), colors.color_for("rock"));
        assert_eq!(colors.color_for("polka"), Color32::GRAY);
    }

    #[test]
    fn year_scale_runs_end_to_end() {
        assert_eq!(year_color(2010, 2010, 2019), sequential_color(0.0));
        assert_eq!(year_color(2019, 2010, 2019), sequential_color(1.0));
        assert_eq!(year_color(2015, 2015, 2015), sequential_color(0.5));
    }
}

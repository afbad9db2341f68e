use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::Sentiment;

// ---------------------------------------------------------------------------
// Fixed sentiment colours, shared by the bar and pie charts
// ---------------------------------------------------------------------------

pub const POSITIVE: Color32 = Color32::from_rgb(0x7b, 0xc0, 0x43);
pub const NEUTRAL: Color32 = Color32::from_rgb(0xa5, 0xd8, 0xdd);
pub const NEGATIVE: Color32 = Color32::from_rgb(0xff, 0x6b, 0x6b);

pub fn sentiment_color(sentiment: Sentiment) -> Color32 {
    match sentiment {
        Sentiment::Positive => POSITIVE,
        Sentiment::Neutral => NEUTRAL,
        Sentiment::Negative => NEGATIVE,
    }
}

/// Legend entries (label → colour) in display order.
pub fn legend_entries() -> Vec<(&'static str, Color32)> {
    Sentiment::ALL
        .into_iter()
        .map(|s| (s.title(), sentiment_color(s)))
        .collect()
}

// ---------------------------------------------------------------------------
// Word cloud gradient: red → yellow → green
// ---------------------------------------------------------------------------

/// Colour at `t` in [0, 1] along a red-yellow-green ramp.
pub fn diverging(t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let hsl = Hsl::new(t * 120.0, 0.70, 0.42);
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0).round() as u8,
        (rgb.green * 255.0).round() as u8,
        (rgb.blue * 255.0).round() as u8,
    )
}

/// Spread `n` words evenly over the ramp, most frequent first (green end).
pub fn word_palette(n: usize) -> Vec<Color32> {
    match n {
        0 => Vec::new(),
        1 => vec![diverging(1.0)],
        _ => (0..n)
            .map(|i| diverging(1.0 - i as f32 / (n - 1) as f32))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentiment_colours_are_fixed() {
        assert_eq!(sentiment_color(Sentiment::Positive), Color32::from_rgb(123, 192, 67));
        assert_eq!(sentiment_color(Sentiment::Neutral), Color32::from_rgb(165, 216, 221));
        assert_eq!(sentiment_color(Sentiment::Negative), Color32::from_rgb(255, 107, 107));

        let labels: Vec<&str> = legend_entries().into_iter().map(|(l, _)| l).collect();
        assert_eq!(labels, vec!["Positive", "Neutral", "Negative"]);
    }

    #[test]
    fn ramp_runs_from_red_to_green() {
        let red = diverging(0.0);
        let green = diverging(1.0);
        assert!(red.r() > red.g());
        assert!(green.g() > green.r());
    }

    #[test]
    fn word_palette_has_one_colour_per_word() {
        assert!(word_palette(0).is_empty());
        assert_eq!(word_palette(1).len(), 1);
        let colours = word_palette(5);
        assert_eq!(colours.len(), 5);
        assert_eq!(colours[0], diverging(1.0));
        assert_eq!(colours[4], diverging(0.0));
    }
}

use serde::{Deserialize, Serialize};

use crate::models::Rgb;

/// Hue bucket used when comparing palettes by color
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum ColorFamily {
    Red,
    Orange,
    Yellow,
    Green,
    Cyan,
    Blue,
    Purple,
    Pink,
    White,
    Black,
}

/// Channel spread below which a color counts as white/grey
const ACHROMATIC_SPREAD: u8 = 40;
/// Brightest channel below which a color counts as black
const DARK_MAX: u8 = 40;

impl ColorFamily {
    /// Bucket a color by hue. Near-black colors land in `Black`, other
    /// low-saturation colors in `White`.
    pub fn of(color: Rgb) -> Self {
        let max = color.r.max(color.g).max(color.b);
        let min = color.r.min(color.g).min(color.b);
        if max < DARK_MAX {
            return ColorFamily::Black;
        }
        if max - min < ACHROMATIC_SPREAD {
            return ColorFamily::White;
        }

        let hue = hue_degrees(color);
        match hue {
            h if !(15.0..345.0).contains(&h) => ColorFamily::Red,
            h if h < 45.0 => ColorFamily::Orange,
            h if h < 70.0 => ColorFamily::Yellow,
            h if h < 160.0 => ColorFamily::Green,
            h if h < 200.0 => ColorFamily::Cyan,
            h if h < 255.0 => ColorFamily::Blue,
            h if h < 290.0 => ColorFamily::Purple,
            _ => ColorFamily::Pink,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ColorFamily::Red => "Red",
            ColorFamily::Orange => "Orange",
            ColorFamily::Yellow => "Yellow",
            ColorFamily::Green => "Green",
            ColorFamily::Cyan => "Cyan",
            ColorFamily::Blue => "Blue",
            ColorFamily::Purple => "Purple",
            ColorFamily::Pink => "Pink",
            ColorFamily::White => "White",
            ColorFamily::Black => "Black",
        }
    }
}

fn hue_degrees(color: Rgb) -> f32 {
    let r = f32::from(color.r) / 255.0;
    let g = f32::from(color.g) / 255.0;
    let b = f32::from(color.b) / 255.0;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    if delta <= f32::EPSILON {
        return 0.0;
    }

    let hue = if (max - r).abs() <= f32::EPSILON {
        60.0 * (((g - b) / delta) % 6.0)
    } else if (max - g).abs() <= f32::EPSILON {
        60.0 * (((b - r) / delta) + 2.0)
    } else {
        60.0 * (((r - g) / delta) + 4.0)
    };

    if hue < 0.0 {
        hue + 360.0
    } else {
        hue
    }
}

/// Named colors recognized in free text. Multi-word names come before the
/// single words they contain.
pub const NAMED_COLORS: &[(&str, Rgb)] = &[
    ("warm white", Rgb::new(255, 180, 100)),
    ("cool white", Rgb::new(200, 220, 255)),
    ("red", Rgb::new(255, 0, 0)),
    ("crimson", Rgb::new(220, 20, 60)),
    ("maroon", Rgb::new(128, 0, 0)),
    ("coral", Rgb::new(255, 127, 80)),
    ("orange", Rgb::new(255, 120, 0)),
    ("amber", Rgb::new(255, 170, 0)),
    ("peach", Rgb::new(255, 160, 120)),
    ("gold", Rgb::new(255, 200, 0)),
    ("yellow", Rgb::new(255, 230, 0)),
    ("lime", Rgb::new(150, 255, 0)),
    ("green", Rgb::new(0, 200, 0)),
    ("mint", Rgb::new(120, 255, 180)),
    ("teal", Rgb::new(0, 160, 150)),
    ("turquoise", Rgb::new(0, 220, 200)),
    ("cyan", Rgb::new(0, 255, 255)),
    ("blue", Rgb::new(0, 60, 255)),
    ("navy", Rgb::new(0, 0, 140)),
    ("purple", Rgb::new(140, 0, 255)),
    ("violet", Rgb::new(170, 60, 255)),
    ("lavender", Rgb::new(190, 150, 255)),
    ("magenta", Rgb::new(255, 0, 200)),
    ("pink", Rgb::new(255, 80, 160)),
    ("silver", Rgb::new(200, 200, 210)),
    ("white", Rgb::new(255, 255, 255)),
];

pub fn named_color(name: &str) -> Option<Rgb> {
    NAMED_COLORS
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|(_, c)| *c)
}

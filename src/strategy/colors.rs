// Display colors for tire compounds and teams

use egui::Color32;

use super::types::Compound;

/// Color used for any compound or team without an entry below.
pub const DEFAULT_COLOR: Color32 = Color32::BLACK;

pub const SOFT_COLOR: Color32 = Color32::from_rgb(0xff, 0x2d, 0x2d);
pub const MEDIUM_COLOR: Color32 = Color32::from_rgb(0xf7, 0xe6, 0x00);
pub const HARD_COLOR: Color32 = Color32::from_rgb(0xd9, 0xd9, 0xd9);
pub const INTERMEDIATE_COLOR: Color32 = Color32::from_rgb(0x00, 0xa6, 0x50);
pub const WET_COLOR: Color32 = Color32::from_rgb(0x00, 0x72, 0xff);

pub const TEAM_COLORS: [(&str, Color32); 10] = [
    ("Red Bull Racing", Color32::from_rgb(0x00, 0x37, 0x73)),
    ("Ferrari", Color32::from_rgb(0x82, 0x17, 0x29)),
    ("Mercedes", Color32::from_rgb(0xc8, 0xcc, 0xce)),
    ("McLaren", Color32::from_rgb(0xff, 0x6a, 0x13)),
    ("Aston Martin", Color32::from_rgb(0x03, 0x7a, 0x68)),
    ("Haas F1 Team", Color32::from_rgb(0xeb, 0x0a, 0x1e)),
    ("Alpine", Color32::from_rgb(0xf1, 0xa7, 0xd1)),
    ("Kick Sauber", Color32::from_rgb(0x53, 0xfc, 0x18)),
    ("Racing Bulls", Color32::from_rgb(0x66, 0x67, 0xab)),
    ("Williams", Color32::from_rgb(0x00, 0xa0, 0xde)),
];

pub fn compound_color(compound: &Compound) -> Color32 {
    match compound {
        Compound::Soft => SOFT_COLOR,
        Compound::Medium => MEDIUM_COLOR,
        Compound::Hard => HARD_COLOR,
        Compound::Intermediate => INTERMEDIATE_COLOR,
        Compound::Wet => WET_COLOR,
        Compound::Other(_) => DEFAULT_COLOR,
    }
}

/// Team names are matched exactly as the provider spells them.
pub fn team_color(team_name: &str) -> Color32 {
    TEAM_COLORS
        .iter()
        .find(|(name, _)| *name == team_name)
        .map(|(_, color)| *color)
        .unwrap_or(DEFAULT_COLOR)
}

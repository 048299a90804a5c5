/// A mapping highlight color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Ten visually distinct pastel backgrounds; adjacent mapping indices rarely
/// collide perceptually.
pub const PALETTE: [Rgb; 10] = [
    Rgb::new(0xFF, 0xE0, 0x8A),
    Rgb::new(0xB5, 0xE8, 0xA3),
    Rgb::new(0xA3, 0xD8, 0xF4),
    Rgb::new(0xF4, 0xB6, 0xC2),
    Rgb::new(0xD7, 0xBC, 0xE8),
    Rgb::new(0xFF, 0xD6, 0xA5),
    Rgb::new(0xC9, 0xF5, 0xD3),
    Rgb::new(0xCF, 0xE8, 0xFF),
    Rgb::new(0xFA, 0xD2, 0xE1),
    Rgb::new(0xE3, 0xD0, 0xFF),
];

/// Color for a mapping index, cycling through the palette.
#[must_use]
pub const fn color_for(mapping_index: usize) -> Rgb {
    PALETTE[mapping_index % PALETTE.len()]
}

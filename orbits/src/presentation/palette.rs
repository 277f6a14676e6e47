/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::opaque(255, 255, 255);

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// Display color of a catalog body, white for anything unknown
pub fn body_color(name: &str) -> Rgba {
    match name {
        "SOL" => Rgba::opaque(255, 255, 0),
        "MERCURY" => Rgba::opaque(128, 128, 128),
        "VENUS" => Rgba::WHITE,
        "EARTH" => Rgba::opaque(0, 0, 255),
        "MARS" => Rgba::opaque(255, 0, 0),
        "JUPITER" => Rgba::opaque(255, 200, 100), // banded, approximated as warm yellow-brown
        "SATURN" => Rgba::opaque(200, 150, 100),
        "URANUS" => Rgba::opaque(0, 128, 128),
        "NEPTUNE" => Rgba::opaque(0, 0, 128),
        "PLUTO" => Rgba::opaque(128, 128, 128),
        _ => Rgba::WHITE,
    }
}

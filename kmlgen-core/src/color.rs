/// Represents a color in KML documents.
///
/// Channels are stored as 8-bit values. KML writes colors as
/// `aabbggrr`, i.e. alpha, blue, green, red, which is the reverse of the
/// usual RGB ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub alpha: u8,
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    /// Creates a color from alpha, red, green and blue channels.
    pub fn argb(alpha: u8, red: u8, green: u8, blue: u8) -> Self {
        Self {
            alpha,
            red,
            green,
            blue,
        }
    }

    /// Creates a fully opaque color.
    pub fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::argb(0xff, red, green, blue)
    }

    pub fn black() -> Self {
        Self::rgb(0, 0, 0)
    }

    pub fn white() -> Self {
        Self::rgb(255, 255, 255)
    }

    pub fn red() -> Self {
        Self::rgb(255, 0, 0)
    }

    pub fn green() -> Self {
        Self::rgb(0, 255, 0)
    }

    pub fn blue() -> Self {
        Self::rgb(0, 0, 255)
    }

    pub fn yellow() -> Self {
        Self::rgb(255, 255, 0)
    }

    /// Returns a copy with a different alpha channel.
    pub fn with_alpha(self, alpha: u8) -> Self {
        Self { alpha, ..self }
    }

    /// Encodes the color as lowercase `aabbggrr` hex.
    pub fn to_kml_hex(&self) -> String {
        format!(
            "{:02x}{:02x}{:02x}{:02x}",
            self.alpha, self.blue, self.green, self.red
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kml_hex_is_abgr() {
        let color = Color::argb(255, 1, 2, 3);
        assert_eq!(color.to_kml_hex(), "ff030201");
    }

    #[test]
    fn test_kml_hex_pads_and_lowercases() {
        assert_eq!(Color::argb(0, 0, 0, 0).to_kml_hex(), "00000000");
        assert_eq!(Color::argb(0x0a, 0xbc, 0xde, 0xf0).to_kml_hex(), "0af0debc");
        assert_eq!(Color::white().to_kml_hex(), "ffffffff");
    }

    #[test]
    fn test_named_colors() {
        assert_eq!(Color::red().to_kml_hex(), "ff0000ff");
        assert_eq!(Color::green().to_kml_hex(), "ff00ff00");
        assert_eq!(Color::blue().to_kml_hex(), "ffff0000");
        assert_eq!(Color::yellow().to_kml_hex(), "ff00ffff");
        assert_eq!(Color::black().to_kml_hex(), "ff000000");
    }

    #[test]
    fn test_with_alpha() {
        let translucent = Color::red().with_alpha(0x80);
        assert_eq!(translucent.alpha, 0x80);
        assert_eq!(translucent.red, 255);
        assert_eq!(translucent.to_kml_hex(), "800000ff");
    }
}

use serde::{Deserialize, Serialize};

/// An RGB color, written as `"#rrggbb"` in theme files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse from hex string like "#ff0000" or "ff0000"
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Self { r, g, b })
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Convert to crossterm Color
    pub fn to_crossterm(&self) -> crossterm::style::Color {
        crossterm::style::Color::Rgb {
            r: self.r,
            g: self.g,
            b: self.b,
        }
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Color::from_hex(&s).ok_or_else(|| format!("invalid color {:?}, expected #rrggbb", s))
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_hex_parses_with_hash() {
        let color = Color::from_hex("#ff5500").unwrap();
        assert_eq!(color, Color::rgb(255, 85, 0));
    }

    #[test]
    fn from_hex_parses_without_hash() {
        assert_eq!(Color::from_hex("00ff00"), Some(Color::rgb(0, 255, 0)));
    }

    #[test]
    fn from_hex_returns_none_for_invalid() {
        assert!(Color::from_hex("fff").is_none());
        assert!(Color::from_hex("gggggg").is_none());
        assert!(Color::from_hex("ééé").is_none());
    }

    #[test]
    fn deserializes_from_hex_string() {
        let color: Color = serde_json::from_str(r##""#242424""##).unwrap();
        assert_eq!(color, Color::rgb(0x24, 0x24, 0x24));
        assert!(serde_json::from_str::<Color>(r#""red""#).is_err());
    }

    #[test]
    fn serializes_to_hex_string() {
        let json = serde_json::to_string(&Color::rgb(0xc2, 0xc2, 0xc2)).unwrap();
        assert_eq!(json, r##""#c2c2c2""##);
    }
}

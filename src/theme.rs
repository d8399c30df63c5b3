//! Colors for the window renderer
//!
//! A single built-in dark palette; only the accent is configurable.

/// RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a new color from RGB values (alpha defaults to 255)
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Convert to ARGB u32 for softbuffer
    pub fn to_argb_u32(&self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Linear interpolation towards `other` (t in 0..=1)
    pub fn lerp(&self, other: Color, t: f64) -> Color {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Color {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: mix(self.a, other.a),
        }
    }

    /// Parse from "#RRGGBB" or "#RRGGBBAA" hex string
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let s = s.trim_start_matches('#');
        if !s.is_ascii() {
            return Err(format!("Invalid color format: {}", s));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&s[range], 16).map_err(|e| e.to_string())
        };
        match s.len() {
            6 => Ok(Color {
                r: channel(0..2)?,
                g: channel(2..4)?,
                b: channel(4..6)?,
                a: 255,
            }),
            8 => Ok(Color {
                r: channel(0..2)?,
                g: channel(2..4)?,
                b: channel(4..6)?,
                a: channel(6..8)?,
            }),
            _ => Err(format!("Invalid color format: {}", s)),
        }
    }
}

/// Colors used by the renderer
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub sidebar: Color,
    pub surface: Color,
    pub surface_hover: Color,
    pub border: Color,
    pub user_message: Color,
    pub assistant_message: Color,
    pub code_line: Color,
    pub preview_start: Color,
    pub preview_end: Color,
    pub handle: Color,
    pub accent: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::rgb(0x1E, 0x1E, 0x1E),
            sidebar: Color::rgb(0x25, 0x25, 0x26),
            surface: Color::rgb(0x2D, 0x2D, 0x2D),
            surface_hover: Color::rgb(0x3D, 0x3D, 0x3D),
            border: Color::rgb(0x40, 0x40, 0x40),
            user_message: Color::rgb(0x2D, 0x2D, 0x2D),
            assistant_message: Color::rgb(0x26, 0x26, 0x26),
            code_line: Color::rgb(0x9C, 0xA3, 0xAF),
            preview_start: Color::rgb(0x3B, 0x82, 0xF6),
            preview_end: Color::rgb(0x93, 0x33, 0xEA),
            handle: Color::rgb(0x2D, 0x2D, 0x2D),
            accent: Color::rgb(0x3B, 0x82, 0xF6),
        }
    }
}

impl Theme {
    /// Default palette with the configured accent, keeping the built-in
    /// accent when the value does not parse.
    pub fn with_accent(accent: &str) -> Self {
        let mut theme = Self::default();
        match Color::from_hex(accent) {
            Ok(color) => theme.accent = color,
            Err(e) => tracing::warn!("Invalid accent color {:?}: {}", accent, e),
        }
        theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_rgb_and_rgba() {
        assert_eq!(Color::from_hex("#3B82F6").unwrap(), Color::rgb(0x3B, 0x82, 0xF6));
        let c = Color::from_hex("10203040").unwrap();
        assert_eq!((c.r, c.g, c.b, c.a), (0x10, 0x20, 0x30, 0x40));
        assert!(Color::from_hex("#12345").is_err());
        assert!(Color::from_hex("#zzzzzz").is_err());
    }

    #[test]
    fn test_to_argb() {
        assert_eq!(Color::rgb(0x12, 0x34, 0x56).to_argb_u32(), 0xFF123456);
    }

    #[test]
    fn test_lerp_endpoints() {
        let a = Color::rgb(0, 0, 0);
        let b = Color::rgb(200, 100, 50);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Color::rgb(100, 50, 25));
    }

    #[test]
    fn test_invalid_accent_keeps_default() {
        assert_eq!(Theme::with_accent("nope").accent, Theme::default().accent);
        assert_eq!(Theme::with_accent("#FF0000").accent, Color::rgb(255, 0, 0));
    }
}

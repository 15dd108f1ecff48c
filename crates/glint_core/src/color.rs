//! Linear RGB color.

use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, Mul, Sub};

use serde::{Deserialize, Serialize};

/// Linear RGB triple. Channels are left unclamped while light accumulates;
/// clamping and gamma only happen when a frame is handed to a display.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
    pub const RED: Color = Color::new(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::new(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::new(0.0, 0.0, 1.0);
    pub const YELLOW: Color = Color::new(1.0, 1.0, 0.0);
    pub const MAGENTA: Color = Color::new(1.0, 0.0, 1.0);
    pub const CYAN: Color = Color::new(0.0, 1.0, 1.0);
    pub const GRAY_LIGHT: Color = Color::new(0.75, 0.75, 0.75);

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Looks up one of the named constants, case-insensitively.
    pub fn named(name: &str) -> Option<Color> {
        let color = match name.to_ascii_lowercase().replace(['-', ' '], "_").as_str() {
            "white" => Color::WHITE,
            "black" => Color::BLACK,
            "red" => Color::RED,
            "green" => Color::GREEN,
            "blue" => Color::BLUE,
            "yellow" => Color::YELLOW,
            "magenta" => Color::MAGENTA,
            "cyan" => Color::CYAN,
            "gray_light" | "grey_light" | "light_gray" | "light_grey" => Color::GRAY_LIGHT,
            _ => return None,
        };
        Some(color)
    }

    /// Each channel clamped to `[0, 1]`. NaN channels become 0.
    pub fn clamp(&self) -> Color {
        let c = |v: f64| if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) };
        Color::new(c(self.r), c(self.g), c(self.b))
    }

    /// Clamps, then raises each channel to `1 / gamma`.
    pub fn gamma_encode(&self, gamma: f64) -> Color {
        let clamped = self.clamp();
        let inv = 1.0 / gamma;
        Color::new(clamped.r.powf(inv), clamped.g.powf(inv), clamped.b.powf(inv))
    }

    /// Gamma-encoded 8-bit RGB for display.
    pub fn to_rgb8(&self, gamma: f64) -> [u8; 3] {
        let encoded = self.gamma_encode(gamma);
        let byte = |v: f64| (v * 255.0).round() as u8;
        [byte(encoded.r), byte(encoded.g), byte(encoded.b)]
    }

    /// Largest channel value.
    pub fn max_channel(&self) -> f64 {
        self.r.max(self.g).max(self.b)
    }
}

impl Add for Color {
    type Output = Color;
    fn add(self, rhs: Color) -> Color {
        Color::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b)
    }
}

impl AddAssign for Color {
    fn add_assign(&mut self, rhs: Color) {
        self.r += rhs.r;
        self.g += rhs.g;
        self.b += rhs.b;
    }
}

impl Sub for Color {
    type Output = Color;
    fn sub(self, rhs: Color) -> Color {
        Color::new(self.r - rhs.r, self.g - rhs.g, self.b - rhs.b)
    }
}

impl Mul<f64> for Color {
    type Output = Color;
    fn mul(self, rhs: f64) -> Color {
        Color::new(self.r * rhs, self.g * rhs, self.b * rhs)
    }
}

impl Mul<Color> for f64 {
    type Output = Color;
    fn mul(self, rhs: Color) -> Color {
        rhs * self
    }
}

/// Component-wise product, used for tinting.
impl Mul for Color {
    type Output = Color;
    fn mul(self, rhs: Color) -> Color {
        Color::new(self.r * rhs.r, self.g * rhs.g, self.b * rhs.b)
    }
}

impl Div<f64> for Color {
    type Output = Color;
    fn div(self, rhs: f64) -> Color {
        Color::new(self.r / rhs, self.g / rhs, self.b / rhs)
    }
}

impl Sum for Color {
    fn sum<I: Iterator<Item = Color>>(iter: I) -> Color {
        iter.fold(Color::BLACK, |acc, c| acc + c)
    }
}

use crate::kernel::Kernel;
use image::Rgb;
use std::ops::{Add, Mul, Sub};

/// A float RGB triple on the `[0, 255]` scale.
///
/// Channels are free to leave that range while colors are being composed;
/// they are only truncated into bytes by [`to_int`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::new(255.0, 255.0, 255.0);

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    pub const fn gray(level: f64) -> Self {
        Self::new(level, level, level)
    }

    /// Builds a color from 8-bit channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f64, g as f64, b as f64)
    }

    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self::new(f(self.r), f(self.g), f(self.b))
    }
}

impl From<[u8; 3]> for Color {
    fn from(c: [u8; 3]) -> Self {
        Self::rgb(c[0], c[1], c[2])
    }
}

impl From<Rgb<u8>> for Color {
    fn from(c: Rgb<u8>) -> Self {
        Self::from(c.0)
    }
}

impl Add for Color {
    type Output = Color;

    fn add(self, rhs: Color) -> Color {
        Color::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b)
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
        self.map(|c| c * rhs)
    }
}

/// Converts hue (degrees), saturation and value (both `[0, 1]`) into RGB.
///
/// The hue is reduced modulo 360 before the sextant is picked. A sextant at or
/// beyond 6 paints black: this only happens when `rem_euclid` rounds a tiny
/// negative hue up to exactly 360.
pub fn hsv(h: f64, s: f64, v: f64) -> Color {
    let h = h.rem_euclid(360.0);

    if s == 0.0 {
        return Color::gray(v * 255.0);
    }

    let c = v * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let low = m * 255.0;
    let high = (c + m) * 255.0;
    let mid = (x + m) * 255.0;

    let sextant = h / 60.0;
    if sextant < 1.0 {
        Color::new(high, mid, low)
    } else if sextant < 2.0 {
        Color::new(mid, high, low)
    } else if sextant < 3.0 {
        Color::new(low, high, mid)
    } else if sextant < 4.0 {
        Color::new(low, mid, high)
    } else if sextant < 5.0 {
        Color::new(mid, low, high)
    } else if sextant < 6.0 {
        Color::new(high, low, mid)
    } else {
        log::trace!("hue {h} fell outside every sextant, painting black");
        Color::BLACK
    }
}

/// Multiplies every channel by `factor`. The result is not clamped.
#[inline]
pub fn scale(factor: f64, color: Color) -> Color {
    color * factor
}

/// Pulls every channel toward white: `1.0` keeps the color, `0.0` is white.
#[inline]
pub fn desaturate(amount: f64, color: Color) -> Color {
    color.map(|c| 255.0 - amount * (255.0 - c))
}

/// Truncates each channel into a byte. Out-of-range values saturate.
#[inline]
pub fn to_int(color: Color) -> Rgb<u8> {
    Rgb([color.r as u8, color.g as u8, color.b as u8])
}

/// Blends two colors channel by channel with the same kernel and fraction.
#[inline]
pub fn interp_color<K: Kernel + ?Sized>(x: f64, a: Color, b: Color, kernel: &K) -> Color {
    Color::new(
        kernel.eval(x, a.r, b.r),
        kernel.eval(x, a.g, b.g),
        kernel.eval(x, a.b, b.b),
    )
}

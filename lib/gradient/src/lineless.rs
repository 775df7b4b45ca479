//! Hue ramps without the brightness seams of plain HSV.
//!
//! The hue circle is cut into three 120° sections (red to green, green to
//! blue, blue to red). Inside a section one channel falls from 255 to 0 while
//! the next one rises, each through the chosen kernel. Both active channels
//! are then lifted by `rising * falling / limit`, which fills in the dark
//! midpoint between two primaries without touching the section boundaries.

use crate::{
    Color,
    color::{desaturate, scale},
    kernel::{Interpolation, Kernel},
};
use derivative::Derivative;
use derive_setters::Setters;

/// Correction strength used by the catalog. Larger values brighten less.
pub const DEFAULT_LIMIT: f64 = 350.0;

/// Fully saturated color for `hue` (degrees).
pub fn rainbow_gen<K: Kernel + ?Sized>(hue: f64, limit: f64, kernel: &K) -> Color {
    let h = hue.rem_euclid(360.0);

    let (section, start) = if h < 120.0 {
        (0, 0.0)
    } else if h < 240.0 {
        (1, 120.0)
    } else {
        (2, 240.0)
    };

    let t = (h - start) / 120.0;
    let falling = kernel.eval(t, 255.0, 0.0);
    let rising = kernel.eval(t, 0.0, 255.0);
    let c = rising * falling / limit;

    let (falling, rising) = (falling + c, rising + c);
    match section {
        0 => Color::new(falling, rising, 0.0),
        1 => Color::new(0.0, falling, rising),
        _ => Color::new(rising, 0.0, falling),
    }
}

/// Drop-in replacement for [`crate::hsv`] built on [`rainbow_gen`].
pub fn hsv_lineless<K: Kernel + ?Sized>(
    hue: f64,
    sat: f64,
    val: f64,
    limit: f64,
    kernel: &K,
) -> Color {
    scale(val, desaturate(sat, rainbow_gen(hue, limit, kernel)))
}

#[derive(Debug, Clone, Copy, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct LinelessConfig {
    #[derivative(Default(value = "DEFAULT_LIMIT"))]
    limit: f64,

    #[derivative(Default(value = "Interpolation::Cubic"))]
    kernel: Interpolation,
}

impl LinelessConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rgb(&self, hue: f64) -> Color {
        rainbow_gen(hue, self.limit, &self.kernel)
    }

    pub fn hsv(&self, hue: f64, sat: f64, val: f64) -> Color {
        hsv_lineless(hue, sat, val, self.limit, &self.kernel)
    }
}

//! Scalar interpolation kernels.
//!
//! Every kernel maps a fraction `x` and two endpoint values onto a blended
//! value. Interpolating kernels satisfy `f(0, x0, x1) == x0` and
//! `f(1, x0, x1) == x1`; the bump kernels instead return to `x0` at both ends
//! and peak at `x1` in between.

use std::f64::consts::PI;
use strum_macros::{Display, EnumString, VariantArray};

/// Linear interpolation. With `restrict`, `x` is clamped to `[0, 1]` first.
#[inline]
pub fn lerp(x: f64, x0: f64, x1: f64, restrict: bool) -> f64 {
    let x = if restrict { x.clamp(0.0, 1.0) } else { x };
    x0 + x * (x1 - x0)
}

/// Smoothstep interpolation with zero slope at both ends.
#[inline]
pub fn cuberp(x: f64, x0: f64, x1: f64) -> f64 {
    let x = x.clamp(0.0, 1.0);
    x0 + (x1 - x0) * (3.0 * x * x - 2.0 * x * x * x)
}

/// Symmetric smooth bump: `x0` at both ends, `x1` at `x == 0.5`.
pub fn cubic_bump(x: f64, x0: f64, x1: f64) -> f64 {
    cubic_bump_uneven(x, x0, x1, x0)
}

/// Smooth bump from `x0` up to `x1` at the midpoint and down to `x2`.
pub fn cubic_bump_uneven(x: f64, x0: f64, x1: f64, x2: f64) -> f64 {
    if x < 0.5 {
        cuberp(2.0 * x, x0, x1)
    } else {
        cuberp(2.0 * x - 1.0, x1, x2)
    }
}

/// `(x² - 1)²` bump over `[-1, 1]`, flatter at the peak than [`cubic_bump`].
///
/// Peaks at `x1` for `x == 0` and settles on `x0` from `|x| >= 1` on.
pub fn quartic_bump(x: f64, x0: f64, x1: f64) -> f64 {
    let x = x.clamp(-1.0, 1.0);
    let shape = x * x - 1.0;
    x0 + (x1 - x0) * shape * shape
}

/// `sin²(πx)` bump over `[0, 1]`.
///
/// Outside `[0, 1]` the result is exactly `x0`; the input is not clamped.
pub fn sine_bump(x: f64, x0: f64, x1: f64) -> f64 {
    if !(0.0..=1.0).contains(&x) {
        return x0;
    }

    let s = (PI * x).sin();
    x0 + (x1 - x0) * s * s
}

/// Blending strategy used by color interpolation and the lineless generator.
pub trait Kernel {
    fn eval(&self, x: f64, x0: f64, x1: f64) -> f64;
}

impl<F> Kernel for F
where
    F: Fn(f64, f64, f64) -> f64,
{
    #[inline]
    fn eval(&self, x: f64, x0: f64, x1: f64) -> f64 {
        self(x, x0, x1)
    }
}

/// The named kernels, selectable by name from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, VariantArray)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Interpolation {
    Linear,
    Clamped,
    #[default]
    Cubic,
    CubicBump,
    QuarticBump,
    SineBump,
}

impl Kernel for Interpolation {
    #[inline]
    fn eval(&self, x: f64, x0: f64, x1: f64) -> f64 {
        match self {
            Interpolation::Linear => lerp(x, x0, x1, false),
            Interpolation::Clamped => lerp(x, x0, x1, true),
            Interpolation::Cubic => cuberp(x, x0, x1),
            Interpolation::CubicBump => cubic_bump(x, x0, x1),
            Interpolation::QuarticBump => quartic_bump(x, x0, x1),
            Interpolation::SineBump => sine_bump(x, x0, x1),
        }
    }
}

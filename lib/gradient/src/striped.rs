//! Piecewise gradients over an ordered list of colors.

use crate::{
    Color, GradientError, GradientResult,
    color::interp_color,
    kernel::{Interpolation, Kernel},
};
use derive_setters::Setters;

/// Repeating gradient through `colors`, returned as a function of `z`.
///
/// `z` is multiplied by `fit` and wrapped into `[0, 1)`. The domain is split
/// into one segment per color, and the last segment blends back into
/// `colors[0]`, so the pattern tiles without a seam.
pub fn striped_gradient<K: Kernel>(
    colors: Vec<Color>,
    kernel: K,
    fit: f64,
) -> GradientResult<impl Fn(f64) -> Color> {
    check_colors(&colors)?;
    Ok(move |z: f64| sample_cyclic(&colors, &kernel, z * fit))
}

/// Reusable striped gradient with a named kernel.
///
/// Cyclic gradients behave like [`striped_gradient`]. Open gradients spread
/// `colors.len() - 1` segments over `[0, 1]`, clamp `z` into that range and
/// never blend the last color back into the first.
#[derive(Debug, Clone, Setters)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct StripedGradient {
    #[setters(skip)]
    colors: Vec<Color>,

    kernel: Interpolation,
    fit: f64,
    cyclic: bool,
}

impl StripedGradient {
    pub fn new(colors: Vec<Color>) -> GradientResult<Self> {
        check_colors(&colors)?;

        Ok(Self {
            colors,
            kernel: Interpolation::default(),
            fit: 1.0,
            cyclic: true,
        })
    }

    pub fn sample(&self, z: f64) -> Color {
        if self.cyclic {
            sample_cyclic(&self.colors, &self.kernel, z * self.fit)
        } else {
            sample_open(&self.colors, &self.kernel, z * self.fit)
        }
    }
}

fn check_colors(colors: &[Color]) -> GradientResult<()> {
    if colors.len() < 2 {
        return Err(GradientError::InvalidParameter(format!(
            "a striped gradient needs at least 2 colors, got {}",
            colors.len()
        )));
    }

    Ok(())
}

fn sample_cyclic<K: Kernel + ?Sized>(colors: &[Color], kernel: &K, z: f64) -> Color {
    let n = colors.len();

    let mut z = z.rem_euclid(1.0);
    if z >= 1.0 {
        z = 0.0;
    }

    let pos = z * n as f64;
    let segment = pos.floor();
    let i = segment as usize % n;

    interp_color(pos - segment, colors[i], colors[(i + 1) % n], kernel)
}

fn sample_open<K: Kernel + ?Sized>(colors: &[Color], kernel: &K, z: f64) -> Color {
    let segments = colors.len() - 1;

    let pos = z.clamp(0.0, 1.0) * segments as f64;
    let i = (pos.floor() as usize).min(segments - 1);

    interp_color(pos - i as f64, colors[i], colors[i + 1], kernel)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::lerp;

    const C0: Color = Color::new(255.0, 0.0, 0.0);
    const C1: Color = Color::new(0.0, 255.0, 0.0);
    const C2: Color = Color::new(0.0, 0.0, 255.0);

    fn distance(a: Color, b: Color) -> f64 {
        (a.r - b.r)
            .abs()
            .max((a.g - b.g).abs())
            .max((a.b - b.b).abs())
    }

    #[test]
    fn test_cyclic_wraparound() -> GradientResult<()> {
        let gradient = striped_gradient(vec![C0, C1, C2], Interpolation::Linear, 1.0)?;

        assert!(distance(gradient(0.0), C0) < 1e-9);
        assert!(distance(gradient(1.0 / 3.0), C1) < 1e-6);
        assert!(distance(gradient(2.0 / 3.0), C2) < 1e-6);
        assert!(distance(gradient(1.0 - 1e-9), C0) < 1e-3);
        assert!(distance(gradient(1.0), C0) < 1e-9);

        let halfway = gradient(0.5);
        assert!(distance(halfway, Color::new(0.0, 127.5, 127.5)) < 1e-6);

        Ok(())
    }

    #[test]
    fn test_cyclic_fit_and_negative_domain() -> GradientResult<()> {
        let linear = |x: f64, a: f64, b: f64| lerp(x, a, b, false);
        let gradient = striped_gradient(vec![C0, C1], linear, 2.0)?;

        assert!(distance(gradient(0.5), C0) < 1e-9);
        assert!(distance(gradient(0.25), C1) < 1e-9);
        assert!(distance(gradient(-0.25), C1) < 1e-9);
        assert!(distance(gradient(0.125), gradient(1.125)) < 1e-9);

        Ok(())
    }

    #[test]
    fn test_open_gradient_clamps() -> GradientResult<()> {
        let gradient = StripedGradient::new(vec![C0, C1, C2])?
            .with_kernel(Interpolation::Linear)
            .with_cyclic(false);

        assert!(distance(gradient.sample(0.0), C0) < 1e-9);
        assert!(distance(gradient.sample(0.5), C1) < 1e-9);
        assert!(distance(gradient.sample(1.0), C2) < 1e-9);
        assert!(distance(gradient.sample(-4.0), C0) < 1e-9);
        assert!(distance(gradient.sample(4.0), C2) < 1e-9);
        assert!(distance(gradient.sample(0.75), Color::new(0.0, 127.5, 127.5)) < 1e-9);

        Ok(())
    }

    #[test]
    fn test_struct_matches_function() -> GradientResult<()> {
        let colors = vec![C0, C1, C2, Color::WHITE];
        let function = striped_gradient(colors.clone(), Interpolation::Cubic, 1.5)?;
        let gradient = StripedGradient::new(colors)?.with_fit(1.5);

        for i in 0..=40 {
            let z = i as f64 / 40.0;
            assert_eq!(function(z), gradient.sample(z));
        }

        Ok(())
    }

    #[test]
    fn test_rejects_short_lists() {
        assert!(StripedGradient::new(vec![]).is_err());
        assert!(StripedGradient::new(vec![C0]).is_err());
        assert!(striped_gradient(vec![C1], Interpolation::Linear, 1.0).is_err());
    }
}

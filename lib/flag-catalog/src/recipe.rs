//! Per-flag color recipes.
//!
//! The numeric constants below are the visual design of each flag; the trans
//! and bi recipes are tuned in absolute pixels for a 1920px wide canvas.

use gradient::{
    Color, GradientResult, Interpolation, LinelessConfig, StripedGradient, hsv, interp_color,
    kernel::cuberp,
};

pub const TRANS_WHITE: Color = Color::rgb(255, 255, 255);
pub const TRANS_PINK: Color = Color::rgb(247, 168, 184);
pub const TRANS_BLUE: Color = Color::rgb(85, 205, 252);

const TRANS_STRIPE_WIDTH: f64 = 500.0;
const TRANS_EDGE: f64 = 60.0;

pub const PAN: [Color; 3] = [
    Color::rgb(255, 33, 140),
    Color::rgb(255, 216, 0),
    Color::rgb(33, 177, 255),
];

pub const ACE: [Color; 4] = [
    Color::rgb(0, 0, 0),
    Color::rgb(163, 163, 163),
    Color::rgb(255, 255, 255),
    Color::rgb(128, 0, 128),
];

pub const NONBINARY: [Color; 4] = [
    Color::rgb(252, 244, 52),
    Color::rgb(255, 255, 255),
    Color::rgb(156, 89, 209),
    Color::rgb(44, 44, 44),
];

pub const LESBIAN: [Color; 5] = [
    Color::rgb(213, 45, 0),
    Color::rgb(255, 154, 86),
    Color::rgb(255, 255, 255),
    Color::rgb(211, 98, 164),
    Color::rgb(163, 2, 98),
];

pub const WHEEL: [Color; 6] = [
    Color::rgb(255, 0, 0),
    Color::rgb(255, 255, 0),
    Color::rgb(0, 255, 0),
    Color::rgb(0, 255, 255),
    Color::rgb(0, 0, 255),
    Color::rgb(255, 0, 255),
];

/// Diagonal projection of a pixel onto `[0, 1]` across the flag's width.
///
/// Stripes lean by half a pixel per row and the domain is centred so that
/// `0.5` falls on the middle of the canvas.
#[inline]
pub fn projection(x: f64, y: f64, width: f64, height: f64) -> f64 {
    (x + y / 2.0 - height / 4.0 - width / 2.0) / width + 0.5
}

/// Rainbow pride flag: a slanted lineless hue ramp, one hue degree per 7px.
pub fn gay(x: f64, y: f64, lineless: &LinelessConfig) -> Color {
    lineless.hsv((x + y / 2.0) / 7.0, 0.8, 0.95)
}

/// Transgender pride flag: white centre, pink and blue stripes outward.
///
/// `p` is the slanted coordinate `x + y / 2`, `center` the slanted centre of
/// the canvas.
pub fn trans(p: f64, center: f64) -> Color {
    let delta = (p - center).abs();
    let half = TRANS_STRIPE_WIDTH / 2.0;

    if delta < half {
        interp_color((half - delta) / TRANS_EDGE, TRANS_PINK, TRANS_WHITE, &cuberp)
    } else if delta < 3.0 * half {
        interp_color((3.0 * half - delta) / TRANS_EDGE, TRANS_BLUE, TRANS_PINK, &cuberp)
    } else {
        TRANS_BLUE
    }
}

/// Bisexual pride flag: two logistic steps carry the hue from magenta to
/// purple to blue while the value fades slowly to the right.
pub fn bi(x: f64, p: f64, center: f64) -> Color {
    let magenta = -40.0 / (1.0 + (-0.02 * (p - center + 200.0)).exp());
    let blue = -40.0 / (1.0 + (-0.04 * (p - center - 140.0)).exp());

    hsv(320.0 + magenta + blue, 0.85, 0.88 - x / 7680.0)
}

/// Open cubic gradient through a fixed stripe list.
pub fn stripes(colors: &[Color]) -> GradientResult<StripedGradient> {
    Ok(StripedGradient::new(colors.to_vec())?
        .with_kernel(Interpolation::Cubic)
        .with_cyclic(false))
}

/// Seamless hue wheel repeating once across the flag.
pub fn wheel() -> GradientResult<StripedGradient> {
    StripedGradient::new(WHEEL.to_vec()).map(|g| g.with_kernel(Interpolation::Linear))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_near(actual: Color, expected: Color) {
        let d = (actual.r - expected.r)
            .abs()
            .max((actual.g - expected.g).abs())
            .max((actual.b - expected.b).abs());
        assert!(d < 1e-6, "{actual:?} != {expected:?}");
    }

    #[test]
    fn test_projection() {
        // centre of the canvas, first row shifted by the slant
        assert!((projection(960.0 + 30.0, 0.0, 1920.0, 120.0) - 0.5).abs() < 1e-12);
        assert!((projection(960.0, 60.0, 1920.0, 120.0) - 0.5).abs() < 1e-12);
        assert!((projection(1920.0, 0.0, 1920.0, 0.0) - 1.0).abs() < 1e-12);
        assert!(projection(0.0, 0.0, 1920.0, 120.0) < 0.0);
    }

    #[test]
    fn test_trans_bands() {
        let center = 1020.0;

        assert_near(trans(center, center), TRANS_WHITE);
        assert_near(trans(center + 100.0, center), TRANS_WHITE);
        assert_near(trans(center - 400.0, center), TRANS_PINK);
        assert_near(trans(center + 400.0, center), TRANS_PINK);
        assert_near(trans(0.0, center), TRANS_BLUE);
        assert_near(trans(2000.0, center), TRANS_BLUE);

        // 30px inside the white band the edge is halfway between pink and white
        let edge = trans(center + 220.0, center);
        assert_near(edge, interp_color(0.5, TRANS_PINK, TRANS_WHITE, &cuberp));
    }

    #[test]
    fn test_trans_is_continuous_at_band_edges() {
        let center = 1020.0;

        for edge in [250.0, 750.0] {
            let inside = trans(center + edge - 1e-6, center);
            let outside = trans(center + edge + 1e-6, center);
            let d = (inside.r - outside.r)
                .abs()
                .max((inside.g - outside.g).abs())
                .max((inside.b - outside.b).abs());
            assert!(d < 1e-3, "{edge}: {inside:?} vs {outside:?}");
        }
    }

    #[test]
    fn test_bi_runs_magenta_to_blue() {
        let center = 1020.0;

        let left = bi(0.0, 0.0, center);
        assert!(left.r > left.b && left.b > left.g, "{left:?}");

        let right = bi(1919.0, 1978.5, center);
        assert!(right.b > right.r && right.b > right.g, "{right:?}");
    }

    #[test]
    fn test_gay_follows_slanted_hue() {
        let lineless = LinelessConfig::default();

        assert_near(gay(0.0, 0.0, &lineless), gay(7.0 * 360.0, 0.0, &lineless));
        assert_near(gay(14.0, 0.0, &lineless), gay(0.0, 28.0, &lineless));
    }

    #[test]
    fn test_gay_uses_lineless_settings() {
        let cubic = LinelessConfig::default();
        let sine = LinelessConfig::new().with_kernel(Interpolation::SineBump);
        let gentle = LinelessConfig::new().with_limit(5000.0);

        // 20 degrees into the red to green section
        let (x, y) = (140.0, 0.0);
        assert_near(gay(x, y, &cubic), cubic.hsv(20.0, 0.8, 0.95));

        let d = |a: Color, b: Color| (a.r - b.r).abs() + (a.g - b.g).abs() + (a.b - b.b).abs();
        assert!(d(gay(x, y, &cubic), gay(x, y, &sine)) > 1.0);
        assert!(d(gay(x, y, &cubic), gay(x, y, &gentle)) > 1.0);
    }

    #[test]
    fn test_stripes_are_open() -> GradientResult<()> {
        let pan = stripes(&PAN)?;
        assert_near(pan.sample(0.0), PAN[0]);
        assert_near(pan.sample(0.5), PAN[1]);
        assert_near(pan.sample(1.0), PAN[2]);
        assert_near(pan.sample(1.5), PAN[2]);

        let wheel = wheel()?;
        assert_near(wheel.sample(0.0), WHEEL[0]);
        assert_near(wheel.sample(1.0), WHEEL[0]);

        Ok(())
    }
}

//! Named catalog of procedural pride flags.
//!
//! Every [`Flag`] resolves to a [`Painter`]: a pure function from pixel
//! coordinates to a color for one canvas size. Rendering hands that function
//! to the generators of the `gradient` crate.

pub mod recipe;

use gradient::{Color, GradientError, LinelessConfig, StripedGradient, generate, generate_par};
use image::RgbImage;
use num_enum::{IntoPrimitive, TryFromPrimitive};
use strum::VariantArray as _;
use strum_macros::{Display, EnumString, VariantArray};

pub type FlagResult<T> = Result<T, FlagError>;

#[derive(thiserror::Error, Debug)]
pub enum FlagError {
    #[error("Unknown flag: {0}")]
    UnknownFlag(String),
    #[error("Gradient error: {0}")]
    Gradient(#[from] GradientError),
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    TryFromPrimitive,
    IntoPrimitive,
    Display,
    EnumString,
    VariantArray,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[repr(u8)]
pub enum Flag {
    Gay = 0,
    Trans,
    Bi,
    Pan,
    Ace,
    Nonbinary,
    Lesbian,
    RainbowWheel,
}

impl Flag {
    pub fn name(&self) -> &'static str {
        match self {
            Flag::Gay => "Gay",
            Flag::Trans => "Trans",
            Flag::Bi => "Bi",
            Flag::Pan => "Pan",
            Flag::Ace => "Ace",
            Flag::Nonbinary => "Nonbinary",
            Flag::Lesbian => "Lesbian",
            Flag::RainbowWheel => "Rainbow Wheel",
        }
    }

    pub fn all() -> &'static [Flag] {
        Flag::VARIANTS
    }

    /// Looks a flag up by its kebab-case identifier, e.g. `rainbow-wheel`.
    pub fn from_name(name: &str) -> FlagResult<Flag> {
        name.trim()
            .parse()
            .map_err(|_| FlagError::UnknownFlag(name.to_string()))
    }

    /// Identifier used for file names and configuration.
    pub fn id(&self) -> String {
        self.to_string()
    }

    pub fn painter(self, width: u32, height: u32) -> FlagResult<Painter> {
        self.painter_with(width, height, LinelessConfig::default())
    }

    /// Like [`Flag::painter`], with the hue ramp settings of lineless flags
    /// taken from `lineless`. Other flags ignore them.
    pub fn painter_with(
        self,
        width: u32,
        height: u32,
        lineless: LinelessConfig,
    ) -> FlagResult<Painter> {
        let (w, h) = (width as f64, height as f64);

        let recipe = match self {
            Flag::Gay => Recipe::Gay(lineless),
            Flag::Trans => Recipe::Trans {
                center: w / 2.0 + h / 2.0,
            },
            Flag::Bi => Recipe::Bi {
                center: w / 2.0 + h / 2.0,
            },
            Flag::Pan => Recipe::Striped(recipe::stripes(&recipe::PAN)?),
            Flag::Ace => Recipe::Striped(recipe::stripes(&recipe::ACE)?),
            Flag::Nonbinary => Recipe::Striped(recipe::stripes(&recipe::NONBINARY)?),
            Flag::Lesbian => Recipe::Striped(recipe::stripes(&recipe::LESBIAN)?),
            Flag::RainbowWheel => Recipe::Striped(recipe::wheel()?),
        };

        Ok(Painter {
            width: w,
            height: h,
            recipe,
        })
    }

    /// Renders the flag across the rayon pool.
    pub fn render(self, width: u32, height: u32) -> FlagResult<RgbImage> {
        self.render_with(width, height, true, LinelessConfig::default())
    }

    pub fn render_with(
        self,
        width: u32,
        height: u32,
        parallel: bool,
        lineless: LinelessConfig,
    ) -> FlagResult<RgbImage> {
        let painter = self.painter_with(width, height, lineless)?;
        log::debug!(
            "rendering {self} at {width}x{height}, parallel: {parallel}, {lineless:?}"
        );

        let canvas = if parallel {
            generate_par(width, height, |x, y| painter.paint(x, y))
        } else {
            generate(width, height, |x, y| painter.paint(x, y))
        };

        Ok(canvas)
    }
}

#[derive(Debug, Clone)]
enum Recipe {
    Gay(LinelessConfig),
    Trans { center: f64 },
    Bi { center: f64 },
    Striped(StripedGradient),
}

/// Coordinate to color function of one flag at one canvas size.
#[derive(Debug, Clone)]
pub struct Painter {
    width: f64,
    height: f64,
    recipe: Recipe,
}

impl Painter {
    pub fn paint(&self, x: u32, y: u32) -> Color {
        let (x, y) = (x as f64, y as f64);

        match &self.recipe {
            Recipe::Gay(lineless) => recipe::gay(x, y, lineless),
            Recipe::Trans { center } => recipe::trans(x + y / 2.0, *center),
            Recipe::Bi { center } => recipe::bi(x, x + y / 2.0, *center),
            Recipe::Striped(gradient) => {
                gradient.sample(recipe::projection(x, y, self.width, self.height))
            }
        }
    }
}

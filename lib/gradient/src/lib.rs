//! Color math and raster synthesis for procedural gradient images.
//!
//! The crate is split bottom-up:
//!
//! - [`kernel`]: scalar interpolation kernels (`lerp`, `cuberp`, bumps)
//! - [`color`]: float RGB colors, HSV conversion, per-channel interpolation
//! - [`lineless`]: hue ramps without the brightness seams of plain HSV
//! - [`striped`]: piecewise gradients over an ordered list of colors
//! - [`raster`]: per-pixel canvas generation

pub mod color;
pub mod kernel;
pub mod lineless;
pub mod raster;
pub mod striped;

pub use color::{Color, desaturate, hsv, interp_color, scale, to_int};
pub use kernel::{Interpolation, Kernel};
pub use lineless::{DEFAULT_LIMIT, LinelessConfig, hsv_lineless, rainbow_gen};
pub use raster::{generate, generate_par, stack, try_generate};
pub use striped::{StripedGradient, striped_gradient};

pub type GradientResult<T> = Result<T, GradientError>;

#[derive(thiserror::Error, Debug)]
pub enum GradientError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("Pixel ({x}, {y}) failed: {reason}")]
    Pixel { x: u32, y: u32, reason: String },
}

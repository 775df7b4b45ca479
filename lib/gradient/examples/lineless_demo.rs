use gradient::{Color, DEFAULT_LIMIT, Interpolation, generate, hsv, hsv_lineless, stack};
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let output_dir = Path::new("tmp");
    std::fs::create_dir_all(output_dir)?;

    let (width, height) = (1080, 60);
    let hue = |x: u32| x as f64 / width as f64 * 360.0;

    let plain = generate(width, height, |x, _| hsv(hue(x), 1.0, 1.0));
    let linear = generate(width, height, |x, _| {
        hsv_lineless(hue(x), 1.0, 1.0, DEFAULT_LIMIT, &Interpolation::Linear)
    });
    let cubic = generate(width, height, |x, _| {
        hsv_lineless(hue(x), 1.0, 1.0, DEFAULT_LIMIT, &Interpolation::Cubic)
    });
    let divider = generate(width, 4, |_, _| Color::BLACK);

    let sheet = stack(&[plain, divider.clone(), linear, divider, cubic])?;
    sheet.save(output_dir.join("lineless_comparison.png"))?;

    println!("✓ Lineless comparison written");
    println!("  Rows: plain hsv, lineless linear, lineless cubic");
    println!("  Output: tmp/lineless_comparison.png");

    Ok(())
}

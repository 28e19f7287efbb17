//! Posterize an image file and write the result as PNG.
//!
//! Usage:
//!   cargo run --example posterize --features image --release -- <input> [output.png] [iterations]

use posterize::{image_host, QuantizeConfig};

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let input = args
        .get(1)
        .expect("usage: posterize <input> [output.png] [iterations]");
    let output = args
        .get(2)
        .cloned()
        .unwrap_or_else(|| input.replace(".png", "_poster.png").replace(".jpg", "_poster.png"));
    let iterations: u32 = args
        .get(3)
        .map(|s| s.parse().expect("iterations must be a non-negative integer"))
        .unwrap_or(posterize::DEFAULT_ITERATIONS);

    let img = image::open(input)
        .unwrap_or_else(|e| panic!("cannot read {input}: {e}"))
        .to_rgba8();

    let config = QuantizeConfig::new().iterations(iterations);
    let result = image_host::quantize_rgba_image(&img, &config).unwrap();
    let out = image_host::to_rgba_image(&result).unwrap();
    out.save(&output)
        .unwrap_or_else(|e| panic!("cannot write {output}: {e}"));

    eprintln!(
        "{input} ({}x{}) → {output} ({} colors)",
        result.width(),
        result.height(),
        result.palette_len()
    );
    for c in result.palette() {
        eprintln!("  #{:02x}{:02x}{:02x}", c.r, c.g, c.b);
    }
}

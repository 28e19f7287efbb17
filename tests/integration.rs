//! Integration tests: push posterized output through a real PNG encoder and
//! decoder and check what comes back.

use std::collections::BTreeSet;
use std::io::Cursor;

use posterize::{QuantizeConfig, RGBA8};

fn encode_png_rgba(pixels: &[RGBA8], width: u32, height: u32) -> Vec<u8> {
    let data: Vec<u8> = pixels.iter().flat_map(|p| [p.r, p.g, p.b, p.a]).collect();

    let mut out = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut out, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().unwrap();
        writer.write_image_data(&data).unwrap();
    }
    out
}

fn decode_png_rgba(data: &[u8]) -> (Vec<RGBA8>, u32, u32) {
    let decoder = png::Decoder::new(Cursor::new(data));
    let mut reader = decoder.read_info().unwrap();
    let mut buf = vec![0u8; reader.output_buffer_size()];
    let frame = reader.next_frame(&mut buf).unwrap();
    buf.truncate(frame.buffer_size());
    assert_eq!(frame.color_type, png::ColorType::Rgba);

    let pixels = buf
        .chunks_exact(4)
        .map(|c| RGBA8::new(c[0], c[1], c[2], c[3]))
        .collect();
    (pixels, frame.width, frame.height)
}

fn photo_like(width: usize, height: usize) -> Vec<RGBA8> {
    let mut pixels = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            // Sky on top, ground below, a red disc in the middle.
            let (cx, cy) = (x as i32 - width as i32 / 2, y as i32 - height as i32 / 2);
            let p = if cx * cx + cy * cy < (width as i32 / 6).pow(2) {
                RGBA8::new(200 + (x % 40) as u8, 30, 20 + (y % 20) as u8, 255)
            } else if y < height / 2 {
                RGBA8::new(90, 140 + (y % 60) as u8, 230, 255)
            } else {
                RGBA8::new(60 + (x % 30) as u8, 110, 40, (x * 255 / width) as u8)
            };
            pixels.push(p);
        }
    }
    pixels
}

#[test]
fn png_round_trip_uses_only_palette_colors() {
    let (width, height) = (96, 64);
    let pixels = photo_like(width, height);

    for iterations in [1, 2, 4] {
        let config = QuantizeConfig::new().iterations(iterations);
        let result = posterize::quantize_rgba(&pixels, width, height, &config).unwrap();

        let encoded = encode_png_rgba(&result.to_rgba(), width as u32, height as u32);
        let (decoded, w, h) = decode_png_rgba(&encoded);
        assert_eq!((w as usize, h as usize), (width, height));
        assert_eq!(decoded, result.to_rgba());

        let distinct: BTreeSet<[u8; 3]> = decoded.iter().map(|p| [p.r, p.g, p.b]).collect();
        assert!(distinct.len() <= config.max_colors().unwrap());
        for c in &distinct {
            assert!(
                result
                    .palette()
                    .iter()
                    .any(|e| [e.r, e.g, e.b] == *c),
                "decoded color {c:?} not in palette"
            );
        }

        for (src, dst) in pixels.iter().zip(&decoded) {
            assert_eq!(src.a, dst.a);
        }
    }
}

#[test]
fn posterizing_shrinks_png() {
    let (width, height) = (128, 128);
    let pixels = photo_like(width, height);
    let opaque: Vec<RGBA8> = pixels.iter().map(|p| RGBA8 { a: 255, ..*p }).collect();

    let original = encode_png_rgba(&opaque, width as u32, height as u32);
    let result = posterize::quantize_rgba(&opaque, width, height, &QuantizeConfig::new()).unwrap();
    let posterized = encode_png_rgba(&result.to_rgba(), width as u32, height as u32);

    assert!(
        posterized.len() < original.len(),
        "posterized={} original={}",
        posterized.len(),
        original.len()
    );
}

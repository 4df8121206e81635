use std::env;
use std::time::Instant;

use harris_cli::{Harris, buffer_from_rgba};
use harris_core::HarrisConfig;
use image::{ImageReader, Rgba};
use imageproc::drawing::draw_hollow_circle_mut;

fn main() {
    let mut args = env::args().skip(1);
    let input = args.next().unwrap_or_else(|| "input.png".to_string());
    let output = args.next().unwrap_or_else(|| "corners.png".to_string());

    // Load color image
    let img = ImageReader::open(&input)
        .expect("Image not found")
        .decode()
        .expect("Decode failed")
        .to_rgba8();

    let buffer = buffer_from_rgba(&img).expect("Buffer conversion failed");
    let harris = Harris::new(HarrisConfig::default()).expect("Invalid configuration");

    // Time the full pipeline
    let t0 = Instant::now();
    let corners = harris.find_corners_argb(&buffer).expect("Detection failed");
    let elapsed = t0.elapsed();

    let points = Harris::corner_points(&corners);
    println!("Time taken: {:.2?}", elapsed);
    println!("Detected {} corners", points.len());

    // Draw red circles at each corner
    let mut annotated = img;
    for &(x, y) in &points {
        draw_hollow_circle_mut(&mut annotated, (x as i32, y as i32), 3, Rgba([255, 0, 0, 255]));
    }

    // Save result
    annotated
        .save(&output)
        .expect("Failed to save output image");
    println!("Saved result image as {}", output);
}

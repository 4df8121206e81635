use harris_core::Buffer;
use harris_detect::DetectorBuilder;
use std::time::Instant;

/// A synthetic scene with a grid of bright squares, so the demo runs
/// without an input image on disk.
fn create_demo_image(size: usize) -> Buffer<f32> {
    let mut pixels = vec![0.0f32; size * size];
    for y in 0..size {
        for x in 0..size {
            if (x / 20) % 2 == 0 && (y / 20) % 2 == 0 {
                pixels[y * size + x] = 1.0;
            }
        }
    }
    Buffer::from_vec(size, size, pixels).unwrap()
}

fn run_detection_demo(builder: DetectorBuilder, img: &Buffer<f32>, label: &str) -> Result<(), Box<dyn std::error::Error>> {
    let detector = builder.build()?;
    let t0 = Instant::now();
    let corners = detector.find_corners(img)?;
    let elapsed = t0.elapsed();

    let count = corners.rows().flatten().filter(|&&v| v > 0.0).count();
    println!("   [{}] {} corners in {:.2?}", label, count, elapsed);
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Harris DetectorBuilder API Demo");
    println!("================================\n");

    let img = create_demo_image(200);
    println!("Processing synthetic image: {}x{}", img.width(), img.height());

    println!("\nDemo 1: Default configuration");
    run_detection_demo(DetectorBuilder::new(), &img, "default")?;

    println!("\nDemo 2: Sensitive preset");
    run_detection_demo(DetectorBuilder::new().preset_sensitive(), &img, "sensitive")?;

    println!("\nDemo 3: Sparse preset");
    run_detection_demo(DetectorBuilder::new().preset_sparse(), &img, "sparse")?;

    println!("\nDemo 4: Custom configuration");
    run_detection_demo(
        DetectorBuilder::new()
            .smoothing_size(7)
            .structure_size(3)
            .suppression_size(11)
            .harris_k(0.06)
            .threshold_ratio(0.4),
        &img,
        "custom",
    )?;

    println!("\nDone");
    Ok(())
}

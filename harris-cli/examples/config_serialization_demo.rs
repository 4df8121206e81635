#[cfg(feature = "serde")]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    use harris_detect::{DetectorBuilder, DetectorConfig};

    println!("Harris Configuration Serialization Demo");
    println!("========================================\n");

    let default_config = DetectorConfig::new()
        .with_metadata("Default", "Self-calibrating defaults");
    let sparse_config = DetectorBuilder::new()
        .preset_sparse()
        .to_config()
        .with_metadata("Sparse", "A few strong corners only");

    println!("Created 2 configurations:");
    println!("   - {}", default_config.summary());
    println!("   - {}", sparse_config.summary());

    println!("\nJSON serialization:");
    let json = default_config.to_json()?;
    println!("{}", json);
    let loaded = DetectorConfig::from_json(&json)?;
    println!("   Round-tripped '{}'", loaded.name.as_deref().unwrap_or("?"));

    println!("\nTOML serialization:");
    let toml = sparse_config.to_toml()?;
    println!("{}", toml);
    let loaded = DetectorConfig::from_toml(&toml)?;
    println!("   Round-tripped '{}'", loaded.name.as_deref().unwrap_or("?"));

    println!("\nFile round-trip:");
    default_config.save_json("harris_config.json")?;
    let from_file = DetectorConfig::load_json("harris_config.json")?;
    println!("   Loaded {} from harris_config.json", from_file.summary());

    Ok(())
}

#[cfg(not(feature = "serde"))]
fn main() {
    println!("This demo requires the 'serde' feature:");
    println!("   cargo run --example config_serialization_demo --features serde");
}

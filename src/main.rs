use anyhow::Result;
use std::path::Path;

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    println!("Generating PNG icons...");
    let written = mic_icon_gen::output::write_icon_set(Path::new("."))?;
    log::info!("{} icons written", written.len());

    println!("\n[SUCCESS] All icons generated successfully!");
    println!("\nYou can now load the extension in Chrome.");

    Ok(())
}

use crate::icon::create_icon;
use anyhow::{Context, Result};
use image::{ImageFormat, RgbaImage};
use std::path::{Path, PathBuf};

/// Icon sizes required by the extension manifest, smallest first.
pub const ICON_SIZES: [u32; 4] = [16, 32, 48, 128];

pub fn icon_file_name(size: u32) -> String {
    format!("icon{size}.png")
}

/// Encode `img` as PNG at `path`, replacing any existing file.
pub fn save_icon(img: &RgbaImage, path: &Path) -> Result<()> {
    img.save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("Failed to write {}", path.display()))
}

/// Render and save every size into `dir`, in order.
///
/// Stops at the first failure; icons already written are left in place.
pub fn write_icon_set(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(ICON_SIZES.len());

    for size in ICON_SIZES {
        let name = icon_file_name(size);
        let path = dir.join(&name);

        let img = create_icon(size);
        save_icon(&img, &path)?;

        log::info!("Wrote {} ({size}x{size})", path.display());
        println!("[OK] Created {name}");
        written.push(path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_names_follow_size() {
        let names: Vec<_> = ICON_SIZES.iter().map(|&s| icon_file_name(s)).collect();
        assert_eq!(names, ["icon16.png", "icon32.png", "icon48.png", "icon128.png"]);
    }

    #[test]
    fn save_into_missing_dir_reports_path() {
        let path = std::env::temp_dir()
            .join(format!("mic-icon-gen-missing-{}", std::process::id()))
            .join("nested")
            .join("icon16.png");
        let err = save_icon(&create_icon(16), &path).unwrap_err();
        assert!(err.to_string().contains("icon16.png"), "{err}");
    }
}

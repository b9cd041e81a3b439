use std::fs;
use std::path::PathBuf;

use mic_icon_gen::icon::GOLD;
use mic_icon_gen::output::{write_icon_set, ICON_SIZES};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("mic-icon-gen-{name}-{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}

#[test]
fn writes_four_decodable_icons() {
    let dir = scratch_dir("set");
    let written = write_icon_set(&dir).expect("write icon set");
    assert_eq!(written.len(), 4);

    let mut names: Vec<_> = fs::read_dir(&dir)
        .expect("read scratch dir")
        .map(|e| e.expect("dir entry").file_name().into_string().expect("utf-8 name"))
        .collect();
    names.sort();
    assert_eq!(names, ["icon128.png", "icon16.png", "icon32.png", "icon48.png"]);

    for size in ICON_SIZES {
        let img = image::open(dir.join(format!("icon{size}.png")))
            .expect("decode icon")
            .to_rgba8();
        assert_eq!(img.dimensions(), (size, size));
        assert_eq!(img.pixels().any(|p| *p == GOLD), size >= 32, "icon{size}");
    }

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn rerun_overwrites_with_identical_bytes() {
    let dir = scratch_dir("rerun");
    let first: Vec<_> = write_icon_set(&dir)
        .expect("first run")
        .iter()
        .map(|p| fs::read(p).expect("read icon"))
        .collect();
    let second: Vec<_> = write_icon_set(&dir)
        .expect("second run")
        .iter()
        .map(|p| fs::read(p).expect("read icon"))
        .collect();
    assert_eq!(first, second);

    fs::remove_dir_all(&dir).ok();
}

//! Procedural microphone icon set for the transcription extension.
//!
//! [`icon::create_icon`] draws one size in memory; [`output::write_icon_set`]
//! renders every manifest size and writes `icon<size>.png` files.

pub mod icon;
pub mod output;
pub mod raster;

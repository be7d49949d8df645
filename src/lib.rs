//! Offline generators for renderer assets: a golden-angle sample offset table
//! and a grayscale white-noise texture.

mod error;
pub mod noise;
pub mod offsets;

pub use error::{Error, Result};
pub use noise::NoiseTexture;
pub use offsets::{
    disk_sample, generate, render, render_rust_const, write_table, Offset, SampleCount,
    GOLDEN_ANGLE,
};

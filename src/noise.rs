use rand_core::RngCore;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::debug;

use crate::error::{Error, Result};

pub const DEFAULT_WIDTH: usize = 1024;
pub const DEFAULT_HEIGHT: usize = 1024;
pub const DEFAULT_TEXTURE_PATH: &str = "noisy_background.png";

/// Grayscale white noise: every pixel an independent uniform byte.
pub struct NoiseTexture<R: RngCore> {
    width: usize,
    height: usize,
    rng: R,
    noise: Vec<u8>,
}

impl<R: RngCore> NoiseTexture<R> {
    pub fn new(width: usize, height: usize, rng: R) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidArgument(format!(
                "texture dimensions must be non-zero, got {width}x{height}"
            )));
        }
        u32::try_from(width)
            .and(u32::try_from(height))
            .map_err(|_| {
                Error::InvalidArgument(format!("texture {width}x{height} is too large for png"))
            })?;

        Ok(Self {
            width,
            height,
            rng,
            noise: vec![0; width * height],
        })
    }

    pub fn init(&mut self) {
        self.rng.fill_bytes(&mut self.noise);
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Row-major pixel bytes.
    pub fn pixels(&self) -> &[u8] {
        &self.noise
    }

    pub fn write_png(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(Error::io(path))?;
        let mut file_writer = BufWriter::new(file);

        // Dimensions were checked against u32 in `new`.
        let mut encoder =
            png::Encoder::new(&mut file_writer, self.width as u32, self.height as u32);

        encoder.set_color(png::ColorType::Grayscale);
        encoder.set_depth(png::BitDepth::Eight);

        let mut png_writer = encoder.write_header().map_err(Error::png(path))?;

        png_writer
            .write_image_data(&self.noise)
            .map_err(Error::png(path))?;
        png_writer.finish().map_err(Error::png(path))?;
        file_writer.flush().map_err(Error::io(path))?;

        debug!(
            "wrote {}x{} grayscale png to {}",
            self.width,
            self.height,
            path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_core::SeedableRng;
    use rand_xoshiro::Xoshiro256Plus;

    #[test]
    fn zero_dimensions_are_rejected() {
        let rng = Xoshiro256Plus::seed_from_u64(0);
        assert!(matches!(
            NoiseTexture::new(0, 16, rng.clone()),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            NoiseTexture::new(16, 0, rng),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn seeded_noise_is_reproducible() {
        let mut a = NoiseTexture::new(64, 32, Xoshiro256Plus::seed_from_u64(7)).unwrap();
        let mut b = NoiseTexture::new(64, 32, Xoshiro256Plus::seed_from_u64(7)).unwrap();
        a.init();
        b.init();
        assert_eq!(a.pixels().len(), 64 * 32);
        assert_eq!(a.pixels(), b.pixels());

        let mut c = NoiseTexture::new(64, 32, Xoshiro256Plus::seed_from_u64(8)).unwrap();
        c.init();
        assert_ne!(a.pixels(), c.pixels());
    }

    #[test]
    fn covers_every_byte_value() {
        let mut texture = NoiseTexture::new(
            DEFAULT_WIDTH,
            DEFAULT_HEIGHT,
            Xoshiro256Plus::seed_from_u64(42),
        )
        .unwrap();
        texture.init();

        let mut histogram = [0usize; 256];
        for &pixel in texture.pixels() {
            histogram[pixel as usize] += 1;
        }
        // 4096 expected per bucket
        assert!(histogram.iter().all(|&n| n > 3000 && n < 5200));
    }
}

//! Golden-angle (Fibonacci spiral) sample offsets.
//!
//! Sample `i` sits on the unit circle at angle `i * GOLDEN_ANGLE`. Consecutive
//! samples are as far apart angularly as possible, so any prefix of the table
//! covers the circle without visible patterning.

use std::f64::consts::PI;
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::iter::FusedIterator;
use std::ops::Range;
use std::path::Path;

use log::debug;

use crate::error::{Error, Result};

/// `π·(3 − √5)`, roughly 137.5 degrees.
pub const GOLDEN_ANGLE: f64 = PI * (3.0 - 2.236_067_977_499_79);

pub const DEFAULT_SAMPLE_COUNT: usize = 64;
pub const DEFAULT_TABLE_PATH: &str = "fibonacci_offsets.txt";

/// Number of offsets in a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SampleCount(usize);

impl SampleCount {
    pub const fn new(count: usize) -> Self {
        Self(count)
    }

    pub const fn get(self) -> usize {
        self.0
    }
}

impl Default for SampleCount {
    fn default() -> Self {
        Self(DEFAULT_SAMPLE_COUNT)
    }
}

impl TryFrom<i64> for SampleCount {
    type Error = Error;

    fn try_from(count: i64) -> Result<Self> {
        usize::try_from(count).map(Self).map_err(|_| {
            Error::InvalidArgument(format!("sample count must be non-negative, got {count}"))
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    /// The `index`-th point of the spiral, radius 1.
    pub fn at(index: usize) -> Self {
        let angle = index as f64 * GOLDEN_ANGLE;
        Self {
            x: angle.cos(),
            y: angle.sin(),
        }
    }
}

/// Lazy sequence returned by [`generate`].
#[derive(Debug, Clone)]
pub struct Offsets {
    indices: Range<usize>,
}

impl Iterator for Offsets {
    type Item = Offset;

    fn next(&mut self) -> Option<Offset> {
        self.indices.next().map(Offset::at)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.indices.size_hint()
    }
}

impl ExactSizeIterator for Offsets {}

impl FusedIterator for Offsets {}

pub fn generate(count: SampleCount) -> Offsets {
    Offsets {
        indices: 0..count.get(),
    }
}

/// Scales the `index`-th spiral direction onto a disk.
///
/// The radius is `(index * count_inverse)^(0.5 * clump_exponent)`. With a
/// `clump_exponent` of 1 the samples cover the disk with uniform density;
/// larger exponents pull them towards the centre.
pub fn disk_sample(index: usize, count_inverse: f64, clump_exponent: f64) -> Offset {
    let radius = (index as f64 * count_inverse).powf(0.5 * clump_exponent);
    let direction = Offset::at(index);
    Offset {
        x: direction.x * radius,
        y: direction.y * radius,
    }
}

/// Array-initializer text: `{x.xxxxxxf, y.yyyyyyf},` per offset, no separators.
///
/// Numbers are rounded from their exact binary value to six decimals, ties to
/// even.
pub struct Initializer<'a>(pub &'a [Offset]);

impl fmt::Display for Initializer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for offset in self.0 {
            write!(f, "{{{:.6}f, {:.6}f}},", offset.x, offset.y)?;
        }
        Ok(())
    }
}

/// A complete `pub const NAME: [[f32; 2]; N]` item.
pub struct RustConst<'a> {
    pub name: &'a str,
    pub offsets: &'a [Offset],
}

impl fmt::Display for RustConst<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "pub const {}: [[f32; 2]; {}] = [",
            self.name,
            self.offsets.len()
        )?;
        for offset in self.offsets {
            writeln!(f, "    [{:.6}, {:.6}],", offset.x, offset.y)?;
        }
        writeln!(f, "];")
    }
}

pub fn render(offsets: &[Offset]) -> String {
    Initializer(offsets).to_string()
}

pub fn render_rust_const(name: &str, offsets: &[Offset]) -> String {
    RustConst { name, offsets }.to_string()
}

/// Writes `text` to `path`, truncating whatever was there.
pub fn write_table(path: impl AsRef<Path>, text: &str) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(Error::io(path))?;
    let mut file_writer = BufWriter::new(file);

    file_writer
        .write_all(text.as_bytes())
        .map_err(Error::io(path))?;
    file_writer.flush().map_err(Error::io(path))?;

    debug!("wrote {} bytes to {}", text.len(), path.display());
    Ok(())
}

//! Turns a density grid into a plain-text PPM.  The pipeline owns
//! the grid for exactly one render: allocate, run the walk, then
//! sweep the grid row by row, normalizing each cell and handing the
//! result to the chosen transfer function.

use itertools::iproduct;
use std::io::Write;

use crate::color::Color;
use crate::error::FernError;
use crate::fern::FernRenderer;

// Densities are normalized against a fixed ceiling of 256 visits and
// inverted, so an untouched background cell maps to 1.0 and a heavily
// visited cell goes to zero and below.
const NORMALIZER: f64 = 1.0 / 256.0;

/// Renders a fern with a single deterministic-baseline walk, writing
/// the finished PPM to the sink.  The transfer function may be
/// [`grayscale`](../color/fn.grayscale.html),
/// [`greenscale`](../color/fn.greenscale.html), or anything else with
/// the same shape.
pub fn render<F, W>(fern: &FernRenderer, color_fn: F, sink: &mut W) -> Result<(), FernError>
where
    F: Fn(f64) -> Color,
    W: Write,
{
    let mut data = vec![0.0_f64; fern.plane.len()];
    fern.generate(&mut data, &mut rand::thread_rng());
    emit(fern, &data, color_fn, sink)
}

/// The sharded variant: runs the walk across the given number of
/// threads (at least one) before emitting.  The image differs from
/// the single-walk render only in which random path built it.
pub fn render_threaded<F, W>(
    fern: &FernRenderer,
    threads: usize,
    color_fn: F,
    sink: &mut W,
) -> Result<(), FernError>
where
    F: Fn(f64) -> Color,
    W: Write,
{
    let data = fern.generate_threaded(threads);
    emit(fern, &data, color_fn, sink)
}

/// Writes the PPM header and one sample line per pixel, top row
/// first.  A failed write surfaces immediately; whatever made it to
/// the sink stays there.
fn emit<F, W>(fern: &FernRenderer, data: &[f64], color_fn: F, sink: &mut W) -> Result<(), FernError>
where
    F: Fn(f64) -> Color,
    W: Write,
{
    let (width, height) = (fern.plane.width, fern.plane.height);
    write!(sink, "P3\n{} {}\n255\n", width, height)?;

    for (y, x) in iproduct!(0..height, 0..width) {
        let val = 1.0 - NORMALIZER * data[x + y * width];
        color_fn(val).write(sink)?;
    }

    sink.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{grayscale, greenscale};
    use crate::fern::DEFAULT_GROWTH_FACTOR;

    fn tiny_fern() -> FernRenderer {
        FernRenderer::new(4, 4, 1, DEFAULT_GROWTH_FACTOR).unwrap()
    }

    #[test]
    fn ppm_has_a_header_and_one_line_per_pixel() {
        let mut sink: Vec<u8> = vec![];
        render(&tiny_fern(), grayscale, &mut sink).unwrap();

        let out = String::from_utf8(sink).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3 + 16);
        assert_eq!(lines[0], "P3");
        assert_eq!(lines[1], "4 4");
        assert_eq!(lines[2], "255");
    }

    #[test]
    fn every_sample_line_is_three_channels_in_range() {
        let mut sink: Vec<u8> = vec![];
        render(&tiny_fern(), grayscale, &mut sink).unwrap();

        let out = String::from_utf8(sink).unwrap();
        for line in out.lines().skip(3) {
            let channels: Vec<&str> = line.split(' ').collect();
            assert_eq!(channels.len(), 3);
            for channel in channels {
                // u8 parse enforces the 0..=255 range.
                channel.parse::<u8>().unwrap();
            }
        }
    }

    #[test]
    fn greenscale_renders_the_same_shape_of_file() {
        let mut sink: Vec<u8> = vec![];
        render(&tiny_fern(), greenscale, &mut sink).unwrap();
        assert_eq!(String::from_utf8(sink).unwrap().lines().count(), 19);
    }

    #[test]
    fn threaded_render_matches_the_format() {
        let mut sink: Vec<u8> = vec![];
        render_threaded(&tiny_fern(), 2, grayscale, &mut sink).unwrap();

        let out = String::from_utf8(sink).unwrap();
        assert!(out.starts_with("P3\n4 4\n255\n"));
        assert_eq!(out.lines().count(), 19);
    }

    #[test]
    fn a_full_write_failure_surfaces_as_an_error() {
        struct BrokenSink;
        impl Write for BrokenSink {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::Other, "down"))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let result = render(&tiny_fern(), grayscale, &mut BrokenSink);
        assert!(result.is_err());
    }
}

//! Per-pixel color channel permutation.

use image::{Rgb, RgbImage};

/// Swaps the green and blue channels of every pixel.
///
/// Pure and deterministic: the output is a new buffer of identical
/// dimensions and the input is never mutated, so concurrent calls on
/// independent buffers need no synchronization.
pub struct ChannelSwap;

impl ChannelSwap {
    /// Map each pixel `(r, g, b)` to `(r, b, g)`.
    ///
    /// The swap is its own inverse: applying it twice restores the
    /// original buffer.
    pub fn apply(image: &RgbImage) -> RgbImage {
        let mut out = RgbImage::new(image.width(), image.height());
        for (x, y, pixel) in image.enumerate_pixels() {
            let [r, g, b] = pixel.0;
            out.put_pixel(x, y, Rgb([r, b, g]));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(width: u32, height: u32) -> RgbImage {
        RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
        })
    }

    #[test]
    fn test_dimensions_preserved() {
        let input = gradient(17, 9);
        let output = ChannelSwap::apply(&input);
        assert_eq!(output.width(), input.width());
        assert_eq!(output.height(), input.height());
    }

    #[test]
    fn test_swaps_green_and_blue() {
        let input = RgbImage::from_pixel(2, 2, Rgb([10, 20, 30]));
        let output = ChannelSwap::apply(&input);
        for pixel in output.pixels() {
            assert_eq!(pixel, &Rgb([10, 30, 20]));
        }
    }

    #[test]
    fn test_red_channel_untouched() {
        let input = gradient(8, 8);
        let output = ChannelSwap::apply(&input);
        for (x, y, pixel) in input.enumerate_pixels() {
            assert_eq!(output.get_pixel(x, y).0[0], pixel.0[0]);
        }
    }

    #[test]
    fn test_double_swap_restores_original() {
        let input = gradient(32, 16);
        let twice = ChannelSwap::apply(&ChannelSwap::apply(&input));
        assert_eq!(twice, input);
    }

    #[test]
    fn test_single_pixel() {
        let input = RgbImage::from_pixel(1, 1, Rgb([0, 255, 128]));
        let output = ChannelSwap::apply(&input);
        assert_eq!(output.get_pixel(0, 0), &Rgb([0, 128, 255]));
    }
}

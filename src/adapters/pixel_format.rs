//! Pixel format conversion helpers for presentation adapters.

use crate::core::data::colour::Colour;

/// Copies colours into an RGBA byte buffer, setting alpha to 255.
///
/// # Panics
/// Panics if `dst` is not exactly four bytes per colour in `src`.
pub fn copy_colours_to_rgba(src: &[Colour], dst: &mut [u8]) {
    let expected_dst_len = src.len() * 4;
    assert_eq!(
        dst.len(),
        expected_dst_len,
        "dst length {} does not match expected {}",
        dst.len(),
        expected_dst_len
    );

    for (colour, dst_pixel) in src.iter().zip(dst.chunks_exact_mut(4)) {
        dst_pixel[0] = colour.r;
        dst_pixel[1] = colour.g;
        dst_pixel[2] = colour.b;
        dst_pixel[3] = 255;
    }
}

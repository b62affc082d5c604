//! Texture sampling through UV coordinates

use meshpalette_core::{Color, TextureImage, UV};

/// Reduce a coordinate into `[0, 1)` with tiling (repeat) semantics
///
/// Negative values wrap from the top: `-0.25` becomes `0.75`.
pub fn wrap_unit(value: f64) -> f64 {
    value.rem_euclid(1.0)
}

/// Map a UV coordinate to a `(column, row)` pixel of a `width` x `height` image
///
/// UVs are wrapped into the unit square first. The V axis is flipped because
/// texture row 0 is the top of the image while `v = 0` is the bottom. The
/// result is clamped into the image so edge values such as `v = 0` (which
/// lands exactly on `height`) stay addressable.
pub fn uv_to_pixel(uv: UV, width: u32, height: u32) -> (u32, u32) {
    let u = wrap_unit(f64::from(uv[0]));
    let v = wrap_unit(f64::from(uv[1]));

    let column = (u * f64::from(width)).floor() as i64;
    let row = ((1.0 - v) * f64::from(height)).floor() as i64;

    let column = column.clamp(0, i64::from(width) - 1);
    let row = row.clamp(0, i64::from(height) - 1);

    (column as u32, row as u32)
}

/// Resolve the color of `texture` at `uv`
///
/// Images with three or more channels yield their first three channels;
/// alpha is discarded. Gray images (one channel, or gray + alpha) replicate
/// the intensity into all three channels.
pub fn sample_texture(texture: &TextureImage, uv: UV) -> Color {
    let (column, row) = uv_to_pixel(uv, texture.width(), texture.height());
    let pixel = texture.pixel(column, row);

    match pixel {
        [r, g, b, ..] => Color::new(*r, *g, *b),
        [gray, ..] => Color::gray(*gray),
        // TextureImage guarantees at least one channel
        [] => Color::gray(0),
    }
}

//! Procedural RGBA8 textures for the demos.
//!
//! The demos ship no image assets; every texture is generated at
//! startup and uploaded through
//! [`Texture::from_rgba8`](terrella_graphics::Texture::from_rgba8).

/// A generated RGBA8 image.
#[derive(Debug, Clone)]
pub struct RgbaImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Tightly packed RGBA8 pixels, row-major.
    pub pixels: Vec<u8>,
}

/// Generate a square checkerboard.
///
/// `cells` is the number of checker cells per side.
pub fn checkerboard(size: u32, cells: u32, color_a: [u8; 3], color_b: [u8; 3]) -> RgbaImage {
    let cell_size = (size / cells.max(1)).max(1);
    let mut pixels = Vec::with_capacity((size * size * 4) as usize);
    for y in 0..size {
        for x in 0..size {
            let even = ((x / cell_size) + (y / cell_size)) % 2 == 0;
            let c = if even { color_a } else { color_b };
            pixels.extend_from_slice(&[c[0], c[1], c[2], 255]);
        }
    }
    RgbaImage {
        width: size,
        height: size,
        pixels,
    }
}

/// Generate a vertical gradient, `top` at row 0 blending to `bottom`.
///
/// Sampled equirectangularly this reads as a sky: `top` at the zenith,
/// `bottom` at the nadir.
pub fn vertical_gradient(width: u32, height: u32, top: [u8; 3], bottom: [u8; 3]) -> RgbaImage {
    let mut pixels = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        let t = y as f32 / (height - 1).max(1) as f32;
        let c = [
            lerp_u8(top[0], bottom[0], t),
            lerp_u8(top[1], bottom[1], t),
            lerp_u8(top[2], bottom[2], t),
        ];
        for _ in 0..width {
            pixels.extend_from_slice(&[c[0], c[1], c[2], 255]);
        }
    }
    RgbaImage {
        width,
        height,
        pixels,
    }
}

/// Generate horizontal latitude bands, alternating between two colors.
///
/// Wrapped around an icosphere's equirectangular UVs this gives the
/// planet visible rotation without any image asset.
pub fn latitude_bands(size: u32, bands: u32, color_a: [u8; 3], color_b: [u8; 3]) -> RgbaImage {
    let band_height = (size / bands.max(1)).max(1);
    let mut pixels = Vec::with_capacity((size * size * 4) as usize);
    for y in 0..size {
        let c = if (y / band_height) % 2 == 0 {
            color_a
        } else {
            color_b
        };
        for _ in 0..size {
            pixels.extend_from_slice(&[c[0], c[1], c[2], 255]);
        }
    }
    RgbaImage {
        width: size,
        height: size,
        pixels,
    }
}

fn lerp_u8(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 + (b as f32 - a as f32) * t).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkerboard_dimensions() {
        let img = checkerboard(64, 8, [255, 0, 0], [0, 0, 255]);
        assert_eq!(img.width, 64);
        assert_eq!(img.height, 64);
        assert_eq!(img.pixels.len(), 64 * 64 * 4);
    }

    #[test]
    fn checkerboard_alternates() {
        let img = checkerboard(4, 2, [255, 255, 255], [0, 0, 0]);
        // Top-left cell is color_a, the cell to its right is color_b.
        assert_eq!(&img.pixels[0..3], &[255, 255, 255]);
        let right = (2 * 4) as usize; // x = 2, y = 0
        assert_eq!(&img.pixels[right..right + 3], &[0, 0, 0]);
    }

    #[test]
    fn gradient_endpoints() {
        let img = vertical_gradient(2, 16, [0, 0, 0], [200, 100, 50]);
        assert_eq!(&img.pixels[0..3], &[0, 0, 0]);
        let last_row = ((15 * 2) * 4) as usize;
        assert_eq!(&img.pixels[last_row..last_row + 3], &[200, 100, 50]);
    }

    #[test]
    fn bands_cover_image() {
        let img = latitude_bands(32, 4, [1, 2, 3], [4, 5, 6]);
        assert_eq!(img.pixels.len(), 32 * 32 * 4);
        // Row 0 is the first band, row 8 starts the second.
        assert_eq!(&img.pixels[0..3], &[1, 2, 3]);
        let second_band = (8 * 32 * 4) as usize;
        assert_eq!(&img.pixels[second_band..second_band + 3], &[4, 5, 6]);
    }
}

//! Procedural noise and phosphor overlay textures for the CRT materials.

use rand::Rng;

use crate::surface::{Disposable, StaticTexture};

/// Width in pixels one overlay tile covers on screen.
pub const OVERLAY_TILE_WIDTH: f32 = 55.0;
pub const NOISE_SIZE: u32 = 256;
pub const OVERLAY_SIZE: u32 = 64;

/// Uniformly random RGBA bytes.
pub fn noise_pixels<R: Rng>(size: u32, rng: &mut R) -> Vec<u8> {
    let mut pixels = vec![0u8; (size * size * 4) as usize];
    rng.fill(pixels.as_mut_slice());
    pixels
}

/// Square tile of vertical RGB phosphor stripes around mid grey, so the
/// overlay blend only nudges the content colors.
pub fn overlay_pixels(size: u32) -> Vec<u8> {
    let mut pixels = Vec::with_capacity((size * size * 4) as usize);
    let stripe = (size / 3).max(1);
    for y in 0..size {
        // darker rows at the top and bottom of each cell
        let edge = y == 0 || y + 1 == size;
        for x in 0..size {
            let channel = ((x / stripe) % 3) as usize;
            let mut rgb = [112u8; 3];
            rgb[channel] = 160;
            if edge {
                rgb = rgb.map(|c| c / 2);
            }
            pixels.extend_from_slice(&[rgb[0], rgb[1], rgb[2], 255]);
        }
    }
    pixels
}

/// Textures shared by both CRT materials.
pub struct CrtTextures {
    pub noise: StaticTexture,
    pub overlay: StaticTexture,
}

impl CrtTextures {
    pub fn new<R: Rng>(device: &wgpu::Device, queue: &wgpu::Queue, rng: &mut R) -> Self {
        let noise = StaticTexture::from_rgba(
            device,
            queue,
            "crt noise",
            NOISE_SIZE,
            NOISE_SIZE,
            &noise_pixels(NOISE_SIZE, rng),
        );
        let overlay = StaticTexture::from_rgba(
            device,
            queue,
            "crt overlay",
            OVERLAY_SIZE,
            OVERLAY_SIZE,
            &overlay_pixels(OVERLAY_SIZE),
        );
        Self { noise, overlay }
    }
}

impl Disposable for CrtTextures {
    fn dispose(&mut self) {
        self.noise.dispose();
        self.overlay.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    #[test]
    fn noise_has_rgba_bytes_for_every_texel() {
        let mut rng = StepRng::new(0x1234_5678_9abc_def0, 0x9e37_79b9);
        let pixels = noise_pixels(16, &mut rng);
        assert_eq!(pixels.len(), 16 * 16 * 4);
        assert!(pixels.iter().any(|b| *b != pixels[0]));
    }

    #[test]
    fn overlay_cycles_channels() {
        let pixels = overlay_pixels(OVERLAY_SIZE);
        assert_eq!(pixels.len(), (OVERLAY_SIZE * OVERLAY_SIZE * 4) as usize);
        let texel = |x: u32, y: u32| {
            let i = ((y * OVERLAY_SIZE + x) * 4) as usize;
            [pixels[i], pixels[i + 1], pixels[i + 2], pixels[i + 3]]
        };
        assert_eq!(texel(0, 5), [160, 112, 112, 255]);
        assert_eq!(texel(21, 5), [112, 160, 112, 255]);
        assert_eq!(texel(42, 5), [112, 112, 160, 255]);
        assert_eq!(texel(0, 0), [80, 56, 56, 255]);
    }
}

//! Purely local procedural image synthesis.

use crate::PayloadProducer;
use async_trait::async_trait;
use image::{ImageOutputFormat, Rgb, RgbImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::Cursor;

const IMAGE_SIZE: u32 = 100;
const JPEG_QUALITY: u8 = 80;

/// Produces small randomly colored JPEGs without touching the network.
pub struct DrawnImageProducer {
    rng: StdRng,
}

impl DrawnImageProducer {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl Default for DrawnImageProducer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PayloadProducer for DrawnImageProducer {
    async fn produce(&mut self) -> Option<Vec<u8>> {
        match render(&mut self.rng) {
            Ok(bytes) => Some(bytes),
            Err(err) => {
                tracing::warn!("failed to render drawn image: {err}");
                None
            }
        }
    }
}

fn render<R: Rng>(rng: &mut R) -> Result<Vec<u8>, image::ImageError> {
    let background = Rgb([rng.gen::<u8>(), rng.gen::<u8>(), rng.gen::<u8>()]);
    let mut canvas = RgbImage::from_pixel(IMAGE_SIZE, IMAGE_SIZE, background);

    // A handful of random rectangles so the payloads are not all near
    // identical after JPEG compression.
    for _ in 0..rng.gen_range(2..6) {
        let width = rng.gen_range(8..40);
        let height = rng.gen_range(8..40);
        let x = rng.gen_range(0..IMAGE_SIZE - width);
        let y = rng.gen_range(0..IMAGE_SIZE - height);
        let color = Rgb([rng.gen::<u8>(), rng.gen::<u8>(), rng.gen::<u8>()]);
        draw_filled_rect_mut(
            &mut canvas,
            Rect::at(x as i32, y as i32).of_size(width, height),
            color,
        );
    }

    let mut bytes = Vec::new();
    canvas.write_to(
        &mut Cursor::new(&mut bytes),
        ImageOutputFormat::Jpeg(JPEG_QUALITY),
    )?;
    Ok(bytes)
}

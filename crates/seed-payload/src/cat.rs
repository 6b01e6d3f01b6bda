//! Networked photo fetch with a drawn annotation.

use crate::PayloadProducer;
use anyhow::Context;
use async_trait::async_trait;
use image::{ImageOutputFormat, Rgb};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::Cursor;

const CAT_IMAGE_URLS: &[&str] = &[
    "https://cataas.com/cat/says/Hello",
    "https://cataas.com/cat/gif",
    "https://cataas.com/cat",
];

const JPEG_QUALITY: u8 = 85;

/// Fetches a cat photo, stamps an annotation bar on it and re-encodes JPEG.
///
/// Any network or decode failure downgrades to "no payload" with a warning,
/// matching the contract that an absent payload is a valid outcome.
pub struct CatPhotoProducer {
    client: reqwest::Client,
    rng: StdRng,
}

impl CatPhotoProducer {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            rng: StdRng::from_entropy(),
        }
    }
}

impl Default for CatPhotoProducer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PayloadProducer for CatPhotoProducer {
    async fn produce(&mut self) -> Option<Vec<u8>> {
        match self.fetch_and_annotate().await {
            Ok(bytes) => Some(bytes),
            Err(err) => {
                tracing::warn!("failed to fetch cat image: {err:#}");
                None
            }
        }
    }
}

impl CatPhotoProducer {
    async fn fetch_and_annotate(&mut self) -> anyhow::Result<Vec<u8>> {
        let url = CAT_IMAGE_URLS[self.rng.gen_range(0..CAT_IMAGE_URLS.len())];

        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("failed to fetch {url}"))?;
        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("request for {url} returned status {status}");
        }
        let bytes = response
            .bytes()
            .await
            .with_context(|| format!("failed to read response body from {url}"))?;
        tracing::debug!("fetched {} bytes from {}", bytes.len(), url);

        let mut photo = image::load_from_memory(&bytes)
            .with_context(|| format!("failed to decode image from {url}"))?
            .to_rgb8();

        // Annotation bar along the bottom edge.
        let (width, height) = photo.dimensions();
        let bar = (height / 10).clamp(4, 24).min(height);
        draw_filled_rect_mut(
            &mut photo,
            Rect::at(0, (height - bar) as i32).of_size(width, bar),
            Rgb([255, 255, 255]),
        );

        let mut encoded = Vec::new();
        photo
            .write_to(
                &mut Cursor::new(&mut encoded),
                ImageOutputFormat::Jpeg(JPEG_QUALITY),
            )
            .context("failed to encode annotated image")?;
        Ok(encoded)
    }
}

#[cfg(test)]
mod tests {
    // Fetch tests would require either the live cataas.com service or a mock
    // HTTP server; the annotate-and-encode path is covered through the drawn
    // producer, which shares the encoding code shape.
}

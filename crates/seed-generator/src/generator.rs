//! Batch record generator.

use crate::generators::{email, person, text};
use crate::Record;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use seed_geo::{CoordinateSampler, LandPolygons};
use seed_payload::PayloadProducer;

/// Inclusive age bounds for generated records.
pub const MIN_AGE: i32 = 18;
pub const MAX_AGE: i32 = 60;

/// Maximum length of the free-text note.
pub const MAX_NOTE_CHARS: usize = 200;

/// Assembles batches of randomized records.
///
/// The polygon set is borrowed from the pipeline context built at startup;
/// the generator owns its RNG. With `seed: None` every run draws fresh
/// entropy; a fixed seed makes the non-payload fields reproducible.
pub struct RecordGenerator<'a> {
    sampler: CoordinateSampler<'a>,
    rng: StdRng,
}

impl<'a> RecordGenerator<'a> {
    pub fn new(land: &'a LandPolygons, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            sampler: CoordinateSampler::new(land),
            rng,
        }
    }

    /// Generate `count` records eagerly, drawing one payload per record from
    /// the producer.
    ///
    /// A producer returning `None` is an expected outcome; the record is
    /// still complete, with an absent payload.
    pub async fn generate(
        &mut self,
        count: u64,
        producer: &mut dyn PayloadProducer,
    ) -> Vec<Record> {
        let mut records = Vec::with_capacity(count as usize);
        for _ in 0..count {
            let location = self.sampler.sample(&mut self.rng);
            let image = producer.produce().await;
            records.push(Record {
                name: person::full_name(&mut self.rng),
                age: self.rng.gen_range(MIN_AGE..=MAX_AGE),
                city: person::city(&mut self.rng),
                email: email::varied_email(&mut self.rng),
                notes: text::sentences(&mut self.rng, MAX_NOTE_CHARS),
                location,
                image,
            });
        }
        tracing::debug!("generated batch of {} records", records.len());
        records
    }
}

//! Record-to-BSON conversion and the single bulk insert.

use bson::spec::BinarySubtype;
use bson::{doc, Binary, Bson, Document};
use mongodb::Collection;
use seed_generator::Record;

/// Convert one record to a BSON document.
///
/// The coordinate becomes a GeoJSON `Point` sub-document; an absent payload
/// is stored as an explicit null.
pub fn record_to_document(record: Record) -> Document {
    let image = match record.image {
        Some(bytes) => Bson::Binary(Binary {
            subtype: BinarySubtype::Generic,
            bytes,
        }),
        None => Bson::Null,
    };

    doc! {
        "name": record.name,
        "age": record.age,
        "city": record.city,
        "email": record.email,
        "notes": record.notes,
        "location": {
            "type": "Point",
            "coordinates": [record.location.lon, record.location.lat],
        },
        "image": image,
    }
}

/// Insert the whole batch as one bulk operation.
///
/// Returns the number of documents the driver acknowledged. Not retried on
/// failure: there is no idempotency key on the records, so a retry could
/// silently duplicate the part of the batch that already landed.
pub async fn insert_batch(
    collection: &Collection<Document>,
    records: Vec<Record>,
) -> Result<u64, mongodb::error::Error> {
    if records.is_empty() {
        return Ok(0);
    }

    let documents: Vec<Document> = records.into_iter().map(record_to_document).collect();
    let result = collection.insert_many(documents).await?;
    Ok(result.inserted_ids.len() as u64)
}

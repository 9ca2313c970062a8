//! Record profiles
//!
//! The store is generic over a profile: the record shape, its
//! validation and patch rules, the search predicate and the stats it
//! derives. The two deployment variants (users and products) are the
//! two implementations; the store logic is written once.

use serde::Serialize;
use serde_json::Value;

use super::errors::StoreResult;

/// One deployment variant of the record store.
pub trait Profile: Send + Sync + 'static {
    /// The record type held in the store.
    type Record: Clone + Serialize + Send + Sync + 'static;

    /// The derived statistics shape.
    type Stats: Serialize;

    /// Singular noun, used in logs.
    const NAME: &'static str;

    /// Route segment for the collection ("users", "products").
    const COLLECTION: &'static str;

    /// Validates and normalizes a create body into a new record.
    fn create(id: String, body: &Value) -> StoreResult<Self::Record>;

    /// Applies a partial update to a record.
    ///
    /// Fails with "nothing to update" when no updatable field is
    /// present in the body. The record's id is never touched.
    fn apply_patch(record: &mut Self::Record, body: &Value) -> StoreResult<()>;

    /// The record's id.
    fn id(record: &Self::Record) -> &str;

    /// Case-insensitive substring match for the search endpoint.
    /// `needle` is already lowercased. Profiles without a search
    /// surface keep the default.
    fn matches(_record: &Self::Record, _needle: &str) -> bool {
        false
    }

    /// Derives statistics from the current records.
    fn stats(records: &[Self::Record]) -> Self::Stats;
}

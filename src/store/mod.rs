//! # In-Memory Record Store
//!
//! The core of the service: an ordered, process-owned collection of
//! records with create/read/update/delete, substring search and
//! derived statistics. Two deployment variants share the same store
//! logic through the [`Profile`] trait.

pub mod errors;
pub mod fields;
pub mod id;
pub mod product;
pub mod profile;
pub mod seed;
mod store;
pub mod user;

pub use errors::{StoreError, StoreResult};
pub use fields::{coerce_number, supplied, truthy, Supply};
pub use id::{IdGenerator, RandomId, SequentialId};
pub use product::{Product, ProductProfile, ProductStats};
pub use profile::Profile;
pub use store::RecordStore;
pub use user::{User, UserProfile, UserStats};

//! User variant
//!
//! Records are `{id, name, age}`. Numbers are f64 end to end: the wire
//! format tolerates NaN-producing input, so the record type must too.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::errors::{StoreError, StoreResult};
use super::fields::{coerce_number, supplied, trimmed_str, Supply};
use super::profile::Profile;

/// A user record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub age: f64,
}

/// Derived user statistics.
///
/// `average_age` is the plain mean rounded to one decimal; on an empty
/// store the division yields NaN, which serializes as JSON null.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub total: usize,
    pub average_age: f64,
}

/// The user deployment variant.
pub struct UserProfile;

impl Profile for UserProfile {
    type Record = User;
    type Stats = UserStats;

    const NAME: &'static str = "user";
    const COLLECTION: &'static str = "users";

    fn create(id: String, body: &Value) -> StoreResult<User> {
        let name = body.get("name");
        let age = body.get("age");

        // Both fields must be truthy, so `age: 0` is rejected here.
        if !supplied(name, Supply::Truthy) || !supplied(age, Supply::Truthy) {
            return Err(StoreError::invalid("name and age are required"));
        }

        Ok(User {
            id,
            name: trimmed_str("name", name.unwrap_or(&Value::Null))?,
            age: coerce_number(age.unwrap_or(&Value::Null)),
        })
    }

    fn apply_patch(user: &mut User, body: &Value) -> StoreResult<()> {
        let name = body.get("name");
        let age = body.get("age");

        if name.is_none() && age.is_none() {
            return Err(StoreError::invalid("nothing to update"));
        }

        // Per-field updates go by presence, so an empty name is applied.
        if let Some(value) = name {
            user.name = trimmed_str("name", value)?;
        }
        if let Some(value) = age {
            user.age = coerce_number(value);
        }
        Ok(())
    }

    fn id(user: &User) -> &str {
        &user.id
    }

    fn stats(records: &[User]) -> UserStats {
        let total = records.len();
        // Unguarded division: an empty store yields NaN.
        let mean = records.iter().map(|u| u.age).sum::<f64>() / total as f64;
        UserStats {
            total,
            average_age: (mean * 10.0).round() / 10.0,
        }
    }
}

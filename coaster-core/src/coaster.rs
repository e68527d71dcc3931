use serde::{Deserialize, Deserializer, Serialize};

use crate::id::CoasterId;

/// A roller coaster record as exchanged over the wire.
///
/// Every field defaults to its zero value when absent from the JSON input,
/// and so does an explicit `null`. Unknown fields are ignored. Keys are
/// matched exactly or in their capitalised form (`Name`, `InPark`); other
/// casings are treated as unknown. `Coaster::default()` is the zero record
/// returned for lookups that match nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Coaster {
    /// Display name.
    #[serde(alias = "Name", deserialize_with = "null_as_default")]
    pub name: String,
    /// Company that built the ride.
    #[serde(alias = "Manufacturer", deserialize_with = "null_as_default")]
    pub manufacturer: String,
    /// Server-assigned id; any value sent by a client is replaced on create.
    #[serde(alias = "Id", alias = "ID", deserialize_with = "null_as_default")]
    pub id: CoasterId,
    /// Park the ride stands in.
    #[serde(rename = "inPark", alias = "InPark", deserialize_with = "null_as_default")]
    pub in_park: String,
    /// Height in feet.
    #[serde(alias = "Height", deserialize_with = "null_as_default")]
    pub height: i64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Coaster {
    /// Returns a copy of this record carrying `id`.
    #[must_use]
    pub fn with_id(self, id: CoasterId) -> Self {
        Self { id, ..self }
    }
}

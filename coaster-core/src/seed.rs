//! Records the store is populated with at process start.

use crate::coaster::Coaster;
use crate::id::CoasterId;

/// Id of the single seed record.
pub const SEED_ID: &str = "id1";

/// Returns the records a freshly started service holds.
#[must_use]
pub fn seed_coasters() -> Vec<Coaster> {
    vec![Coaster {
        name: "Furry 325".to_owned(),
        manufacturer: "B+M".to_owned(),
        id: CoasterId::new(SEED_ID),
        in_park: String::new(),
        height: 99,
    }]
}

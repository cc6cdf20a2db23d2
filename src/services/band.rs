//! Band listing.

use std::sync::Arc;

use crate::song::{Band, User};
use crate::store::BandStore;

/// Read-side band queries.
pub struct BandService {
    bands: Arc<dyn BandStore>,
}

impl BandService {
    /// Create a band service over the given store.
    #[must_use]
    pub fn new(bands: Arc<dyn BandStore>) -> Self {
        Self { bands }
    }

    /// Bands the given user is a member of, sorted by name.
    ///
    /// Sorting compares lowercased names; full locale collation is left to
    /// clients that need it.
    pub fn band_list(&self, user: &User) -> Vec<Band> {
        let mut bands: Vec<Band> = self
            .bands
            .list()
            .into_iter()
            .filter(|band| band.can_view(user.id))
            .collect();
        bands.sort_by_key(|band| band.name.to_lowercase());
        bands
    }
}

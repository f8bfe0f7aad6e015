//! Finder Model
//!
//! Everything the finder widget knows: where the user is, how far to
//! search, the latest results and whether a request is outstanding.

use chrono::{DateTime, Local};

use super::types::{Display, FinderError, Location, LocationStatus};
use crate::api::Shop;

#[derive(Clone, Debug, PartialEq)]
pub struct FinderModel {
    /// Set once on the first successful location result
    pub location: Option<Location>,

    pub location_status: LocationStatus,

    /// Search radius in meters (not validated here)
    pub radius: u32,

    /// Results of the last applied fetch, replaced wholesale
    pub shops: Vec<Shop>,

    /// True while the latest dispatched request is outstanding
    pub loading: bool,

    pub error: Option<FinderError>,

    /// Sequence number of the latest dispatched fetch (0 = none yet)
    pub latest_seq: u64,

    /// Cleared when the widget goes away; completions after that are dropped
    pub alive: bool,

    /// When results were last applied
    pub last_updated: Option<DateTime<Local>>,
}

impl FinderModel {
    pub fn new(radius: u32) -> Self {
        Self {
            location: None,
            location_status: LocationStatus::Pending,
            radius,
            shops: Vec::new(),
            loading: false,
            error: None,
            latest_seq: 0,
            alive: true,
            last_updated: None,
        }
    }

    /// Derive the display condition; error wins over loading, loading over results
    pub fn display(&self) -> Display<'_> {
        if let Some(error) = self.error {
            Display::Error(error.message())
        } else if self.loading {
            Display::Loading {
                stale: &self.shops,
            }
        } else if !self.shops.is_empty() {
            Display::Results(&self.shops)
        } else {
            Display::Empty
        }
    }

    pub fn error_message(&self) -> Option<&'static str> {
        self.error.map(FinderError::message)
    }

    /// Allocate the next request sequence number
    pub fn next_seq(&mut self) -> u64 {
        self.latest_seq += 1;
        self.latest_seq
    }

    pub fn is_current(&self, seq: u64) -> bool {
        self.alive && seq == self.latest_seq
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn shop(id: u64) -> Shop {
        Shop {
            id,
            lat: 0.0,
            lon: 0.0,
            tags: BTreeMap::new(),
        }
    }

    #[test]
    fn test_display_priority() {
        let mut finder = FinderModel::new(1000);
        assert_eq!(finder.display(), Display::Empty);

        finder.shops = vec![shop(1)];
        assert!(matches!(finder.display(), Display::Results(s) if s.len() == 1));

        finder.loading = true;
        assert!(matches!(finder.display(), Display::Loading { stale } if stale.len() == 1));

        finder.error = Some(FinderError::Fetch);
        assert_eq!(
            finder.display(),
            Display::Error("Error fetching data from Overpass API")
        );
    }

    #[test]
    fn test_next_seq_is_monotonic() {
        let mut finder = FinderModel::new(1000);
        assert_eq!(finder.next_seq(), 1);
        assert_eq!(finder.next_seq(), 2);
        assert!(finder.is_current(2));
        assert!(!finder.is_current(1));
    }

    #[test]
    fn test_dead_model_has_no_current_request() {
        let mut finder = FinderModel::new(1000);
        let seq = finder.next_seq();
        finder.alive = false;
        assert!(!finder.is_current(seq));
    }
}

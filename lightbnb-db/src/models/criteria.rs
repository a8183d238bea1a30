//! Property search criteria

use serde::{Deserialize, Serialize};

/// Optional constraints for property search.
///
/// Every field is optional and `None` means "no constraint". Prices are in
/// major currency units (dollars); the query builder converts them to the
/// stored minor units.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchCriteria {
    /// Substring match against `properties.city`
    pub city: Option<String>,
    pub owner_id: Option<i32>,
    pub minimum_price_per_night: Option<i64>,
    pub maximum_price_per_night: Option<i64>,
    /// Inclusive lower bound on the average review rating
    pub minimum_rating: Option<f64>,
}

impl SearchCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn owner_id(mut self, owner_id: i32) -> Self {
        self.owner_id = Some(owner_id);
        self
    }

    pub fn minimum_price_per_night(mut self, dollars: i64) -> Self {
        self.minimum_price_per_night = Some(dollars);
        self
    }

    pub fn maximum_price_per_night(mut self, dollars: i64) -> Self {
        self.maximum_price_per_night = Some(dollars);
        self
    }

    pub fn minimum_rating(mut self, rating: f64) -> Self {
        self.minimum_rating = Some(rating);
        self
    }
}

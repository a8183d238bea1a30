//! Reservation rows joined with their property

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

/// A guest's reservation with the reserved property's display fields
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Reservation {
    pub id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub property_id: i32,
    pub guest_id: i32,
    pub title: String,
    pub cost_per_night: i32,
    pub thumbnail_photo_url: String,
    pub number_of_bedrooms: i32,
    pub number_of_bathrooms: i32,
    pub parking_spaces: i32,
    pub average_rating: Option<f64>,
}

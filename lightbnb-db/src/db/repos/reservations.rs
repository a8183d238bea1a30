//! Reservation repository

use sqlx::PgPool;
use tracing::debug;

use crate::error::DbError;
use crate::models::{Limit, Reservation};

/// Reservation repository
pub struct ReservationRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ReservationRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List a guest's reservations with property details and average rating.
    ///
    /// Reservations starting today are left out. Ordered by start date,
    /// capped at `limit`.
    pub async fn list_for_guest(
        &self,
        guest_id: i32,
        limit: Limit,
    ) -> Result<Vec<Reservation>, DbError> {
        debug!(guest_id, limit = limit.get(), "listing reservations");

        let reservations = sqlx::query_as::<_, Reservation>(
            r#"
            SELECT
                reservations.id,
                reservations.start_date,
                reservations.end_date,
                reservations.property_id,
                reservations.guest_id,
                properties.title,
                properties.cost_per_night,
                properties.thumbnail_photo_url,
                properties.number_of_bedrooms,
                properties.number_of_bathrooms,
                properties.parking_spaces,
                avg(property_reviews.rating)::float8 AS average_rating
            FROM reservations
            JOIN properties ON properties.id = reservations.property_id
            JOIN property_reviews ON reservations.id = property_reviews.reservation_id
            WHERE reservations.guest_id = $1
              AND reservations.start_date != now()::date
            GROUP BY properties.id, reservations.id
            ORDER BY reservations.start_date
            LIMIT $2
            "#,
        )
        .bind(guest_id)
        .bind(limit.as_i64())
        .fetch_all(self.pool)
        .await?;

        Ok(reservations)
    }
}

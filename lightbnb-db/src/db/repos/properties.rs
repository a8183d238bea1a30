//! Property repository
//!
//! - search: dynamic plan from `query::property_search`
//! - create: fixed 14-column insert

use sqlx::PgPool;
use tracing::debug;

use crate::error::DbError;
use crate::models::{Limit, NewProperty, Property, PropertyListing, SearchCriteria};
use crate::query::{self, QueryPlan};

/// Property repository
pub struct PropertyRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> PropertyRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Search properties matching every criterion present.
    ///
    /// Ordered by nightly cost ascending, capped at `limit`.
    pub async fn search(
        &self,
        criteria: &SearchCriteria,
        limit: Limit,
    ) -> Result<Vec<PropertyListing>, DbError> {
        let plan = query::property_search(criteria, limit);
        self.run_search(&plan).await
    }

    /// Execute an already-built search plan.
    pub async fn run_search(&self, plan: &QueryPlan) -> Result<Vec<PropertyListing>, DbError> {
        debug!(sql = %plan.sql(), params = ?plan.params(), "executing property search");

        let listings = plan
            .query_as::<PropertyListing>()
            .fetch_all(self.pool)
            .await?;

        debug!(count = listings.len(), "property search returned");
        Ok(listings)
    }

    /// Insert a property and return the stored row.
    pub async fn create(&self, property: &NewProperty) -> Result<Property, DbError> {
        debug!(owner_id = property.owner_id, title = %property.title, "creating property");

        let created = sqlx::query_as::<_, Property>(
            r#"
            INSERT INTO properties (
                owner_id, title, description, thumbnail_photo_url, cover_photo_url,
                cost_per_night, parking_spaces, number_of_bathrooms, number_of_bedrooms,
                country, street, city, province, post_code
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            RETURNING *
            "#,
        )
        .bind(property.owner_id)
        .bind(&property.title)
        .bind(&property.description)
        .bind(&property.thumbnail_photo_url)
        .bind(&property.cover_photo_url)
        .bind(property.cost_per_night)
        .bind(property.parking_spaces)
        .bind(property.number_of_bathrooms)
        .bind(property.number_of_bedrooms)
        .bind(&property.country)
        .bind(&property.street)
        .bind(&property.city)
        .bind(&property.province)
        .bind(&property.post_code)
        .fetch_one(self.pool)
        .await?;

        Ok(created)
    }
}

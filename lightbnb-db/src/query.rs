//! Filtered property search query builder
//!
//! Turns a sparse [`SearchCriteria`] plus a [`Limit`] into a [`QueryPlan`]:
//! SQL text with `$n` placeholders and the positional values they refer to.
//! Building a plan does no I/O; repositories execute it.
//!
//! Filter clauses are collected into a `ClauseList` and rendered once, so
//! `WHERE`/`HAVING` appear only when at least one clause exists and every
//! later clause is joined with `AND`.

use serde::Serialize;
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::QueryAs;
use sqlx::{FromRow, Postgres};

use crate::models::{Limit, SearchCriteria};

const PROPERTY_SEARCH_BASE: &str = "SELECT properties.*, avg(property_reviews.rating)::float8 AS average_rating
FROM properties
JOIN property_reviews ON properties.id = property_reviews.property_id";

/// One positional query parameter
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SqlParam {
    Text(String),
    Int(i64),
    Float(f64),
}

impl From<String> for SqlParam {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for SqlParam {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for SqlParam {
    fn from(n: i32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<f64> for SqlParam {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

/// SQL text paired with its positional parameters.
///
/// Placeholder `$k` in [`QueryPlan::sql`] refers to `params()[k - 1]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryPlan {
    sql: String,
    params: Vec<SqlParam>,
}

impl QueryPlan {
    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn params(&self) -> &[SqlParam] {
        &self.params
    }

    /// Ordinals of every `$n` placeholder, in textual order.
    pub fn placeholder_ordinals(&self) -> Vec<usize> {
        let bytes = self.sql.as_bytes();
        let mut ordinals = Vec::new();
        let mut i = 0;

        while i < bytes.len() {
            if bytes[i] == b'$' {
                let start = i + 1;
                let mut end = start;
                while end < bytes.len() && bytes[end].is_ascii_digit() {
                    end += 1;
                }
                if end > start {
                    if let Ok(n) = self.sql[start..end].parse() {
                        ordinals.push(n);
                    }
                }
                i = end.max(start);
            } else {
                i += 1;
            }
        }

        ordinals
    }

    pub fn placeholder_count(&self) -> usize {
        self.placeholder_ordinals().len()
    }

    /// Query decoding each row into `T`, with every parameter bound in order.
    pub fn query_as<T>(&self) -> QueryAs<'_, Postgres, T, PgArguments>
    where
        T: for<'r> FromRow<'r, PgRow>,
    {
        let mut query: QueryAs<'_, Postgres, T, PgArguments> = sqlx::query_as(&self.sql);
        for param in &self.params {
            query = match param {
                SqlParam::Text(s) => query.bind(s.as_str()),
                SqlParam::Int(n) => query.bind(*n),
                SqlParam::Float(x) => query.bind(*x),
            };
        }
        query
    }
}

/// Conjunctive clause accumulator for one `WHERE` or `HAVING` section
struct ClauseList {
    keyword: &'static str,
    clauses: Vec<String>,
}

impl ClauseList {
    fn new(keyword: &'static str) -> Self {
        Self {
            keyword,
            clauses: Vec::new(),
        }
    }

    fn push(&mut self, clause: String) {
        self.clauses.push(clause);
    }

    /// Appends `\n<KEYWORD> a\n  AND b ...`, or nothing when empty.
    fn render_into(&self, sql: &mut String) {
        if self.clauses.is_empty() {
            return;
        }
        sql.push('\n');
        sql.push_str(self.keyword);
        sql.push(' ');
        sql.push_str(&self.clauses.join("\n  AND "));
    }
}

/// Accumulates parameters and hands out their 1-based ordinals.
#[derive(Default)]
struct Params(Vec<SqlParam>);

impl Params {
    fn push(&mut self, param: impl Into<SqlParam>) -> usize {
        self.0.push(param.into());
        self.0.len()
    }
}

/// Major currency units to the stored minor units (cents).
pub fn to_minor_units(major: i64) -> i64 {
    major.saturating_mul(100)
}

/// Build the property search plan.
///
/// Pre-aggregation filters are applied in a fixed order (city, owner,
/// minimum price, maximum price), then rows are grouped per property. A
/// minimum rating becomes the single `HAVING` clause. Results are ordered by
/// nightly cost and capped at `limit`, which is always the last parameter.
pub fn property_search(criteria: &SearchCriteria, limit: Limit) -> QueryPlan {
    let mut params = Params::default();
    let mut filters = ClauseList::new("WHERE");
    let mut having = ClauseList::new("HAVING");

    if let Some(city) = &criteria.city {
        let n = params.push(format!("%{}%", city));
        filters.push(format!("properties.city LIKE ${}", n));
    }

    if let Some(owner_id) = criteria.owner_id {
        let n = params.push(owner_id);
        filters.push(format!("properties.owner_id = ${}", n));
    }

    if let Some(min) = criteria.minimum_price_per_night {
        let n = params.push(to_minor_units(min));
        filters.push(format!("properties.cost_per_night >= ${}", n));
    }

    if let Some(max) = criteria.maximum_price_per_night {
        let n = params.push(to_minor_units(max));
        filters.push(format!("properties.cost_per_night <= ${}", n));
    }

    if let Some(rating) = criteria.minimum_rating {
        let n = params.push(rating);
        having.push(format!("avg(property_reviews.rating) >= ${}", n));
    }

    let mut sql = String::from(PROPERTY_SEARCH_BASE);
    filters.render_into(&mut sql);
    sql.push_str("\nGROUP BY properties.id");
    having.render_into(&mut sql);

    let n = params.push(limit.as_i64());
    sql.push_str(&format!("\nORDER BY properties.cost_per_night\nLIMIT ${}", n));

    let plan = QueryPlan {
        sql,
        params: params.0,
    };
    debug_assert_eq!(plan.placeholder_count(), plan.params.len());
    plan
}

//! Property rows

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Property record from database
///
/// `cost_per_night` is in minor units (cents).
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Property {
    pub id: i32,
    pub owner_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    pub cost_per_night: i32,
    pub parking_spaces: i32,
    pub number_of_bathrooms: i32,
    pub number_of_bedrooms: i32,
    pub country: String,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
    pub active: bool,
}

/// Search result: a property with its average review rating
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct PropertyListing {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub property: Property,
    pub average_rating: Option<f64>,
}

/// Fields for a new property listing.
///
/// Bound in declaration order as `$1..$14`. `cost_per_night` is already in
/// minor units.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewProperty {
    pub owner_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    pub cost_per_night: i32,
    pub parking_spaces: i32,
    pub number_of_bathrooms: i32,
    pub number_of_bedrooms: i32,
    pub country: String,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_serializes_flat() {
        let listing = PropertyListing {
            property: Property {
                id: 7,
                owner_id: 3,
                title: "Speed lamp".into(),
                description: None,
                thumbnail_photo_url: "https://images.example.com/thumb.jpg".into(),
                cover_photo_url: "https://images.example.com/cover.jpg".into(),
                cost_per_night: 93061,
                parking_spaces: 6,
                number_of_bathrooms: 4,
                number_of_bedrooms: 8,
                country: "Canada".into(),
                street: "536 Namsub Highway".into(),
                city: "Sotboske".into(),
                province: "Quebec".into(),
                post_code: "28142".into(),
                active: true,
            },
            average_rating: Some(4.2),
        };
        let json = serde_json::to_value(&listing).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["cost_per_night"], 93061);
        assert_eq!(json["average_rating"], 4.2);
        assert!(json["description"].is_null());
    }

    #[test]
    fn new_property_from_json() {
        let json = r#"{
            "owner_id": 1,
            "title": "Cozy loft",
            "description": "Close to everything",
            "thumbnail_photo_url": "https://images.example.com/t.jpg",
            "cover_photo_url": "https://images.example.com/c.jpg",
            "cost_per_night": 12500,
            "parking_spaces": 1,
            "number_of_bathrooms": 1,
            "number_of_bedrooms": 2,
            "country": "Canada",
            "street": "123 Main St",
            "city": "Vancouver",
            "province": "BC",
            "post_code": "V5K 0A1"
        }"#;
        let property: NewProperty = serde_json::from_str(json).unwrap();
        assert_eq!(property.city, "Vancouver");
        assert_eq!(property.cost_per_night, 12500);
        assert_eq!(property.description.as_deref(), Some("Close to everything"));
    }

    #[test]
    fn new_property_description_is_optional() {
        let json = r#"{
            "owner_id": 1,
            "title": "Bare listing",
            "thumbnail_photo_url": "https://images.example.com/t.jpg",
            "cover_photo_url": "https://images.example.com/c.jpg",
            "cost_per_night": 9000,
            "parking_spaces": 0,
            "number_of_bathrooms": 1,
            "number_of_bedrooms": 1,
            "country": "Canada",
            "street": "9 Side St",
            "city": "Vancouver",
            "province": "BC",
            "post_code": "V5K 0A1"
        }"#;
        let property: NewProperty = serde_json::from_str(json).unwrap();
        assert_eq!(property.description, None);
    }
}

//! Frontend Models
//!
//! Data structures matching the listings API.

use serde::{Deserialize, Serialize};

/// Category data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
}

/// Listing data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: f64,
    /// Empty for listings stored before categories were referenced by id
    #[serde(default)]
    pub category_id: String,
    pub category_name: String,
    pub image_url: String,
}

/// Mutation payload for both create and update.
///
/// `category_name` is always derived from the selected category, so the
/// two category fields never disagree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingInput {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub category_id: String,
    pub category_name: String,
    pub image_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_without_category_id() {
        let json = r#"{
            "id": "7",
            "title": "Велосипед",
            "description": "Почти новый",
            "price": 12000,
            "categoryName": "Транспорт",
            "imageUrl": "https://img.example/bike.jpg"
        }"#;

        let listing: Listing = serde_json::from_str(json).unwrap();
        assert_eq!(listing.id, "7");
        assert_eq!(listing.price, 12000.0);
        assert_eq!(listing.category_id, "");
        assert_eq!(listing.category_name, "Транспорт");
        assert_eq!(listing.image_url, "https://img.example/bike.jpg");
    }

    #[test]
    fn test_input_serializes_camel_case_without_id() {
        let input = ListingInput {
            title: "Стол".to_string(),
            description: "Дубовый".to_string(),
            price: 4500.0,
            category_id: "c2".to_string(),
            category_name: "Мебель".to_string(),
            image_url: "https://img.example/table.jpg".to_string(),
        };

        let value = serde_json::to_value(&input).unwrap();
        let obj = value.as_object().unwrap();
        assert!(obj.get("id").is_none());
        assert_eq!(obj["categoryId"], "c2");
        assert_eq!(obj["categoryName"], "Мебель");
        assert_eq!(obj["imageUrl"], "https://img.example/table.jpg");
    }
}

//! Artwork Model

use serde::{Deserialize, Serialize};

/// Artwork entity as persisted by the catalog API
///
/// The id is assigned by the backend on creation and is immutable.
/// Every other field is tolerated missing on read; listing responses from
/// older records may omit them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artwork {
    /// Backend record id (wire name `_id`)
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub artist: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub styles: Vec<String>,
    #[serde(default)]
    pub size: String,
    /// Collection name (wire name `coleccion`)
    #[serde(rename = "coleccion", default)]
    pub collection: String,
    /// Absent is distinct from zero
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<i32>,
    #[serde(default)]
    pub available: bool,
    /// Download locator into object storage (wire name `url`)
    #[serde(rename = "url", default)]
    pub image_url: String,
}

/// Mutation payload for create and update calls
///
/// Partial updates are not supported by the backend; every field is resent
/// on every write.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtworkData {
    pub title: String,
    pub artist: String,
    pub description: String,
    pub styles: Vec<String>,
    pub size: String,
    #[serde(rename = "coleccion", default)]
    pub collection: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<i32>,
    pub available: bool,
    #[serde(rename = "url")]
    pub image_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn artwork_uses_backend_wire_names() {
        let artwork: Artwork = serde_json::from_value(serde_json::json!({
            "_id": "abc123",
            "title": "Sin título",
            "artist": "Shirley Madero",
            "styles": ["rojo", " azul"],
            "size": "40x50",
            "coleccion": "mujeres",
            "year": 2021,
            "price": 300,
            "available": true,
            "url": "https://storage.example/o/x?alt=media"
        }))
        .unwrap();

        assert_eq!(artwork.id, "abc123");
        assert_eq!(artwork.collection, "mujeres");
        assert_eq!(artwork.image_url, "https://storage.example/o/x?alt=media");
        assert_eq!(artwork.styles, vec!["rojo", " azul"]);
    }

    #[test]
    fn artwork_tolerates_missing_fields() {
        let artwork: Artwork =
            serde_json::from_value(serde_json::json!({ "_id": "abc123" })).unwrap();

        assert_eq!(artwork.title, "");
        assert_eq!(artwork.year, None);
        assert_eq!(artwork.price, None);
        assert!(!artwork.available);
        assert!(artwork.styles.is_empty());
    }

    #[test]
    fn payload_omits_absent_integers() {
        let data = ArtworkData {
            title: "t".into(),
            artist: "a".into(),
            description: String::new(),
            styles: vec![],
            size: String::new(),
            collection: String::new(),
            year: None,
            price: Some(0),
            available: false,
            image_url: String::new(),
        };

        let value = serde_json::to_value(&data).unwrap();
        // Absent year is dropped from the body; zero price is kept.
        assert!(value.get("year").is_none());
        assert_eq!(value["price"], 0);
        assert_eq!(value["url"], "");
        assert_eq!(value["coleccion"], "");
    }
}

use crate::domain::common::AggregateId;
use crate::enums::Category;
use crate::shared::error::DestinationError;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Identifier of a destination as it appears in the data file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DestinationId(pub i64);

impl DestinationId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl AggregateId for DestinationId {
    fn as_string(&self) -> String {
        self.0.as_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        i64::from_string(s).map(DestinationId::new)
    }
}

// ============================================================================
// Coordinates
// ============================================================================

/// Geographic position, serialized as the `[lat, lng]` pair Leaflet expects.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn as_pair(&self) -> [f64; 2] {
        [self.lat, self.lng]
    }
}

impl From<[f64; 2]> for Coordinates {
    fn from([lat, lng]: [f64; 2]) -> Self {
        Self { lat, lng }
    }
}

impl From<Coordinates> for [f64; 2] {
    fn from(c: Coordinates) -> Self {
        c.as_pair()
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// One point of interest on the story map.
///
/// Records are created once from the data file (or the built-in fallback)
/// and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    pub id: DestinationId,
    pub title: String,
    pub location: String,
    pub coordinates: Coordinates,
    pub province: String,
    pub category: Category,
    pub description: String,
    pub image: String,
    pub source: String,
}

impl Destination {
    /// Record shown when the data file cannot be loaded
    pub fn fallback() -> Self {
        Self {
            id: DestinationId::new(1),
            title: "Proklamasi Kemerdekaan (Tugu Proklamasi)".into(),
            location: "Jakarta".into(),
            coordinates: Coordinates::new(-6.1704, 106.8272),
            province: "DKI Jakarta".into(),
            category: Category::Sejarah,
            description: "Lokasi peristiwa proklamasi dan monumen yang memperingati kemerdekaan Indonesia.".into(),
            image: "/placeholder-history.jpg".into(),
            source: "Sejarah nasional".into(),
        }
    }

    /// Image reference, if the record carries one
    pub fn image_url(&self) -> Option<&str> {
        let image = self.image.trim();
        (!image.is_empty()).then_some(image)
    }
}

/// Parse the body of the data file.
///
/// The whole document either parses or fails; there is no per-record
/// recovery.
pub fn parse_destinations(body: &str) -> Result<Vec<Destination>, DestinationError> {
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {
            "id": 1,
            "title": "Tugu Proklamasi",
            "location": "Jakarta",
            "coordinates": [-6.1704, 106.8272],
            "province": "DKI Jakarta",
            "category": "Sejarah",
            "description": "Monumen proklamasi.",
            "image": "/tugu.jpg",
            "source": "Arsip Nasional"
        },
        {
            "id": 2,
            "title": "Danau Toba",
            "location": "Samosir",
            "coordinates": [2.6845, 98.8756],
            "province": "Sumatera Utara",
            "category": "Kuliner",
            "description": "Danau vulkanik.",
            "image": "",
            "source": "Kemenparekraf"
        }
    ]"#;

    #[test]
    fn test_parse_sample() {
        let list = parse_destinations(SAMPLE).unwrap();
        assert_eq!(list.len(), 2);

        let first = &list[0];
        assert_eq!(first.id, DestinationId::new(1));
        assert_eq!(first.title, "Tugu Proklamasi");
        assert_eq!(first.coordinates, Coordinates::new(-6.1704, 106.8272));
        assert_eq!(first.category, Category::Sejarah);
        assert_eq!(first.image_url(), Some("/tugu.jpg"));

        let second = &list[1];
        assert_eq!(second.category, Category::Other("Kuliner".into()));
        assert_eq!(second.image_url(), None);
    }

    #[test]
    fn test_parse_empty_array() {
        assert!(parse_destinations("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_failures() {
        assert!(matches!(
            parse_destinations("<html>404</html>"),
            Err(DestinationError::Parse(_))
        ));
        // coordinates must be a pair
        let bad = SAMPLE.replace("[2.6845, 98.8756]", "[2.6845]");
        assert!(parse_destinations(&bad).is_err());
        // a single object is not a list
        assert!(parse_destinations(r#"{"id": 1}"#).is_err());
    }

    #[test]
    fn test_coordinates_serialize_as_pair() {
        let json = serde_json::to_string(&Coordinates::new(-6.5, 106.25)).unwrap();
        assert_eq!(json, "[-6.5,106.25]");
    }

    #[test]
    fn test_destination_id_text_form() {
        assert_eq!(DestinationId::from_string("12"), Ok(DestinationId::new(12)));
        assert_eq!(DestinationId::new(3).as_string(), "3");
        assert!(DestinationId::from_string("x").is_err());
    }

    #[test]
    fn test_fallback_record() {
        let fallback = Destination::fallback();
        assert_eq!(fallback.id.value(), 1);
        assert_eq!(fallback.province, "DKI Jakarta");
        assert_eq!(fallback.category, Category::Sejarah);
    }
}

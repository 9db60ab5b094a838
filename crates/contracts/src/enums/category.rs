use serde::{Deserialize, Serialize};

/// Category label of a destination.
///
/// Labels outside the known set are kept verbatim in `Other` and styled
/// with the neutral tone; they are never rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Sejarah,
    Alam,
    Budaya,
    Religi,
    Modern,
    Other(String),
}

impl Category {
    /// Label as written in the data file
    pub fn label(&self) -> &str {
        match self {
            Category::Sejarah => "Sejarah",
            Category::Alam => "Alam",
            Category::Budaya => "Budaya",
            Category::Religi => "Religi",
            Category::Modern => "Modern",
            Category::Other(label) => label,
        }
    }

    /// Parse from the data-file label
    pub fn from_label(label: &str) -> Self {
        match label {
            "Sejarah" => Category::Sejarah,
            "Alam" => Category::Alam,
            "Budaya" => Category::Budaya,
            "Religi" => Category::Religi,
            "Modern" => Category::Modern,
            other => Category::Other(other.to_string()),
        }
    }

    /// All known categories, in legend order
    pub fn known() -> [Category; 5] {
        [
            Category::Sejarah,
            Category::Alam,
            Category::Budaya,
            Category::Religi,
            Category::Modern,
        ]
    }

    /// The one category-to-style table.
    ///
    /// Map markers, popups, badges and the legend all read their colors from
    /// here.
    pub fn tone(&self) -> Tone {
        match self {
            Category::Sejarah => Tone::Red,
            Category::Alam => Tone::Green,
            Category::Budaya => Tone::Purple,
            Category::Religi => Tone::Yellow,
            Category::Modern => Tone::Blue,
            Category::Other(_) => Tone::Neutral,
        }
    }
}

impl From<String> for Category {
    fn from(label: String) -> Self {
        Category::from_label(&label)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.label().to_string()
    }
}

/// Color family of a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Red,
    Green,
    Purple,
    Yellow,
    Blue,
    Neutral,
}

impl Tone {
    /// Solid color used for map markers and popup accents
    pub fn marker_color(&self) -> &'static str {
        match self {
            Tone::Red => "#dc2626",
            Tone::Green => "#16a34a",
            Tone::Purple => "#9333ea",
            Tone::Yellow => "#ca8a04",
            Tone::Blue => "#0369a1",
            Tone::Neutral => "#6b7280",
        }
    }

    /// CSS modifier of the badge in the side panel
    pub fn badge_class(&self) -> &'static str {
        match self {
            Tone::Red => "category-badge--red",
            Tone::Green => "category-badge--green",
            Tone::Purple => "category-badge--purple",
            Tone::Yellow => "category-badge--yellow",
            Tone::Blue => "category-badge--blue",
            Tone::Neutral => "category-badge--neutral",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels_round_trip() {
        for category in Category::known() {
            assert_eq!(Category::from_label(category.label()), category);
            assert_ne!(category.tone(), Tone::Neutral);
        }
    }

    #[test]
    fn test_unknown_label_is_neutral_everywhere() {
        let category = Category::from_label("Kuliner");
        assert_eq!(category, Category::Other("Kuliner".into()));
        assert_eq!(category.label(), "Kuliner");
        assert_eq!(category.tone(), Tone::Neutral);
        assert_eq!(category.tone().marker_color(), "#6b7280");
        assert_eq!(category.tone().badge_class(), "category-badge--neutral");
    }

    #[test]
    fn test_labels_are_case_sensitive() {
        assert_eq!(Category::from_label("sejarah").tone(), Tone::Neutral);
    }

    #[test]
    fn test_sejarah_is_red() {
        assert_eq!(Category::Sejarah.tone(), Tone::Red);
        assert_eq!(Category::Sejarah.tone().marker_color(), "#dc2626");
        assert_eq!(Category::Sejarah.tone().badge_class(), "category-badge--red");
    }

    #[test]
    fn test_serde_uses_plain_label() {
        let json = serde_json::to_string(&Category::Religi).unwrap();
        assert_eq!(json, "\"Religi\"");
        let parsed: Category = serde_json::from_str("\"Pantai\"").unwrap();
        assert_eq!(parsed, Category::Other("Pantai".into()));
    }
}

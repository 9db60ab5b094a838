use crate::domain::a001_destination::{Coordinates, Destination, DestinationId};
use ammonia::clean_text;

/// Width and height of the marker icon in pixels
pub const MARKER_SIZE: u32 = 24;
/// Icon anchor, the center of the circle
pub const MARKER_ANCHOR: u32 = MARKER_SIZE / 2;

/// Everything needed to draw the marker of one destination
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSpec {
    pub id: DestinationId,
    pub position: Coordinates,
    pub color: &'static str,
    pub icon_html: String,
    pub popup_html: String,
}

impl MarkerSpec {
    pub fn for_destination(destination: &Destination) -> Self {
        let color = destination.category.tone().marker_color();
        Self {
            id: destination.id,
            position: destination.coordinates,
            color,
            icon_html: icon_html(color),
            popup_html: popup_html(destination),
        }
    }
}

/// One marker per destination, in list order
pub fn marker_specs(destinations: &[Destination]) -> Vec<MarkerSpec> {
    destinations.iter().map(MarkerSpec::for_destination).collect()
}

/// Round marker with a white border and a white center dot
fn icon_html(color: &str) -> String {
    format!(
        concat!(
            r#"<div class="peta-marker" style="background: {color}; width: {size}px; height: {size}px; "#,
            r#"border-radius: 50%; border: 3px solid white; box-shadow: 0 2px 8px rgba(0,0,0,0.3); "#,
            r#"position: relative; cursor: pointer;">"#,
            r#"<div style="position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); "#,
            r#"width: 10px; height: 10px; background: white; border-radius: 50%;"></div>"#,
            r#"</div>"#
        ),
        color = color,
        size = MARKER_SIZE,
    )
}

/// Popup body; every text field is escaped before it is interpolated.
fn popup_html(destination: &Destination) -> String {
    let color = destination.category.tone().marker_color();
    format!(
        concat!(
            r#"<div class="peta-popup" style="min-width: 250px;">"#,
            r#"<div style="display: flex; align-items: center; gap: 8px; margin-bottom: 8px;">"#,
            r#"<span style="background: {color}; color: white; padding: 2px 8px; border-radius: 12px; font-size: 10px; font-weight: bold;">{category}</span>"#,
            r#"<span style="font-size: 11px; color: #6b7280;">{province}</span>"#,
            r#"</div>"#,
            r#"<h3 style="margin: 0 0 8px 0; color: #1f2937; font-weight: bold; font-size: 16px;">{title}</h3>"#,
            r#"<p style="margin: 0 0 8px 0; color: #6b7280; font-size: 14px; line-height: 1.4;">{description}</p>"#,
            r#"<div style="background: #f3f4f6; padding: 8px; border-radius: 4px; border-left: 3px solid {color};">"#,
            r#"<p style="margin: 0; color: #4b5563; font-size: 12px; font-weight: 500;">📍 {location}</p>"#,
            r#"<p style="margin: 4px 0 0 0; color: #6b7280; font-size: 11px;">Sumber: {source}</p>"#,
            r#"</div>"#,
            r#"</div>"#
        ),
        color = color,
        category = clean_text(destination.category.label()),
        province = clean_text(&destination.province),
        title = clean_text(&destination.title),
        description = clean_text(&destination.description),
        location = clean_text(&destination.location),
        source = clean_text(&destination.source),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::Category;

    fn destination(id: i64, category: Category) -> Destination {
        Destination {
            id: DestinationId::new(id),
            title: format!("Situs {}", id),
            location: "Yogyakarta".into(),
            coordinates: Coordinates::new(-7.8, 110.36),
            province: "DI Yogyakarta".into(),
            category,
            description: "Keraton".into(),
            image: String::new(),
            source: "Dinas Kebudayaan".into(),
        }
    }

    #[test]
    fn test_one_marker_per_destination() {
        let list: Vec<_> = (1..=7).map(|i| destination(i, Category::Budaya)).collect();
        let specs = marker_specs(&list);
        assert_eq!(specs.len(), 7);
        for (spec, dest) in specs.iter().zip(&list) {
            assert_eq!(spec.id, dest.id);
            assert_eq!(spec.position, dest.coordinates);
        }
        assert!(marker_specs(&[]).is_empty());
    }

    #[test]
    fn test_marker_color_follows_category() {
        let spec = MarkerSpec::for_destination(&destination(1, Category::Alam));
        assert_eq!(spec.color, "#16a34a");
        assert!(spec.icon_html.contains("background: #16a34a"));
        assert!(spec.icon_html.contains("width: 24px"));
        assert!(spec.popup_html.contains("border-left: 3px solid #16a34a"));
    }

    #[test]
    fn test_unknown_category_marker_is_neutral() {
        let spec = MarkerSpec::for_destination(&destination(1, Category::Other("Kuliner".into())));
        assert_eq!(spec.color, Category::Other(String::new()).tone().marker_color());
        assert_eq!(spec.color, "#6b7280");
        assert!(spec.popup_html.contains(&clean_text("Kuliner")));
    }

    #[test]
    fn test_popup_lists_fields() {
        let dest = destination(3, Category::Sejarah);
        let html = MarkerSpec::for_destination(&dest).popup_html;
        for field in [
            dest.title.as_str(),
            dest.province.as_str(),
            dest.description.as_str(),
            dest.location.as_str(),
            dest.source.as_str(),
        ] {
            assert!(html.contains(&clean_text(field)), "missing {field}");
        }
        assert!(html.contains("Sumber: "));
    }

    #[test]
    fn test_popup_escapes_markup() {
        let mut dest = destination(1, Category::Sejarah);
        dest.title = "<script>alert(1)</script>".into();
        dest.source = "\"quoted\" & more".into();
        let html = MarkerSpec::for_destination(&dest).popup_html;
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("\"quoted\""));
    }
}

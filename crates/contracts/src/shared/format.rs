use crate::domain::a001_destination::Coordinates;

/// Coordinate pair as shown in the detail panel, e.g. `-6.1704°, 106.8272°`
pub fn format_coordinates(coordinates: &Coordinates) -> String {
    format!("{:.4}°, {:.4}°", coordinates.lat, coordinates.lng)
}

/// `location, province`, skipping empty parts
pub fn format_place(location: &str, province: &str) -> String {
    [location.trim(), province.trim()]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Place line of the detail panel, e.g. `📍 Jakarta • DKI Jakarta`
pub fn format_place_line(location: &str, province: &str) -> String {
    format!("📍 {} • {}", location.trim(), province.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_coordinates() {
        assert_eq!(
            format_coordinates(&Coordinates::new(-6.1704, 106.8272)),
            "-6.1704°, 106.8272°"
        );
        assert_eq!(
            format_coordinates(&Coordinates::new(2.5, 98.0)),
            "2.5000°, 98.0000°"
        );
        assert_eq!(
            format_coordinates(&Coordinates::new(-7.60788, 110.20376)),
            "-7.6079°, 110.2038°"
        );
    }

    #[test]
    fn test_format_place() {
        assert_eq!(format_place("Jakarta", "DKI Jakarta"), "Jakarta, DKI Jakarta");
        assert_eq!(format_place("", "Bali"), "Bali");
        assert_eq!(format_place("Ubud ", ""), "Ubud");
    }

    #[test]
    fn test_format_place_line() {
        assert_eq!(
            format_place_line("Jakarta", "DKI Jakarta"),
            "📍 Jakarta • DKI Jakarta"
        );
        assert_eq!(
            format_place_line(" Magelang", "Jawa Tengah "),
            "📍 Magelang • Jawa Tengah"
        );
    }
}

use super::aggregate::{Destination, DestinationId};
use crate::shared::config::MapConfig;
use crate::shared::error::DestinationError;
use crate::shared::map::Viewport;

/// Loaded destination list together with the current selection.
///
/// The list is fixed after construction; only the selected id changes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DestinationCatalog {
    destinations: Vec<Destination>,
    selected: Option<DestinationId>,
}

impl DestinationCatalog {
    /// Catalog over `destinations` with the first record selected
    pub fn new(destinations: Vec<Destination>) -> Self {
        let selected = destinations.first().map(|d| d.id);
        Self {
            destinations,
            selected,
        }
    }

    /// Catalog holding only the built-in fallback record, selected
    pub fn fallback() -> Self {
        Self::new(vec![Destination::fallback()])
    }

    /// Binary success/fallback policy of the data loader
    pub fn from_load(result: Result<Vec<Destination>, DestinationError>) -> Self {
        match result {
            Ok(destinations) => Self::new(destinations),
            Err(_) => Self::fallback(),
        }
    }

    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }

    pub fn find(&self, id: DestinationId) -> Option<&Destination> {
        self.destinations.iter().find(|d| d.id == id)
    }

    pub fn selected_id(&self) -> Option<DestinationId> {
        self.selected
    }

    pub fn selected(&self) -> Option<&Destination> {
        self.selected.and_then(|id| self.find(id))
    }

    pub fn is_selected(&self, id: DestinationId) -> bool {
        self.selected == Some(id)
    }

    /// Select the destination with `id`.
    ///
    /// Returns the newly selected record, or `None` (selection unchanged)
    /// when the id is not part of the catalog.
    pub fn select(&mut self, id: DestinationId) -> Option<&Destination> {
        if self.find(id).is_none() {
            return None;
        }
        self.selected = Some(id);
        self.selected()
    }

    /// Select `id` and return the viewport the map moves to, or `None` when
    /// the id is unknown and nothing changed.
    pub fn select_and_focus(&mut self, id: DestinationId, map: &MapConfig) -> Option<Viewport> {
        self.select(id).map(|d| map.focus_viewport(d))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_destination::Coordinates;
    use crate::enums::Category;

    fn destination(id: i64, title: &str) -> Destination {
        Destination {
            id: DestinationId::new(id),
            title: title.into(),
            location: "Lokasi".into(),
            coordinates: Coordinates::new(-7.0 + id as f64, 110.0),
            province: "Provinsi".into(),
            category: Category::Budaya,
            description: String::new(),
            image: String::new(),
            source: String::new(),
        }
    }

    #[test]
    fn test_first_record_is_selected() {
        let catalog = DestinationCatalog::new(vec![destination(4, "A"), destination(9, "B")]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.selected_id(), Some(DestinationId::new(4)));
        assert_eq!(catalog.selected().map(|d| d.title.as_str()), Some("A"));
    }

    #[test]
    fn test_empty_success_has_no_selection() {
        let catalog = DestinationCatalog::from_load(Ok(vec![]));
        assert!(catalog.is_empty());
        assert!(catalog.selected().is_none());
    }

    #[test]
    fn test_failure_yields_single_selected_fallback() {
        let err = crate::domain::a001_destination::aggregate::parse_destinations("not json")
            .unwrap_err();
        let catalog = DestinationCatalog::from_load(Err(err));
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.selected(), Some(&Destination::fallback()));

        let network = DestinationCatalog::from_load(Err(DestinationError::Status(404)));
        assert_eq!(network, DestinationCatalog::fallback());
    }

    #[test]
    fn test_select_any_entry() {
        let mut catalog =
            DestinationCatalog::new((1..=5).map(|i| destination(i, "X")).collect());
        for id in 1..=5 {
            let id = DestinationId::new(id);
            assert_eq!(catalog.select(id).map(|d| d.id), Some(id));
            assert!(catalog.is_selected(id));
        }
    }

    #[test]
    fn test_select_unknown_keeps_selection() {
        let mut catalog = DestinationCatalog::new(vec![destination(1, "A"), destination(2, "B")]);
        catalog.select(DestinationId::new(2));
        assert!(catalog.select(DestinationId::new(99)).is_none());
        assert_eq!(catalog.selected_id(), Some(DestinationId::new(2)));
    }

    #[test]
    fn test_select_and_focus_moves_to_entry() {
        let map = MapConfig::default();
        let mut catalog =
            DestinationCatalog::new((1..=3).map(|i| destination(i, "X")).collect());
        for id in [3, 1, 2] {
            let id = DestinationId::new(id);
            let viewport = catalog.select_and_focus(id, &map).unwrap();
            assert!(catalog.is_selected(id));
            assert_eq!(viewport.center, catalog.find(id).unwrap().coordinates);
            assert_eq!(viewport.zoom, 12);
        }

        let custom = MapConfig {
            focus_zoom: 15,
            ..MapConfig::default()
        };
        let viewport = catalog.select_and_focus(DestinationId::new(1), &custom).unwrap();
        assert_eq!(viewport.zoom, 15);
        assert_eq!(viewport.center, Coordinates::new(-6.0, 110.0));
    }

    #[test]
    fn test_select_and_focus_unknown_id() {
        let mut catalog = DestinationCatalog::new(vec![destination(1, "A")]);
        assert!(catalog
            .select_and_focus(DestinationId::new(42), &MapConfig::default())
            .is_none());
        assert_eq!(catalog.selected_id(), Some(DestinationId::new(1)));
    }
}

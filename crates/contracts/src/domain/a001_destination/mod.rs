pub mod aggregate;
pub mod catalog;

pub use aggregate::{Coordinates, Destination, DestinationId};
pub use catalog::DestinationCatalog;

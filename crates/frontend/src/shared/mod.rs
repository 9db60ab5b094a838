pub mod api_utils;
pub mod components;
pub mod config;
pub mod icons;
pub mod leaflet;
pub mod scroll;
pub mod theme;

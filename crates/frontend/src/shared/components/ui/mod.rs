pub mod badge;

pub use badge::{CategoryBadge, CategoryDot};

pub mod a001_destination;
pub mod common;

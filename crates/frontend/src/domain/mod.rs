pub mod a001_destination;

pub mod about;
pub mod hero;

pub use about::AboutSection;
pub use hero::HeroSection;

pub mod doctor;
pub mod kinds;
pub mod render;

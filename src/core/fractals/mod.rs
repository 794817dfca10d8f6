pub mod escape_time;
pub mod palette;
pub mod variant;

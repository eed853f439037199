pub mod components;
pub mod contour;
pub mod locate;

pub use locate::{locate, locate_masked};

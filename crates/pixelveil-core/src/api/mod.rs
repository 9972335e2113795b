pub mod hide;
pub mod unveil;

mod shared;

pub use shared::*;

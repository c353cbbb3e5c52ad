pub mod patch;
pub mod products;

pub use patch::Patch;

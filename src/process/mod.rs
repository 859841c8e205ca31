pub mod extract;
pub mod normalize;

pub use extract::extract_cells;
pub use normalize::normalize;

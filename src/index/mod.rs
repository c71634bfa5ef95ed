pub mod intersect;
pub mod inverted;
pub mod posting;

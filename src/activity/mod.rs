//! Activities, their input boundary and their normalization to hours per day.

pub mod input;
pub mod model;
pub mod normalize;

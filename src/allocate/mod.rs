//! Interval allocation: turns ordered activities into per-cell paint instructions.

pub mod descriptor;
pub mod walk;

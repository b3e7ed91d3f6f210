//! Responsive grid layout and cell outlines.

pub mod planner;
pub mod shape;

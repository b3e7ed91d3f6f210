pub mod annotate;
pub mod assemble;
pub mod cache;

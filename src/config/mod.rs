//! JSON configuration documents.

pub mod document;

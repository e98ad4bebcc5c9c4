//! Discovery and loading of site assets (locale files and the catalog).

pub mod types;
pub mod workspace;

#![allow(dead_code)]
mod mock_directory;
mod query_builder;

pub use mock_directory::*;
pub use query_builder::*;

//! Main module for the grammar library

pub mod ast;
pub mod formats;
pub mod loader;
pub mod parsing;
pub mod testing;

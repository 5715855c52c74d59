pub mod config;
pub mod debugger;
pub mod error;
pub mod ids;
pub mod node;
pub mod preferred;
pub mod render;
pub mod search_tree;
pub mod similarity;
pub mod stats;
pub mod style;
pub mod view;

#[cfg(test)]
mod tests;

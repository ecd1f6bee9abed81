//! Model representation: array-backed decision trees and the bagged forest.

mod forest;
mod tree;

pub use forest::Forest;
pub use tree::{Node, Tree};

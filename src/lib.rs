//! Family tree core for the memorial site.
//!
//! - `tree`: the member tree, its store and the edits the manager page makes
//! - `layout`: node boxes and connector anchors for drawing the tree
//! - `output`: JSON shapes handed to the page
//! - `wasm`: the functions the page calls

pub mod tree;
pub mod layout;
pub mod output;
pub mod wasm;

pub use layout::{layout_tree, layout_tree_at, LayoutConfig, LayoutResult, NodePosition, ConnectionInfo};
pub use tree::{FamilyMember, FamilyTreeData, Language, LocalizedString, MemberPatch, TreeError, TreeStore};

//! Output types for the site's front end.
//!
//! These structs are serialized to JSON and handed to the page that draws
//! the tree and runs the editor.

use std::sync::Arc;

use serde::Serialize;

use crate::layout::{bezier_path, canvas_size, layout_tree, ConnectionInfo, LayoutConfig, LayoutResult};
use crate::tree::{
    display_name, find_member, lifespan, spouse_line, FamilyMember, FamilyTreeData, Language, TreeError,
};

/// A positioned member ready to draw
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeNodeOutput {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Name in the requested language
    pub name: String,
    /// ".spouse" / "& spouse" line, if any
    pub spouse_line: Option<String>,
    /// "1931 - 2004", "1931 -" or "- 2004"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifespan: Option<String>,
    /// The root is drawn larger
    pub is_root: bool,
}

/// A connector with its anchors and ready-made SVG path
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionOutput {
    #[serde(flatten)]
    pub info: ConnectionInfo,
    pub path: String,
}

/// Error information for the editor's toast
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    /// "not_found", "root_protected", "duplicate_id", ...
    pub kind: String,
    pub message: String,
}

impl From<&TreeError> for ErrorInfo {
    fn from(e: &TreeError) -> Self {
        ErrorInfo { kind: e.kind().to_string(), message: e.to_string() }
    }
}

/// Everything the tree page needs to draw
#[derive(Debug, Clone, Default, Serialize)]
pub struct TreeOutput {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub nodes: Vec<TreeNodeOutput>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub connections: Vec<ConnectionOutput>,
    /// Canvas size
    pub width: f64,
    pub height: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorInfo>,
}

impl TreeOutput {
    pub fn from_layout(root: &FamilyMember, layout: &LayoutResult, lang: Language, cfg: &LayoutConfig) -> Self {
        let nodes = layout
            .positions
            .iter()
            .filter_map(|pos| {
                let member = find_member(root, &pos.id)?;
                Some(TreeNodeOutput {
                    id: pos.id.clone(),
                    x: pos.x,
                    y: pos.y,
                    width: pos.width,
                    height: pos.height,
                    name: display_name(member, lang).to_string(),
                    spouse_line: spouse_line(member, lang),
                    lifespan: lifespan(member),
                    is_root: pos.id == root.id,
                })
            })
            .collect();

        let connections = layout
            .connections
            .iter()
            .map(|c| ConnectionOutput { info: c.clone(), path: bezier_path(c) })
            .collect();

        let size = canvas_size(layout, cfg);
        TreeOutput { nodes, connections, width: size.w, height: size.h, error: None }
    }

    /// Lay out `root` and build the output in one go.
    pub fn render(root: &FamilyMember, lang: Language, cfg: &LayoutConfig) -> Self {
        let layout = layout_tree(root, cfg);
        Self::from_layout(root, &layout, lang, cfg)
    }

    pub fn from_error(e: &TreeError) -> Self {
        TreeOutput { error: Some(e.into()), ..Default::default() }
    }
}

/// Result of one edit: the new document, or why nothing changed
#[derive(Debug, Clone, Serialize)]
pub struct MutationOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tree: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorInfo>,
}

impl MutationOutput {
    pub fn from_result(result: Result<Arc<FamilyTreeData>, TreeError>) -> Self {
        match result.and_then(|data| Ok(serde_json::to_value(data.as_ref())?)) {
            Ok(tree) => MutationOutput { tree: Some(tree), error: None },
            Err(e) => MutationOutput { tree: None, error: Some(ErrorInfo::from(&e)) },
        }
    }
}

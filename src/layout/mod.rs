// Family tree layouter.
//
// Classic "children first, then center the parent" tree layout:
// - Deterministic: same tree + same config => identical output, in the same order
// - Leaves take exactly one node width
// - An internal node's subtree is as wide as its children's subtrees plus
//   the gaps between them (no trailing gap)
// - Each parent sits centered over the span of its direct children
//
// Two passes:
// - measure: subtree widths bottom-up (post-order)
// - place: positions top-down (pre-order), emitting one connection per edge
//
// Output:
// - LayoutResult with node boxes, parent->child connector anchors and the
//   total width consumed by the root's subtree.

use serde::Serialize;

use crate::tree::FamilyMember;

mod connector;

pub use connector::{bezier_path, BezierCurve, PointF};

#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct SizeF {
    pub w: f64,
    pub h: f64,
}

#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Width of every node box.
    pub node_width: f64,
    /// Height of every node box.
    pub node_height: f64,
    /// Gap between neighbouring sibling subtrees.
    pub horizontal_gap: f64,
    /// Distance between the tops of two generations.
    pub vertical_gap: f64,
    /// Offset below the parent's top edge where connectors start.
    pub connector_drop: f64,
    /// Top-left of the root's subtree.
    pub origin: PointF,
    /// Extra room added right and below the drawn nodes when sizing the canvas.
    pub canvas_padding: SizeF,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            node_width: 200.0,
            node_height: 60.0,
            horizontal_gap: 50.0,
            vertical_gap: 100.0,
            connector_drop: 25.0,
            origin: PointF { x: 50.0, y: 30.0 },
            canvas_padding: SizeF { w: 100.0, h: 50.0 },
        }
    }
}

/// On-canvas box of one member.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodePosition {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl NodePosition {
    pub fn right(&self) -> f64 { self.x + self.width }
    pub fn bottom(&self) -> f64 { self.y + self.height }
    pub fn center_x(&self) -> f64 { self.x + self.width / 2.0 }
}

/// Anchor points of one parent -> child connector.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionInfo {
    pub from_id: String,
    pub to_id: String,
    pub from_x: f64,
    pub from_y: f64,
    pub to_x: f64,
    pub to_y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutResult {
    /// Pre-order: every parent comes before its children.
    pub positions: Vec<NodePosition>,
    /// One entry per edge; `connections[i]` leads into `positions[i + 1]`.
    pub connections: Vec<ConnectionInfo>,
    /// Horizontal space taken by the whole tree.
    pub width: f64,
}

impl LayoutResult {
    pub fn position_of(&self, id: &str) -> Option<&NodePosition> {
        self.positions.iter().find(|p| p.id == id)
    }
}

/// A member paired with its subtree width.
struct Measured<'a> {
    member: &'a FamilyMember,
    width: f64,
    children: Vec<Measured<'a>>,
}

fn measure<'a>(member: &'a FamilyMember, cfg: &LayoutConfig) -> Measured<'a> {
    let children: Vec<Measured<'a>> = member.children.iter().map(|c| measure(c, cfg)).collect();
    let width = if children.is_empty() {
        cfg.node_width
    } else {
        let sum: f64 = children.iter().map(|c| c.width).sum();
        sum + cfg.horizontal_gap * (children.len() - 1) as f64
    };
    Measured { member, width, children }
}

/// Horizontal space needed to draw `member` and all its descendants.
pub fn subtree_width(member: &FamilyMember, cfg: &LayoutConfig) -> f64 {
    measure(member, cfg).width
}

/// Lay out the tree starting at `cfg.origin`.
pub fn layout_tree(root: &FamilyMember, cfg: &LayoutConfig) -> LayoutResult {
    layout_tree_at(root, cfg.origin.x, cfg.origin.y, cfg)
}

/// Lay out the tree with its subtree's top-left corner at (x, y).
pub fn layout_tree_at(root: &FamilyMember, x: f64, y: f64, cfg: &LayoutConfig) -> LayoutResult {
    let measured = measure(root, cfg);
    let mut positions = Vec::with_capacity(root.subtree_size());
    let mut connections = Vec::new();
    place(&measured, x, y, cfg, &mut positions, &mut connections);
    LayoutResult { positions, connections, width: measured.width }
}

fn node_x_in_span(node: &Measured<'_>, x: f64, cfg: &LayoutConfig) -> f64 {
    // A single leaf child still spans W, so this is x for leaves and
    // single-leaf parents alike.
    x + (node.width - cfg.node_width) / 2.0
}

/// Place `node` inside the span starting at `x`. The edge into each child is
/// recorded before the child's own subtree.
fn place(
    node: &Measured<'_>,
    x: f64,
    y: f64,
    cfg: &LayoutConfig,
    positions: &mut Vec<NodePosition>,
    connections: &mut Vec<ConnectionInfo>,
) {
    let node_x = node_x_in_span(node, x, cfg);

    positions.push(NodePosition {
        id: node.member.id.clone(),
        x: node_x,
        y,
        width: cfg.node_width,
        height: cfg.node_height,
    });

    let child_y = y + cfg.vertical_gap;
    let mut cursor = x;
    for child in &node.children {
        let child_x = node_x_in_span(child, cursor, cfg);
        connections.push(ConnectionInfo {
            from_id: node.member.id.clone(),
            to_id: child.member.id.clone(),
            from_x: node_x + cfg.node_width / 2.0,
            from_y: y + cfg.connector_drop,
            to_x: child_x + cfg.node_width / 2.0,
            to_y: child_y,
        });
        place(child, cursor, child_y, cfg, positions, connections);
        cursor += child.width + cfg.horizontal_gap;
    }
}

/// Canvas needed to show every node, plus the configured padding.
pub fn canvas_size(layout: &LayoutResult, cfg: &LayoutConfig) -> SizeF {
    let max_x = layout.positions.iter().map(NodePosition::right).fold(0.0, f64::max);
    let max_y = layout.positions.iter().map(NodePosition::bottom).fold(0.0, f64::max);
    SizeF { w: max_x + cfg.canvas_padding.w, h: max_y + cfg.canvas_padding.h }
}

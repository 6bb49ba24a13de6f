//! Property-based invariant tests for the tree layout.
//!
//! 1. Subtree width is the sum of child widths plus gaps, never below W.
//! 2. Same input gives identical output.
//! 3. Every parent is centered over the span of its children's subtrees.
//! 4. One connection per edge, anchored on the two boxes.
//! 5. Sibling subtrees never overlap.
//! 6. Positions come in pre-order and each connection leads into the next one.

use std::collections::HashMap;

use family_tree_core::layout::{layout_tree, layout_tree_at, subtree_width, LayoutConfig, LayoutResult};
use family_tree_core::tree::{collect_members, seed_root, FamilyMember, LocalizedString};
use proptest::prelude::*;
use proptest::sample::Index;

const EPS: f64 = 1e-9;

// ── Helpers ─────────────────────────────────────────────────────────────

fn leaf(id: &str) -> FamilyMember {
    FamilyMember::new(id, LocalizedString::both(id))
}

fn tree_from_parents(parents: &[Index]) -> FamilyMember {
    let n = parents.len() + 1;
    let mut children: Vec<Vec<usize>> = vec![Vec::new(); n];
    for (i, pick) in parents.iter().enumerate() {
        children[pick.index(i + 1)].push(i + 1);
    }

    fn build(i: usize, children: &[Vec<usize>]) -> FamilyMember {
        let mut member = leaf(&format!("n{i}"));
        member.children = children[i].iter().map(|&c| build(c, children)).collect();
        member
    }
    build(0, &children)
}

fn tree_strategy() -> impl Strategy<Value = FamilyMember> {
    prop::collection::vec(any::<Index>(), 0..50).prop_map(|p| tree_from_parents(&p))
}

fn config_strategy() -> impl Strategy<Value = LayoutConfig> {
    (10u32..300, 10u32..100, 0u32..80, 20u32..200).prop_map(|(w, h, gap, vgap)| LayoutConfig {
        node_width: w as f64,
        node_height: h as f64,
        horizontal_gap: gap as f64,
        vertical_gap: vgap as f64,
        ..LayoutConfig::default()
    })
}

/// (min x, max right) over the boxes of `member`'s subtree.
fn span(member: &FamilyMember, layout: &LayoutResult) -> (f64, f64) {
    collect_members(member).iter().fold((f64::MAX, f64::MIN), |(lo, hi), m| {
        let p = layout.position_of(&m.id).unwrap();
        (lo.min(p.x), hi.max(p.right()))
    })
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Width monotonicity
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn subtree_width_sums_children(tree in tree_strategy(), cfg in config_strategy()) {
        for member in collect_members(&tree) {
            let width = subtree_width(member, &cfg);
            prop_assert!(width >= cfg.node_width - EPS);
            if !member.is_leaf() {
                let sum: f64 = member.children.iter().map(|c| subtree_width(c, &cfg)).sum();
                let gaps = (member.children.len() - 1) as f64 * cfg.horizontal_gap;
                prop_assert!((width - (sum + gaps)).abs() < EPS);
            } else {
                prop_assert_eq!(width, cfg.node_width);
            }
        }
        prop_assert_eq!(layout_tree(&tree, &cfg).width, subtree_width(&tree, &cfg));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Determinism
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn layout_is_deterministic(tree in tree_strategy(), cfg in config_strategy()) {
        prop_assert_eq!(layout_tree(&tree, &cfg), layout_tree(&tree, &cfg));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Parent centering
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn parent_centered_over_children(tree in tree_strategy(), cfg in config_strategy()) {
        let layout = layout_tree(&tree, &cfg);
        for member in collect_members(&tree) {
            if member.is_leaf() {
                continue;
            }
            let (lo, _) = span(&member.children[0], &layout);
            let (_, hi) = span(&member.children[member.children.len() - 1], &layout);
            let parent = layout.position_of(&member.id).unwrap();
            prop_assert!((parent.center_x() - (lo + hi) / 2.0).abs() < EPS);

            let children_width: f64 = member.children.iter().map(|c| subtree_width(c, &cfg)).sum::<f64>()
                + (member.children.len() - 1) as f64 * cfg.horizontal_gap;
            prop_assert!((hi - lo - children_width).abs() < EPS);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Connections
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn one_connection_per_edge(tree in tree_strategy(), cfg in config_strategy()) {
        let layout = layout_tree(&tree, &cfg);
        prop_assert_eq!(layout.positions.len(), tree.subtree_size());
        prop_assert_eq!(layout.connections.len(), tree.subtree_size() - 1);

        let parent_of: HashMap<&str, &str> = collect_members(&tree)
            .into_iter()
            .flat_map(|m| m.children.iter().map(move |c| (c.id.as_str(), m.id.as_str())))
            .collect();

        for conn in &layout.connections {
            prop_assert_eq!(parent_of.get(conn.to_id.as_str()).copied(), Some(conn.from_id.as_str()));
            let from = layout.position_of(&conn.from_id).unwrap();
            let to = layout.position_of(&conn.to_id).unwrap();
            prop_assert_eq!(conn.from_x, from.center_x());
            prop_assert_eq!(conn.from_y, from.y + cfg.connector_drop);
            prop_assert_eq!(conn.to_x, to.center_x());
            prop_assert_eq!(conn.to_y, to.y);
            prop_assert_eq!(to.y, from.y + cfg.vertical_gap);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. No overlap between sibling subtrees
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn sibling_subtrees_do_not_overlap(tree in tree_strategy(), cfg in config_strategy()) {
        let layout = layout_tree(&tree, &cfg);
        for member in collect_members(&tree) {
            for pair in member.children.windows(2) {
                let (_, left_hi) = span(&pair[0], &layout);
                let (right_lo, _) = span(&pair[1], &layout);
                prop_assert!(right_lo - left_hi >= cfg.horizontal_gap - EPS);
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Output order
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn output_follows_pre_order(tree in tree_strategy(), cfg in config_strategy()) {
        let layout = layout_tree(&tree, &cfg);
        let pre_order: Vec<&str> = collect_members(&tree).iter().map(|m| m.id.as_str()).collect();
        let placed: Vec<&str> = layout.positions.iter().map(|p| p.id.as_str()).collect();
        prop_assert_eq!(&placed, &pre_order);

        for (conn, target) in layout.connections.iter().zip(&layout.positions[1..]) {
            prop_assert_eq!(&conn.to_id, &target.id);
        }
    }
}

#[test]
fn seed_connections_follow_members() {
    let layout = layout_tree(&seed_root(), &LayoutConfig::default());
    let edges: Vec<(&str, &str)> = layout
        .connections
        .iter()
        .take(4)
        .map(|c| (c.from_id.as_str(), c.to_id.as_str()))
        .collect();
    assert_eq!(
        edges,
        vec![
            ("god-father", "na-geun-sik"),
            ("na-geun-sik", "na-gi-bong"),
            ("na-gi-bong", "na-jong-choon"),
            ("na-jong-choon", "na-han-na"),
        ]
    );
}

// ── Scenarios ───────────────────────────────────────────────────────────

#[test]
fn root_only_sits_at_origin() {
    let layout = layout_tree(&leaf("root"), &LayoutConfig::default());
    assert_eq!(layout.positions.len(), 1);
    assert_eq!((layout.positions[0].x, layout.positions[0].y), (50.0, 30.0));
    assert!(layout.connections.is_empty());
}

#[test]
fn custom_origin_shifts_everything() {
    let cfg = LayoutConfig::default();
    let base = layout_tree(&seed_root(), &cfg);
    let shifted = layout_tree_at(&seed_root(), 150.0, 80.0, &cfg);
    for (a, b) in base.positions.iter().zip(&shifted.positions) {
        assert_eq!(a.id, b.id);
        assert_eq!(b.x - a.x, 100.0);
        assert_eq!(b.y - a.y, 50.0);
    }
}

#[test]
fn seed_tree_root_position() {
    // 8 leaves in the seed family: 8 * 200 + 7 * 50.
    let cfg = LayoutConfig::default();
    let layout = layout_tree(&seed_root(), &cfg);
    assert_eq!(layout.width, 1950.0);
    let root = layout.position_of("god-father").unwrap();
    assert_eq!(root.x, 925.0);
}

//! Recursive lookups and copy-on-write edits over a member tree.
//!
//! The `with_*` functions never touch their input: they rebuild the path from
//! the root down to the edited node and return the new root, or `None` when
//! the target id is not in the tree.

use std::collections::HashSet;

use crate::tree::types::*;

/// Depth-first search for a member by id.
pub fn find_member<'a>(node: &'a FamilyMember, id: &str) -> Option<&'a FamilyMember> {
    if node.id == id {
        return Some(node);
    }
    node.children.iter().find_map(|child| find_member(child, id))
}

/// Find the direct parent of `id`. The root has no parent.
pub fn find_parent<'a>(node: &'a FamilyMember, id: &str) -> Option<&'a FamilyMember> {
    for child in &node.children {
        if child.id == id {
            return Some(node);
        }
        if let Some(found) = find_parent(child, id) {
            return Some(found);
        }
    }
    None
}

/// Ids from the root down to `id`, inclusive.
pub fn path_to<'a>(node: &'a FamilyMember, id: &str) -> Option<Vec<&'a str>> {
    fn walk<'a>(node: &'a FamilyMember, id: &str, path: &mut Vec<&'a str>) -> bool {
        path.push(&node.id);
        if node.id == id {
            return true;
        }
        for child in &node.children {
            if walk(child, id, path) {
                return true;
            }
        }
        path.pop();
        false
    }

    let mut path = Vec::new();
    walk(node, id, &mut path).then_some(path)
}

/// Generation of `id` counted from the root (root is 0).
pub fn depth_of(node: &FamilyMember, id: &str) -> Option<usize> {
    path_to(node, id).map(|p| p.len() - 1)
}

/// Pre-order flatten: root first, then each subtree in child order.
pub fn collect_members(node: &FamilyMember) -> Vec<&FamilyMember> {
    fn dfs<'a>(node: &'a FamilyMember, out: &mut Vec<&'a FamilyMember>) {
        out.push(node);
        for child in &node.children {
            dfs(child, out);
        }
    }
    let mut out = Vec::new();
    dfs(node, &mut out);
    out
}

/// Ids that appear more than once, in first-repeat order.
pub fn duplicate_ids(node: &FamilyMember) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut dups = Vec::new();
    for member in collect_members(node) {
        if !seen.insert(member.id.as_str()) && !dups.contains(&member.id) {
            dups.push(member.id.clone());
        }
    }
    dups
}

/// Rebuild the path to the first node matching `id` and run `edit` on its copy.
/// Siblings off the path are cloned unchanged.
fn rebuild_at<F>(node: &FamilyMember, id: &str, edit: &mut F) -> Option<FamilyMember>
where
    F: FnMut(&mut FamilyMember),
{
    if node.id == id {
        let mut copy = node.clone();
        edit(&mut copy);
        return Some(copy);
    }
    for (i, child) in node.children.iter().enumerate() {
        if let Some(new_child) = rebuild_at(child, id, edit) {
            let mut copy = node.clone();
            copy.children[i] = new_child;
            return Some(copy);
        }
    }
    None
}

/// Append `member` as the last child of `parent_id`.
pub fn with_child_added(
    root: &FamilyMember,
    parent_id: &str,
    member: FamilyMember,
) -> Option<FamilyMember> {
    let mut member = Some(member);
    rebuild_at(root, parent_id, &mut |parent| {
        if let Some(m) = member.take() {
            parent.children.push(m);
        }
    })
}

/// Replace the supplied fields of `id`, leaving its children alone.
pub fn with_member_patched(
    root: &FamilyMember,
    id: &str,
    patch: &MemberPatch,
) -> Option<FamilyMember> {
    rebuild_at(root, id, &mut |member| patch.apply_to(member))
}

/// Drop `id` and its whole subtree from its parent's children.
///
/// Returns the new root along with the detached subtree. Removing the root
/// itself is not expressible here and yields `None`.
pub fn with_member_removed(root: &FamilyMember, id: &str) -> Option<(FamilyMember, FamilyMember)> {
    let parent_id = find_parent(root, id)?.id.clone();
    let mut removed = None;
    let new_root = rebuild_at(root, &parent_id, &mut |parent| {
        if let Some(idx) = parent.children.iter().position(|c| c.id == id) {
            removed = Some(parent.children.remove(idx));
        }
    })?;
    removed.map(|r| (new_root, r))
}

/// Move `id` to `new_index` among its siblings. The index is clamped to the
/// last slot.
pub fn with_child_moved(root: &FamilyMember, id: &str, new_index: usize) -> Option<FamilyMember> {
    let parent_id = find_parent(root, id)?.id.clone();
    rebuild_at(root, &parent_id, &mut |parent| {
        if let Some(idx) = parent.children.iter().position(|c| c.id == id) {
            let child = parent.children.remove(idx);
            let target = new_index.min(parent.children.len());
            parent.children.insert(target, child);
        }
    })
}

//! Owner of the current family tree snapshot.
//!
//! The store is constructed once and handed to whoever needs it. Readers get
//! an `Arc` of the current snapshot; a successful mutation builds a complete
//! new document and swaps the `Arc` in one assignment, so a reader never sees
//! a half-applied edit. A rejected mutation leaves the snapshot as it was.

use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use tracing::{debug, warn};

use crate::tree::error::TreeError;
use crate::tree::seed::seed_data;
use crate::tree::types::*;
use crate::tree::update::{
    collect_members, duplicate_ids, find_member, with_child_added, with_child_moved,
    with_member_patched, with_member_removed,
};

fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[derive(Debug, Clone)]
pub struct TreeStore {
    data: Arc<FamilyTreeData>,
    language: Language,
}

impl Default for TreeStore {
    fn default() -> Self {
        Self::with_seed()
    }
}

impl TreeStore {
    /// Take ownership of an already validated document.
    pub fn new(data: FamilyTreeData) -> Result<Self, TreeError> {
        if let Some(dup) = duplicate_ids(&data.root).into_iter().next() {
            return Err(TreeError::DuplicateId(dup));
        }
        Ok(Self { data: Arc::new(data), language: Language::default() })
    }

    pub fn with_seed() -> Self {
        Self { data: Arc::new(seed_data(now_rfc3339())), language: Language::default() }
    }

    /// Load a persisted document. Also accepts a bare root member.
    pub fn from_json(json: &str) -> Result<Self, TreeError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let data = if value.get("root").is_some() {
            serde_json::from_value::<FamilyTreeData>(value)?
        } else if value.get("id").is_some() {
            FamilyTreeData {
                root: serde_json::from_value(value)?,
                metadata: TreeMetadata {
                    last_modified: now_rfc3339(),
                    version: DATA_VERSION.to_string(),
                },
            }
        } else {
            return Err(TreeError::InvalidDocument(
                "expected a tree document or a root member".to_string(),
            ));
        };
        Self::new(data)
    }

    pub fn to_json(&self) -> Result<String, TreeError> {
        Ok(serde_json::to_string(self.data.as_ref())?)
    }

    pub fn to_json_pretty(&self) -> Result<String, TreeError> {
        Ok(serde_json::to_string_pretty(self.data.as_ref())?)
    }

    pub fn data(&self) -> &FamilyTreeData {
        &self.data
    }

    pub fn root(&self) -> &FamilyMember {
        &self.data.root
    }

    pub fn snapshot(&self) -> Arc<FamilyTreeData> {
        Arc::clone(&self.data)
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Switch the display language. Tree data is not touched.
    pub fn set_language(&mut self, lang: Language) {
        self.language = lang;
    }

    pub fn find_member_by_id(&self, id: &str) -> Option<&FamilyMember> {
        find_member(&self.data.root, id)
    }

    /// Every member in pre-order, root first.
    pub fn get_all_members(&self) -> Vec<&FamilyMember> {
        collect_members(&self.data.root)
    }

    fn commit(&mut self, root: FamilyMember) -> Arc<FamilyTreeData> {
        let data = FamilyTreeData {
            root,
            metadata: TreeMetadata {
                last_modified: now_rfc3339(),
                version: self.data.metadata.version.clone(),
            },
        };
        self.data = Arc::new(data);
        self.snapshot()
    }

    /// Append `member` (and any children it carries) under `parent_id`.
    pub fn add_member(
        &mut self,
        parent_id: &str,
        member: FamilyMember,
    ) -> Result<Arc<FamilyTreeData>, TreeError> {
        for incoming in collect_members(&member) {
            if find_member(&self.data.root, &incoming.id).is_some() {
                warn!(id = %incoming.id, "rejecting member with duplicate id");
                return Err(TreeError::DuplicateId(incoming.id.clone()));
            }
        }
        if let Some(dup) = duplicate_ids(&member).into_iter().next() {
            warn!(id = %dup, "rejecting member subtree with repeated id");
            return Err(TreeError::DuplicateId(dup));
        }

        let member_id = member.id.clone();
        let root = with_child_added(&self.data.root, parent_id, member).ok_or_else(|| {
            warn!(parent_id, "add_member: parent not found");
            TreeError::NotFound(parent_id.to_string())
        })?;
        debug!(parent_id, id = %member_id, "member added");
        Ok(self.commit(root))
    }

    /// Replace only the fields present in `patch`.
    pub fn update_member(
        &mut self,
        id: &str,
        patch: &MemberPatch,
    ) -> Result<Arc<FamilyTreeData>, TreeError> {
        if patch.is_empty() {
            // Nothing to write; keep the snapshot and its timestamp.
            return match find_member(&self.data.root, id) {
                Some(_) => Ok(self.snapshot()),
                None => {
                    warn!(id, "update_member: member not found");
                    Err(TreeError::NotFound(id.to_string()))
                }
            };
        }
        let root = with_member_patched(&self.data.root, id, patch).ok_or_else(|| {
            warn!(id, "update_member: member not found");
            TreeError::NotFound(id.to_string())
        })?;
        debug!(id, "member updated");
        Ok(self.commit(root))
    }

    /// Remove `id` together with its descendants. The root is protected.
    pub fn remove_member(&mut self, id: &str) -> Result<Arc<FamilyTreeData>, TreeError> {
        if id == self.data.root.id {
            warn!(id, "remove_member: refusing to remove the root");
            return Err(TreeError::RootProtected);
        }
        let (root, removed) = with_member_removed(&self.data.root, id).ok_or_else(|| {
            warn!(id, "remove_member: member not found");
            TreeError::NotFound(id.to_string())
        })?;
        debug!(id, removed = removed.subtree_size(), "member removed");
        Ok(self.commit(root))
    }

    /// Reorder `id` among its siblings.
    pub fn move_member(
        &mut self,
        id: &str,
        new_index: usize,
    ) -> Result<Arc<FamilyTreeData>, TreeError> {
        if id == self.data.root.id {
            return Err(TreeError::RootProtected);
        }
        let root = with_child_moved(&self.data.root, id, new_index).ok_or_else(|| {
            warn!(id, "move_member: member not found");
            TreeError::NotFound(id.to_string())
        })?;
        debug!(id, new_index, "member moved");
        Ok(self.commit(root))
    }

    /// Throw away every edit and go back to the seed family.
    pub fn reset_data(&mut self) -> Arc<FamilyTreeData> {
        self.data = Arc::new(seed_data(now_rfc3339()));
        self.snapshot()
    }
}

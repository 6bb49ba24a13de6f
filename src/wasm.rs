//! WASM bindings for the family-tree-core library.
//!
//! All functions exposed to JavaScript via wasm-bindgen are defined here.
//! The page owns the tree document as JSON; every call takes the current
//! document and returns either the next one or an error object, so the JS
//! side swaps its copy only when an edit succeeded.

use std::sync::Arc;

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::layout::LayoutConfig;
use crate::output::{MutationOutput, TreeOutput};
use crate::tree::{
    self, FamilyMember, FamilyTreeData, Language, MemberMatch, MemberPatch, TreeError, TreeStore,
};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = log)]
    pub fn console_log(s: &str);

    #[wasm_bindgen(js_namespace = console, js_name = error)]
    pub fn console_error(s: &str);
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| {
        console_error(&format!("Error serializing output: {}", e));
        "{\"error\": {\"kind\": \"json\", \"message\": \"serialization failed\"}}".to_string()
    })
}

fn parse_language(lang: &str) -> Language {
    Language::parse(lang).unwrap_or_else(|| {
        console_log(&format!("Unknown language '{}', falling back to ko", lang));
        Language::default()
    })
}

fn load(doc_json: &str) -> Result<TreeStore, TreeError> {
    TreeStore::from_json(doc_json).inspect_err(|e| {
        console_error(&format!("Error loading tree document: {}", e));
    })
}

// The builders below never touch the console, so they run in native tests.

fn edit_document<F>(doc_json: &str, edit: F) -> MutationOutput
where
    F: FnOnce(&mut TreeStore) -> Result<Arc<FamilyTreeData>, TreeError>,
{
    MutationOutput::from_result(TreeStore::from_json(doc_json).and_then(|mut store| edit(&mut store)))
}

fn render_document(doc_json: &str, lang: Language, cfg: &LayoutConfig) -> TreeOutput {
    match TreeStore::from_json(doc_json) {
        Ok(store) => TreeOutput::render(store.root(), lang, cfg),
        Err(e) => TreeOutput::from_error(&e),
    }
}

fn search_document(doc_json: &str, query: &str) -> Vec<MemberMatch> {
    TreeStore::from_json(doc_json)
        .map(|store| tree::search_members(store.root(), query))
        .unwrap_or_default()
}

fn emit_mutation(output: MutationOutput) -> String {
    if let Some(err) = &output.error {
        console_error(&format!("Tree edit rejected: {}", err.message));
    }
    to_json(&output)
}

fn emit_tree(output: TreeOutput) -> String {
    if let Some(err) = &output.error {
        console_error(&format!("Error rendering tree: {}", err.message));
    }
    to_json(&output)
}

/// Lay out the tree document and return nodes, connectors and canvas size.
#[wasm_bindgen]
pub fn render_tree(doc_json: &str, lang: &str) -> String {
    emit_tree(render_document(doc_json, parse_language(lang), &LayoutConfig::default()))
}

/// The initial family document.
#[wasm_bindgen]
pub fn seed_tree() -> String {
    TreeStore::with_seed().to_json().unwrap_or_else(|e| {
        console_error(&format!("Error serializing seed tree: {}", e));
        "{}".to_string()
    })
}

/// Append a member (JSON) under `parent_id`.
#[wasm_bindgen]
pub fn add_member(doc_json: &str, parent_id: &str, member_json: &str) -> String {
    emit_mutation(edit_document(doc_json, |store| {
        let member: FamilyMember = serde_json::from_str(member_json)?;
        store.add_member(parent_id, member)
    }))
}

/// Apply a partial update (JSON) to member `id`.
#[wasm_bindgen]
pub fn update_member(doc_json: &str, id: &str, patch_json: &str) -> String {
    emit_mutation(edit_document(doc_json, |store| {
        let patch: MemberPatch = serde_json::from_str(patch_json)?;
        store.update_member(id, &patch)
    }))
}

/// Remove member `id` and everything below it.
#[wasm_bindgen]
pub fn remove_member(doc_json: &str, id: &str) -> String {
    emit_mutation(edit_document(doc_json, |store| store.remove_member(id)))
}

/// Move member `id` to `new_index` among its siblings.
#[wasm_bindgen]
pub fn move_member(doc_json: &str, id: &str, new_index: usize) -> String {
    emit_mutation(edit_document(doc_json, |store| store.move_member(id, new_index)))
}

/// Search names and spouses. Returns a JSON array of matches.
#[wasm_bindgen]
pub fn search_members(doc_json: &str, query: &str) -> String {
    to_json(&search_document(doc_json, query))
}

/// Long-lived tree owner for pages that keep editing the same document.
#[wasm_bindgen]
pub struct FamilyTreeHandle {
    store: TreeStore,
    cfg: LayoutConfig,
}

#[wasm_bindgen]
impl FamilyTreeHandle {
    #[wasm_bindgen(constructor)]
    pub fn new(doc_json: &str) -> Result<FamilyTreeHandle, JsValue> {
        let store = load(doc_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(FamilyTreeHandle { store, cfg: LayoutConfig::default() })
    }

    pub fn seeded() -> FamilyTreeHandle {
        FamilyTreeHandle { store: TreeStore::with_seed(), cfg: LayoutConfig::default() }
    }

    pub fn language(&self) -> String {
        self.store.language().code().to_string()
    }

    pub fn set_language(&mut self, lang: &str) {
        self.store.set_language(parse_language(lang));
    }

    pub fn add_member(&mut self, parent_id: &str, member_json: &str) -> String {
        let result = serde_json::from_str::<FamilyMember>(member_json)
            .map_err(TreeError::from)
            .and_then(|member| self.store.add_member(parent_id, member));
        emit_mutation(MutationOutput::from_result(result))
    }

    pub fn update_member(&mut self, id: &str, patch_json: &str) -> String {
        let result = serde_json::from_str::<MemberPatch>(patch_json)
            .map_err(TreeError::from)
            .and_then(|patch| self.store.update_member(id, &patch));
        emit_mutation(MutationOutput::from_result(result))
    }

    pub fn remove_member(&mut self, id: &str) -> String {
        emit_mutation(MutationOutput::from_result(self.store.remove_member(id)))
    }

    pub fn move_member(&mut self, id: &str, new_index: usize) -> String {
        emit_mutation(MutationOutput::from_result(self.store.move_member(id, new_index)))
    }

    pub fn reset(&mut self) -> String {
        emit_mutation(MutationOutput::from_result(Ok(self.store.reset_data())))
    }

    pub fn render(&self) -> String {
        emit_tree(TreeOutput::render(self.store.root(), self.store.language(), &self.cfg))
    }

    pub fn search(&self, query: &str) -> String {
        to_json(&tree::search_members(self.store.root(), query))
    }

    pub fn member_count(&self) -> usize {
        self.store.get_all_members().len()
    }

    pub fn to_json(&self) -> String {
        self.store.to_json().unwrap_or_else(|e| {
            console_error(&format!("Error serializing tree: {}", e));
            "{}".to_string()
        })
    }
}

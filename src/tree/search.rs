//! Substring search over the in-memory tree, for the site search box.

use serde::Serialize;

use crate::tree::types::*;
use crate::tree::update::collect_members;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchField {
    Name,
    Spouse,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberMatch {
    pub id: String,
    pub title: String,
    pub matched: MatchField,
    pub href: String,
}

fn contains_term(s: &LocalizedString, term: &str) -> bool {
    s.ko.to_lowercase().contains(term) || s.en.to_lowercase().contains(term)
}

/// Case-insensitive match on both languages of a member's name and spouse.
/// Results follow pre-order; a blank query matches nothing.
pub fn search_members(root: &FamilyMember, query: &str) -> Vec<MemberMatch> {
    let term = query.trim().to_lowercase();
    if term.is_empty() {
        return Vec::new();
    }

    collect_members(root)
        .into_iter()
        .filter_map(|member| {
            let spouse_hit = member.spouse.as_ref().filter(|s| contains_term(s, &term));
            let matched = if contains_term(&member.name, &term) {
                MatchField::Name
            } else if spouse_hit.is_some() {
                MatchField::Spouse
            } else {
                return None;
            };

            let mut title = format!("{} ({})", member.name.ko, member.name.en);
            if let Some(spouse) = spouse_hit {
                title.push_str(" & ");
                title.push_str(&spouse.ko);
            }
            Some(MemberMatch {
                id: member.id.clone(),
                title,
                matched,
                href: format!("/tree?highlight={}", member.id),
            })
        })
        .collect()
}

use serde::{Deserialize, Serialize};

/// Fixed id of the tree root ("God Father").
pub const ROOT_ID: &str = "god-father";

/// Document version written into fresh metadata.
pub const DATA_VERSION: &str = "1.0.0";

/// Display language of the site.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ko,
    En,
}

impl Language {
    pub fn parse(code: &str) -> Option<Language> {
        match code.trim() {
            "ko" => Some(Language::Ko),
            "en" => Some(Language::En),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// A display string in both supported languages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedString {
    pub ko: String,
    pub en: String,
}

impl LocalizedString {
    pub fn new(ko: impl Into<String>, en: impl Into<String>) -> Self {
        Self { ko: ko.into(), en: en.into() }
    }

    /// Same text for both languages.
    pub fn both(text: impl Into<String>) -> Self {
        let text = text.into();
        Self { ko: text.clone(), en: text }
    }

    pub fn pick(&self, lang: Language) -> &str {
        match lang {
            Language::Ko => &self.ko,
            Language::En => &self.en,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtendedFieldKind {
    Text,
    Number,
    Date,
    Image,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExtendedValue {
    Number(f64),
    Text(String),
}

/// Free-form key/value attached to a member by the editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtendedField {
    pub key: String,
    pub label: LocalizedString,
    #[serde(rename = "type")]
    pub kind: ExtendedFieldKind,
    pub value: Option<ExtendedValue>,
}

/// One person in the family tree, with ordered children.
///
/// Optional descriptive fields are carried through every mutation but the
/// layout never looks at them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyMember {
    pub id: String,
    pub name: LocalizedString,
    pub spouse: Option<LocalizedString>,
    #[serde(default)]
    pub children: Vec<FamilyMember>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub death_year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<LocalizedString>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<LocalizedString>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extended_fields: Option<Vec<ExtendedField>>,
}

impl FamilyMember {
    pub fn new(id: impl Into<String>, name: LocalizedString) -> Self {
        Self {
            id: id.into(),
            name,
            spouse: None,
            children: Vec::new(),
            photo: None,
            birth_year: None,
            death_year: None,
            role: None,
            notes: None,
            extended_fields: None,
        }
    }

    pub fn with_spouse(mut self, spouse: LocalizedString) -> Self {
        self.spouse = Some(spouse);
        self
    }

    pub fn with_child(mut self, child: FamilyMember) -> Self {
        self.children.push(child);
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of members in this subtree, including self.
    pub fn subtree_size(&self) -> usize {
        1 + self.children.iter().map(FamilyMember::subtree_size).sum::<usize>()
    }
}

/// Partial update of a member's own fields. `children` and `id` are not
/// patchable.
///
/// `spouse` is tri-state: `None` leaves it alone, `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberPatch {
    #[serde(default)]
    pub name: Option<LocalizedString>,
    #[serde(default, deserialize_with = "present")]
    pub spouse: Option<Option<LocalizedString>>,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub birth_year: Option<i32>,
    #[serde(default)]
    pub death_year: Option<i32>,
    #[serde(default)]
    pub role: Option<LocalizedString>,
    #[serde(default)]
    pub notes: Option<LocalizedString>,
    #[serde(default)]
    pub extended_fields: Option<Vec<ExtendedField>>,
}

/// Distinguishes `"spouse": null` (clear) from a missing key (untouched).
fn present<'de, D, T>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(de).map(Some)
}

impl MemberPatch {
    pub fn name(name: LocalizedString) -> Self {
        Self { name: Some(name), ..Self::default() }
    }

    pub fn is_empty(&self) -> bool {
        *self == MemberPatch::default()
    }

    /// Apply the supplied fields onto `member`, leaving the rest untouched.
    pub fn apply_to(&self, member: &mut FamilyMember) {
        if let Some(name) = &self.name {
            member.name = name.clone();
        }
        if let Some(spouse) = &self.spouse {
            member.spouse = spouse.clone();
        }
        if let Some(photo) = &self.photo {
            member.photo = Some(photo.clone());
        }
        if let Some(year) = self.birth_year {
            member.birth_year = Some(year);
        }
        if let Some(year) = self.death_year {
            member.death_year = Some(year);
        }
        if let Some(role) = &self.role {
            member.role = Some(role.clone());
        }
        if let Some(notes) = &self.notes {
            member.notes = Some(notes.clone());
        }
        if let Some(fields) = &self.extended_fields {
            member.extended_fields = Some(fields.clone());
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeMetadata {
    /// RFC 3339 timestamp of the last successful mutation.
    pub last_modified: String,
    pub version: String,
}

/// The persisted family tree document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FamilyTreeData {
    pub root: FamilyMember,
    pub metadata: TreeMetadata,
}

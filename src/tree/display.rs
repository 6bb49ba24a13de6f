use crate::tree::types::*;

pub fn display_name(member: &FamilyMember, lang: Language) -> &str {
    member.name.pick(lang)
}

/// Second label line under a member's name.
pub fn spouse_line(member: &FamilyMember, lang: Language) -> Option<String> {
    let spouse = member.spouse.as_ref()?.pick(lang);
    Some(match lang {
        Language::Ko => format!(".{spouse}"),
        Language::En => format!("& {spouse}"),
    })
}

pub fn lifespan(member: &FamilyMember) -> Option<String> {
    match (member.birth_year, member.death_year) {
        (Some(b), Some(d)) => Some(format!("{b} - {d}")),
        (Some(b), None) => Some(format!("{b} -")),
        (None, Some(d)) => Some(format!("- {d}")),
        (None, None) => None,
    }
}

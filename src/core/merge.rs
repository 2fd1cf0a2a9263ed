use crate::core::models::{
    Collection,
    HadithNumber,
    Record,
    SectionMetadata,
    SectionPayload,
};

/// Pairs every primary hadith with the first secondary hadith that shares its
/// number. Order and count follow the primary edition exactly.
pub fn merge_editions(
    collection: Collection,
    section: u32,
    primary: SectionPayload,
    secondary: &SectionPayload,
) -> Vec<Record> {
    let section_name = section_display_name(primary.metadata.as_ref(), section);
    let collection_name = collection.display_name().to_string();

    primary
        .hadiths
        .into_iter()
        .map(|hadith| {
            let secondary_text = secondary
                .hadiths
                .iter()
                .find(|other| same_number(&other.hadithnumber, &hadith.hadithnumber))
                .map(|other| other.text.clone())
                .unwrap_or_default();

            Record {
                number: hadith.hadithnumber,
                text: hadith.text,
                secondary_text,
                collection_name: collection_name.clone(),
                section_name: section_name.clone(),
                grades: hadith.grades,
            }
        })
        .collect()
}

/// `7` and `7.0` name the same hadith, whichever way an edition writes it.
fn same_number(a: &HadithNumber, b: &HadithNumber) -> bool {
    a == b || matches!((a.as_f64(), b.as_f64()), (Some(x), Some(y)) if x == y)
}

pub fn section_display_name(metadata: Option<&SectionMetadata>, section: u32) -> String {
    metadata
        .and_then(|metadata| metadata.section.as_ref())
        .and_then(|sections| sections.get(&section.to_string()))
        .map(|name| name.trim())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("Chapter {}", section))
}

use std::{
    collections::HashMap,
    fmt,
};

use rand::Rng;
use serde::{
    Deserialize,
    Serialize,
};

pub use serde_json::Number as HadithNumber;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Bukhari,
    Muslim,
    AbuDawud,
    Tirmidhi,
    Nasai,
}

impl Collection {
    pub const ALL: [Collection; 5] = [
        Collection::Bukhari,
        Collection::Muslim,
        Collection::AbuDawud,
        Collection::Tirmidhi,
        Collection::Nasai,
    ];

    /// Identifier used in edition names, e.g. `eng-bukhari`.
    pub fn slug(&self) -> &'static str {
        match self {
            Collection::Bukhari => "bukhari",
            Collection::Muslim => "muslim",
            Collection::AbuDawud => "abudawud",
            Collection::Tirmidhi => "tirmidhi",
            Collection::Nasai => "nasai",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Collection::Bukhari => "Sahih al-Bukhari",
            Collection::Muslim => "Sahih Muslim",
            Collection::AbuDawud => "Sunan Abi Dawud",
            Collection::Tirmidhi => "Jami` at-Tirmidhi",
            Collection::Nasai => "Sunan an-Nasai",
        }
    }

    pub fn sections(&self) -> u32 {
        match self {
            Collection::Bukhari => 97,
            Collection::Muslim => 56,
            Collection::AbuDawud => 43,
            Collection::Tirmidhi => 49,
            Collection::Nasai => 51,
        }
    }

    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    /// Uniform in `1..=sections()`.
    pub fn random_section<R: Rng>(&self, rng: &mut R) -> u32 {
        rng.random_range(1..=self.sections())
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grade {
    pub grade: String,
    pub name: String,
}

/// One edition of one section as served by the API.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SectionPayload {
    #[serde(default)]
    pub metadata: Option<SectionMetadata>,
    pub hadiths: Vec<RawHadith>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SectionMetadata {
    /// Section titles keyed by the section number as a string.
    #[serde(default)]
    pub section: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawHadith {
    pub hadithnumber: HadithNumber,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub grades: Vec<Grade>,
}

/// A hadith with both language editions merged.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub number: HadithNumber,
    pub text: String,
    pub secondary_text: String,
    pub collection_name: String,
    pub section_name: String,
    pub grades: Vec<Grade>,
}

#[cfg(test)]
mod tests {
    use rand::{
        rngs::StdRng,
        SeedableRng,
    };

    use super::*;

    #[test]
    fn test_random_section_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);

        for collection in Collection::ALL {
            let mut seen_last = false;
            for _ in 0..2_000 {
                let section = collection.random_section(&mut rng);
                assert!(
                    (1..=collection.sections()).contains(&section),
                    "{} sampled section {}",
                    collection.slug(),
                    section
                );
                seen_last |= section == collection.sections();
            }
            assert!(seen_last, "{} never sampled its last section", collection.slug());
        }
    }

    #[test]
    fn test_random_collection_covers_all() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(Collection::random(&mut rng));
        }
        assert_eq!(seen.len(), Collection::ALL.len());
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Collection::AbuDawud.slug(), "abudawud");
        assert_eq!(Collection::Tirmidhi.to_string(), "Jami` at-Tirmidhi");
    }

    #[test]
    fn test_payload_deserialization() {
        let json = r#"{
            "metadata": { "name": "Sahih al-Bukhari", "section": { "1": "Revelation" } },
            "hadiths": [
                { "hadithnumber": 1, "arabicnumber": 1, "text": "Actions are by intentions",
                  "grades": [{ "grade": "Sahih", "name": "Al-Albani" }] },
                { "hadithnumber": 2, "text": "<b>Second</b>" }
            ]
        }"#;

        let payload: SectionPayload = serde_json::from_str(json).unwrap();
        let sections = payload.metadata.unwrap().section.unwrap();
        assert_eq!(sections.get("1").map(String::as_str), Some("Revelation"));
        assert_eq!(payload.hadiths.len(), 2);
        assert_eq!(payload.hadiths[0].hadithnumber, HadithNumber::from(1));
        assert_eq!(payload.hadiths[0].grades[0].name, "Al-Albani");
        assert!(payload.hadiths[1].grades.is_empty());
    }

    #[test]
    fn test_payload_without_metadata() {
        let payload: SectionPayload = serde_json::from_str(r#"{ "hadiths": [] }"#).unwrap();
        assert!(payload.metadata.is_none());
        assert!(payload.hadiths.is_empty());

        assert!(serde_json::from_str::<SectionPayload>(r#"{ "metadata": {} }"#).is_err());
    }
}

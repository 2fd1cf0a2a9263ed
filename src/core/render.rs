use std::{
    borrow::Cow,
    sync::LazyLock,
};

use regex::Regex;

use crate::core::models::{
    Grade,
    Record,
};

static MARKUP_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("markup tag pattern is valid"));

/// Reliability class of a grade label, used to pick its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradeTone {
    Sahih,
    Hasan,
    Daif,
    Unknown,
}

impl GradeTone {
    pub fn rgb(&self) -> [u8; 3] {
        match self {
            GradeTone::Sahih => [0x10, 0xb9, 0x81],
            GradeTone::Hasan => [0xf5, 0x9e, 0x0b],
            GradeTone::Daif => [0xef, 0x44, 0x44],
            GradeTone::Unknown => [0xa3, 0xa3, 0xa3],
        }
    }

    pub fn hex(&self) -> String {
        let [r, g, b] = self.rgb();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GradeChip {
    pub label: String,
    pub source: String,
    pub tone: GradeTone,
}

/// Display-ready view of one record.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    /// The card a generate produced, as opposed to one added by paging.
    pub is_main: bool,
    pub collection_name: String,
    pub badge: String,
    pub section_name: String,
    pub secondary_text: String,
    pub primary_text: String,
    pub grades: Vec<GradeChip>,
}

impl Card {
    pub fn to_html(&self) -> String {
        let class = if self.is_main { "main-verse" } else { "context-verse" };
        format!(
            concat!(
                "<div class=\"verse-card {class}\">",
                "<div class=\"verse-header\">",
                "<span class=\"collection-name\">{collection}</span>",
                "<span class=\"badge\">{badge}</span>",
                "</div>",
                "<div class=\"verse-sub-header\">{section}</div>",
                "<div class=\"arabic-text\">{secondary}</div>",
                "<div class=\"translation-text\">{primary}</div>",
                "<div class=\"grades-footer\">{grades}</div>",
                "</div>"
            ),
            class = class,
            collection = self.collection_name,
            badge = self.badge,
            section = self.section_name,
            secondary = self.secondary_text,
            primary = self.primary_text,
            grades = render_grades_html(&self.grades),
        )
    }
}

pub fn strip_markup(text: &str) -> Cow<'_, str> {
    MARKUP_TAG.replace_all(text, "")
}

/// First match wins, in the order sahih, hasan, daif. Apostrophes and other
/// punctuation are ignored so `Da'if` still reads as daif.
pub fn grade_tone(label: &str) -> GradeTone {
    let normalized: String = label
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect();

    if normalized.contains("sahih") {
        GradeTone::Sahih
    } else if normalized.contains("hasan") {
        GradeTone::Hasan
    } else if normalized.contains("daif") {
        GradeTone::Daif
    } else {
        GradeTone::Unknown
    }
}

pub fn grade_chips(grades: &[Grade]) -> Vec<GradeChip> {
    grades
        .iter()
        .map(|g| GradeChip { label: g.grade.clone(), source: g.name.clone(), tone: grade_tone(&g.grade) })
        .collect()
}

pub fn render_grades_html(grades: &[GradeChip]) -> String {
    grades
        .iter()
        .map(|chip| {
            format!(
                "<span class=\"grade\"><strong style=\"color:{}\">{}</strong> <span class=\"grade-source\">({})</span></span>",
                chip.tone.hex(),
                chip.label,
                chip.source
            )
        })
        .collect()
}

pub fn render_card(record: &Record, is_main: bool) -> Card {
    Card {
        is_main,
        collection_name: record.collection_name.clone(),
        badge: format!("#{}", record.number),
        section_name: record.section_name.clone(),
        secondary_text: record.secondary_text.clone(),
        primary_text: strip_markup(&record.text).into_owned(),
        grades: grade_chips(&record.grades),
    }
}

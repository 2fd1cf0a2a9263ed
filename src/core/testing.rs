use std::{
    collections::{
        HashMap,
        VecDeque,
    },
    future::{
        self,
        Future,
    },
    sync::Mutex,
};

use crate::core::{
    http::{
        Edition,
        SectionSource,
    },
    models::{
        Collection,
        HadithNumber,
        RawHadith,
        Record,
        SectionMetadata,
        SectionPayload,
    },
    render::Card,
    session::NavigationState,
    view::ViewSink,
    HadithError,
};

pub fn payload(entries: &[(i64, &str)]) -> SectionPayload {
    SectionPayload {
        metadata: None,
        hadiths: entries
            .iter()
            .map(|(number, text)| RawHadith {
                hadithnumber: HadithNumber::from(*number),
                text: text.to_string(),
                grades: Vec::new(),
            })
            .collect(),
    }
}

pub fn payload_with_section_name(section: u32, name: &str, entries: &[(i64, &str)]) -> SectionPayload {
    let mut payload = payload(entries);
    payload.metadata = Some(SectionMetadata {
        section: Some(HashMap::from([(section.to_string(), name.to_string())])),
    });
    payload
}

/// Records numbered from 1 with text `hadith {n}`.
pub fn records(len: usize) -> Vec<Record> {
    (1..=len)
        .map(|n| Record {
            number: HadithNumber::from(n as u64),
            text: format!("hadith {n}"),
            secondary_text: String::new(),
            collection_name: Collection::Bukhari.display_name().to_string(),
            section_name: "Chapter 1".to_string(),
            grades: Vec::new(),
        })
        .collect()
}

type Scripted = Result<SectionPayload, HadithError>;

/// Answers each edition request with the next scripted response for that
/// edition, whatever collection and section were asked for. An exhausted
/// script answers with a fetch error.
#[derive(Default)]
pub struct ScriptedSource {
    primary: Mutex<VecDeque<Scripted>>,
    secondary: Mutex<VecDeque<Scripted>>,
    requests: Mutex<Vec<(Edition, Collection, u32)>>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues one section attempt.
    pub fn then(self, primary: Scripted, secondary: Scripted) -> Self {
        self.primary.lock().unwrap().push_back(primary);
        self.secondary.lock().unwrap().push_back(secondary);
        self
    }

    pub fn then_ok(self, primary: SectionPayload, secondary: SectionPayload) -> Self {
        self.then(Ok(primary), Ok(secondary))
    }

    pub fn requests(&self) -> Vec<(Edition, Collection, u32)> {
        self.requests.lock().unwrap().clone()
    }

    /// Sections requested for the primary edition, one per attempt.
    pub fn attempted_sections(&self) -> Vec<(Collection, u32)> {
        self.requests()
            .into_iter()
            .filter(|(edition, _, _)| *edition == Edition::Primary)
            .map(|(_, collection, section)| (collection, section))
            .collect()
    }
}

impl SectionSource for ScriptedSource {
    fn fetch_edition(
        &self,
        edition: Edition,
        collection: Collection,
        section: u32,
    ) -> impl Future<Output = Result<SectionPayload, HadithError>> + Send {
        self.requests.lock().unwrap().push((edition, collection, section));

        let queue = match edition {
            Edition::Primary => &self.primary,
            Edition::Secondary => &self.secondary,
        };
        let next = queue.lock().unwrap().pop_front().unwrap_or_else(|| {
            Err(HadithError::Fetch {
                url: format!("scripted://{:?}/{}/{}", edition, collection.slug(), section),
                reason: "no scripted response".to_string(),
            })
        });

        future::ready(next)
    }
}

/// A [`ViewSink`] that keeps everything in plain fields and logs each call.
#[derive(Debug)]
pub struct RecordingSink {
    pub cards: VecDeque<Card>,
    pub busy: bool,
    pub generate_enabled: bool,
    pub error: Option<String>,
    pub navigation: Option<NavigationState>,
    pub events: Vec<String>,
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self {
            cards: VecDeque::new(),
            busy: false,
            generate_enabled: true,
            error: None,
            navigation: None,
            events: Vec::new(),
        }
    }
}

impl RecordingSink {
    pub fn badges(&self) -> Vec<&str> {
        self.cards.iter().map(|card| card.badge.as_str()).collect()
    }
}

impl ViewSink for RecordingSink {
    fn clear(&mut self) {
        self.cards.clear();
        self.events.push("clear".to_string());
    }

    fn insert_start(&mut self, card: Card) {
        self.events.push(format!("insert_start {}", card.badge));
        self.cards.push_front(card);
    }

    fn insert_end(&mut self, card: Card) {
        self.events.push(format!("insert_end {}", card.badge));
        self.cards.push_back(card);
    }

    fn set_busy(&mut self, busy: bool) {
        self.busy = busy;
        self.events.push(format!("busy {busy}"));
    }

    fn set_generate_enabled(&mut self, enabled: bool) {
        self.generate_enabled = enabled;
        self.events.push(format!("generate_enabled {enabled}"));
    }

    fn show_error(&mut self, message: &str) {
        self.error = Some(message.to_string());
        self.events.push("show_error".to_string());
    }

    fn hide_error(&mut self) {
        self.error = None;
        self.events.push("hide_error".to_string());
    }

    fn set_navigation(&mut self, navigation: NavigationState) {
        self.navigation = Some(navigation);
        self.events.push("set_navigation".to_string());
    }

    fn hide_navigation(&mut self) {
        self.navigation = None;
        self.events.push("hide_navigation".to_string());
    }
}

use rand::Rng;
use tracing::{
    debug,
    error,
    info,
    warn,
};

use crate::core::{
    http::{
        Edition,
        SectionSource,
    },
    merge::merge_editions,
    models::Collection,
    render::render_card,
    retry::{
        retry_bounded,
        RetryExhausted,
    },
    session::{
        Direction,
        Session,
    },
    view::ViewSink,
    HadithError,
};

/// The only failure text the reader ever sees; details go to the log.
pub const GENERIC_ERROR_MESSAGE: &str = "Failed to fetch hadith. Please try again.";

/// Fetches both editions of one section concurrently and merges them.
///
/// Either edition failing fails the whole section. Nothing is committed here;
/// the caller decides what to do with the returned session.
pub async fn fetch_section<S: SectionSource>(
    source: &S,
    collection: Collection,
    section: u32,
) -> Result<Session, HadithError> {
    let (primary, secondary) = futures::try_join!(
        source.fetch_edition(Edition::Primary, collection, section),
        source.fetch_edition(Edition::Secondary, collection, section),
    )?;

    let records = merge_editions(collection, section, primary, &secondary);
    Session::new(collection, section, records)
}

fn after_failure(attempt: usize, max_attempts: usize, error: &HadithError) -> &'static str {
    if attempt < max_attempts && error.is_retryable() {
        "retrying"
    } else {
        "giving up"
    }
}

/// Picks a random collection, then tries up to `max_attempts` random sections
/// of it until one fetches and merges into a non-empty session. The session
/// starts at a random position.
pub async fn generate_session<S: SectionSource, R: Rng>(
    source: &S,
    rng: &mut R,
    max_attempts: usize,
) -> Result<Session, HadithError> {
    let collection = Collection::random(rng);
    info!("Generating from {} ({} sections)", collection, collection.sections());

    let outcome = retry_bounded(max_attempts, HadithError::is_retryable, |attempt| {
        let section = collection.random_section(rng);
        async move {
            let result = fetch_section(source, collection, section).await;
            if let Err(e) = &result {
                warn!(
                    "Attempt {}/{}: section {} of {} failed, {}: {}",
                    attempt,
                    max_attempts,
                    section,
                    collection.slug(),
                    after_failure(attempt, max_attempts, e),
                    e
                );
            }
            result
        }
    })
    .await;

    match outcome {
        Ok(session) => Ok(session.with_random_position(rng)),
        Err(RetryExhausted { last_error: Some(e), .. }) if !e.is_retryable() => Err(e),
        Err(RetryExhausted { attempts, .. }) => {
            Err(HadithError::NoValidSection { collection, attempts })
        }
    }
}

pub struct Controller<S> {
    source: S,
    max_attempts: usize,
    session: Option<Session>,
    busy: bool,
}

impl<S: SectionSource> Controller<S> {
    pub fn new(source: S, max_attempts: usize) -> Self {
        Self { source, max_attempts, session: None, busy: false }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Resets the view and marks a generate as in flight. Returns `false`
    /// without touching anything if one already is.
    pub fn begin_generate(&mut self, sink: &mut impl ViewSink) -> bool {
        if self.busy {
            debug!("Generate already in flight, ignoring");
            return false;
        }

        self.busy = true;
        sink.clear();
        sink.hide_error();
        sink.hide_navigation();
        sink.set_busy(true);
        sink.set_generate_enabled(false);
        true
    }

    /// Commits a successful session and shows its current record, or reports
    /// the failure and keeps whatever session was there before.
    pub fn finish_generate(
        &mut self,
        result: Result<Session, HadithError>,
        sink: &mut impl ViewSink,
    ) -> Result<(), HadithError> {
        self.busy = false;

        let outcome = match result {
            Ok(session) => {
                info!(
                    "Loaded {} section {} ({} hadiths), starting at #{}",
                    session.collection().slug(),
                    session.section(),
                    session.len(),
                    session.current().number
                );
                sink.clear();
                sink.insert_end(render_card(session.current(), true));
                sink.set_navigation(session.navigation());
                self.session = Some(session);
                Ok(())
            }
            Err(e) => {
                error!("Generate failed: {}", e);
                sink.show_error(GENERIC_ERROR_MESSAGE);
                Err(e)
            }
        };

        sink.set_busy(false);
        sink.set_generate_enabled(true);
        outcome
    }

    pub async fn generate<R: Rng>(
        &mut self,
        rng: &mut R,
        sink: &mut impl ViewSink,
    ) -> Result<(), HadithError> {
        if !self.begin_generate(sink) {
            return Ok(());
        }

        let result = generate_session(&self.source, rng, self.max_attempts).await;
        self.finish_generate(result, sink)
    }

    /// Shows one more record before or after the visible ones. Returns `false`
    /// when there is no session or nothing further in that direction.
    pub fn navigate(&mut self, direction: Direction, sink: &mut impl ViewSink) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        let Some(record) = session.step(direction) else {
            debug!("No more hadiths {:?} in this section", direction);
            return false;
        };

        let card = render_card(record, false);
        match direction {
            Direction::Previous => sink.insert_start(card),
            Direction::Next => sink.insert_end(card),
        }

        self.update_navigation(sink);
        true
    }

    pub fn update_navigation(&self, sink: &mut impl ViewSink) {
        match &self.session {
            Some(session) => sink.set_navigation(session.navigation()),
            None => sink.hide_navigation(),
        }
    }
}

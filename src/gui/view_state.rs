use std::collections::VecDeque;

use crate::core::{
    render::Card,
    view::ViewSink,
    NavigationState,
};

/// Keeps the reader's place when cards are added above the viewport.
///
/// The scroll area reports its offset and content height after every frame.
/// After a prepend the next report carries the taller content, and the
/// difference is added to the offset applied on the following frame.
#[derive(Debug, Default)]
pub struct ScrollAnchor {
    offset: f32,
    content_height: f32,
    pending_prepend: bool,
    correction: Option<f32>,
}

impl ScrollAnchor {
    pub fn mark_prepend(&mut self) {
        self.pending_prepend = true;
    }

    pub fn reset(&mut self) {
        *self = Self { correction: Some(0.0), ..Self::default() };
    }

    /// Offset to force on the scroll area this frame, if any.
    pub fn take_correction(&mut self) -> Option<f32> {
        self.correction.take()
    }

    pub fn observe(&mut self, offset: f32, content_height: f32) {
        if self.pending_prepend {
            let grown = (content_height - self.content_height).max(0.0);
            let target = self.offset + grown;
            self.correction = Some(target);
            self.offset = target;
            self.pending_prepend = false;
        } else {
            self.offset = offset;
        }
        self.content_height = content_height;
    }
}

pub struct ViewState {
    pub cards: VecDeque<Card>,
    pub busy: bool,
    pub generate_enabled: bool,
    pub error: Option<String>,
    pub navigation: Option<NavigationState>,
    pub anchor: ScrollAnchor,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            cards: VecDeque::new(),
            busy: false,
            generate_enabled: true,
            error: None,
            navigation: None,
            anchor: ScrollAnchor::default(),
        }
    }
}

impl ViewSink for ViewState {
    fn clear(&mut self) {
        self.cards.clear();
        self.anchor.reset();
    }

    fn insert_start(&mut self, card: Card) {
        self.cards.push_front(card);
        self.anchor.mark_prepend();
    }

    fn insert_end(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    fn set_busy(&mut self, busy: bool) {
        self.busy = busy;
    }

    fn set_generate_enabled(&mut self, enabled: bool) {
        self.generate_enabled = enabled;
    }

    fn show_error(&mut self, message: &str) {
        self.error = Some(message.to_string());
    }

    fn hide_error(&mut self) {
        self.error = None;
    }

    fn set_navigation(&mut self, navigation: NavigationState) {
        self.navigation = Some(navigation);
    }

    fn hide_navigation(&mut self) {
        self.navigation = None;
    }
}

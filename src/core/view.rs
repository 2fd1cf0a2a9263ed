use crate::core::{
    render::Card,
    session::NavigationState,
};

/// The surface the controller draws on.
///
/// Implementations own layout. In particular `insert_start` must keep the
/// reader's scroll anchor: content added above the viewport pushes the scroll
/// offset down by the height it introduced.
pub trait ViewSink {
    fn clear(&mut self);
    fn insert_start(&mut self, card: Card);
    fn insert_end(&mut self, card: Card);
    fn set_busy(&mut self, busy: bool);
    fn set_generate_enabled(&mut self, enabled: bool);
    fn show_error(&mut self, message: &str);
    fn hide_error(&mut self);
    fn set_navigation(&mut self, navigation: NavigationState);
    fn hide_navigation(&mut self);
}

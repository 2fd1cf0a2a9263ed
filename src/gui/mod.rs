pub mod app;
pub mod cards;
pub mod error_banner;
pub mod message_overlay;
pub mod theme;
pub mod view_state;

pub use app::HadithApp;

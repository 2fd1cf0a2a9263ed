pub mod controller;
pub mod errors;
pub mod http;
pub mod merge;
pub mod models;
pub mod render;
pub mod retry;
pub mod session;
pub mod settings;
pub mod tasks;
pub mod view;

#[cfg(test)]
pub(crate) mod testing;

pub use controller::Controller;
pub use errors::HadithError;
pub use models::{ Collection, Grade, Record };
pub use session::{ Direction, NavigationState, Session };

mod app;
pub mod components;
mod state;

pub use app::StoriesApp;

pub mod types;

pub use types::{Story, User};

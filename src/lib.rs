pub mod arg;
pub mod command;
pub mod core;
pub mod errors;
pub mod extensions;
pub mod logging;
pub mod profile;
pub mod prompter;
pub mod ui;

pub use crate::profile::{Profile, ProfileInfo};

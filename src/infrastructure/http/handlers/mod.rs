//! HTTP Handlers

mod bootcamp;
mod course;
mod ping;

pub use bootcamp::*;
pub use course::*;
pub use ping::*;

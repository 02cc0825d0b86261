mod chat;
mod common;
mod content;
mod matching;
mod profile;
mod questionnaire;

pub use chat::*;
pub use common::*;
pub use content::*;
pub use matching::*;
pub use profile::*;
pub use questionnaire::*;

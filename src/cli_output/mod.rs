//! CLI output utilities: quote cards, headers, error panels and toasts.

mod boxes;
mod card;

pub use boxes::*;
pub use card::*;

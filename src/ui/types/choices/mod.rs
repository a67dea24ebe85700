mod tally_choice;
mod ui_choice;

pub use tally_choice::*;
pub use ui_choice::UIChoice;

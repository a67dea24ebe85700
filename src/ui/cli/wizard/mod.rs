mod wizard;

pub use wizard::{prompt_ballots, prompt_choice, prompt_poll, prompt_tally};

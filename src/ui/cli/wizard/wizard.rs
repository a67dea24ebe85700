use anyhow::{Context, Result};
use strum::{EnumMessage, IntoEnumIterator};

use crate::ui::cli::drivers::PromptDriver;
use crate::ui::types::choices::{TallyChoice, TallyKind, TrimmedMeanParameters, UIChoice};
use crate::ui::types::config::PollConfig;
use crate::utils::file_parsing::parse_ballots;

const DIM_ITALIC: &str = "\x1b[2m\x1b[3m";
const RESET: &str = "\x1b[0m";

fn kind_labels<K>() -> Vec<(K, String)>
where
    K: Copy + Into<&'static str> + EnumMessage + IntoEnumIterator,
{
    K::iter()
        .map(|k| {
            let label = k.get_message().unwrap_or_else(|| k.into());
            let desc = k.get_detailed_message().unwrap_or("");
            let text = if desc.is_empty() {
                label.to_string()
            } else {
                format!("{label}  {DIM_ITALIC}{desc}{RESET}")
            };
            (k, text)
        })
        .collect()
}

pub fn prompt_choice<C: UIChoice, D: PromptDriver>(driver: &D) -> Result<C::Kind> {
    let (kinds, labels): (Vec<C::Kind>, Vec<String>) = kind_labels::<C::Kind>().into_iter().unzip();
    let idx = driver.select(C::prompt_label(), C::prompt_help(), labels)?;
    kinds
        .get(idx)
        .copied()
        .with_context(|| format!("no option at index {idx}"))
}

pub fn prompt_tally<D: PromptDriver>(driver: &D) -> Result<TallyChoice> {
    let kind = prompt_choice::<TallyChoice, D>(driver)?;
    let params = match kind {
        TallyKind::TrimmedMean => {
            let defaults = TrimmedMeanParameters::default();
            let trim_fraction = driver.ask_f64(
                "Trim fraction",
                "Fraction of ballots dropped from each end",
                defaults.trim_fraction,
                Some(0.0),
                Some(0.5),
            )?;
            serde_json::to_value(TrimmedMeanParameters { trim_fraction })?
        }
        _ => TallyChoice::default_params(kind),
    };
    TallyChoice::from_parts(kind, params)
}

/// Asks for ballots line by line until an empty answer. A line may hold
/// several comma or space separated values.
pub fn prompt_ballots<D: PromptDriver>(driver: &D) -> Result<Vec<f64>> {
    let mut ballots = Vec::new();
    loop {
        let title = format!("Ballot #{}", ballots.len() + 1);
        let answer = driver.ask_string(&title, "leave blank to finish", "")?;
        let answer = answer.trim();
        if answer.is_empty() {
            break;
        }
        let parsed = parse_ballots(answer)
            .with_context(|| format!("invalid ballot input {answer:?}"))?;
        ballots.extend(parsed);
    }
    Ok(ballots)
}

pub fn prompt_poll<D: PromptDriver>(driver: &D) -> Result<PollConfig> {
    let tally = prompt_tally(driver)?;
    let ballots = prompt_ballots(driver)?;
    Ok(PollConfig { tally, ballots })
}

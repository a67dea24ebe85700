use crate::ui::cli::drivers::PromptDriver;
use anyhow::Result;
use inquire::{CustomType, Select, Text, validator::Validation};
use std::fmt::{Display, Formatter};

pub struct InquireDriver;

struct Indexed {
    index: usize,
    text: String,
}

impl Display for Indexed {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl PromptDriver for InquireDriver {
    fn ask_string(&self, title: &str, help: &str, default: &str) -> Result<String> {
        Ok(Text::new(title)
            .with_initial_value(default)
            .with_help_message(help)
            .prompt()?)
    }

    fn ask_f64(
        &self,
        title: &str,
        help: &str,
        default: f64,
        min: Option<f64>,
        max: Option<f64>,
    ) -> Result<f64> {
        let mut q = CustomType::<f64>::new(title)
            .with_default(default)
            .with_help_message(help);

        if let (Some(lo), Some(hi)) = (min, max) {
            q = q.with_validator(move |x: &f64| {
                if *x >= lo && *x < hi {
                    Ok(Validation::Valid)
                } else {
                    Ok(Validation::Invalid(
                        format!("Must be in [{lo}, {hi})").into(),
                    ))
                }
            });
        } else if let Some(lo) = min {
            q = q.with_validator(move |x: &f64| {
                if *x >= lo {
                    Ok(Validation::Valid)
                } else {
                    Ok(Validation::Invalid(format!("Must be ≥ {lo}").into()))
                }
            });
        } else if let Some(hi) = max {
            q = q.with_validator(move |x: &f64| {
                if *x < hi {
                    Ok(Validation::Valid)
                } else {
                    Ok(Validation::Invalid(format!("Must be < {hi}").into()))
                }
            });
        }

        Ok(q.prompt()?)
    }

    fn select(&self, title: &str, help: Option<&str>, options: Vec<String>) -> Result<usize> {
        let items: Vec<Indexed> = options
            .into_iter()
            .enumerate()
            .map(|(index, text)| Indexed { index, text })
            .collect();

        let mut select = Select::new(title, items);
        if let Some(help) = help {
            select = select.with_help_message(help);
        }
        Ok(select.prompt()?.index)
    }
}

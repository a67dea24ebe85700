use crate::ui::cli::drivers::PromptDriver;
use anyhow::{Result, bail};
use std::cell::RefCell;
use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    Text(String),
    Number(f64),
    Select(usize),
}

/// Replays a fixed list of answers in order; any mismatch between the
/// expected and the next answer kind is an error.
pub struct ScriptedDriver {
    answers: RefCell<VecDeque<Answer>>,
}

impl ScriptedDriver {
    pub fn new(answers: Vec<Answer>) -> Self {
        Self {
            answers: RefCell::new(answers.into()),
        }
    }

    pub fn is_drained(&self) -> bool {
        self.answers.borrow().is_empty()
    }

    fn next(&self, title: &str) -> Result<Answer> {
        match self.answers.borrow_mut().pop_front() {
            Some(a) => Ok(a),
            None => bail!("no scripted answer left for {title:?}"),
        }
    }
}

impl PromptDriver for ScriptedDriver {
    fn ask_string(&self, title: &str, _help: &str, _default: &str) -> Result<String> {
        match self.next(title)? {
            Answer::Text(s) => Ok(s),
            other => bail!("expected text for {title:?}, got {other:?}"),
        }
    }

    fn ask_f64(
        &self,
        title: &str,
        _help: &str,
        _default: f64,
        _min: Option<f64>,
        _max: Option<f64>,
    ) -> Result<f64> {
        match self.next(title)? {
            Answer::Number(x) => Ok(x),
            other => bail!("expected number for {title:?}, got {other:?}"),
        }
    }

    fn select(&self, title: &str, _help: Option<&str>, _options: Vec<String>) -> Result<usize> {
        match self.next(title)? {
            Answer::Select(i) => Ok(i),
            other => bail!("expected selection for {title:?}, got {other:?}"),
        }
    }
}

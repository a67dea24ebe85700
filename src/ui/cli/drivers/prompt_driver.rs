use anyhow::Result;

/// Source of interactive answers. The wizard talks only to this trait so it
/// can be driven by a terminal or by a scripted stub.
pub trait PromptDriver {
    fn ask_string(&self, title: &str, help: &str, default: &str) -> Result<String>;
    fn ask_f64(
        &self,
        title: &str,
        help: &str,
        default: f64,
        min: Option<f64>,
        max: Option<f64>,
    ) -> Result<f64>;
    /// Returns the index of the chosen option.
    fn select(&self, title: &str, help: Option<&str>, options: Vec<String>) -> Result<usize>;
}

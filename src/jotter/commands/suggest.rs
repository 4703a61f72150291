use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::oracle::PredictionOracle;
use crate::suggest::Suggester;

/// Build a suggestion preview. Nothing is stored.
pub fn run<O: PredictionOracle>(
    suggester: &Suggester<O>,
    seed: &str,
    count: usize,
) -> Result<CmdResult> {
    let suggestion = suggester.suggest(seed, count)?;

    let mut result = CmdResult::default();
    let appended = suggestion.words.iter().filter(|w| !w.is_empty()).count();
    if appended < count {
        result.add_message(CmdMessage::info(format!(
            "{} of {} predictions had no matching word",
            count - appended,
            count
        )));
    }
    Ok(result.with_suggestion(suggestion))
}

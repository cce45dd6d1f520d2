use super::state::ResultState;

/// Display-ready text for the results panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayModel {
    pub score_text: String,
    pub matched_text: String,
    pub suggested_text: String,
}

impl DisplayModel {
    pub fn score_line(&self) -> String {
        format!("Match Score: {}", self.score_text)
    }
}

pub fn render(state: &ResultState) -> Option<DisplayModel> {
    let result = state.get()?;

    Some(DisplayModel {
        score_text: format!("{:.3}", result.match_score),
        matched_text: result.matched_keywords.join(", "),
        suggested_text: result.suggested_keywords.join(", "),
    })
}

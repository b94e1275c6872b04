use super::SessionState;

/// Result of a use case: the next session state, plus an optional transient
/// notice for the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub state: SessionState,
    pub notice: Option<String>,
    pub history_changed: bool,
}

impl Outcome {
    pub fn new(state: SessionState) -> Outcome {
        return Outcome {
            state,
            notice: None,
            history_changed: false,
        };
    }

    pub fn with_notice(state: SessionState, notice: &str) -> Outcome {
        return Outcome {
            state,
            notice: Some(notice.to_string()),
            history_changed: false,
        };
    }
}

// View state machine states

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Voting,
    Dashboard,
}

impl ViewState {
    pub fn is_dashboard(self) -> bool {
        self == ViewState::Dashboard
    }
}

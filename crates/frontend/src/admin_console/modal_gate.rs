/// Visibility of the "add a team to the sidebar" dialog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TeamSelectGate {
    #[default]
    Closed,
    Open,
}

impl TeamSelectGate {
    pub fn is_open(&self) -> bool {
        matches!(self, TeamSelectGate::Open)
    }

    pub fn show(&mut self) {
        *self = TeamSelectGate::Open;
    }

    /// Closes the dialog and hands back the chosen team, which the caller
    /// adds to the sidebar. Ignored while closed.
    pub fn choose(&mut self, team_id: &str) -> Option<String> {
        if !self.is_open() {
            return None;
        }
        *self = TeamSelectGate::Closed;
        Some(team_id.to_string())
    }

    pub fn dismiss(&mut self) {
        *self = TeamSelectGate::Closed;
    }
}

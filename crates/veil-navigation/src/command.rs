//! UI command vocabulary
//!
//! Every gesture on the chrome (form submit, tab click, close click, nav
//! button) maps to one discrete command fed to the controller's
//! dispatcher, keeping the state machine independent of any UI toolkit.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavDirection {
    Back,
    Forward,
    Reload,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UiCommand {
    /// Address bar form submission with the raw typed text
    Submit(String),
    /// Open a tab at the end of the strip and focus it
    NewTab,
    /// Focus the tab with this session id
    ActivateTab(String),
    /// Close the tab with this session id
    CloseTab(String),
    /// Back/forward/reload on the active tab's surface
    Navigate(NavDirection),
}

impl UiCommand {
    /// Stable name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            UiCommand::Submit(_) => "submit",
            UiCommand::NewTab => "new_tab",
            UiCommand::ActivateTab(_) => "activate_tab",
            UiCommand::CloseTab(_) => "close_tab",
            UiCommand::Navigate(NavDirection::Back) => "back",
            UiCommand::Navigate(NavDirection::Forward) => "forward",
            UiCommand::Navigate(NavDirection::Reload) => "reload",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_names() {
        assert_eq!(UiCommand::Submit("x".to_string()).name(), "submit");
        assert_eq!(UiCommand::NewTab.name(), "new_tab");
        assert_eq!(UiCommand::Navigate(NavDirection::Reload).name(), "reload");
    }
}

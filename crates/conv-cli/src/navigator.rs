use conv_client::Navigator;
use log::info;

/// Sends the user back to the login step by telling them how to sign in again
#[derive(Debug, Clone)]
pub struct TerminalNavigator {
    login_path: String,
}

impl TerminalNavigator {
    pub fn new(login_path: impl Into<String>) -> Self {
        Self {
            login_path: login_path.into(),
        }
    }
}

impl Navigator for TerminalNavigator {
    fn redirect_to_login(&self) {
        info!("Redirecting to {}", self.login_path);
        eprintln!("Your session has ended. Sign in again with: conv login --username <name>");
    }
}

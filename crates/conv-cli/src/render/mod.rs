//! Terminal views: the shell header, the records table and cards, and the
//! dashboard.

pub mod cards;
pub mod dashboard;
pub mod format;
pub mod table;

use conv_core::UserProfile;

/// Zone name, else `#id`, else the empty marker
pub fn zone_label(user: &UserProfile) -> String {
    match (user.zone_name(), user.zone_id()) {
        (Some(name), _) => name.to_string(),
        (None, Some(id)) => format!("#{id}"),
        (None, None) => format::EMPTY_CELL.to_string(),
    }
}

/// Line printed above every guarded view
pub fn header(user: Option<&UserProfile>) -> String {
    let line = match user {
        Some(user) => format!("{} | Zone: {}", user.display_name(), zone_label(user)),
        None => "Signed in".to_string(),
    };
    let rule = "=".repeat(line.chars().count());
    format!("{line}\n{rule}\n")
}

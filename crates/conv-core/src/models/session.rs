use crate::UserProfile;

/// Credential plus the profile that came with it.
///
/// A session only exists while a token exists; `user` is `None` when the
/// stored profile could not be read back.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: Option<UserProfile>,
}

impl Session {
    pub fn new(token: impl Into<String>, user: Option<UserProfile>) -> Self {
        Self {
            token: token.into(),
            user,
        }
    }

    pub fn user_id(&self) -> Option<i64> {
        self.user.as_ref().map(|u| u.id)
    }

    pub fn zone_id(&self) -> Option<i64> {
        self.user.as_ref().and_then(UserProfile::zone_id)
    }
}

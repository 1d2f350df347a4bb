use crate::config::UpgradeConfig;
use crate::models::User;

/// Identity and locale of the running process.
pub trait IUserContext: Send + Sync {
    fn authenticated_user(&self) -> Option<User>;
    fn locale(&self) -> String;
}

/// Fixed user and locale, for batch runs with no interactive session.
#[derive(Debug, Clone)]
pub struct StaticUserContext {
    pub user: Option<User>,
    pub locale: String,
}

impl StaticUserContext {
    pub fn new(user: Option<User>, locale: impl Into<String>) -> Self {
        Self {
            user,
            locale: locale.into(),
        }
    }

    pub fn from_config(config: &UpgradeConfig) -> Self {
        Self::new(
            Some(User {
                user_id: config.effective_creator_user_id(),
                username: config.effective_creator_username().to_string(),
            }),
            config.effective_locale(),
        )
    }
}

impl IUserContext for StaticUserContext {
    fn authenticated_user(&self) -> Option<User> {
        self.user.clone()
    }

    fn locale(&self) -> String {
        self.locale.clone()
    }
}

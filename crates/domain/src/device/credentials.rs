use std::fmt;

use serde::{Deserialize, Serialize};

/// API user and password bound to every endpoint client at construction
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiCredentials {
    pub user: String,
    pub password: String,
}

impl ApiCredentials {
    pub fn new(user: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for ApiCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiCredentials")
            .field("user", &self.user)
            .field("password", &"***")
            .finish()
    }
}

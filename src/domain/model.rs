use serde::{Deserialize, Serialize};

/// One account as listed by a followers/following endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Case-sensitive identity key (`login` upstream).
    pub identity: String,
    pub display_handle: String,
    pub avatar_url: String,
    pub profile_url: String,
}

/// Listing in arrival order. Not deduplicated.
pub type UserCollection = Vec<UserRecord>;

/// Wire shape of a listing entry. Missing fields fail the whole page.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiUser {
    pub login: String,
    pub avatar_url: String,
    pub html_url: String,
}

impl From<ApiUser> for UserRecord {
    fn from(user: ApiUser) -> Self {
        Self {
            display_handle: user.login.clone(),
            identity: user.login,
            avatar_url: user.avatar_url,
            profile_url: user.html_url,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ResolutionResult {
    Single {
        mutual_followers: UserCollection,
    },
    Multi {
        mutual_followers: UserCollection,
        mutual_following: UserCollection,
    },
}

impl ResolutionResult {
    pub fn mutual_followers(&self) -> &[UserRecord] {
        match self {
            ResolutionResult::Single { mutual_followers }
            | ResolutionResult::Multi {
                mutual_followers, ..
            } => mutual_followers,
        }
    }

    pub fn mutual_following(&self) -> Option<&[UserRecord]> {
        match self {
            ResolutionResult::Single { .. } => None,
            ResolutionResult::Multi {
                mutual_following, ..
            } => Some(mutual_following),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DataSource {
    Live,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub source: DataSource,
    #[serde(flatten)]
    pub result: ResolutionResult,
}

impl Resolution {
    pub fn is_fallback(&self) -> bool {
        self.source == DataSource::Fallback
    }
}

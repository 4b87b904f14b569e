use crate::core::intersect::intersect_by_identity;
use crate::domain::model::{ResolutionResult, UserCollection, UserRecord};
use crate::utils::error::{MutualError, Result};

pub const MOCK_USER_COUNT: usize = 10;

const MOCK_FOLLOWERS: std::ops::Range<usize> = 0..7;
const MOCK_FOLLOWING: std::ops::Range<usize> = 3..10;

/// `mockUser1` through `mockUser10`.
pub fn mock_users() -> UserCollection {
    (1..=MOCK_USER_COUNT)
        .map(|i| UserRecord {
            identity: format!("mockUser{}", i),
            display_handle: format!("mockUser{}", i),
            avatar_url: format!("https://via.placeholder.com/60?text=User{}", i),
            profile_url: format!("https://example.com/mockUser{}", i),
        })
        .collect()
}

pub fn mock_followers() -> UserCollection {
    slice(MOCK_FOLLOWERS)
}

pub fn mock_following() -> UserCollection {
    slice(MOCK_FOLLOWING)
}

fn slice(range: std::ops::Range<usize>) -> UserCollection {
    mock_users()
        .into_iter()
        .skip(range.start)
        .take(range.end - range.start)
        .collect()
}

/// Mock stand-in for a throttled resolution of `usernames`.
///
/// One user gets `mock followers ∩ mock following`. Several users get that
/// same intersection as mutual followers and the whole mock following list
/// as mutual following.
pub fn fallback_result(usernames: &[String]) -> Result<ResolutionResult> {
    let followers = mock_followers();
    let following = mock_following();
    let mutual_followers = intersect_by_identity(&followers, &following);

    match usernames {
        [] => Err(MutualError::EmptyInput),
        [_] => Ok(ResolutionResult::Single { mutual_followers }),
        _ => Ok(ResolutionResult::Multi {
            mutual_followers,
            mutual_following: following,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identities(collection: &[UserRecord]) -> Vec<String> {
        collection.iter().map(|u| u.identity.clone()).collect()
    }

    #[test]
    fn test_mock_users_are_deterministic() {
        let users = mock_users();
        assert_eq!(users.len(), MOCK_USER_COUNT);
        assert_eq!(users[0].identity, "mockUser1");
        assert_eq!(users[9].avatar_url, "https://via.placeholder.com/60?text=User10");
        assert_eq!(users, mock_users());
    }

    #[test]
    fn test_mock_slices_overlap_by_four() {
        let followers = mock_followers();
        let following = mock_following();

        assert_eq!(followers.len(), 7);
        assert_eq!(following.len(), 7);
        assert_eq!(following[0].identity, "mockUser4");
        assert_eq!(
            identities(&intersect_by_identity(&followers, &following)),
            vec!["mockUser4", "mockUser5", "mockUser6", "mockUser7"]
        );
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_single_user_fallback_is_the_overlap() {
        let result = fallback_result(&names(&["alice"])).unwrap();

        assert!(result.mutual_following().is_none());
        assert_eq!(
            identities(result.mutual_followers()),
            vec!["mockUser4", "mockUser5", "mockUser6", "mockUser7"]
        );
    }

    #[test]
    fn test_multi_user_fallback_sections() {
        let result = fallback_result(&names(&["alice", "bob", "carol"])).unwrap();

        assert_eq!(
            identities(result.mutual_followers()),
            vec!["mockUser4", "mockUser5", "mockUser6", "mockUser7"]
        );
        assert_eq!(result.mutual_following().unwrap(), mock_following().as_slice());
    }

    #[test]
    fn test_fallback_without_usernames() {
        assert!(matches!(fallback_result(&[]), Err(MutualError::EmptyInput)));
    }
}

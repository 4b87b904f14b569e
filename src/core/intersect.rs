use crate::domain::model::{UserCollection, UserRecord};
use crate::utils::error::{MutualError, Result};
use std::collections::HashSet;

/// Records of `first` whose identity also appears in `other`, in `first` order.
pub fn intersect_by_identity(first: &[UserRecord], other: &[UserRecord]) -> UserCollection {
    let identities: HashSet<&str> = other.iter().map(|user| user.identity.as_str()).collect();

    first
        .iter()
        .filter(|user| identities.contains(user.identity.as_str()))
        .cloned()
        .collect()
}

/// N-way intersection folded from the first collection.
///
/// An empty slice has no first collection to fold from and is rejected with
/// [`MutualError::EmptyInput`].
pub fn intersect_all(collections: &[UserCollection]) -> Result<UserCollection> {
    let (first, rest) = collections.split_first().ok_or(MutualError::EmptyInput)?;

    Ok(rest
        .iter()
        .fold(first.clone(), |acc, next| intersect_by_identity(&acc, next)))
}

pub mod presenter;

use crate::core::input::parse_usernames;
use crate::core::resolver::MutualResolver;
use crate::domain::model::Resolution;
use crate::domain::ports::UserDirectory;
use crate::utils::error::{MutualError, Result};
use presenter::{Presenter, View};

/// Parses the username field, resolves, and hands every state to the presenter.
pub async fn find_mutuals<D, P>(
    resolver: &MutualResolver<D>,
    input: &str,
    presenter: &mut P,
) -> Result<Resolution>
where
    D: UserDirectory + 'static,
    P: Presenter + ?Sized,
{
    let usernames = parse_usernames(input);
    if usernames.is_empty() {
        presenter.show(View::NoInput)?;
        return Err(MutualError::EmptyInput);
    }

    presenter.show(View::Loading)?;

    match resolver.resolve(&usernames).await {
        Ok(resolution) => {
            presenter.show(View::Results(&resolution))?;
            Ok(resolution)
        }
        Err(e) => {
            presenter.show(View::Error(&e))?;
            Err(e)
        }
    }
}

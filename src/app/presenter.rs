use crate::domain::model::{Resolution, ResolutionResult, UserRecord};
use crate::utils::error::{MutualError, Result};
use std::io::Write;

pub const NO_INPUT_MESSAGE: &str = "Please enter at least one username.";
pub const FALLBACK_NOTICE: &str = "Rate limit exceeded. Showing mock data.";

#[derive(Debug)]
pub enum View<'a> {
    Loading,
    NoInput,
    Results(&'a Resolution),
    Error(&'a MutualError),
}

pub trait Presenter {
    fn show(&mut self, view: View<'_>) -> Result<()>;
}

/// Card list for one user, labelled sections for several.
pub struct TextPresenter<W: Write> {
    out: W,
}

impl<W: Write> TextPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_cards(&mut self, users: &[UserRecord]) -> Result<()> {
        for user in users {
            writeln!(
                self.out,
                "  {:<24} {}  [avatar: {}]",
                user.display_handle, user.profile_url, user.avatar_url
            )?;
        }
        Ok(())
    }

    fn write_section(&mut self, title: &str, users: &[UserRecord]) -> Result<()> {
        writeln!(self.out, "{}", title)?;
        if users.is_empty() {
            writeln!(self.out, "  No results found.")?;
        } else {
            self.write_cards(users)?;
        }
        Ok(())
    }
}

impl<W: Write> Presenter for TextPresenter<W> {
    fn show(&mut self, view: View<'_>) -> Result<()> {
        match view {
            View::Loading => writeln!(self.out, "Loading...")?,
            View::NoInput => writeln!(self.out, "{}", NO_INPUT_MESSAGE)?,
            View::Error(e) => writeln!(self.out, "Error: {}", e)?,
            View::Results(resolution) => {
                if resolution.is_fallback() {
                    writeln!(self.out, "{}", FALLBACK_NOTICE)?;
                }
                match &resolution.result {
                    ResolutionResult::Single { mutual_followers } => {
                        if mutual_followers.is_empty() {
                            writeln!(self.out, "No mutual followers found.")?;
                        } else {
                            self.write_cards(mutual_followers)?;
                        }
                    }
                    ResolutionResult::Multi {
                        mutual_followers,
                        mutual_following,
                    } => {
                        self.write_section("Mutual Followers:", mutual_followers)?;
                        writeln!(self.out)?;
                        self.write_section("Mutual Following:", mutual_following)?;
                    }
                }
            }
        }
        self.out.flush()?;
        Ok(())
    }
}

/// One JSON document per result or error. Loading is not reported.
pub struct JsonPresenter<W: Write> {
    out: W,
}

impl<W: Write> JsonPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Presenter for JsonPresenter<W> {
    fn show(&mut self, view: View<'_>) -> Result<()> {
        let document = match view {
            View::Loading => return Ok(()),
            View::NoInput => serde_json::json!({ "error": NO_INPUT_MESSAGE }),
            View::Error(e) => serde_json::json!({ "error": e.to_string() }),
            View::Results(resolution) => serde_json::to_value(resolution)?,
        };

        serde_json::to_writer_pretty(&mut self.out, &document)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}

//! List presentation
//!
//! Read-only view of the friends list plus translation of prompt answers
//! into store commands. Rendering itself belongs to a [`ListView`].

use crate::error::PresenterError;
use crate::store::Command;

/// Rendering surface for the screen
pub trait ListView {
    /// Text above the list; `None` leaves it blank
    fn show_header(&mut self, text: Option<&str>);

    /// Redraw every row
    fn reload(&mut self, rows: &[String]);
}

/// Answer to the add-friend prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptResponse {
    Save(String),
    Cancel,
}

/// Row access over a borrowed friends list
#[derive(Debug, Clone, Copy, Default)]
pub struct ListPresenter<'a> {
    rows: Option<&'a [String]>,
}

impl<'a> ListPresenter<'a> {
    pub fn new(rows: Option<&'a [String]>) -> Self {
        Self { rows }
    }

    /// Number of rows, 0 when the list is unset
    pub fn row_count(&self) -> usize {
        self.rows.map_or(0, <[String]>::len)
    }

    /// Row text at `index`
    pub fn row_content(&self, index: usize) -> Result<&'a str, PresenterError> {
        self.rows
            .and_then(|rows| rows.get(index))
            .map(String::as_str)
            .ok_or(PresenterError::OutOfRange {
                index,
                len: self.row_count(),
            })
    }

    pub fn rows(&self) -> &'a [String] {
        self.rows.unwrap_or_default()
    }

    /// Command for a prompt answer; Cancel does nothing
    pub fn on_add_requested(response: PromptResponse) -> Option<Command> {
        match response {
            PromptResponse::Save(name) => Some(Command::AppendFriend(name)),
            PromptResponse::Cancel => None,
        }
    }
}

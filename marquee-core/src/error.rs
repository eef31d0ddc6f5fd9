use thiserror::Error;

use crate::commands::MediaKind;
use crate::providers::ProviderError;

/// Failures of a chat command. `Display` is the message shown to the user.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Please provide a title to search for")]
    EmptyTitle,

    #[error("Overseer API failed while searching for {}: {source}", .kind.plural())]
    Search {
        kind: MediaKind,
        #[source]
        source: ProviderError,
    },

    #[error("Could not find any {} with matched title '{title}'", .kind.plural())]
    NoMatch { kind: MediaKind, title: String },

    #[error("Overseer API failed while fetching {} details: {source}", .kind.noun())]
    Details {
        kind: MediaKind,
        #[source]
        source: ProviderError,
    },
}

impl CommandError {
    /// True when the upstream API, not the user's input, caused the failure.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            CommandError::Search { .. } | CommandError::Details { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, CommandError>;

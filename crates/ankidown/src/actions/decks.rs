//! Deck-related AnkiConnect actions.

use crate::client::AnkiClient;
use crate::error::Result;

/// Separator between the levels of a deck name (`"Parent::Child"`).
pub const DECK_SEPARATOR: &str = "::";

/// Provides access to deck-related AnkiConnect operations.
///
/// Obtained via [`AnkiClient::decks()`].
#[derive(Debug)]
pub struct DeckActions<'a> {
    pub(crate) client: &'a AnkiClient,
}

impl<'a> DeckActions<'a> {
    /// Get all deck names.
    ///
    /// Nested decks are returned by their full path, e.g. `"Math::Algebra"`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use ankidown::AnkiClient;
    /// # async fn example() -> ankidown::Result<()> {
    /// let client = AnkiClient::new();
    /// let names = client.decks().names().await?;
    /// for name in names {
    ///     println!("{}", name);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn names(&self) -> Result<Vec<String>> {
        self.client.invoke_without_params("deckNames").await
    }
}

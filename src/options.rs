//! Table configuration.

use alloc::string::String;

/// Configuration for a blackjack table.
///
/// House rules are fixed; these options only cover who sits at the table
/// and how much money a new session starts with.
///
/// ```
/// use blackjack_engine::GameOptions;
///
/// let options = GameOptions::default()
///     .with_player_name("Ada")
///     .with_starting_bankroll(250);
/// assert_eq!(options.dealer_name, "Dealer");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameOptions {
    /// Name given to the player.
    pub player_name: String,
    /// Name given to the dealer.
    pub dealer_name: String,
    /// Bankroll a new session begins with.
    pub starting_bankroll: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            player_name: String::from("Player"),
            dealer_name: String::from("Dealer"),
            starting_bankroll: 1000,
        }
    }
}

impl GameOptions {
    /// Sets the player's name.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_engine::GameOptions;
    ///
    /// let options = GameOptions::default().with_player_name("Grace");
    /// assert_eq!(options.player_name, "Grace");
    /// ```
    #[must_use]
    pub fn with_player_name(mut self, name: impl Into<String>) -> Self {
        self.player_name = name.into();
        self
    }

    /// Sets the dealer's name.
    #[must_use]
    pub fn with_dealer_name(mut self, name: impl Into<String>) -> Self {
        self.dealer_name = name.into();
        self
    }

    /// Sets the starting bankroll.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_engine::GameOptions;
    ///
    /// let options = GameOptions::default().with_starting_bankroll(500);
    /// assert_eq!(options.starting_bankroll, 500);
    /// ```
    #[must_use]
    pub fn with_starting_bankroll(mut self, bankroll: usize) -> Self {
        self.starting_bankroll = bankroll;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerId {
    Player1,
    Player2,
}

impl PlayerId {
    /// Get the other player
    pub fn other(self) -> PlayerId {
        match self {
            PlayerId::Player1 => PlayerId::Player2,
            PlayerId::Player2 => PlayerId::Player1,
        }
    }

    /// 1-based player number, as shown to humans
    pub fn number(self) -> u8 {
        match self {
            PlayerId::Player1 => 1,
            PlayerId::Player2 => 2,
        }
    }
}

/// Display labels for both players. The engine stores these but never looks
/// at them when applying rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerLabels {
    pub player1: String,
    pub player2: String,
}

impl PlayerLabels {
    pub fn new(player1: impl Into<String>, player2: impl Into<String>) -> Self {
        PlayerLabels {
            player1: player1.into(),
            player2: player2.into(),
        }
    }

    pub fn get(&self, player: PlayerId) -> &str {
        match player {
            PlayerId::Player1 => &self.player1,
            PlayerId::Player2 => &self.player2,
        }
    }
}

impl Default for PlayerLabels {
    fn default() -> Self {
        PlayerLabels::new(
            format!("Player {}", PlayerId::Player1.number()),
            format!("Player {}", PlayerId::Player2.number()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_player() {
        assert_eq!(PlayerId::Player1.other(), PlayerId::Player2);
        assert_eq!(PlayerId::Player2.other(), PlayerId::Player1);
    }

    #[test]
    fn test_player_number() {
        assert_eq!(PlayerId::Player1.number(), 1);
        assert_eq!(PlayerId::Player2.number(), 2);
    }

    #[test]
    fn test_labels_lookup() {
        let labels = PlayerLabels::new("red", "blue");
        assert_eq!(labels.get(PlayerId::Player1), "red");
        assert_eq!(labels.get(PlayerId::Player2), "blue");
        assert_eq!(PlayerLabels::default().get(PlayerId::Player2), "Player 2");
    }
}

//! Latest-selection-wins guard for game data loads.
//!
//! Fetches are not cancelled. Each selection takes a fresh token and a
//! response is committed only if its token is still the latest one.

use serde::Serialize;

/// Identity of one game-data request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RequestToken {
    pub sequence: u64,
    pub game_id: u64,
}

#[derive(Debug, Default)]
pub struct GameLoader {
    latest: Option<RequestToken>,
}

impl GameLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the token for a new selection, superseding any earlier one.
    pub fn begin(&mut self, game_id: u64) -> RequestToken {
        let sequence = self.latest.map_or(1, |t| t.sequence + 1);
        let token = RequestToken { sequence, game_id };
        self.latest = Some(token);
        tracing::debug!(sequence, game_id, "game load requested");
        token
    }

    pub fn latest(&self) -> Option<RequestToken> {
        self.latest
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        self.latest == Some(token)
    }

    /// Whether a response carrying `token` may be committed.
    pub fn commit(&self, token: RequestToken) -> bool {
        if self.is_current(token) {
            return true;
        }
        tracing::debug!(
            sequence = token.sequence,
            game_id = token.game_id,
            latest = ?self.latest.map(|t| t.sequence),
            "discarding superseded game load"
        );
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_selection_wins() {
        let mut loader = GameLoader::new();
        let first = loader.begin(10);
        let second = loader.begin(11);

        assert!(second.sequence > first.sequence);
        assert!(!loader.commit(first));
        assert!(loader.commit(second));
    }

    #[test]
    fn test_reselecting_same_game_supersedes() {
        let mut loader = GameLoader::new();
        let first = loader.begin(10);
        let again = loader.begin(10);
        assert!(!loader.commit(first));
        assert!(loader.commit(again));
    }

    #[test]
    fn test_nothing_requested() {
        let loader = GameLoader::new();
        assert!(!loader.commit(RequestToken {
            sequence: 1,
            game_id: 1
        }));
    }
}

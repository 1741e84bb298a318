//! Game tunables
//!
//! One plain struct shared by every mode. Defaults match the handheld game;
//! the CLI overrides individual fields.

/// Tunable limits and timings for all game modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Guesses allowed per classic game
    pub classic_max_guesses: usize,
    /// Guesses allowed per rush game
    pub rush_max_guesses: usize,
    /// Seconds on the rush countdown after each reload
    pub rush_timer_seconds: u32,
    /// Rows of guess history shown at once in rush mode
    pub rush_visible_guesses: usize,
    /// Correct letters in the latest guess that pause the rush timer
    pub rush_freeze_threshold: usize,
    /// Rounds per anagram game
    pub anagram_rounds: usize,
    /// Matches collected by a pattern search before choosing; `None` collects all
    pub pattern_match_cap: Option<usize>,
    /// Random draws tried before a similarity search falls back to scanning
    pub similar_retry_limit: usize,
    /// Fixed RNG seed for reproducible sessions
    pub seed: Option<u64>,
}

impl GameConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            classic_max_guesses: 5,
            rush_max_guesses: 100,
            rush_timer_seconds: 30,
            rush_visible_guesses: 7,
            rush_freeze_threshold: 4,
            anagram_rounds: 5,
            pattern_match_cap: Some(50),
            similar_retry_limit: 64,
            seed: None,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

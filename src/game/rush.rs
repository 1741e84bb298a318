//! Rush mode: a timed game whose target keeps moving
//!
//! When the countdown expires the target is swapped for another word that
//! keeps every letter the latest guess placed correctly. The countdown holds
//! while the latest guess is close to solved.

use super::{
    GameContext, GameError, Guess, Mode, Outcome, PauseDecision, Phase, RushTimer, require_phase,
};
use crate::core::{Evaluation, Word, WordPattern, evaluate};
use crate::dictionary::DictionaryError;
use rand::rngs::StdRng;
use std::time::Duration;

/// Shapes too easy to land on after a swap: plurals and past tenses
const EASY_SHAPES: [WordPattern; 3] = [
    WordPattern::new([None, None, None, None, Some(b'S')]),
    WordPattern::new([None, None, None, Some(b'E'), Some(b'S')]),
    WordPattern::new([None, None, None, Some(b'E'), Some(b'D')]),
];

/// What happened to the target when the countdown expired
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapOutcome {
    /// A new target keeping the pinned letters was chosen
    Replaced,
    /// Nothing was pinned yet, so no swap was attempted
    Skipped,
    /// No other word fits the pinned letters
    Kept,
}

pub struct RushGame<'a> {
    ctx: GameContext<'a>,
    rng: StdRng,
    phase: Phase,
    target: Option<Word>,
    guesses: Vec<Guess>,
    timer: RushTimer,
    scroll: usize,
    swaps: usize,
}

impl<'a> RushGame<'a> {
    #[must_use]
    pub fn new(ctx: GameContext<'a>) -> Self {
        Self {
            rng: ctx.rng(),
            timer: RushTimer::new(ctx.config.rush_timer_seconds),
            ctx,
            phase: Phase::Idle,
            target: None,
            guesses: Vec::new(),
            scroll: 0,
            swaps: 0,
        }
    }

    /// Start a game with a random target and a full countdown
    ///
    /// # Errors
    ///
    /// Returns `WrongPhase` while a game is running and `Dictionary` if no
    /// target can be drawn.
    pub fn start(&mut self) -> Result<(), GameError> {
        if !self.phase.can_start() {
            return Err(GameError::WrongPhase {
                action: "start",
                phase: self.phase,
            });
        }
        self.ctx.require_dictionary()?;

        let target = self.ctx.dictionary.random_word(&mut self.rng)?;
        log::debug!("Rush target chosen");

        self.target = Some(target);
        self.guesses.clear();
        self.timer.reload();
        self.scroll = 0;
        self.swaps = 0;
        self.phase = Phase::Active;
        Ok(())
    }

    /// Submit a typed guess
    ///
    /// # Errors
    ///
    /// Returns `WrongPhase` unless the game is active, `InvalidWord` for
    /// malformed text and `NotInDictionary` for unknown words. None of these
    /// consume a guess.
    pub fn submit(&mut self, text: &str) -> Result<Evaluation, GameError> {
        require_phase(self.phase, Phase::Active, "submit a guess")?;
        let word = self.ctx.validate_guess(text)?;
        let Some(target) = self.target else {
            return Err(GameError::WrongPhase {
                action: "submit a guess",
                phase: self.phase,
            });
        };

        let evaluation = evaluate(&word, &target);
        self.guesses.push(Guess { word, evaluation });
        self.snap_to_latest();

        if evaluation.is_fully_correct() {
            self.finish(Outcome::Won {
                guesses: self.guesses.len(),
            });
        } else if self.guesses_remaining() == 0 {
            self.finish(Outcome::Lost);
        }

        Ok(evaluation)
    }

    /// Feed elapsed wall time to the countdown
    ///
    /// Only an active game counts down. Returns the swap result when the
    /// countdown expired during this update; the timer is then reloaded.
    pub fn update(&mut self, elapsed: Duration) -> Option<SwapOutcome> {
        if !self.phase.is_active() {
            return None;
        }

        if self.is_frozen() {
            self.timer.hold();
            return None;
        }

        if !self.timer.advance(elapsed) {
            return None;
        }

        let outcome = self.swap_target();
        self.timer.reload();
        Some(outcome)
    }

    /// True while the latest guess has enough correct letters to hold the clock
    #[must_use]
    pub fn is_frozen(&self) -> bool {
        self.latest_evaluation()
            .is_some_and(|e| e.correct_count() >= self.ctx.config.rush_freeze_threshold)
    }

    fn latest_evaluation(&self) -> Option<&Evaluation> {
        self.guesses.last().map(|guess| &guess.evaluation)
    }

    fn swap_target(&mut self) -> SwapOutcome {
        let Some(current) = self.target else {
            return SwapOutcome::Skipped;
        };
        let Some(evaluation) = self.latest_evaluation().copied() else {
            log::debug!("Rush swap skipped: no guesses yet");
            return SwapOutcome::Skipped;
        };

        let pattern = WordPattern::from_feedback(&current, &evaluation);
        if pattern.is_all_wildcards() {
            log::debug!("Rush swap skipped: nothing pinned");
            return SwapOutcome::Skipped;
        }

        let dictionary = self.ctx.dictionary;
        let cap = self.ctx.config.pattern_match_cap;

        let strict = dictionary.random_word_matching(
            &pattern,
            |word| *word == current || EASY_SHAPES.iter().any(|shape| shape.matches(word)),
            cap,
            &mut self.rng,
        );
        let result = match strict {
            Err(DictionaryError::NoCandidateFound) => {
                log::debug!("Rush swap for {pattern} relaxed to allow easy shapes");
                dictionary.random_word_matching(
                    &pattern,
                    |word| *word == current,
                    cap,
                    &mut self.rng,
                )
            }
            other => other,
        };

        match result {
            Ok(next) => {
                self.target = Some(next);
                self.swaps += 1;
                log::info!(
                    "Rush target swapped on {pattern} ({} pinned, {} swaps)",
                    pattern.concrete_count(),
                    self.swaps
                );
                SwapOutcome::Replaced
            }
            Err(e) => {
                log::warn!("Rush swap kept the target: {e}");
                SwapOutcome::Kept
            }
        }
    }

    /// Open the pause menu; the countdown stops while paused
    ///
    /// # Errors
    ///
    /// Returns `WrongPhase` unless the game is active.
    pub fn pause(&mut self) -> Result<(), GameError> {
        require_phase(self.phase, Phase::Active, "pause")?;
        self.phase = Phase::Paused;
        Ok(())
    }

    /// Leave the pause menu
    ///
    /// # Errors
    ///
    /// Returns `WrongPhase` unless the game is paused.
    pub fn resolve_pause(&mut self, decision: PauseDecision) -> Result<(), GameError> {
        require_phase(self.phase, Phase::Paused, "resolve the pause menu")?;
        match decision {
            PauseDecision::Resume => self.phase = Phase::Active,
            PauseDecision::Reveal => self.finish(Outcome::Revealed),
            PauseDecision::Quit => {
                log::info!("Rush game quit after {} guesses", self.guesses.len());
                self.guesses.clear();
                self.scroll = 0;
                self.phase = Phase::Idle;
            }
        }
        Ok(())
    }

    fn finish(&mut self, outcome: Outcome) {
        log::info!("Rush game over: {outcome:?} after {} swaps", self.swaps);
        self.phase = Phase::Complete(outcome);
    }

    /// Move the history window one row towards older guesses
    pub fn scroll_up(&mut self) -> bool {
        if self.scroll == 0 {
            return false;
        }
        self.scroll -= 1;
        true
    }

    /// Move the history window one row towards newer guesses
    pub fn scroll_down(&mut self) -> bool {
        if self.scroll + self.window() >= self.guesses.len() {
            return false;
        }
        self.scroll += 1;
        true
    }

    fn snap_to_latest(&mut self) {
        self.scroll = self.guesses.len().saturating_sub(self.window());
    }

    fn window(&self) -> usize {
        self.ctx.config.rush_visible_guesses.max(1)
    }

    /// Guesses inside the history window, oldest first
    #[must_use]
    pub fn visible_guesses(&self) -> &[Guess] {
        let end = (self.scroll + self.window()).min(self.guesses.len());
        &self.guesses[self.scroll..end]
    }

    /// Index of the first visible guess within the full history
    #[must_use]
    pub const fn scroll_offset(&self) -> usize {
        self.scroll
    }

    #[must_use]
    pub const fn mode(&self) -> Mode {
        Mode::Rush
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub const fn target(&self) -> Option<Word> {
        self.target
    }

    #[must_use]
    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.ctx.config.rush_max_guesses
    }

    #[must_use]
    pub fn guesses_remaining(&self) -> usize {
        self.max_guesses().saturating_sub(self.guesses.len())
    }

    #[must_use]
    pub const fn timer(&self) -> &RushTimer {
        &self.timer
    }

    /// Number of times the target has moved this game
    #[must_use]
    pub const fn swaps(&self) -> usize {
        self.swaps
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{ANAGRAMS, DICTIONARY, context, w};
    use super::*;
    use crate::config::GameConfig;
    use crate::dictionary::Dictionary;

    const SECOND: Duration = Duration::from_secs(1);

    fn started_with(target: &str) -> RushGame<'static> {
        let mut game = RushGame::new(context(5));
        game.start().unwrap();
        game.target = Some(w(target));
        game
    }

    #[test]
    fn start_loads_full_countdown() {
        let mut game = RushGame::new(context(5));
        game.start().unwrap();

        assert_eq!(game.phase(), Phase::Active);
        assert_eq!(game.timer().seconds_left(), 30);
        assert!(DICTIONARY.contains(&game.target().unwrap()));
    }

    #[test]
    fn timer_decrements_once_per_second() {
        let mut game = started_with("STONE");
        game.submit("CRANE").unwrap();

        assert_eq!(game.update(SECOND), None);
        assert_eq!(game.timer().seconds_left(), 29);
        game.update(Duration::from_millis(400));
        assert_eq!(game.timer().seconds_left(), 29);
    }

    #[test]
    fn four_correct_freezes_timer() {
        let mut game = started_with("STONE");
        // SHONE against STONE: four letters placed
        let evaluation = game.submit("SHONE").unwrap();
        assert_eq!(evaluation.correct_count(), 4);
        assert!(game.is_frozen());

        game.update(SECOND);
        game.update(Duration::from_secs(10));
        assert_eq!(game.timer().seconds_left(), 30);
    }

    #[test]
    fn three_correct_does_not_freeze() {
        let mut game = started_with("STONE");
        let evaluation = game.submit("SPINE").unwrap();
        assert_eq!(evaluation.correct_count(), 3);
        assert!(!game.is_frozen());

        game.update(SECOND);
        assert_eq!(game.timer().seconds_left(), 29);
    }

    #[test]
    fn freeze_lifts_when_latest_guess_is_weaker() {
        let mut game = started_with("STONE");
        game.submit("SHONE").unwrap();
        game.update(SECOND);
        assert_eq!(game.timer().seconds_left(), 30);

        game.submit("CRANE").unwrap();
        game.update(SECOND);
        assert_eq!(game.timer().seconds_left(), 29);
    }

    #[test]
    fn swap_skipped_without_guesses() {
        let mut game = started_with("STONE");
        assert_eq!(
            game.update(Duration::from_secs(30)),
            Some(SwapOutcome::Skipped)
        );
        assert_eq!(game.target(), Some(w("STONE")));
        assert_eq!(game.timer().seconds_left(), 30);
    }

    #[test]
    fn swap_skipped_when_nothing_pinned() {
        let mut game = started_with("STONE");
        game.submit("ABACK").unwrap();

        assert_eq!(
            game.update(Duration::from_secs(30)),
            Some(SwapOutcome::Skipped)
        );
        assert_eq!(game.target(), Some(w("STONE")));
    }

    #[test]
    fn swap_keeps_pinned_letters() {
        for seed in 0..10 {
            let mut game = RushGame::new(context(seed));
            game.start().unwrap();
            game.target = Some(w("STONE"));

            // CRANE pins N and E
            game.submit("CRANE").unwrap();
            assert_eq!(
                game.update(Duration::from_secs(30)),
                Some(SwapOutcome::Replaced)
            );

            let next = game.target().unwrap();
            assert_ne!(next, w("STONE"));
            assert_eq!(next.letter_at(3), b'N');
            assert_eq!(next.letter_at(4), b'E');
            assert_eq!(game.swaps(), 1);
            assert_eq!(game.timer().seconds_left(), 30);
        }
    }

    fn small_game<'a>(dictionary: &'a Dictionary, target: &str) -> RushGame<'a> {
        let config = GameConfig {
            seed: Some(2),
            ..GameConfig::default()
        };
        let mut game = RushGame::new(GameContext::new(dictionary, &ANAGRAMS, config));
        game.start().unwrap();
        game.target = Some(w(target));
        game
    }

    #[test]
    fn swap_avoids_easy_shapes() {
        let dictionary =
            Dictionary::new(vec![w("BAKED"), w("BAKER"), w("BAKES"), w("BALMY")]).unwrap();

        for _ in 0..10 {
            let mut game = small_game(&dictionary, "BAKER");
            // BALMY pins BA; BAKED and BAKES are easy shapes
            game.submit("BALMY").unwrap();
            game.update(Duration::from_secs(30));
            assert_eq!(game.target(), Some(w("BALMY")));
        }
    }

    #[test]
    fn swap_relaxes_when_only_easy_shapes_fit() {
        let dictionary = Dictionary::new(vec![w("BAKED"), w("BAKER"), w("BASKS")]).unwrap();
        let mut game = small_game(&dictionary, "BAKER");

        game.submit("BASKS").unwrap();
        assert_eq!(
            game.update(Duration::from_secs(30)),
            Some(SwapOutcome::Replaced)
        );

        let next = game.target().unwrap();
        assert!(next == w("BAKED") || next == w("BASKS"));
    }

    #[test]
    fn swap_keeps_target_when_no_alternative() {
        let dictionary = Dictionary::new(vec![w("ABACK"), w("STONE")]).unwrap();
        let mut game = small_game(&dictionary, "STONE");

        // S***E fits nothing but the current target
        game.guesses.push(Guess {
            word: w("ABACK"),
            evaluation: "G---G".parse().unwrap(),
        });
        assert_eq!(
            game.update(Duration::from_secs(30)),
            Some(SwapOutcome::Kept)
        );
        assert_eq!(game.target(), Some(w("STONE")));
        assert_eq!(game.timer().seconds_left(), 30);
    }

    #[test]
    fn paused_game_does_not_count_down() {
        let mut game = started_with("STONE");
        game.submit("CRANE").unwrap();
        game.pause().unwrap();

        assert_eq!(game.update(Duration::from_secs(60)), None);
        assert_eq!(game.timer().seconds_left(), 30);

        game.resolve_pause(PauseDecision::Resume).unwrap();
        game.update(SECOND);
        assert_eq!(game.timer().seconds_left(), 29);
    }

    #[test]
    fn reveal_completes_game() {
        let mut game = started_with("STONE");
        game.pause().unwrap();
        game.resolve_pause(PauseDecision::Reveal).unwrap();
        assert_eq!(game.phase(), Phase::Complete(Outcome::Revealed));
    }

    #[test]
    fn win_and_budget() {
        let mut game = started_with("STONE");
        game.submit("STONE").unwrap();
        assert_eq!(game.phase(), Phase::Complete(Outcome::Won { guesses: 1 }));

        let config = GameConfig {
            rush_max_guesses: 2,
            seed: Some(1),
            ..GameConfig::default()
        };
        let mut game = RushGame::new(GameContext::new(&DICTIONARY, &ANAGRAMS, config));
        game.start().unwrap();
        game.target = Some(w("STONE"));
        game.submit("CRANE").unwrap();
        game.submit("ABACK").unwrap();
        assert_eq!(game.phase(), Phase::Complete(Outcome::Lost));
    }

    #[test]
    fn history_window_scrolls_and_snaps() {
        let mut game = started_with("STONE");
        let guesses = [
            "ABACK", "ABBOT", "BRAVE", "CRANE", "LOOPS", "TONES", "ONSET", "BEAST", "BREAD",
        ];
        for guess in guesses {
            game.submit(guess).unwrap();
        }

        assert_eq!(game.visible_guesses().len(), 7);
        assert_eq!(game.scroll_offset(), 2);
        assert_eq!(game.visible_guesses()[6].word, w("BREAD"));
        assert!(!game.scroll_down());

        assert!(game.scroll_up());
        assert!(game.scroll_up());
        assert!(!game.scroll_up());
        assert_eq!(game.visible_guesses()[0].word, w("ABACK"));

        game.submit("CRATE").unwrap();
        assert_eq!(game.scroll_offset(), 3);
        assert_eq!(game.visible_guesses()[6].word, w("CRATE"));
    }
}

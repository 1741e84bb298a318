//! Classic mode: one hidden word, five guesses
//!
//! Targets after the first are drawn so they are not similar to the previous
//! one. A game can also start from a decoded word code.

use super::{
    AlphabetTracker, GameContext, GameError, Guess, Mode, Outcome, PauseDecision, Phase,
    require_phase,
};
use crate::core::{Evaluation, Word, evaluate};
use crate::wordcode;
use rand::rngs::StdRng;

pub struct ClassicGame<'a> {
    ctx: GameContext<'a>,
    rng: StdRng,
    phase: Phase,
    target: Option<Word>,
    guesses: Vec<Guess>,
    alphabet: AlphabetTracker,
}

impl<'a> ClassicGame<'a> {
    #[must_use]
    pub fn new(ctx: GameContext<'a>) -> Self {
        Self {
            rng: ctx.rng(),
            ctx,
            phase: Phase::Idle,
            target: None,
            guesses: Vec::new(),
            alphabet: AlphabetTracker::new(),
        }
    }

    /// Start a game with a fresh random target
    ///
    /// The first target is a uniform draw; later ones avoid words similar to
    /// the previous target.
    ///
    /// # Errors
    ///
    /// Returns `WrongPhase` while a game is running and `Dictionary` if no
    /// target can be drawn.
    pub fn start(&mut self) -> Result<(), GameError> {
        self.check_can_start()?;

        let dictionary = self.ctx.dictionary;
        let target = match self.target {
            None => dictionary.random_word(&mut self.rng)?,
            Some(previous) => dictionary.random_word_excluding_similar(
                &previous,
                self.ctx.config.similar_retry_limit,
                &mut self.rng,
            )?,
        };

        self.begin(target);
        Ok(())
    }

    /// Start a game with a chosen target, as from a word code
    ///
    /// # Errors
    ///
    /// Returns `WrongPhase` while a game is running, `Dictionary` if the
    /// dictionary is unavailable and `NotInDictionary` for an unknown target.
    pub fn start_with_target(&mut self, target: Word) -> Result<(), GameError> {
        self.check_can_start()?;
        if !self.ctx.dictionary.contains(&target) {
            return Err(GameError::NotInDictionary(target));
        }

        self.begin(target);
        Ok(())
    }

    fn check_can_start(&self) -> Result<(), GameError> {
        if !self.phase.can_start() {
            return Err(GameError::WrongPhase {
                action: "start",
                phase: self.phase,
            });
        }
        self.ctx.require_dictionary()
    }

    fn begin(&mut self, target: Word) {
        log::debug!("Classic target chosen");
        self.target = Some(target);
        self.guesses.clear();
        self.alphabet.reset();
        self.phase = Phase::Active;
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
        self.alphabet.record(&word, &evaluation);

        if evaluation.is_fully_correct() {
            self.finish(Outcome::Won {
                guesses: self.guesses.len(),
            });
        } else if self.guesses_remaining() == 0 {
            self.finish(Outcome::Lost);
        }

        Ok(evaluation)
    }

    /// Open the pause menu
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
                log::info!("Classic game quit after {} guesses", self.guesses.len());
                self.guesses.clear();
                self.alphabet.reset();
                self.phase = Phase::Idle;
            }
        }
        Ok(())
    }

    fn finish(&mut self, outcome: Outcome) {
        log::info!("Classic game over: {outcome:?}");
        self.phase = Phase::Complete(outcome);
    }

    #[must_use]
    pub const fn mode(&self) -> Mode {
        Mode::Classic
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Current or most recent target
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
        self.ctx.config.classic_max_guesses
    }

    #[must_use]
    pub fn guesses_remaining(&self) -> usize {
        self.max_guesses().saturating_sub(self.guesses.len())
    }

    #[must_use]
    pub const fn alphabet(&self) -> &AlphabetTracker {
        &self.alphabet
    }

    /// Share code for the current target
    pub fn word_code(&mut self) -> Option<String> {
        let target = self.target?;
        Some(wordcode::encode_random(&target, &mut self.rng))
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{ANAGRAMS, context, w};
    use super::*;
    use crate::config::GameConfig;
    use crate::dictionary::{Dictionary, DictionaryError};

    fn started_with(target: &str) -> ClassicGame<'static> {
        let mut game = ClassicGame::new(context(3));
        game.start_with_target(w(target)).unwrap();
        game
    }

    #[test]
    fn starts_idle() {
        let game = ClassicGame::new(context(1));
        assert_eq!(game.phase(), Phase::Idle);
        assert_eq!(game.target(), None);
    }

    #[test]
    fn start_picks_dictionary_word() {
        let mut game = ClassicGame::new(context(1));
        game.start().unwrap();

        assert_eq!(game.phase(), Phase::Active);
        let target = game.target().unwrap();
        assert!(game.ctx.dictionary.contains(&target));
    }

    #[test]
    fn win_on_fully_correct_guess() {
        let mut game = started_with("BRAVE");
        game.submit("crane").unwrap();
        let evaluation = game.submit("BRAVE").unwrap();

        assert!(evaluation.is_fully_correct());
        assert_eq!(game.phase(), Phase::Complete(Outcome::Won { guesses: 2 }));
    }

    #[test]
    fn loss_after_five_misses() {
        let mut game = started_with("BRAVE");
        for guess in ["ABBOT", "ABACK", "STONE", "CRANE", "LOOPS"] {
            assert_eq!(game.phase(), Phase::Active);
            game.submit(guess).unwrap();
        }

        assert_eq!(game.phase(), Phase::Complete(Outcome::Lost));
        assert_eq!(game.guesses_remaining(), 0);
    }

    #[test]
    fn rejected_guesses_do_not_count() {
        let mut game = started_with("BRAVE");

        assert!(matches!(
            game.submit("BRAV"),
            Err(GameError::InvalidWord(_))
        ));
        assert_eq!(
            game.submit("QXZJV"),
            Err(GameError::NotInDictionary(w("QXZJV")))
        );
        assert_eq!(game.guesses_remaining(), 5);
    }

    #[test]
    fn submit_requires_active_phase() {
        let mut game = ClassicGame::new(context(1));
        assert!(matches!(
            game.submit("BRAVE"),
            Err(GameError::WrongPhase { .. })
        ));

        let mut game = started_with("BRAVE");
        game.pause().unwrap();
        assert!(matches!(
            game.submit("CRANE"),
            Err(GameError::WrongPhase { .. })
        ));
    }

    #[test]
    fn pause_resume_reveal_quit() {
        let mut game = started_with("BRAVE");
        game.pause().unwrap();
        assert_eq!(game.phase(), Phase::Paused);
        game.resolve_pause(PauseDecision::Resume).unwrap();
        assert_eq!(game.phase(), Phase::Active);

        game.pause().unwrap();
        game.resolve_pause(PauseDecision::Reveal).unwrap();
        assert_eq!(game.phase(), Phase::Complete(Outcome::Revealed));
        assert_eq!(game.target(), Some(w("BRAVE")));

        let mut game = started_with("BRAVE");
        game.submit("CRANE").unwrap();
        game.pause().unwrap();
        game.resolve_pause(PauseDecision::Quit).unwrap();
        assert_eq!(game.phase(), Phase::Idle);
        assert!(game.guesses().is_empty());
    }

    #[test]
    fn resolve_pause_requires_paused() {
        let mut game = started_with("BRAVE");
        assert!(matches!(
            game.resolve_pause(PauseDecision::Resume),
            Err(GameError::WrongPhase { .. })
        ));
    }

    #[test]
    fn next_target_not_similar_to_previous() {
        let mut game = ClassicGame::new(context(9));
        game.start().unwrap();

        for _ in 0..20 {
            let previous = game.target().unwrap();
            game.pause().unwrap();
            game.resolve_pause(PauseDecision::Reveal).unwrap();
            game.start().unwrap();
            assert!(!game.target().unwrap().is_similar_to(&previous));
        }
    }

    #[test]
    fn cannot_restart_mid_game() {
        let mut game = started_with("BRAVE");
        assert!(matches!(game.start(), Err(GameError::WrongPhase { .. })));
    }

    #[test]
    fn unknown_code_target_rejected() {
        let mut game = ClassicGame::new(context(1));
        assert_eq!(
            game.start_with_target(w("QXZJV")),
            Err(GameError::NotInDictionary(w("QXZJV")))
        );
        assert_eq!(game.phase(), Phase::Idle);
    }

    #[test]
    fn unavailable_dictionary_refuses_to_start() {
        let dictionary = Dictionary::unavailable();
        let ctx = GameContext::new(&dictionary, &ANAGRAMS, GameConfig::default());
        let mut game = ClassicGame::new(ctx);

        assert_eq!(
            game.start(),
            Err(GameError::Dictionary(DictionaryError::Unavailable))
        );
        assert_eq!(game.phase(), Phase::Idle);
    }

    #[test]
    fn alphabet_tracks_guesses() {
        let mut game = started_with("STONE");
        game.submit("CRANE").unwrap();

        assert!(game.alphabet().is_ruled_out(b'C'));
        assert!(!game.alphabet().is_ruled_out(b'N'));
    }

    #[test]
    fn word_code_decodes_to_target() {
        let mut game = started_with("ABBOT");
        let code = game.word_code().unwrap();
        assert_eq!(wordcode::decode(&code).unwrap(), w("ABBOT"));
    }
}

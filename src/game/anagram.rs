//! Anagram mode: rearrange the shown word into a different one
//!
//! Each round shows a target from the anagram list. Any dictionary word ends
//! the round; it scores only when it differs from the target and uses exactly
//! the same letters.

use super::{GameContext, GameError, Mode, Outcome, PauseDecision, Phase, require_phase};
use crate::core::Word;
use rand::rngs::StdRng;

/// How one anagram round went
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    pub target: Word,
    /// `None` when the round was revealed
    pub guess: Option<Word>,
    pub correct: bool,
    /// Listed anagrams of the target
    pub solutions: Vec<Word>,
}

pub struct AnagramGame<'a> {
    ctx: GameContext<'a>,
    rng: StdRng,
    phase: Phase,
    target: Option<Word>,
    rounds: Vec<RoundResult>,
}

impl<'a> AnagramGame<'a> {
    #[must_use]
    pub fn new(ctx: GameContext<'a>) -> Self {
        Self {
            rng: ctx.rng(),
            ctx,
            phase: Phase::Idle,
            target: None,
            rounds: Vec::new(),
        }
    }

    /// Start the first round
    ///
    /// # Errors
    ///
    /// Returns `WrongPhase` while a game is running and `Dictionary` when the
    /// dictionary needed to check guesses is unavailable.
    pub fn start(&mut self) -> Result<(), GameError> {
        if !self.phase.can_start() {
            return Err(GameError::WrongPhase {
                action: "start",
                phase: self.phase,
            });
        }
        self.ctx.require_dictionary()?;

        self.rounds.clear();
        self.next_target();
        self.phase = Phase::Active;
        Ok(())
    }

    fn next_target(&mut self) {
        let target = self
            .ctx
            .anagrams
            .random_target(self.target.as_ref(), &mut self.rng);
        log::debug!("Anagram round {} target chosen", self.rounds.len() + 1);
        self.target = Some(target);
    }

    /// Submit a typed guess, ending the current round
    ///
    /// # Errors
    ///
    /// Returns `WrongPhase` unless the game is active, `InvalidWord` for
    /// malformed text and `NotInDictionary` for unknown words. Rejected guesses
    /// leave the round open.
    pub fn submit(&mut self, text: &str) -> Result<RoundResult, GameError> {
        require_phase(self.phase, Phase::Active, "submit a guess")?;
        let word = self.ctx.validate_guess(text)?;
        let Some(target) = self.target else {
            return Err(GameError::WrongPhase {
                action: "submit a guess",
                phase: self.phase,
            });
        };

        let correct = word != target && word.is_anagram_of(&target);
        Ok(self.end_round(target, Some(word), correct))
    }

    fn end_round(&mut self, target: Word, guess: Option<Word>, correct: bool) -> RoundResult {
        let result = RoundResult {
            target,
            guess,
            correct,
            solutions: self.ctx.anagrams.solutions_for(&target),
        };
        self.rounds.push(result.clone());

        if self.rounds.len() >= self.total_rounds() {
            let correct = self.correct_count();
            log::info!("Anagram game over: {correct}/{} correct", self.rounds.len());
            self.phase = Phase::Complete(Outcome::Finished { correct });
        } else {
            self.next_target();
        }

        result
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
    /// `Reveal` scores the current round as missed and moves on, finishing the
    /// game after the last round.
    ///
    /// # Errors
    ///
    /// Returns `WrongPhase` unless the game is paused.
    pub fn resolve_pause(&mut self, decision: PauseDecision) -> Result<(), GameError> {
        require_phase(self.phase, Phase::Paused, "resolve the pause menu")?;
        match decision {
            PauseDecision::Resume => self.phase = Phase::Active,
            PauseDecision::Reveal => {
                self.phase = Phase::Active;
                if let Some(target) = self.target {
                    self.end_round(target, None, false);
                }
            }
            PauseDecision::Quit => {
                log::info!("Anagram game quit after {} rounds", self.rounds.len());
                self.rounds.clear();
                self.phase = Phase::Idle;
            }
        }
        Ok(())
    }

    #[must_use]
    pub const fn mode(&self) -> Mode {
        Mode::Anagram
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Word shown for the current round
    #[must_use]
    pub const fn target(&self) -> Option<Word> {
        self.target
    }

    #[must_use]
    pub fn rounds(&self) -> &[RoundResult] {
        &self.rounds
    }

    #[must_use]
    pub fn last_round(&self) -> Option<&RoundResult> {
        self.rounds.last()
    }

    #[must_use]
    pub const fn total_rounds(&self) -> usize {
        if self.ctx.config.anagram_rounds == 0 {
            1
        } else {
            self.ctx.config.anagram_rounds
        }
    }

    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.rounds.iter().filter(|round| round.correct).count()
    }
}

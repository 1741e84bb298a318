//! One game of any mode behind a single interface

use super::{
    AnagramGame, ClassicGame, GameContext, GameError, Guess, Mode, PauseDecision, Phase,
    RoundResult, RushGame, SwapOutcome,
};
use crate::core::{Evaluation, Word};
use std::time::Duration;

/// Result of a successful submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    /// Classic and rush: per-letter feedback for the guess
    Evaluated(Evaluation),
    /// Anagram: the round the guess ended
    Round(RoundResult),
}

/// A game in one of the three modes
pub enum Session<'a> {
    Classic(ClassicGame<'a>),
    Rush(RushGame<'a>),
    Anagram(AnagramGame<'a>),
}

impl<'a> Session<'a> {
    #[must_use]
    pub fn new(mode: Mode, ctx: GameContext<'a>) -> Self {
        match mode {
            Mode::Classic => Self::Classic(ClassicGame::new(ctx)),
            Mode::Rush => Self::Rush(RushGame::new(ctx)),
            Mode::Anagram => Self::Anagram(AnagramGame::new(ctx)),
        }
    }

    #[must_use]
    pub const fn mode(&self) -> Mode {
        match self {
            Self::Classic(_) => Mode::Classic,
            Self::Rush(_) => Mode::Rush,
            Self::Anagram(_) => Mode::Anagram,
        }
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        match self {
            Self::Classic(game) => game.phase(),
            Self::Rush(game) => game.phase(),
            Self::Anagram(game) => game.phase(),
        }
    }

    /// # Errors
    ///
    /// Returns the mode's start error.
    pub fn start(&mut self) -> Result<(), GameError> {
        match self {
            Self::Classic(game) => game.start(),
            Self::Rush(game) => game.start(),
            Self::Anagram(game) => game.start(),
        }
    }

    /// Start a classic game on a chosen target, as from a word code
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedMode` outside classic mode, otherwise the errors of
    /// [`ClassicGame::start_with_target`].
    pub fn start_with_target(&mut self, target: Word) -> Result<(), GameError> {
        let mode = self.mode();
        match self {
            Self::Classic(game) => game.start_with_target(target),
            Self::Rush(_) | Self::Anagram(_) => Err(GameError::UnsupportedMode {
                action: "start from a word code",
                mode,
            }),
        }
    }

    /// # Errors
    ///
    /// Returns the mode's submit error; rejected guesses are not consumed.
    pub fn submit(&mut self, text: &str) -> Result<Feedback, GameError> {
        match self {
            Self::Classic(game) => game.submit(text).map(Feedback::Evaluated),
            Self::Rush(game) => game.submit(text).map(Feedback::Evaluated),
            Self::Anagram(game) => game.submit(text).map(Feedback::Round),
        }
    }

    /// # Errors
    ///
    /// Returns `WrongPhase` unless the game is active.
    pub fn pause(&mut self) -> Result<(), GameError> {
        match self {
            Self::Classic(game) => game.pause(),
            Self::Rush(game) => game.pause(),
            Self::Anagram(game) => game.pause(),
        }
    }

    /// # Errors
    ///
    /// Returns `WrongPhase` unless the game is paused.
    pub fn resolve_pause(&mut self, decision: PauseDecision) -> Result<(), GameError> {
        match self {
            Self::Classic(game) => game.resolve_pause(decision),
            Self::Rush(game) => game.resolve_pause(decision),
            Self::Anagram(game) => game.resolve_pause(decision),
        }
    }

    /// Advance time-driven state; only rush mode has any
    pub fn update(&mut self, elapsed: Duration) -> Option<SwapOutcome> {
        match self {
            Self::Rush(game) => game.update(elapsed),
            Self::Classic(_) | Self::Anagram(_) => None,
        }
    }

    /// Current target, or the last one once the game is over
    #[must_use]
    pub const fn target(&self) -> Option<Word> {
        match self {
            Self::Classic(game) => game.target(),
            Self::Rush(game) => game.target(),
            Self::Anagram(game) => game.target(),
        }
    }

    /// Share code for a classic target
    pub fn word_code(&mut self) -> Option<String> {
        match self {
            Self::Classic(game) => game.word_code(),
            Self::Rush(_) | Self::Anagram(_) => None,
        }
    }

    /// Evaluated guesses so far; anagram games have none
    #[must_use]
    pub fn guesses(&self) -> &[Guess] {
        match self {
            Self::Classic(game) => game.guesses(),
            Self::Rush(game) => game.guesses(),
            Self::Anagram(_) => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::Outcome;
    use super::super::test_support::{context, w};
    use super::*;

    #[test]
    fn new_session_reports_mode() {
        for mode in [Mode::Classic, Mode::Rush, Mode::Anagram] {
            let session = Session::new(mode, context(1));
            assert_eq!(session.mode(), mode);
            assert_eq!(session.phase(), Phase::Idle);
        }
    }

    #[test]
    fn classic_session_round_trip() {
        let mut session = Session::new(Mode::Classic, context(2));
        session.start().unwrap();
        let target = session.target().unwrap();

        let feedback = session.submit(target.as_str()).unwrap();
        assert_eq!(feedback, Feedback::Evaluated(Evaluation::SOLVED));
        assert_eq!(
            session.phase(),
            Phase::Complete(Outcome::Won { guesses: 1 })
        );
        assert_eq!(session.guesses().len(), 1);
    }

    #[test]
    fn anagram_session_returns_rounds() {
        let mut session = Session::new(Mode::Anagram, context(2));
        session.start().unwrap();

        let feedback = session.submit("CRANE").unwrap();
        assert!(matches!(feedback, Feedback::Round(RoundResult { correct: false, .. })));
        assert!(session.guesses().is_empty());
    }

    #[test]
    fn only_rush_uses_time() {
        let mut session = Session::new(Mode::Classic, context(2));
        session.start().unwrap();
        assert_eq!(session.update(Duration::from_secs(60)), None);

        let mut session = Session::new(Mode::Rush, context(2));
        session.start().unwrap();
        assert_eq!(
            session.update(Duration::from_secs(30)),
            Some(SwapOutcome::Skipped)
        );
    }

    #[test]
    fn word_codes_are_classic_only() {
        let mut session = Session::new(Mode::Rush, context(2));
        assert_eq!(
            session.start_with_target(w("ABBOT")),
            Err(GameError::UnsupportedMode {
                action: "start from a word code",
                mode: Mode::Rush,
            })
        );
        assert_eq!(session.word_code(), None);

        let mut session = Session::new(Mode::Classic, context(2));
        session.start_with_target(w("ABBOT")).unwrap();
        assert_eq!(session.target(), Some(w("ABBOT")));
        assert!(session.word_code().is_some());
    }

    #[test]
    fn pause_forwarded() {
        let mut session = Session::new(Mode::Rush, context(2));
        session.start().unwrap();
        session.pause().unwrap();
        assert_eq!(session.phase(), Phase::Paused);
        session.resolve_pause(PauseDecision::Quit).unwrap();
        assert_eq!(session.phase(), Phase::Idle);
        assert!(session.submit("CRANE").is_err());
    }
}

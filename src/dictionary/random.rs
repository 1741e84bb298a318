//! Random draws over the dictionary
//!
//! Every draw is bounded: rejection sampling gives up after a fixed number of
//! tries and pattern scans visit each word at most once. Exhausted searches
//! report [`DictionaryError::NoCandidateFound`] instead of guessing.

use super::{Dictionary, DictionaryError};
use crate::core::{Word, WordPattern};
use rand::Rng;
use rand::seq::IndexedRandom;

impl Dictionary {
    /// Uniform pick over all entries
    ///
    /// # Errors
    ///
    /// Returns `Unavailable` if the dictionary failed to load.
    pub fn random_word<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Word, DictionaryError> {
        let pool = self.draw_pool()?;
        pool.choose(rng)
            .copied()
            .ok_or(DictionaryError::NoCandidateFound)
    }

    /// Uniform pick that is not [similar](Word::is_similar_to) to `to`
    ///
    /// Draws up to `retry_limit` times, then scans once from a random start and
    /// takes the first dissimilar word.
    ///
    /// # Errors
    ///
    /// Returns `Unavailable` if the dictionary failed to load and
    /// `NoCandidateFound` if every word is similar to `to`.
    pub fn random_word_excluding_similar<R: Rng + ?Sized>(
        &self,
        to: &Word,
        retry_limit: usize,
        rng: &mut R,
    ) -> Result<Word, DictionaryError> {
        let pool = self.draw_pool()?;

        for _ in 0..retry_limit {
            let candidate = pool[rng.random_range(0..pool.len())];
            if !candidate.is_similar_to(to) {
                return Ok(candidate);
            }
        }

        log::warn!("No dissimilar word in {retry_limit} draws against {to}, scanning");

        let start = rng.random_range(0..pool.len());
        wrapped(pool, start)
            .find(|candidate| !candidate.is_similar_to(to))
            .copied()
            .ok_or(DictionaryError::NoCandidateFound)
    }

    /// Uniform pick among words matching `pattern`
    ///
    /// Scans forward from a random index, wrapping once, and collects matches
    /// that `exclude` does not reject. Collection stops early once `cap`
    /// matches are held; `None` collects every match.
    ///
    /// # Errors
    ///
    /// Returns `Unavailable` if the dictionary failed to load and
    /// `NoCandidateFound` if the scan collected nothing.
    ///
    /// # Examples
    /// ```
    /// use gimme_five::core::WordPattern;
    /// use gimme_five::dictionary::Dictionary;
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let dictionary = Dictionary::embedded();
    /// let pattern: WordPattern = "S***E".parse().unwrap();
    /// let mut rng = StdRng::seed_from_u64(3);
    ///
    /// let word = dictionary
    ///     .random_word_matching(&pattern, |_| false, Some(50), &mut rng)
    ///     .unwrap();
    /// assert!(pattern.matches(&word));
    /// ```
    pub fn random_word_matching<R, F>(
        &self,
        pattern: &WordPattern,
        exclude: F,
        cap: Option<usize>,
        rng: &mut R,
    ) -> Result<Word, DictionaryError>
    where
        R: Rng + ?Sized,
        F: Fn(&Word) -> bool,
    {
        let pool = self.draw_pool()?;
        let start = rng.random_range(0..pool.len());

        let matches =
            wrapped(pool, start).filter(|word| pattern.matches(word) && !exclude(*word));
        let collected: Vec<Word> = match cap {
            Some(cap) => matches.take(cap).copied().collect(),
            None => matches.copied().collect(),
        };

        collected
            .choose(rng)
            .copied()
            .ok_or(DictionaryError::NoCandidateFound)
    }
}

/// Every word once, starting at `start` and wrapping to the front
fn wrapped(pool: &[Word], start: usize) -> impl Iterator<Item = &Word> {
    let (front, back) = pool.split_at(start);
    back.iter().chain(front)
}

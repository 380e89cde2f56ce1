//! The game engine: a single-owner state machine over `Snapshot`s.
//!
//! Intents run to completion one at a time. Each one clones the current
//! snapshot, edits the clone, and publishes it whole, so observers never
//! see a partially applied intent.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info};

use super::intent::{CheckOutcome, Intent, SkipOutcome};
use super::snapshot::Snapshot;
use crate::core::{ConfigError, GameConfig, GameRng, GameRngState};
use crate::words::{scramble, VocabEntry, WordBank};

/// Word-unscrambling game engine.
///
/// ## Example
///
/// ```
/// use unscramble::core::GameConfig;
/// use unscramble::engine::{CheckOutcome, Engine};
///
/// let mut engine = Engine::builtin(GameConfig::new().with_seed(42)).unwrap();
///
/// let answer = engine.snapshot().current_word.clone();
/// engine.update_guess(answer);
/// assert_eq!(engine.check(), CheckOutcome::Correct);
///
/// let snap = engine.snapshot();
/// assert_eq!(snap.score, 10);
/// assert_eq!(snap.round_number, 2);
/// ```
#[derive(Debug)]
pub struct Engine {
    config: GameConfig,
    bank: WordBank,
    rng: GameRng,
    current: Arc<Snapshot>,
    publisher: watch::Sender<Arc<Snapshot>>,
}

impl Engine {
    /// Build an engine over `bank` and start the first session.
    ///
    /// Fails if the configuration cannot be honored by the bank.
    pub fn new(config: GameConfig, bank: WordBank) -> Result<Self, ConfigError> {
        config.validate(&bank)?;

        let mut rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let first = Self::fresh_session(&config, &bank, &mut rng);
        let current = Arc::new(first);
        let (publisher, _) = watch::channel(Arc::clone(&current));

        info!(seed = rng.seed(), rounds = config.max_rounds, "engine created");

        Ok(Self {
            config,
            bank,
            rng,
            current,
            publisher,
        })
    }

    /// Rebuild an engine mid-session from a snapshot and RNG state.
    ///
    /// The resumed engine draws the same words the original would have
    /// drawn after the same intents.
    pub fn resume(
        config: GameConfig,
        bank: WordBank,
        snapshot: Snapshot,
        rng: &GameRngState,
    ) -> Result<Self, ConfigError> {
        config.validate(&bank)?;

        let rng = GameRng::from_state(rng);
        let current = Arc::new(snapshot);
        let (publisher, _) = watch::channel(Arc::clone(&current));

        info!(
            seed = rng.seed(),
            round = current.round_number,
            "engine resumed"
        );

        Ok(Self {
            config,
            bank,
            rng,
            current,
            publisher,
        })
    }

    /// Build an engine over the built-in vocabulary.
    pub fn builtin(config: GameConfig) -> Result<Self, ConfigError> {
        Self::new(config, WordBank::builtin())
    }

    // === Observation ===

    /// The latest snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(&self.current)
    }

    /// Subscribe to snapshots.
    ///
    /// The receiver always holds the latest complete snapshot and is
    /// notified after every intent.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Arc<Snapshot>> {
        self.publisher.subscribe()
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The word bank sessions draw from.
    #[must_use]
    pub fn bank(&self) -> &WordBank {
        &self.bank
    }

    /// Seed of the engine's RNG, for reproducing a run.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Capture the RNG position, for `Engine::resume`.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    // === Intents ===

    /// Apply any intent and return the resulting snapshot.
    pub fn dispatch(&mut self, intent: Intent) -> Arc<Snapshot> {
        match intent {
            Intent::Start => self.start(),
            Intent::UpdateGuess(text) => self.update_guess(text),
            Intent::Check => {
                self.check();
            }
            Intent::Skip => {
                self.skip();
            }
            Intent::Replay => self.replay(),
        }
        self.snapshot()
    }

    /// Start a fresh session: score 0, round 1, no used words but the new one.
    pub fn start(&mut self) {
        let next = Self::fresh_session(&self.config, &self.bank, &mut self.rng);
        info!(round = next.round_number, "session started");
        self.publish(next);
    }

    /// Replace the in-progress guess and clear the invalid flag.
    pub fn update_guess(&mut self, text: impl Into<String>) {
        let mut next = self.draft();
        next.guess_input = text.into();
        next.guess_is_invalid = false;
        self.publish(next);
    }

    /// Compare the guess with the current word (exact, case-sensitive).
    pub fn check(&mut self) -> CheckOutcome {
        if self.current.is_session_over {
            debug!("check ignored, session over");
            self.republish();
            return CheckOutcome::Ignored;
        }

        let mut next = self.draft();
        if next.guess_input != next.current_word {
            debug!(round = next.round_number, "incorrect guess");
            next.guess_input.clear();
            next.guess_is_invalid = true;
            self.publish(next);
            return CheckOutcome::Incorrect;
        }

        next.score += self.config.score_increment;
        debug!(round = next.round_number, score = next.score, "correct guess");

        if next.is_final_round() {
            self.finish(next);
        } else {
            self.advance(&mut next);
            self.publish(next);
        }
        CheckOutcome::Correct
    }

    /// Move past the current word without scoring it.
    pub fn skip(&mut self) -> SkipOutcome {
        if self.current.is_session_over {
            debug!("skip ignored, session over");
            self.republish();
            return SkipOutcome::Ignored;
        }

        let mut next = self.draft();
        debug!(round = next.round_number, word = %next.current_word, "word skipped");

        if next.is_final_round() {
            self.finish(next);
            SkipOutcome::Finished
        } else {
            self.advance(&mut next);
            self.publish(next);
            SkipOutcome::Advanced
        }
    }

    /// Discard the session and start a new one.
    pub fn replay(&mut self) {
        self.start();
    }

    // === Internals ===

    fn fresh_session(config: &GameConfig, bank: &WordBank, rng: &mut GameRng) -> Snapshot {
        let (entry, scrambled) = Self::draw(config, bank, rng, &im::HashSet::new());
        Snapshot::first_round(&entry, scrambled, config.max_rounds)
    }

    fn draw(
        config: &GameConfig,
        bank: &WordBank,
        rng: &mut GameRng,
        used: &im::HashSet<String>,
    ) -> (VocabEntry, String) {
        let entry = bank.pick_unused(used, rng).clone();
        let scrambled = scramble(&entry.word, rng, config.scramble_attempts);
        debug!(word = %entry.word, scrambled = %scrambled, "word drawn");
        (entry, scrambled)
    }

    fn advance(&mut self, next: &mut Snapshot) {
        let (entry, scrambled) =
            Self::draw(&self.config, &self.bank, &mut self.rng, &next.used_words);
        next.next_round(&entry, scrambled);
    }

    // The last word stays on screen; only the flag flips.
    fn finish(&mut self, mut next: Snapshot) {
        next.is_session_over = true;
        info!(score = next.score, total = self.config.total_score(), "session over");
        self.publish(next);
    }

    fn draft(&self) -> Snapshot {
        Snapshot::clone(&self.current)
    }

    fn publish(&mut self, next: Snapshot) {
        self.current = Arc::new(next);
        self.publisher.send_replace(Arc::clone(&self.current));
    }

    fn republish(&self) {
        self.publisher.send_replace(Arc::clone(&self.current));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Phase;

    fn engine(rounds: u32, seed: u64) -> Engine {
        Engine::builtin(GameConfig::new().with_max_rounds(rounds).with_seed(seed)).unwrap()
    }

    fn solve(engine: &mut Engine) -> CheckOutcome {
        let answer = engine.snapshot().current_word.clone();
        engine.update_guess(answer);
        engine.check()
    }

    #[test]
    fn test_new_starts_session() {
        let engine = engine(10, 1);
        let snap = engine.snapshot();

        assert_eq!(snap.round_number, 1);
        assert_eq!(snap.score, 0);
        assert_eq!(snap.used_words.len(), 1);
        assert!(snap.used_words.contains(&snap.current_word));
        assert_ne!(snap.scrambled_word, snap.current_word);
        assert_eq!(snap.phase(), Phase::Active);
        assert_eq!(engine.bank().get(&snap.current_word).unwrap().definition, snap.definition);
    }

    #[test]
    fn test_new_rejects_oversized_session() {
        let err = Engine::builtin(GameConfig::new().with_max_rounds(1000)).unwrap_err();
        assert!(matches!(err, ConfigError::BankTooSmall { rounds: 1000, .. }));
    }

    #[test]
    fn test_correct_check_advances() {
        let mut engine = engine(10, 2);
        let before = engine.snapshot();

        assert_eq!(solve(&mut engine), CheckOutcome::Correct);

        let after = engine.snapshot();
        assert_eq!(after.score, 10);
        assert_eq!(after.round_number, 2);
        assert!(!after.guess_is_invalid);
        assert!(after.guess_input.is_empty());
        assert_ne!(after.current_word, before.current_word);
        assert_ne!(after.scrambled_word, before.scrambled_word);
    }

    #[test]
    fn test_incorrect_check_flags_guess() {
        let mut engine = engine(10, 3);
        let before = engine.snapshot();

        engine.update_guess("definitely not a word");
        assert_eq!(engine.check(), CheckOutcome::Incorrect);

        let after = engine.snapshot();
        assert_eq!(after.score, 0);
        assert_eq!(after.round_number, 1);
        assert!(after.guess_input.is_empty());
        assert!(after.guess_is_invalid);
        assert_eq!(after.current_word, before.current_word);
    }

    #[test]
    fn test_check_is_case_sensitive() {
        let mut engine = engine(10, 4);
        let upper = engine.snapshot().current_word.to_uppercase();

        engine.update_guess(upper);
        assert_eq!(engine.check(), CheckOutcome::Incorrect);
    }

    #[test]
    fn test_update_guess_clears_invalid() {
        let mut engine = engine(10, 5);

        engine.update_guess("nope");
        engine.check();
        assert!(engine.snapshot().guess_is_invalid);

        engine.update_guess("n");
        let snap = engine.snapshot();
        assert!(!snap.guess_is_invalid);
        assert_eq!(snap.guess_input, "n");

        engine.update_guess("ne");
        assert!(!engine.snapshot().guess_is_invalid);
    }

    #[test]
    fn test_skip_never_scores() {
        let mut engine = engine(3, 6);

        assert_eq!(engine.skip(), SkipOutcome::Advanced);
        assert_eq!(engine.skip(), SkipOutcome::Advanced);
        assert_eq!(engine.skip(), SkipOutcome::Finished);

        let snap = engine.snapshot();
        assert_eq!(snap.score, 0);
        assert_eq!(snap.round_number, 3);
        assert!(snap.is_session_over);
    }

    #[test]
    fn test_final_check_keeps_word() {
        let mut engine = engine(2, 7);
        solve(&mut engine);
        let last = engine.snapshot();

        assert_eq!(solve(&mut engine), CheckOutcome::Correct);

        let over = engine.snapshot();
        assert!(over.is_session_over);
        assert_eq!(over.score, 20);
        assert_eq!(over.round_number, 2);
        assert_eq!(over.current_word, last.current_word);
        assert_eq!(over.definition, last.definition);
        assert_eq!(over.used_words.len(), 2);
    }

    #[test]
    fn test_over_ignores_check_and_skip() {
        let mut engine = engine(1, 8);
        solve(&mut engine);
        let over = engine.snapshot();

        let answer = over.current_word.clone();
        engine.update_guess(answer);
        assert_eq!(engine.check(), CheckOutcome::Ignored);
        assert_eq!(engine.skip(), SkipOutcome::Ignored);

        let after = engine.snapshot();
        assert_eq!(after.score, 10);
        assert!(after.is_session_over);
    }

    #[test]
    fn test_replay_resets() {
        let mut engine = engine(2, 9);
        solve(&mut engine);
        engine.skip();
        assert!(engine.snapshot().is_session_over);

        engine.replay();

        let snap = engine.snapshot();
        assert_eq!(snap.score, 0);
        assert_eq!(snap.round_number, 1);
        assert_eq!(snap.used_words.len(), 1);
        assert!(!snap.is_session_over);
        assert!(!snap.guess_is_invalid);
    }

    #[test]
    fn test_dispatch_matches_methods() {
        let mut engine = engine(10, 10);

        let snap = engine.dispatch(Intent::update_guess("zzz"));
        assert_eq!(snap.guess_input, "zzz");

        let snap = engine.dispatch(Intent::Check);
        assert!(snap.guess_is_invalid);

        let snap = engine.dispatch(Intent::Skip);
        assert_eq!(snap.round_number, 2);

        let snap = engine.dispatch(Intent::Replay);
        assert_eq!(snap.round_number, 1);
    }

    #[test]
    fn test_subscriber_sees_every_intent() {
        let mut engine = engine(10, 11);
        let mut rx = engine.subscribe();
        assert!(!rx.has_changed().unwrap());

        engine.update_guess("abc");
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().guess_input, "abc");

        engine.skip();
        assert_eq!(rx.borrow_and_update().round_number, 2);
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn test_resume_continues_session() {
        let mut original = engine(10, 13);
        original.skip();
        original.update_guess("partial");

        let config = original.config().clone();
        let snapshot = Snapshot::clone(&original.snapshot());
        let mut resumed =
            Engine::resume(config, WordBank::builtin(), snapshot, &original.rng_state()).unwrap();
        assert_eq!(*resumed.snapshot(), *original.snapshot());
        assert_eq!(resumed.seed(), original.seed());

        for _ in 0..5 {
            original.skip();
            resumed.skip();
            assert_eq!(*resumed.snapshot(), *original.snapshot());
        }
    }

    #[test]
    fn test_resume_validates_config() {
        let snapshot = Snapshot::clone(&engine(10, 14).snapshot());
        let state = GameRng::new(14).state();
        let config = GameConfig::new().with_max_rounds(0);

        assert_eq!(
            Engine::resume(config, WordBank::builtin(), snapshot, &state).unwrap_err(),
            ConfigError::ZeroRounds
        );
    }

    #[test]
    fn test_published_snapshot_is_not_mutated() {
        let mut engine = engine(10, 12);
        let held = engine.snapshot();

        engine.update_guess("abc");
        engine.skip();

        assert_eq!(held.round_number, 1);
        assert!(held.guess_input.is_empty());
    }
}

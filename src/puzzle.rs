
use std::collections::HashSet;

use rand::Rng;

use crate::chart::{enumerate_answers, generate_chart, AnswerSet, Chart};
use crate::dictionary::GameDictionary;
use crate::errors::PuzzleError;
use crate::levels::LevelTable;
use crate::phones::{tokenize, Phone};
use crate::scoring::{score, total_points};

/// Charts worth fewer points than this are thrown away and regenerated.
pub const DEFAULT_MIN_POINTS: u32 = 60;

/// Retry bound for the regeneration loop; hitting it means the dictionary is
/// malformed or far too small.
pub const MAX_GENERATION_ATTEMPTS: u32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
  TooShort,
  MissingCenter,
  AlreadyFound,
  Correct,
  NotInWordList,
}

/// What one submitted guess came to. `words` is populated only for `Correct`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess {
  pub points: u32,
  pub outcome: GuessOutcome,
  pub words: Vec<String>,
  pub pronunciation: Vec<Phone>,
}

impl Guess {
  fn miss(outcome: GuessOutcome, pronunciation: Vec<Phone>) -> Guess {
    Guess { points: 0, outcome, words: Vec::new(), pronunciation }
  }
}

/// The only state that mutates during play.
#[derive(Debug, Default)]
pub struct PlayerState {
  pub score: u32,
  pub found: HashSet<Vec<Phone>>,
}

/// One puzzle: an immutable chart, answer set and level table, plus the
/// player's progress against them.
pub struct Puzzle {
  pub chart: Chart,
  pub answers: AnswerSet,
  pub total_points: u32,
  pub levels: LevelTable,
  pub player: PlayerState,
}

impl Puzzle {
  /// Assembles the puzzle for one given chart. Deterministic; `generate` wraps
  /// this in the chart-selection retry loop.
  pub fn from_chart(chart: Chart, dict: &GameDictionary) -> Puzzle {
    let answers = enumerate_answers(&chart, dict);
    let total = total_points(&answers);
    Puzzle {
      chart,
      answers,
      total_points: total,
      levels: LevelTable::build(total),
      player: PlayerState::default(),
    }
  }

  /// Generates charts until one is worth at least `min_points`, giving up
  /// after `MAX_GENERATION_ATTEMPTS`.
  pub fn generate(
    dict: &GameDictionary,
    min_points: u32,
    rng: &mut impl Rng,
  ) -> Result<Puzzle, PuzzleError> {
    for _ in 0..MAX_GENERATION_ATTEMPTS {
      let chart = generate_chart(dict, rng)?;
      let puzzle = Puzzle::from_chart(chart, dict);
      if puzzle.total_points >= min_points {
        return Ok(puzzle);
      }
    }
    Err(PuzzleError::DictionaryTooSparse { attempts: MAX_GENERATION_ATTEMPTS })
  }

  /// Tokenizes and evaluates raw guess text. A guess with symbols outside the
  /// phone inventory can match nothing and comes back `NotInWordList`.
  pub fn submit_guess(&mut self, raw: &str) -> Guess {
    match tokenize(raw) {
      Ok(pron) => self.evaluate(pron),
      Err(_) => Guess::miss(GuessOutcome::NotInWordList, Vec::new()),
    }
  }

  /// The guess state machine. Check order matters: length, then center, then
  /// duplicates, then the answer lookup. Only `Correct` mutates the player
  /// state.
  pub fn evaluate(&mut self, pron: Vec<Phone>) -> Guess {
    use GuessOutcome::*;

    if pron.len() < 4 {
      return Guess::miss(TooShort, pron);
    }
    if !pron.contains(&self.chart.center) {
      return Guess::miss(MissingCenter, pron);
    }
    if self.player.found.contains(&pron) {
      return Guess::miss(AlreadyFound, pron);
    }
    if let Some(words) = self.answers.get(&pron) {
      let points = score(&pron);
      let words = words.clone();
      self.player.found.insert(pron.clone());
      self.player.score += points;
      return Guess { points, outcome: Correct, words, pronunciation: pron };
    }
    Guess::miss(NotInWordList, pron)
  }

  pub fn current_score(&self) -> u32 {
    self.player.score
  }

  pub fn current_level(&self) -> (&'static str, f64) {
    (
      self.levels.level_for(self.player.score),
      self.levels.progress(self.player.score),
    )
  }

  pub fn reached_top(&self) -> bool {
    self.player.score >= self.levels.top_score
  }

  pub fn found_all_words(&self) -> bool {
    self.player.score >= self.total_points
  }
}


use std::collections::BTreeMap;

pub const PUZZLE_LEVELS: [&str; 9] = [
  "Underspecified",
  "Minimal",
  "Weak Position",
  "Lenited",
  "Reduced",
  "Strong Position",
  "Saturated",
  "Hardened",
  "Optimal",
];

/// Score thresholds for the named levels of one chart. Rebuilt whenever a new
/// chart is generated; level 0 is implicit and holds below the first threshold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelTable {
  /// 90% of the chart's total points, floored. Reaching it means reaching the
  /// top level; all-words finishes land above it.
  pub top_score: u32,
  pub thresholds: BTreeMap<u32, &'static str>,
}

impl LevelTable {
  /// Mirrors the original threshold construction, quirks included: the f64
  /// top-score truncation, level 1 pinned at 1 point, middle level i at
  /// i * step, the top level at top_score, and later inserts overwriting any
  /// colliding threshold (with a small step several middle levels collapse
  /// onto one threshold).
  pub fn build(total_points: u32) -> LevelTable {
    let top_score = (total_points as f64 - total_points as f64 * 0.1) as u32;
    let step = top_score / (PUZZLE_LEVELS.len() as u32 - 1);

    let mut thresholds = BTreeMap::new();
    thresholds.insert(1, PUZZLE_LEVELS[1]);
    thresholds.insert(top_score, PUZZLE_LEVELS[PUZZLE_LEVELS.len() - 1]);
    for i in 2..PUZZLE_LEVELS.len() - 1 {
      thresholds.insert(i as u32 * step, PUZZLE_LEVELS[i]);
    }

    LevelTable { top_score, thresholds }
  }

  /// The highest-threshold level the score has reached.
  pub fn level_for(&self, score: u32) -> &'static str {
    for (&points, &level) in self.thresholds.iter().rev() {
      if score >= points {
        return level;
      }
    }
    PUZZLE_LEVELS[0]
  }

  /// Fraction of the top score reached. Exceeds 1.0 once all words are found,
  /// since total_points > top_score.
  pub fn progress(&self, score: u32) -> f64 {
    if self.top_score == 0 {
      0.0
    } else {
      score as f64 / self.top_score as f64
    }
  }
}

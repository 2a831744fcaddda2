
use std::collections::HashMap;

use itertools::Itertools;
use rand::Rng;

use crate::dictionary::GameDictionary;
use crate::errors::PuzzleError;
use crate::phones::Phone;

/// The live puzzle board: seven distinct phones, one of them the mandatory
/// center. Immutable once selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chart {
  pub phones: [Phone; 7],
  pub center: Phone,
}

impl Chart {
  /// The six non-center phones, in chart order. The terminal layout indexes
  /// into this.
  pub fn outer_phones(&self) -> Vec<Phone> {
    self.phones.iter().copied().filter(|p| *p != self.center).collect()
  }
}

/// Every legally guessable pronunciation for a chart, keyed by the full
/// pronunciation; the value holds the orthographic homophones sharing it.
pub type AnswerSet = HashMap<Vec<Phone>, Vec<String>>;

/// Picks a chart uniformly among the dictionary's seven-phone keys, then a
/// center uniformly among its members. The candidate list is sorted first so a
/// seeded rng yields the same chart regardless of map iteration order.
pub fn generate_chart(dict: &GameDictionary, rng: &mut impl Rng) -> Result<Chart, PuzzleError> {
  let mut candidates: Vec<&Vec<Phone>> =
    dict.entries.keys().filter(|key| key.len() == 7).collect();
  if candidates.is_empty() {
    return Err(PuzzleError::NoValidChart);
  }
  candidates.sort();

  let key = candidates[rng.gen_range(0..candidates.len())];
  let mut phones = [key[0]; 7];
  phones.copy_from_slice(key);
  let center = phones[rng.gen_range(0..phones.len())];

  Ok(Chart { phones, center })
}

/// Walks every center-containing subset of the chart phones (64 candidates),
/// looks each up as a dictionary key, and folds every hit of pronunciation
/// length at least 4 into an answer set grouped by full pronunciation.
/// Subsets are visited in a fixed order. The length constraint is on the full
/// pronunciation, not the key: a length-4 word with only 3 distinct phones
/// sits under a size-3 key and is still answerable.
pub fn enumerate_answers(chart: &Chart, dict: &GameDictionary) -> AnswerSet {
  let mut answers: AnswerSet = HashMap::new();

  for size in 1..=chart.phones.len() {
    for combo in chart.phones.iter().copied().combinations(size) {
      if !combo.contains(&chart.center) {
        continue;
      }
      let key: Vec<Phone> = combo.into_iter().sorted().collect();
      if let Some(pairs) = dict.lookup(&key) {
        for (pron, word) in pairs {
          if pron.len() >= 4 {
            answers.entry(pron.clone()).or_default().push(word.clone());
          }
        }
      }
    }
  }

  answers
}


use crate::chart::AnswerSet;
use crate::phones::{phone_set, Phone};

/// A pronunciation using all seven chart phones. Only meaningful for
/// pronunciations already known to draw on a single chart.
pub fn is_panphone(pron: &[Phone]) -> bool {
  phone_set(pron).len() == 7
}

/// Points for a correct answer. The checks run in this exact order: minimum
/// length first, panphone second, plain length otherwise.
pub fn score(pron: &[Phone]) -> u32 {
  if pron.len() == 4 {
    1
  } else if is_panphone(pron) {
    pron.len() as u32 + 7
  } else {
    pron.len() as u32
  }
}

/// The fixed maximum for a chart: the sum over every distinct pronunciation in
/// the answer set. Homophones sharing a pronunciation count once.
pub fn total_points(answers: &AnswerSet) -> u32 {
  answers.keys().map(|pron| score(pron)).sum()
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashMap;
  use Phone::*;

  #[test]
  fn test_length_four_scores_one() {
    // only 3 distinct phones, but length 4
    assert_eq!(score(&[T, Eh, S, T]), 1);
  }

  #[test]
  fn test_plain_length_score() {
    assert_eq!(score(&[S, T, Ae, K, S]), 5);
    assert_eq!(score(&[P, Ae, S, T, Eh, D]), 6);
  }

  #[test]
  fn test_panphone_bonus() {
    let pron = [P, Ae, T, Eh, S, K, Iy, T, S];
    assert_eq!(pron.len(), 9);
    assert!(is_panphone(&pron));
    assert_eq!(score(&pron), 16);
  }

  #[test]
  fn test_seven_distinct_length_seven() {
    assert_eq!(score(&[P, Ae, T, Eh, S, K, Iy]), 14);
  }

  #[test]
  fn test_total_points_sums_distinct_pronunciations() {
    let mut answers: AnswerSet = HashMap::new();
    answers.insert(vec![T, Eh, S, T], vec!["test".to_string(), "tessed".to_string()]);
    answers.insert(vec![S, T, Ae, K, S], vec!["stacks".to_string()]);
    answers.insert(vec![P, Ae, T, Eh, S, K, Iy], vec!["pateski".to_string()]);

    // 1 + 5 + 14; the homophone pair counts once
    assert_eq!(total_points(&answers), 20);
  }
}

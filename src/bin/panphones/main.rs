
use std::io::{self, Write};

use clap::Parser;
use console::style;
use dialoguer::Select;
use itertools::Itertools;
use lazy_static::lazy_static;
use rand::seq::SliceRandom;
use rand::{thread_rng, Rng};
use regex::Regex;

use panphones::chart::Chart;
use panphones::dictionary::GameDictionary;
use panphones::levels::PUZZLE_LEVELS;
use panphones::phones::{render, Phone};
use panphones::puzzle::{Guess, GuessOutcome, Puzzle, DEFAULT_MIN_POINTS};
use panphones::scoring::is_panphone;

const INSTRUCTIONS: &str = "Welcome to Panphones! Build English words from the seven phones on the chart. \
Every answer must contain the center phone, be at least four phones long, and use only chart phones. \
Type guesses in IPA, or use the digit printed next to each phone (digits and IPA mix freely). \
Four-phone answers score 1 point, longer answers score their length, and an answer using all seven \
phones is a Panphone worth 7 extra. \
Commands: 'shuffle', 'levels', 'show answers', 'n' for a new game, 'quit' to exit.";

#[derive(Parser, Debug)]
#[command()]
struct Args {
  /// Path to the game dictionary JSON produced by the offline pipeline.
  #[arg(long, default_value = "res/game-dict.json")]
  dict: String,

  /// Minimum total points a generated chart must be worth.
  #[arg(long, default_value_t = DEFAULT_MIN_POINTS)]
  min_points: u32,
}

enum PlayAction {
  NewGame,
  Quit,
}

fn main() {
  let args = Args::parse();

  let dict = match GameDictionary::load(&args.dict) {
    Ok(dict) => dict,
    Err(e) => {
      eprintln!("Failed to load {}: {}", args.dict, e);
      std::process::exit(1);
    }
  };

  let mut rng = thread_rng();
  loop {
    match play_puzzle(&dict, args.min_points, &mut rng) {
      PlayAction::NewGame => continue,
      PlayAction::Quit => break,
    }
  }
}

fn play_puzzle(dict: &GameDictionary, min_points: u32, rng: &mut impl Rng) -> PlayAction {
  let mut puzzle = match Puzzle::generate(dict, min_points, rng) {
    Ok(puzzle) => puzzle,
    Err(e) => {
      eprintln!("Could not generate a puzzle: {}", e);
      std::process::exit(1);
    }
  };

  let mut layout = puzzle.chart.outer_phones();
  let mut notified_top = false;
  let mut notified_all = false;

  println!("\n{}\n", INSTRUCTIONS);
  score_bar(&puzzle);
  print_chart(&puzzle.chart, &layout);

  loop {
    let raw = match prompt("Guess: ") {
      Some(line) => line,
      None => return PlayAction::Quit,
    };

    match raw.as_str() {
      "quit" => return PlayAction::Quit,
      "n" => return PlayAction::NewGame,
      "shuffle" => layout.shuffle(rng),
      "idkfa" => puzzle.player.score += 10,
      "levels" => print_levels(&puzzle),
      "show answers" => print_answers(&puzzle),
      _ => {
        let text = if contains_digit(&raw) {
          match expand_digits(&raw, &puzzle.chart) {
            Some(expanded) => {
              println!("IPA: [{}]", expanded);
              expanded
            },
            None => {
              println!("Use only the digits on the puzzle!");
              continue;
            }
          }
        } else {
          raw
        };

        let guess = puzzle.submit_guess(&text);
        println!("{}", guess_message(&guess));
      }
    }

    if puzzle.reached_top() && !notified_top {
      notified_top = true;
      println!("You have reached the highest level: {}!", PUZZLE_LEVELS[PUZZLE_LEVELS.len() - 1]);
      match endgame_prompt() {
        Some(action) => return action,
        None => {}
      }
    }
    if puzzle.found_all_words() && !notified_all {
      notified_all = true;
      println!("You found all the words! You are hereby coronalized. \u{1F451}\u{1F445}");
      match endgame_prompt() {
        Some(action) => return action,
        None => {}
      }
    }

    score_bar(&puzzle);
    print_chart(&puzzle.chart, &layout);
  }
}

fn prompt(msg: &str) -> Option<String> {
  print!("{}", msg);
  io::stdout().flush().ok()?;
  let mut line = String::new();
  if io::stdin().read_line(&mut line).ok()? == 0 {
    return None;
  }
  Some(line.trim().to_string())
}

fn contains_digit(raw: &str) -> bool {
  lazy_static! {
    static ref DIGIT_RE: Regex = Regex::new(r"\d").unwrap();
  }
  DIGIT_RE.is_match(raw)
}

/// Replaces each digit with the chart phone it indexes; everything else passes
/// through for the tokenizer. None on a digit with no phone behind it.
fn expand_digits(raw: &str, chart: &Chart) -> Option<String> {
  let mut expanded = String::new();
  for c in raw.chars() {
    match c.to_digit(10) {
      Some(d) => expanded.push_str(&chart.phones.get(d as usize)?.to_ipa()),
      None => expanded.push(c),
    }
  }
  Some(expanded)
}

fn guess_message(guess: &Guess) -> String {
  use GuessOutcome::*;
  match guess.outcome {
    TooShort => "Too short".to_string(),
    MissingCenter => "Missing center phone".to_string(),
    AlreadyFound => "Already found".to_string(),
    NotInWordList => "Not in word list".to_string(),
    Correct => {
      let words = guess.words.iter().join(", ");
      if guess.points == 1 {
        format!("1 point: {}", words)
      } else if is_panphone(&guess.pronunciation) {
        format!("{} {} points: {}", style("\u{1F308}Panphone!\u{1F308}").bold(), guess.points, words)
      } else {
        format!("Nice! {} points: {}", guess.points, words)
      }
    }
  }
}

fn score_bar(puzzle: &Puzzle) {
  let (level, progress) = puzzle.current_level();
  let padding = PUZZLE_LEVELS.iter().map(|l| l.len()).max().unwrap_or(0) + 1;
  let length: i64 = 30;
  let filled = (progress * length as f64) as i64;
  let score_text = puzzle.current_score().to_string();
  let bar = format!(
    "{}{}{}",
    "=".repeat((filled - score_text.len() as i64).max(0) as usize),
    score_text,
    "-".repeat((length - filled).max(0) as usize)
  );
  println!("{:<width$} {}", level, bar, width = padding);
}

fn print_chart(chart: &Chart, layout: &[Phone]) {
  let index_of = |p: Phone| chart.phones.iter().position(|q| *q == p).unwrap_or(0);
  let sym = |i: usize| format!("{}({})", layout[i], index_of(layout[i]));
  let center = format!("{}({})", style(chart.center).bold().yellow(), index_of(chart.center));

  println!();
  println!("\t\t{}", sym(0));
  println!("\t{}\t\t{}", sym(1), sym(2));
  println!("\t\t{}", center);
  println!("\t{}\t\t{}", sym(3), sym(4));
  println!("\t\t{}", sym(5));
  println!();
}

fn print_levels(puzzle: &Puzzle) {
  let formatted = puzzle.levels.thresholds.iter()
    .map(|(points, level)| format!("{} ({})", level, points))
    .join(", ");
  println!("{}", formatted);
}

fn print_answers(puzzle: &Puzzle) {
  for (pron, words) in puzzle.answers.iter().sorted() {
    println!("{}\t{}", render(pron), words.iter().join(", "));
  }
}

fn endgame_prompt() -> Option<PlayAction> {
  let choice = Select::new()
    .with_prompt("keep playing, start a new game, or quit?")
    .items(&["keep playing", "new game", "quit"])
    .default(0)
    .interact();

  match choice {
    Ok(1) => Some(PlayAction::NewGame),
    Ok(2) | Err(_) => Some(PlayAction::Quit),
    _ => None,
  }
}

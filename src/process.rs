//! Name score processing pipeline: parse, sort, score, sum.

use std::io::{BufReader, Read, Write};

use anyhow::{Context, Result};

use crate::types::{Name, Names, Score};

/// Run
///
/// Read all names from `input` (trait bound `std::io::Read`), sort them, compute
/// the rank-weighted total score and write the result line to `output` (trait
/// bound `std::io::Write`).
pub fn run<R: Read, W: Write>(input: &mut R, output: &mut W) -> Result<()> {
	let mut names = read_names(input)?;
	names.sort();
	let total = calculate_total_score(&names);
	writeln!(output, "The total score for the input file is {}.", total)?;
	Ok(())
}

/// Read Names
///
/// Read the entire input into memory and parse it into name tokens. No streaming:
/// input files are flat one-record lists of names and comfortably fit in memory.
fn read_names<R: Read>(input: &mut R) -> Result<Names> {
	let mut buffered = BufReader::new(input);
	let mut contents = String::new();
	buffered
		.read_to_string(&mut contents)
		.context("Failed to read the input file")?;
	Ok(parse_names(&contents))
}

/// Parse Names
///
/// Strip every double-quote character from the content, then split on commas.
/// Every token becomes a name, including empty ones from doubled or trailing
/// delimiters. This is a plain character strip, not CSV quoting: commas inside
/// quotes are not protected.
fn parse_names(contents: &str) -> Names {
	let stripped: String = contents.chars().filter(|&c| c != '"').collect();
	stripped.split(',').map(str::to_owned).collect()
}

/// Calculate Total Score
///
/// Sum `rank * name score` over the sorted list, where rank is the 1-based
/// position. The caller is responsible for sorting first.
fn calculate_total_score(names: &[Name]) -> Score {
	let mut total = 0;
	for (i, name) in names.iter().enumerate() {
		let rank = i as Score + 1;
		let score = calculate_name_score(name);
		log::debug!("{} : {} : {}", rank, name, rank * score);
		total += rank * score;
	}
	total
}

/// Calculate Name Score
///
/// Uppercase each character and add its code point minus 64, so 'A' counts 1
/// through 'Z' counting 26. Characters outside A-Z still contribute
/// `code point - 64` (a space counts -32, '5' counts -11); no filtering is done.
fn calculate_name_score(name: &str) -> Score {
	name.chars()
		.map(|c| c.to_ascii_uppercase() as Score - 64)
		.sum()
}

#[cfg(test)]
mod test {
	use super::*;
	use rstest::*;

	#[rstest]
	#[case("", 0)]
	#[case("ABC", 6)]
	#[case("COLIN", 53)]
	#[case("ALICE", 30)]
	#[case("BOB", 19)]
	fn name_scores(#[case] name: &str, #[case] expected: Score) {
		assert_eq!(calculate_name_score(name), expected);
	}

	#[rstest]
	fn scoring_is_case_insensitive() {
		assert_eq!(calculate_name_score("abc"), calculate_name_score("ABC"));
		assert_eq!(calculate_name_score("Colin"), calculate_name_score("COLIN"));
	}

	#[rstest]
	#[case(" ", -32)]
	#[case("5", -11)]
	fn non_alphabetic_characters_still_count(#[case] name: &str, #[case] expected: Score) {
		// The alphabet offset applies to every character, by original behaviour.
		assert_eq!(calculate_name_score(name), expected);
	}

	#[rstest]
	fn parse_strips_quotes_and_splits_on_commas() {
		let names = parse_names("\"MARY\",\"PATRICIA\",\"LINDA\"");
		assert_eq!(names, vec!["MARY", "PATRICIA", "LINDA"]);
	}

	#[rstest]
	fn parse_keeps_empty_tokens() {
		let names = parse_names("\"ANN\",,\"BEA\",");
		assert_eq!(names, vec!["ANN", "", "BEA", ""]);
	}

	#[rstest]
	#[case("A,B,C")]
	#[case("\"A\",\"B\"")]
	#[case(",,")]
	#[case("SOLO")]
	fn parse_yields_one_more_token_than_commas(#[case] contents: &str) {
		let commas = contents.matches(',').count();
		assert_eq!(parse_names(contents).len(), commas + 1);
	}

	#[rstest]
	fn sorting_uses_ordinal_order_and_is_idempotent() {
		let mut names: Names = vec!["alice".into(), "BOB".into()];
		names.sort();
		// Uppercase code points are lower, so "BOB" comes first.
		assert_eq!(names, vec!["BOB", "alice"]);
		let once = names.clone();
		names.sort();
		assert_eq!(names, once);
	}

	#[rstest]
	fn total_weights_scores_by_rank() {
		let names: Names = vec!["ALICE".into(), "BOB".into()];
		// 1 * 30 + 2 * 19
		assert_eq!(calculate_total_score(&names), 68);
	}

	#[rstest]
	fn total_of_empty_list_is_zero() {
		assert_eq!(calculate_total_score(&[]), 0);
	}

	#[rstest]
	fn run_sorts_before_scoring() {
		let mut input = "\"BOB\",\"ALICE\"".as_bytes();
		let mut output = Vec::new();
		run(&mut input, &mut output).unwrap();
		assert_eq!(
			std::str::from_utf8(&output).unwrap(),
			"The total score for the input file is 68.\n"
		);
	}
}

//! Program entrypoint, argument parsing and interactive path resolution.

use std::env;
use std::fs::File;
use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{anyhow, Context, Result};

use name_score_calculator::process;

static ARG_MSG: &str = "Expected at most one positional argument (path to the name file)";

/// Parse Arg
///
/// Parse an optional single positional argument, returning an error if anything
/// more than that is present. (Skipping a dependency on `Clap` or equivalent
/// given how simple this is).
fn parse_arg() -> Result<Option<String>> {
	let mut args = env::args();
	if args.len() > 2 {
		return Err(anyhow!(ARG_MSG)); // Reject any unexpected args, just to be sure
	}
	Ok(args.nth(1))
}

/// Prompt For Path
///
/// Ask the user for a file name and read one line of input. End of input on the
/// prompt stream is fatal rather than something to keep looping on.
fn prompt_for_path<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<String> {
	write!(output, "\nPlease enter a file name: ")?;
	output.flush()?;
	let mut line = String::new();
	if input.read_line(&mut line)? == 0 {
		return Err(anyhow!("No file name given (end of input)"));
	}
	Ok(line.trim_end_matches(['\r', '\n']).to_owned())
}

/// Resolve Path
///
/// Take the path from the command line argument if one was given, otherwise
/// prompt for it. Keep re-prompting until the path names an existing file; the
/// loop is unbounded and only ends with a valid path or end of input.
fn resolve_path<R: BufRead, W: Write>(
	arg: Option<String>,
	input: &mut R,
	output: &mut W,
) -> Result<String> {
	let mut path = match arg {
		Some(path) => path,
		None => prompt_for_path(input, output)?,
	};
	while !Path::new(&path).exists() {
		writeln!(output, "The file you specified was not found.")?;
		path = prompt_for_path(input, output)?;
	}
	Ok(path)
}

/// Wait For Exit
///
/// Block on one line of input before exiting so the result stays on screen when
/// run from a double-click console window.
fn wait_for_exit<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<()> {
	write!(output, "Press enter to end...")?;
	output.flush()?;
	let mut line = String::new();
	input.read_line(&mut line)?;
	Ok(())
}

fn main() -> Result<()> {
	env_logger::init();
	let stdin = io::stdin();
	let mut input = stdin.lock();
	let mut output = io::stdout();

	let path = resolve_path(parse_arg()?, &mut input, &mut output)?;
	// The file can still vanish between the existence check and the open. That
	// case terminates with a diagnostic and non-zero status instead of looping.
	let mut file =
		File::open(&path).with_context(|| format!("The file {} was not found", path))?;
	process::run(&mut file, &mut output)?;
	wait_for_exit(&mut input, &mut output)
}

//! Interactive line-oriented shell over a [`SequenceService`].
//!
//! One command per line. Values after `insert`/`remove`/`contains` are taken
//! verbatim to the end of the line, so text values may contain spaces. A
//! token that parses as an integer is treated as numeric, everything else as
//! text; the service decides whether that matches the sequence's kind.

use log::error;
use rustyline::config::Configurer;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::service::SequenceService;
use crate::types::RawValue;

const HISTORY_FILE: &str = ".sortchain_history";

const SHELL_HELP: &str = "\
commands:
  insert <value>    add a value at its sorted position
  remove <value>    remove the first matching value
  contains <value>  check whether a value is present
  stats             show size and bounds
  clear             drop every entry
  help              show this message
  quit              leave the shell";

/// A parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Insert(RawValue),
    Remove(RawValue),
    Contains(RawValue),
    Stats,
    Clear,
    Help,
    Quit,
}

impl Command {
    /// Parse one input line.
    ///
    /// Returns a usage message (not an error that ends the shell) for
    /// unknown verbs, missing values, and stray arguments.
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match verb.to_ascii_lowercase().as_str() {
            "insert" => Ok(Command::Insert(value_arg("insert", rest)?)),
            "remove" => Ok(Command::Remove(value_arg("remove", rest)?)),
            "contains" => Ok(Command::Contains(value_arg("contains", rest)?)),
            "stats" => no_arg("stats", rest, Command::Stats),
            "clear" => no_arg("clear", rest, Command::Clear),
            "help" => no_arg("help", rest, Command::Help),
            "quit" | "exit" => no_arg(verb, rest, Command::Quit),
            other => Err(format!("unknown command `{other}`, try `help`")),
        }
    }
}

fn value_arg(verb: &str, rest: &str) -> Result<RawValue, String> {
    if rest.is_empty() {
        Err(format!("`{verb}` needs a value, e.g. `{verb} 42`"))
    } else {
        Ok(RawValue::parse(rest))
    }
}

fn no_arg(verb: &str, rest: &str, command: Command) -> Result<Command, String> {
    if rest.is_empty() {
        Ok(command)
    } else {
        Err(format!("`{verb}` takes no argument"))
    }
}

/// Run the interactive loop until `quit`, Ctrl-C, or Ctrl-D.
pub fn run(mut service: SequenceService) -> rustyline::Result<()> {
    let mut editor = DefaultEditor::new()?;
    editor.set_auto_add_history(true);
    let _ = editor.load_history(HISTORY_FILE); // first run has no history yet

    let prompt = format!("{}> ", service.kind());
    loop {
        match editor.readline(&prompt) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                match Command::parse(&line) {
                    Ok(Command::Quit) => break,
                    Ok(command) => execute(&mut service, command),
                    Err(usage) => println!("{usage}"),
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => {
                error!("readline failed: {err}");
                return Err(err);
            }
        }
    }

    if let Err(err) = editor.save_history(HISTORY_FILE) {
        error!("failed to save shell history: {err}");
    }
    println!("Goodbye!");
    Ok(())
}

fn execute(service: &mut SequenceService, command: Command) {
    match command {
        Command::Insert(raw) => {
            let shown = raw.to_string();
            match service.insert(raw) {
                Ok(()) => println!("Inserted {shown}"),
                Err(err) => println!("Rejected: {err}"),
            }
        }
        Command::Remove(raw) => {
            let shown = raw.to_string();
            match service.remove(raw) {
                Ok(true) => println!("Removed {shown}"),
                Ok(false) => println!("{shown} was not present"),
                Err(err) => println!("Rejected: {err}"),
            }
        }
        Command::Contains(raw) => {
            let shown = raw.to_string();
            match service.contains(raw) {
                Ok(true) => println!("{shown} is present"),
                Ok(false) => println!("{shown} is not present"),
                Err(err) => println!("Rejected: {err}"),
            }
        }
        Command::Stats => println!("{}", service.stats()),
        Command::Clear => {
            let dropped = service.len();
            service.clear();
            println!("Cleared {dropped} entries");
        }
        Command::Help => println!("{SHELL_HELP}"),
        // handled by the caller
        Command::Quit => {}
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

//! devcon interactive shell.
//!
//! A thin line-oriented front-end around the interpreter core: reads one
//! command per line, previews autocomplete for lines starting with `?`,
//! and keeps a persisted recall buffer. The core neither reads input nor
//! prints; everything visible happens here.

mod commands;
mod history;

use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::rc::Rc;

use anyhow::Result;
use devcon_console::{
    AutocompleteEngine, CommandDescriptor, CommandOutput, CommandRegistry, Dispatcher, Outcome,
};
use devcon_types::config::ShellConfig;

use crate::commands::CubeState;
use crate::history::History;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ShellConfig::load(Path::new("devcon.toml"))?;
    let cube = Rc::new(RefCell::new(CubeState::default()));
    let registry = CommandRegistry::build(commands::demo_commands(Rc::clone(&cube)));
    log::info!("devcon ready: {} commands registered", registry.len());

    let dispatcher = Dispatcher::new(&registry);
    let autocomplete = AutocompleteEngine::new(&registry);
    let mut history = History::load(Path::new(&config.history_path), config.history_limit)?;

    println!("devcon shell -- '?<prefix>' suggests, ':history' recalls, ':quit' exits");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        write!(stdout, "{}", config.prompt)?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim_end_matches(['\n', '\r']);

        match line {
            ":quit" | ":q" => break,
            ":history" => {
                for (i, entry) in history.entries().iter().enumerate() {
                    println!(" {:3}  {entry}", i + 1);
                }
            },
            _ if line.starts_with('?') => {
                print_suggestions(&autocomplete.suggest(&line[1..]), config.max_suggestions);
            },
            _ if line.trim().is_empty() => {},
            _ => {
                history.push(line);
                print_outcome(&dispatcher.execute(line));
            },
        }
    }

    history.save(Path::new(&config.history_path))?;
    Ok(())
}

/// Render suggestion rows: bare name for zero-arity commands, otherwise the
/// full signature, with the summary appended when one was registered.
fn print_suggestions(matches: &[&CommandDescriptor], cap: usize) {
    if matches.is_empty() {
        println!("(no matches)");
        return;
    }
    for desc in matches.iter().take(cap) {
        let mut row = if desc.arity() == 0 {
            desc.name().to_string()
        } else {
            desc.signature()
        };
        if !desc.summary().is_empty() {
            row.push_str(" - ");
            row.push_str(desc.summary());
        }
        println!("  {row}");
    }
    if matches.len() > cap {
        println!("  (+{} more)", matches.len() - cap);
    }
}

fn print_outcome(outcome: &Outcome<'_>) {
    match outcome {
        Outcome::Empty => {},
        Outcome::Invoked { output, .. } => print_output(output),
        Outcome::NotFound { name } => println!("unknown command: {name}"),
        Outcome::ArityMismatch { candidate, given } => println!(
            "{} takes {} argument(s), got {given}; usage: {}",
            candidate.name(),
            candidate.arity(),
            candidate.signature(),
        ),
        Outcome::ArgumentError {
            command,
            index,
            raw,
            output,
        } => {
            println!(
                "warning: argument {} ({raw:?}) did not parse for {}; ran with a default",
                index + 1,
                command.signature(),
            );
            print_output(output);
        },
        Outcome::InvocationFailed { command, error } => {
            println!("{}: {error}", command.name());
        },
    }
}

fn print_output(output: &CommandOutput) {
    match output {
        CommandOutput::Text(text) => println!("{text}"),
        CommandOutput::None => {},
    }
}

//! Interactive shell. This is the host loop in which the undo window is
//! actually worth advertising: the process sticks around, so the clock
//! gets pumped and the affordance can expire in front of the user.

use colored::*;
use jobtrack::api::TrackerApi;
use jobtrack::commands::helpers::describe;
use jobtrack::error::{Result, TrackError};
use jobtrack::query::{Filter, SortBy};
use jobtrack::store::FsBackend;
use std::io::{self, Write};

enum ShellOutcome {
    Continue,
    Quit,
}

pub fn run(api: &mut TrackerApi<FsBackend>) -> Result<()> {
    println!("jobtrack shell. Type 'help' for commands, 'quit' to leave.");

    loop {
        // Pump the undo clock before blocking on input, so an expiry that
        // happened while the prompt sat idle is reported exactly once.
        if let Some(record) = api.tick() {
            println!(
                "{}",
                format!("Undo window closed: {}", describe(&record)).dimmed()
            );
        }
        if let Some(record) = api.pending_undo() {
            if let Some(remaining) = api.undo_time_left() {
                let secs = remaining.as_secs_f64().ceil() as u64;
                println!(
                    "{}",
                    format!(
                        "Deleted {} (type 'undo' within {}s to restore)",
                        describe(record),
                        secs
                    )
                    .dimmed()
                );
            }
        }

        print!("jobtrack> ");
        io::stdout().flush()?;

        let mut line = String::new();
        let bytes = io::stdin().read_line(&mut line)?;
        if bytes == 0 {
            println!();
            break;
        }

        match dispatch(api, line.trim()) {
            Ok(ShellOutcome::Quit) => break,
            Ok(ShellOutcome::Continue) => {}
            Err(e) => println!("{}", format!("Error: {}", e).red()),
        }
    }

    Ok(())
}

fn dispatch(api: &mut TrackerApi<FsBackend>, line: &str) -> Result<ShellOutcome> {
    let mut parts = line.split_whitespace();
    let cmd = match parts.next() {
        Some(c) => c,
        None => return Ok(ShellOutcome::Continue),
    };

    match cmd {
        "list" | "ls" => {
            let result = api.list(&Filter::default(), SortBy::default())?;
            crate::print_records(&result.listed_records);
            crate::print_messages(&result.messages);
        }
        "show" | "s" => {
            let indexes = parse_indexes(parts)?;
            let result = api.show(&indexes)?;
            crate::print_full_records(&result.listed_records);
            crate::print_messages(&result.messages);
        }
        "delete" | "rm" => {
            let index = parse_index(parts.next())?;
            // No confirmation inside the shell: the undo window is the
            // second chance.
            let result = api.delete(index, true)?;
            crate::print_messages(&result.messages);
        }
        "undo" | "u" => {
            let result = api.undo()?;
            crate::print_messages(&result.messages);
        }
        "stats" => {
            let result = api.stats()?;
            if let Some(stats) = &result.stats {
                crate::print_stats(stats);
            }
            crate::print_messages(&result.messages);
        }
        "help" | "h" | "?" => print_help(),
        "quit" | "exit" | "q" => return Ok(ShellOutcome::Quit),
        other => println!("Unknown command: {} (try 'help')", other),
    }

    Ok(ShellOutcome::Continue)
}

fn parse_index(arg: Option<&str>) -> Result<usize> {
    match arg {
        Some(s) => s
            .parse()
            .map_err(|_| TrackError::Api(format!("Invalid index: {}", s))),
        None => Err(TrackError::Api("Usage: delete <index>".to_string())),
    }
}

fn parse_indexes<'a, I: Iterator<Item = &'a str>>(parts: I) -> Result<Vec<usize>> {
    let indexes: Vec<usize> = parts
        .map(|s| {
            s.parse()
                .map_err(|_| TrackError::Api(format!("Invalid index: {}", s)))
        })
        .collect::<Result<_>>()?;
    if indexes.is_empty() {
        return Err(TrackError::Api("Usage: show <index>...".to_string()));
    }
    Ok(indexes)
}

fn print_help() {
    println!("Commands:");
    println!("  list            List applications");
    println!("  show <n>...     Show full details");
    println!("  delete <n>      Delete an application (undoable for a short window)");
    println!("  undo            Restore the most recently deleted application");
    println!("  stats           Summary statistics");
    println!("  help            This message");
    println!("  quit            Leave the shell");
}

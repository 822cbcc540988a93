use std::io::Write;
use std::path::PathBuf;

use color_eyre::eyre::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::error;

use mediashelf::app::{Action, Outcome, Session};
use mediashelf::config::Settings;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;

    setup_logging()?;

    if let Err(e) = run().await {
        error!("Application error: {}", e);
        return Err(e);
    }

    Ok(())
}

fn setup_logging() -> Result<()> {
    let log_dir = std::env::current_dir()?.join("logs");
    std::fs::create_dir_all(&log_dir)?;
    let log_path = log_dir.join("mediashelf.log");

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&log_path)?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter("mediashelf=debug,info")
        .with_target(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting mediashelf, logging to {}", log_path.display());
    Ok(())
}

async fn run() -> Result<()> {
    let settings = Settings::load().await?;
    let source_folder = settings.source_folder.clone();
    let mut session = Session::new(settings);

    if let Some(folder) = source_folder {
        let outcome = session.apply(Action::Open(folder)).await?;
        render(&outcome);
    } else {
        print_help();
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match parse_command(line, &session) {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => print_help(),
            Ok(Command::Action(action)) => match session.apply(action).await {
                Ok(outcome) => render(&outcome),
                Err(e) => eprintln!("error: {e}"),
            },
            Err(message) => eprintln!("{message}"),
        }
    }

    Ok(())
}

enum Command {
    Action(Action),
    Help,
    Quit,
}

fn parse_command(line: &str, session: &Session) -> Result<Command, String> {
    let (cmd, rest) = match line.split_once(char::is_whitespace) {
        Some((cmd, rest)) => (cmd, rest.trim()),
        None => (line, ""),
    };

    let action = match cmd {
        "open" => {
            if rest.is_empty() {
                return Err("usage: open <folder>".to_string());
            }
            Action::Open(PathBuf::from(rest))
        }
        "back" => Action::Back,
        "ls" | "list" => Action::List,
        "search" => {
            if rest.is_empty() {
                Action::ClearSearch
            } else {
                Action::Search(rest.to_string())
            }
        }
        "clear" => Action::ClearSearch,
        "sort" => {
            let mut parts = rest.split_whitespace();
            let key = parts
                .next()
                .ok_or_else(|| "usage: sort <name|date> <asc|desc>".to_string())?
                .parse()?;
            let order = parts
                .next()
                .ok_or_else(|| "usage: sort <name|date> <asc|desc>".to_string())?
                .parse()?;
            Action::Sort(key, order)
        }
        "dupes" => Action::FindDuplicates,
        "rm" => {
            if rest.is_empty() {
                return Err("usage: rm <name> [name ...]".to_string());
            }
            let mut paths = Vec::new();
            for name in rest.split_whitespace() {
                let entry = session
                    .entries
                    .iter()
                    .find(|e| e.name == name)
                    .ok_or_else(|| format!("no such entry: {name}"))?;
                paths.push(entry.path.clone());
            }
            Action::Delete(paths)
        }
        "undo" => Action::Undo,
        "help" => return Ok(Command::Help),
        "quit" | "exit" => return Ok(Command::Quit),
        other => return Err(format!("unknown command: {other} (try 'help')")),
    };

    Ok(Command::Action(action))
}

fn render(outcome: &Outcome) {
    match outcome {
        Outcome::Listed(entries) => {
            for entry in entries {
                println!(
                    "{:<5}  {}  {}",
                    entry.kind,
                    entry.modified.format("%Y-%m-%d %H:%M"),
                    entry.name
                );
            }
            println!("{} entries", entries.len());
        }
        Outcome::Duplicates(pairs) => {
            for pair in pairs {
                println!("{}  ==  {}", pair.first_seen.display(), pair.duplicate.display());
            }
            println!("{} duplicate pairs", pairs.len());
        }
        Outcome::Deleted(count) => println!("moved {count} files to the recycle bin"),
        Outcome::Restored(count) => println!("restored {count} files"),
    }
}

fn print_help() {
    println!("commands:");
    println!("  open <folder>            load the media files of a folder");
    println!("  back                     return to the previous folder");
    println!("  ls                       show the loaded entries");
    println!("  search <text>            filter entries by name (empty clears)");
    println!("  sort <name|date> <asc|desc>");
    println!("  dupes                    pair perceptually identical images");
    println!("  rm <name> [name ...]     move entries to the recycle bin");
    println!("  undo                     restore everything deleted so far");
    println!("  quit");
}

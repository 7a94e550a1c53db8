//! Interactive reading shell.
//!
//! Each line becomes one intent; the controller handles it to completion
//! before the next prompt.

use std::str::FromStr;

use anyhow::Result;
use colored::Colorize;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tales_application::{Intent, TalesApp};
use tales_core::config::ReaderConfig;
use tales_core::reader::ScrollMetrics;
use tales_core::{Filter, StoryId};

use crate::display::format_effect;

const HELP: &str = "\
Commands:
  search <text>          filter by text (empty clears)
  filter <all|psychology|horror|bookmarked>
  save <id>              toggle bookmark on a story
  read <id>              open a story in the reader
  scroll <offset> <content-height> <viewport-height>
  font <px>              set reader font size
  mark                   toggle bookmark on the open story
  close                  close the reader
  theme                  toggle light/dark
  list                   show the grid again
  help                   show this help
  quit                   leave";

/// One parsed shell line.
#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
    Intent(Intent),
    List,
    Help,
    Quit,
    Empty,
}

/// Parses a shell line. Font sizes are clamped to the configured bounds.
pub fn parse_line(line: &str, reader: &ReaderConfig) -> std::result::Result<ShellCommand, String> {
    let line = line.trim();
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    let command = match command {
        "" => ShellCommand::Empty,
        "search" => ShellCommand::Intent(Intent::SetSearch(rest.to_string())),
        "filter" => {
            let filter = Filter::from_str(rest).map_err(|_| format!("Unknown filter: '{rest}'"))?;
            ShellCommand::Intent(Intent::SetFilter(filter))
        }
        "save" => ShellCommand::Intent(Intent::ToggleBookmark(parse_id(rest)?)),
        "read" => ShellCommand::Intent(Intent::OpenReader(parse_id(rest)?)),
        "scroll" => {
            let numbers = rest
                .split_whitespace()
                .map(|n| n.parse::<f64>().map_err(|_| format!("Not a number: '{n}'")))
                .collect::<std::result::Result<Vec<_>, _>>()?;
            let [offset, content, viewport] = numbers.as_slice() else {
                return Err("Usage: scroll <offset> <content-height> <viewport-height>".to_string());
            };
            ShellCommand::Intent(Intent::Scroll(ScrollMetrics::new(*offset, *content, *viewport)))
        }
        "font" => {
            let px = rest
                .parse::<f32>()
                .ok()
                .filter(|px| px.is_finite())
                .ok_or_else(|| format!("Not a font size: '{rest}'"))?;
            ShellCommand::Intent(Intent::SetFontSize(reader.clamp_font_size(px)))
        }
        "mark" => ShellCommand::Intent(Intent::ToggleReaderBookmark),
        "close" => ShellCommand::Intent(Intent::CloseReader),
        "theme" => ShellCommand::Intent(Intent::ToggleTheme),
        "list" => ShellCommand::List,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" => ShellCommand::Quit,
        other => return Err(format!("Unknown command: '{other}' (try 'help')")),
    };
    Ok(command)
}

fn parse_id(raw: &str) -> std::result::Result<StoryId, String> {
    raw.parse::<StoryId>()
        .map_err(|_| format!("Not a story id: '{raw}'"))
}

/// Runs the shell until `quit` or end of input.
pub async fn run(mut app: TalesApp, reader: ReaderConfig) -> Result<()> {
    for effect in app.dispatch(Intent::LoadCatalog).await {
        println!("{}\n", format_effect(&effect));
    }
    println!("{}", "Type 'help' for commands.".dimmed());

    let mut editor = DefaultEditor::new()?;
    loop {
        let line = match editor.readline("tales> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        };
        let _ = editor.add_history_entry(line.as_str());

        match parse_line(&line, &reader) {
            Ok(ShellCommand::Intent(intent)) => {
                let effects = app.dispatch(intent).await;
                if effects.is_empty() {
                    println!("{}", "Nothing to show.".dimmed());
                }
                for effect in effects {
                    println!("{}\n", format_effect(&effect));
                }
            }
            Ok(ShellCommand::List) => println!("{}\n", crate::display::format_grid(&app.grid())),
            Ok(ShellCommand::Help) => println!("{HELP}"),
            Ok(ShellCommand::Quit) => break,
            Ok(ShellCommand::Empty) => {}
            Err(message) => println!("{}", message.red()),
        }
    }

    Ok(())
}

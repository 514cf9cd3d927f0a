//! JSON Example entry point
//!
//! Runs the friends screen in a terminal. Each line typed at the prompt is
//! saved as a new friend, `/cancel` dismisses the prompt, end of input quits.

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::ExitCode;

use json_example::config::CONFIG_FILE;
use json_example::consts::{PROMPT_MESSAGE, PROMPT_TITLE};
use json_example::{Config, ListView, PromptResponse, Screen};

const CANCEL: &str = "/cancel";

/// Plain stdout rendering
struct TerminalView;

impl ListView for TerminalView {
    fn show_header(&mut self, text: Option<&str>) {
        println!();
        if let Some(text) = text {
            println!("{text}");
        }
    }

    fn reload(&mut self, rows: &[String]) {
        println!("--");
        for row in rows {
            println!("  {row}");
        }
        println!("--");
    }
}

fn prompt(input: &mut impl BufRead) -> io::Result<Option<PromptResponse>> {
    print!("{PROMPT_TITLE} - {PROMPT_MESSAGE} ({CANCEL} to cancel): ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let line = line.trim_end_matches(['\r', '\n']);
    Ok(Some(if line == CANCEL {
        PromptResponse::Cancel
    } else {
        PromptResponse::Save(line.to_string())
    }))
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("JSON Example starting...");

    let config = Config::load_or_default(Path::new(CONFIG_FILE));
    let mut screen = match Screen::activate(&config) {
        Ok(screen) => screen,
        Err(e) => {
            log::error!("Cannot start: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut view = TerminalView;
    screen.render(&mut view);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    loop {
        match prompt(&mut input) {
            Ok(Some(response)) => {
                screen.handle(response, &mut view);
            }
            Ok(None) => break,
            Err(e) => {
                log::error!("Input error: {e}");
                return ExitCode::FAILURE;
            }
        }
    }

    println!();
    ExitCode::SUCCESS
}

use std::io::{self, BufRead, IsTerminal, Write};

use serde::Serialize;

use crate::cli::Cli;
use crate::error::AppError;
use crate::output::render_history_table;
use crate::processor::CommandProcessor;

/// REPL meta-command that prints the session history
const HISTORY_COMMAND: &str = ":history";
const PROMPT: &str = "> ";

#[derive(Serialize)]
struct Exchange<'a> {
    command: &'a str,
    response: &'a str,
}

fn render_json(command: &str, response: &str) -> String {
    serde_json::to_string(&Exchange { command, response }).unwrap_or_else(|e| {
        eprintln!("Failed to serialize JSON output: {}", e);
        "{}".to_string()
    })
}

fn print_response(cli: &Cli, command: &str, text: &str) {
    if text.is_empty() {
        return;
    }
    if cli.json {
        println!("{}", render_json(command.trim(), text));
    } else {
        println!("{text}");
    }
}

/// The whole exchange for a one-shot utterance, automation included unless
/// it was turned off
fn answer_once(cli: &Cli, processor: &mut CommandProcessor, utterance: &str) -> String {
    if cli.no_automation {
        processor.respond(utterance).text
    } else {
        processor.process(utterance)
    }
}

/// Serve one input line. Returns false once the session should end.
fn handle_line(cli: &Cli, processor: &mut CommandProcessor, line: &str) -> bool {
    if line.trim() == HISTORY_COMMAND {
        let table = render_history_table(
            processor.history(),
            processor.config().timezone,
            cli.use_color(),
        );
        println!("{table}");
        return true;
    }

    let reply = processor.respond(line);
    print_response(cli, line, &reply.text);
    if !cli.no_automation
        && let Some(follow_up) = &reply.follow_up
    {
        processor.perform(follow_up);
    }
    !reply.ends_session
}

/// Answer the one-shot utterance, or read commands from stdin until EOF or
/// a goodbye
pub(crate) fn run(cli: &Cli, processor: &mut CommandProcessor) -> Result<(), AppError> {
    if let Some(utterance) = cli.one_shot() {
        let text = answer_once(cli, processor, &utterance);
        print_response(cli, &utterance, &text);
        return Ok(());
    }

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut lines = stdin.lock().lines();

    loop {
        if interactive {
            print!("{PROMPT}");
            let _ = io::stdout().flush();
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line.map_err(|source| AppError::Io {
            context: "stdin",
            source,
        })?;
        if !handle_line(cli, processor, &line) {
            break;
        }
    }
    Ok(())
}

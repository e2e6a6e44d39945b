use std::cell::Cell;
use std::io::ErrorKind;
use std::rc::Rc;

use dialoguer::{Error as DialoguerError, Input};

use crate::app::api::{self, AppSession, SessionOptions};
use crate::app::transcript::render_message;
use crate::domain::{AppError, Dialect};

const HELP: &str = "\
Type a request to generate a script. Commands:
  :exec <request>   generate and execute
  :run              execute the last generated script again
  :lang <dialect>   switch dialect (maxscript, python)
  :history          print the conversation
  :clear            clear the conversation
  :quit             leave";

enum ChatCommand<'a> {
    Fetch(&'a str),
    Exec(&'a str),
    Run,
    Lang(&'a str),
    History,
    Clear,
    Help,
    Quit,
    Unknown(&'a str),
}

fn parse_command(line: &str) -> ChatCommand<'_> {
    let line = line.trim();
    let Some(command) = line.strip_prefix(':') else {
        return ChatCommand::Fetch(line);
    };
    let (name, rest) = command.split_once(char::is_whitespace).unwrap_or((command, ""));
    match name {
        "exec" | "x" => ChatCommand::Exec(rest.trim()),
        "run" | "r" => ChatCommand::Run,
        "lang" | "l" => ChatCommand::Lang(rest.trim()),
        "history" | "h" => ChatCommand::History,
        "clear" => ChatCommand::Clear,
        "help" | "?" => ChatCommand::Help,
        "quit" | "q" | "exit" => ChatCommand::Quit,
        other => ChatCommand::Unknown(other),
    }
}

pub fn run_chat(initial: Dialect, options: SessionOptions) -> Result<(), AppError> {
    let settings = api::load_settings()?;
    if !settings.credentials().is_configured() {
        return Err(AppError::MissingCredential);
    }
    let mut session = api::open_session(&settings, options)?;
    attach_printer(&mut session);

    let mut dialect = initial;
    println!("{}", HELP);

    loop {
        let line = match Input::<String>::new()
            .with_prompt(dialect.as_str())
            .allow_empty(true)
            .interact_text()
        {
            Ok(line) => line,
            Err(DialoguerError::IO(err))
                if matches!(err.kind(), ErrorKind::Interrupted | ErrorKind::UnexpectedEof) =>
            {
                break;
            }
            Err(err) => return Err(AppError::config_error(format!("Failed to read input: {}", err))),
        };

        let outcome = match parse_command(&line) {
            ChatCommand::Fetch("") => Ok(()),
            ChatCommand::Fetch(task) => session.fetch(task, dialect).map(|_| ()),
            ChatCommand::Exec(task) => session.fetch_and_execute(task, dialect).map(|_| {
                println!("✅ Execution complete");
            }),
            ChatCommand::Run => {
                match session.execute_last() {
                    Some(ran) => println!("✅ Executed last {} script", ran),
                    None => println!("Nothing to run yet."),
                }
                Ok(())
            }
            ChatCommand::Lang(name) => name.parse::<Dialect>().map(|parsed| {
                dialect = parsed;
                println!("Dialect set to {}", dialect);
            }),
            ChatCommand::History => {
                print!("{}", session.transcript());
                Ok(())
            }
            ChatCommand::Clear => {
                session.clear();
                Ok(())
            }
            ChatCommand::Help => {
                println!("{}", HELP);
                Ok(())
            }
            ChatCommand::Quit => break,
            ChatCommand::Unknown(name) => {
                println!("Unknown command ':{}'. Type :help for commands.", name);
                Ok(())
            }
        };

        if let Err(e) = outcome {
            eprintln!("Error: {}", e);
        }
    }

    Ok(())
}

/// Print every new turn as it is appended, and a marker when the history is
/// cleared.
fn attach_printer(session: &mut AppSession) {
    let printed = Rc::new(Cell::new(0usize));
    session.synthesizer_mut().subscribe(move |messages| {
        if messages.len() < printed.get() || messages.is_empty() {
            println!("(conversation cleared)");
            printed.set(0);
            return;
        }
        for message in &messages[printed.get()..] {
            println!("{}", render_message(message));
        }
        printed.set(messages.len());
    });
}

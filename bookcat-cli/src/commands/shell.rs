//! Interactive session keeping filter and form state between commands

use super::list::render;
use super::Controller;
use anyhow::Result;
use bookcat_core::{Action, FormField, PriceFilter};
use std::io::{self, BufRead, Write};

const HELP: &str = "\
Commands:
  list                  show the catalog
  filter <f>            all, lt10, btw10_20, gt20
  select <index>        toggle selection
  new                   open the create form
  edit                  open the edit form for the selected book
  set <field> <value>   fill title, author or url
  save                  submit the form
  cancel                close the form
  delete                delete the selected book
  help                  show this text
  quit                  leave the session";

/// A parsed input line
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Dispatch(Action),
    List,
    Help,
    Quit,
}

fn parse(line: &str) -> std::result::Result<Option<Command>, String> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word {
        "" => return Ok(None),
        "list" | "ls" => Command::List,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        "new" => Command::Dispatch(Action::StartCreate),
        "edit" => Command::Dispatch(Action::StartEdit),
        "save" => Command::Dispatch(Action::Submit),
        "cancel" => Command::Dispatch(Action::Cancel),
        "delete" => Command::Dispatch(Action::Delete),
        "filter" => Command::Dispatch(Action::SetFilter(rest.parse::<PriceFilter>()?)),
        "select" => {
            let index = rest
                .parse::<usize>()
                .map_err(|_| format!("'{}' is not a valid index", rest))?;
            Command::Dispatch(Action::Select(index))
        }
        "set" => {
            let (field, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
            let field = field.parse::<FormField>().map_err(|e| e.to_string())?;
            Command::Dispatch(Action::SetField(field, value.trim().to_string()))
        }
        other => return Err(format!("Unknown command '{}', try 'help'", other)),
    };
    Ok(Some(command))
}

/// Run the session over stdin until `quit` or end of input
pub fn shell(controller: &mut Controller) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run(controller, stdin.lock(), &mut stdout)
}

fn run(controller: &mut Controller, input: impl BufRead, out: &mut impl Write) -> Result<()> {
    write!(out, "{}", render(controller))?;
    prompt(controller, out)?;

    for line in input.lines() {
        let line = line?;
        match parse(&line) {
            Ok(None) => {}
            Ok(Some(Command::Quit)) => break,
            Ok(Some(Command::Help)) => writeln!(out, "{}", HELP)?,
            Ok(Some(Command::List)) => write!(out, "{}", render(controller))?,
            Ok(Some(Command::Dispatch(action))) => {
                let shows_catalog = !matches!(action, Action::SetField(..));
                match controller.dispatch(action) {
                    Ok(()) => match controller.modal() {
                        Some(form) => writeln!(out, "{}", form)?,
                        None if shows_catalog => write!(out, "{}", render(controller))?,
                        None => {}
                    },
                    Err(e) => writeln!(out, "Error: {}", e)?,
                }
            }
            Err(e) => writeln!(out, "Error: {}", e)?,
        }
        prompt(controller, out)?;
    }

    Ok(())
}

fn prompt(controller: &Controller, out: &mut impl Write) -> io::Result<()> {
    let label = match controller.modal() {
        Some(form) => form.heading(),
        None => "catalog",
    };
    write!(out, "{}> ", label)?;
    out.flush()
}

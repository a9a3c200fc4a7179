//! Line-oriented terminal front end.
//!
//! Reads commands from any `BufRead` and writes the board to any `Write`,
//! so the same loop runs on stdin/stdout and in tests.

use std::io::{BufRead, Write};

use anyhow::Context;
use serde_json::json;

use crate::{
    app::ProjectApp,
    board::ListKind,
    core::ProjectRepository,
    input::ProjectInput,
};

const HELP: &str = "\
Commands:
  add                          fill in the project form
  move <list> <n> <list>       drag card n of a list and drop it on a list
  drag <list> <n>              start dragging card n of a list
  drop <list>                  drop the dragged card on a list
  list                         show the board
  help                         show this help
  quit                         leave";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Add,
    Move { from: ListKind, position: usize, to: ListKind },
    Drag { from: ListKind, position: usize },
    Drop { to: ListKind },
    List,
    Help,
    Quit,
}

fn parse_command(line: &str) -> anyhow::Result<Option<Command>> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let command = match words.as_slice() {
        [] => return Ok(None),
        ["add"] => Command::Add,
        ["move", from, position, to] => Command::Move {
            from: from.parse()?,
            position: position
                .parse()
                .with_context(|| format!("Invalid card number {:?}", position))?,
            to: to.parse()?,
        },
        ["drag", from, position] => Command::Drag {
            from: from.parse()?,
            position: position
                .parse()
                .with_context(|| format!("Invalid card number {:?}", position))?,
        },
        ["drop", to] => Command::Drop { to: to.parse()? },
        ["list"] => Command::List,
        ["help"] => Command::Help,
        ["quit"] | ["exit"] => Command::Quit,
        _ => anyhow::bail!("Unknown command {:?}, try `help`", line.trim()),
    };
    Ok(Some(command))
}

pub struct Shell<R, W> {
    input: R,
    output: W,
    app: ProjectApp,
    json: bool,
    drawn_generation: u64,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            app: ProjectApp::new(),
            json: false,
            drawn_generation: 0,
        }
    }

    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    pub fn app(&self) -> &ProjectApp {
        &self.app
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Prompts are left out in JSON mode so every board is a line of its own.
    fn read_line(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        if !self.json {
            write!(self.output, "{}", prompt)?;
            self.output.flush()?;
        }
        let mut line = String::new();
        if self.input.read_line(&mut line).context("Failed to read input")? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Runs until `quit` or end of input.
    pub fn run(&mut self) -> anyhow::Result<()> {
        if !self.json {
            writeln!(self.output, "Type `help` for commands.")?;
        }
        while let Some(line) = self.read_line("> ")? {
            let command = match parse_command(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(e) => {
                    writeln!(self.output, "{:#}", e)?;
                    continue;
                }
            };
            if command == Command::Quit {
                break;
            }
            if !self.execute(command)? {
                break;
            }
            if self.app.render_generation() != self.drawn_generation {
                self.draw()?;
            }
        }
        Ok(())
    }

    /// Returns false when input ended in the middle of the command.
    fn execute(&mut self, command: Command) -> anyhow::Result<bool> {
        match command {
            Command::Add => return self.fill_form(),
            Command::Move { from, position, to } => {
                if self.start_drag(from, position)? {
                    self.drop_on(to)?;
                }
            }
            Command::Drag { from, position } => {
                if self.start_drag(from, position)? {
                    writeln!(self.output, "Dragging card {} of {} projects.", position, from)?;
                }
            }
            Command::Drop { to } => self.drop_on(to)?,
            Command::List => self.draw()?,
            Command::Help => writeln!(self.output, "{}", HELP)?,
            Command::Quit => {}
        }
        Ok(true)
    }

    fn fill_form(&mut self) -> anyhow::Result<bool> {
        let Some(title) = self.read_line("Title: ")? else {
            return Ok(false);
        };
        let Some(description) = self.read_line("Description: ")? else {
            return Ok(false);
        };
        let Some(people) = self.read_line("People: ")? else {
            return Ok(false);
        };
        self.app.input = ProjectInput::new(title, description, people);
        if let Err(e) = self.app.submit() {
            writeln!(self.output, "Alert: {}", e)?;
        }
        Ok(true)
    }

    fn start_drag(&mut self, from: ListKind, position: usize) -> anyhow::Result<bool> {
        match self.app.list(from).nth(position) {
            Some(project) => {
                self.app.start_drag(&project);
                Ok(true)
            }
            None => {
                writeln!(self.output, "There is no card {} in {} projects.", position, from)?;
                Ok(false)
            }
        }
    }

    fn drop_on(&mut self, to: ListKind) -> anyhow::Result<()> {
        if self.app.dragging().is_none() {
            writeln!(self.output, "Nothing is being dragged.")?;
        } else {
            self.app.drop_on(to);
        }
        Ok(())
    }

    fn draw(&mut self) -> anyhow::Result<()> {
        self.drawn_generation = self.app.render_generation();
        if self.json {
            let board = json!({
                "active": self.app.list(ListKind::Active).projects(),
                "finished": self.app.list(ListKind::Finished).projects(),
            });
            writeln!(self.output, "{}", serde_json::to_string(&board)?)?;
            return Ok(());
        }
        for kind in ListKind::ALL {
            let list = self.app.list(kind);
            writeln!(self.output, "{}", kind.heading())?;
            if list.is_empty() {
                writeln!(self.output, "  (none)")?;
            }
            for (n, card) in list.cards().iter().enumerate() {
                writeln!(self.output, "  {}. {} ({})", n + 1, card.title, card.assigned)?;
                writeln!(self.output, "     {}", card.description)?;
            }
        }
        writeln!(self.output, "{} projects in total.", self.app.state().projects().len())?;
        Ok(())
    }
}

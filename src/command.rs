// Host command protocol - one line per editor action
//
//   build 5x7 [cell] [stroke]   down x y [pointer]   move x y [pointer]
//   up [pointer]   cancel [pointer]   toggle h|v row col   set h|v row col on|off
//   clear   invert   show   export   save [path]

use crate::config::{is_grid_size, GridInput};
use crate::grid::{EdgeRef, Orientation};
use crate::maze_errors::{MazeError, MazeResult};
use crate::paint::{PaintOutcome, PointerEvent};
use crate::session::EditorSession;
use std::str::FromStr;

pub const DEFAULT_POINTER: u32 = 1;

#[derive(Debug, Clone, PartialEq)]
pub enum EditorCommand {
    Build {
        grid_size: String,
        cell_size: Option<String>,
        stroke_width: Option<String>,
    },
    Pointer(PointerEvent),
    Toggle(EdgeRef),
    Set(EdgeRef, bool),
    Clear,
    Invert,
    Show,
    Export,
    Save(Option<String>),
}

/// What the host should do after a command ran
#[derive(Debug, Clone, PartialEq)]
pub enum CommandResult {
    Done,
    Painted(PaintOutcome),
    Toggled(bool),
    /// Host should render the grid
    Render,
    /// Host should present this export text
    Exported(String),
    /// Host should save the current export, optionally to this path
    SaveRequested(Option<String>),
}

impl FromStr for EditorCommand {
    type Err = MazeError;

    fn from_str(line: &str) -> MazeResult<Self> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let (name, args) = match words.split_first() {
            Some((name, args)) => (name.to_ascii_lowercase(), args),
            None => return Err(MazeError::CommandError("empty command".into())),
        };

        let command = match (name.as_str(), args) {
            ("build", args) if !args.is_empty() => build(args)?,
            ("down", [x, y, rest @ ..]) if rest.len() <= 1 => EditorCommand::Pointer(
                PointerEvent::down(pointer(rest)?, number(x)?, number(y)?),
            ),
            ("move", [x, y, rest @ ..]) if rest.len() <= 1 => EditorCommand::Pointer(
                PointerEvent::move_to(pointer(rest)?, number(x)?, number(y)?),
            ),
            ("up", rest) if rest.len() <= 1 => {
                EditorCommand::Pointer(PointerEvent::up(pointer(rest)?, 0.0, 0.0))
            }
            ("cancel", rest) if rest.len() <= 1 => {
                EditorCommand::Pointer(PointerEvent::cancel(pointer(rest)?))
            }
            ("toggle", [o, r, c]) => EditorCommand::Toggle(edge(o, r, c)?),
            ("set", [o, r, c, value]) => EditorCommand::Set(edge(o, r, c)?, switch(value)?),
            ("clear", []) => EditorCommand::Clear,
            ("invert", []) => EditorCommand::Invert,
            ("show", []) => EditorCommand::Show,
            ("export", []) => EditorCommand::Export,
            ("save", []) => EditorCommand::Save(None),
            ("save", [path]) => EditorCommand::Save(Some(path.to_string())),
            _ => return Err(MazeError::CommandError(line.trim().to_string())),
        };
        Ok(command)
    }
}

/// Parse a script, skipping blank lines and `#` comments.
/// Errors carry the 1-based line number.
pub fn parse_script(text: &str) -> MazeResult<Vec<EditorCommand>> {
    let mut commands = Vec::new();
    for (index, raw) in text.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }
        let command = line.parse::<EditorCommand>().map_err(|e| {
            MazeError::CommandError(format!("line {}: {}", index + 1, e))
        })?;
        commands.push(command);
    }
    Ok(commands)
}

impl EditorSession {
    /// Run one host command against this session
    pub fn apply(&mut self, command: EditorCommand) -> MazeResult<CommandResult> {
        let result = match command {
            EditorCommand::Build {
                grid_size,
                cell_size,
                stroke_width,
            } => {
                let input = GridInput {
                    grid_size,
                    cell_size: cell_size.unwrap_or_default(),
                    stroke_width: stroke_width.unwrap_or_default(),
                    show_dots: self.show_dots(),
                };
                self.build(&input);
                CommandResult::Done
            }
            EditorCommand::Pointer(event) => CommandResult::Painted(self.pointer_event(event)),
            EditorCommand::Toggle(edge) => {
                self.grid().state(edge)?;
                CommandResult::Toggled(self.toggle(edge))
            }
            EditorCommand::Set(edge, on) => {
                self.grid().state(edge)?;
                self.set_on(edge, on);
                CommandResult::Done
            }
            EditorCommand::Clear => {
                self.clear_all();
                CommandResult::Done
            }
            EditorCommand::Invert => {
                self.invert_all();
                CommandResult::Done
            }
            EditorCommand::Show => CommandResult::Render,
            EditorCommand::Export => CommandResult::Exported(self.export()?),
            EditorCommand::Save(path) => CommandResult::SaveRequested(path),
        };
        Ok(result)
    }
}

// The size may span several words ("5 X 7"); take the longest prefix that
// reads as a size, then the optional cell size and stroke width.
fn build(args: &[&str]) -> MazeResult<EditorCommand> {
    let words = (1..=args.len().min(3))
        .rev()
        .find(|&n| is_grid_size(&args[..n].join(" ")))
        .unwrap_or(1);
    let rest = &args[words..];
    if rest.len() > 2 {
        return Err(MazeError::CommandError(format!(
            "build takes at most a size, cell size and stroke width: {}",
            args.join(" ")
        )));
    }
    Ok(EditorCommand::Build {
        grid_size: args[..words].join(" "),
        cell_size: rest.first().map(|s| s.to_string()),
        stroke_width: rest.get(1).map(|s| s.to_string()),
    })
}

fn number(text: &str) -> MazeResult<f64> {
    text.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| MazeError::CommandError(format!("not a coordinate: {}", text)))
}

fn index(text: &str) -> MazeResult<usize> {
    text.parse::<usize>()
        .map_err(|_| MazeError::CommandError(format!("not an index: {}", text)))
}

fn pointer(rest: &[&str]) -> MazeResult<u32> {
    match rest.first() {
        Some(text) => text
            .parse::<u32>()
            .map_err(|_| MazeError::CommandError(format!("not a pointer id: {}", text))),
        None => Ok(DEFAULT_POINTER),
    }
}

fn edge(orientation: &str, row: &str, col: &str) -> MazeResult<EdgeRef> {
    let orientation = Orientation::from_tag(orientation).ok_or_else(|| {
        MazeError::CommandError(format!("orientation must be h or v: {}", orientation))
    })?;
    Ok(EdgeRef::new(orientation, index(row)?, index(col)?))
}

fn switch(text: &str) -> MazeResult<bool> {
    match text.to_ascii_lowercase().as_str() {
        "on" | "1" | "true" => Ok(true),
        "off" | "0" | "false" => Ok(false),
        _ => Err(MazeError::CommandError(format!("expected on/off: {}", text))),
    }
}

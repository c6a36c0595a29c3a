//! # Terminal Console
//!
//! The MS-DOS style shell of the desktop. A [`TerminalSession`] owns its
//! own navigation cursor and transcript; the tree itself lives in the
//! shared store, so files created here are immediately visible to every
//! explorer window reading the same store.
//!
//! Command semantics follow the classic DOS surface: errors render as
//! transcript lines (`The system cannot find the path specified`), never
//! as process failures, and an unrecognized word gets the canonical
//! "is not recognized" line.

mod commands;

use core_types::SessionId;
use fs_tree::{DrivePath, NodeKind};
use services_navigation::NavigationCursor;
use services_tree_store::{FsError, TreeOperations, TreeStore};

/// How a transcript line was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Echo of the prompt plus what the user typed
    Command,
    /// Normal command output
    Output,
    /// A command-level failure, rendered inline
    Error,
}

/// One line of the terminal transcript
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleLine {
    pub kind: LineKind,
    pub text: String,
}

impl ConsoleLine {
    fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// One open terminal window
#[derive(Debug)]
pub struct TerminalSession {
    id: SessionId,
    cursor: NavigationCursor,
    transcript: Vec<ConsoleLine>,
}

impl TerminalSession {
    /// Opens a terminal at the store's default path
    pub fn open(store: &TreeStore) -> Self {
        Self {
            id: SessionId::new(),
            cursor: NavigationCursor::new(store.default_path().clone()),
            transcript: Vec::new(),
        }
    }

    /// This window's session id
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// The prompt, e.g. `C:\Users\Chrome>`
    pub fn prompt(&self) -> String {
        format!("{}>", self.cursor.address())
    }

    /// The working directory of this session's cursor
    pub fn current_path(&self) -> &DrivePath {
        self.cursor.current_path()
    }

    /// Everything rendered so far, oldest line first
    pub fn transcript(&self) -> &[ConsoleLine] {
        &self.transcript
    }

    /// Runs one input line against the shared store
    ///
    /// The prompt echo is always appended first, even for blank input.
    /// `clear` wipes the transcript including its own echo.
    pub fn execute(&mut self, store: &mut TreeStore, input: &str) {
        let trimmed = input.trim();
        let echo = if trimmed.is_empty() {
            self.prompt()
        } else {
            format!("{} {trimmed}", self.prompt())
        };
        self.transcript.push(ConsoleLine::new(LineKind::Command, echo));

        let mut parts = trimmed.split_whitespace();
        let Some(command) = parts.next() else {
            return;
        };
        let args: Vec<&str> = parts.collect();

        match command.to_ascii_lowercase().as_str() {
            "help" => self.output_lines(commands::help()),
            "pwd" => self.output(self.cursor.address()),
            "clear" => self.transcript.clear(),
            "cd" => self.cmd_cd(store, args.first().copied()),
            "ls" => self.output_lines(commands::ls(store, self.cursor.current_path())),
            "dir" => self.output_lines(commands::dir(store, self.cursor.current_path())),
            "tree" => self.output_lines(commands::tree(store, self.cursor.current_path())),
            "mkdir" => self.cmd_mkdir(store, args.first().copied()),
            "touch" => self.cmd_touch(store, args.first().copied()),
            "rm" => self.cmd_rm(store, args.first().copied()),
            "rmdir" => self.cmd_rmdir(store, args.first().copied()),
            "cat" => self.cmd_cat(store, args.first().copied()),
            "echo" => self.cmd_echo(store, &args),
            _ => self.error(format!(
                "'{command}' is not recognized as an internal or external command."
            )),
        }
    }

    fn output(&mut self, text: impl Into<String>) {
        self.transcript.push(ConsoleLine::new(LineKind::Output, text));
    }

    fn output_lines(&mut self, lines: Vec<String>) {
        for line in lines {
            self.output(line);
        }
    }

    fn error(&mut self, text: impl Into<String>) {
        self.transcript.push(ConsoleLine::new(LineKind::Error, text));
    }

    /// `cd`: `.` and no argument are no-ops; `..` at a drive root stays put
    fn cmd_cd(&mut self, store: &TreeStore, target: Option<&str>) {
        match target {
            None | Some(".") => {}
            Some("..") => {
                if self.cursor.up(store).is_err() {
                    self.error("The system cannot find the path specified: ..".to_string());
                }
            }
            Some(name) => {
                if self.cursor.navigate_into(store, name).is_err() {
                    self.error(format!(
                        "The system cannot find the path specified: {name}"
                    ));
                }
            }
        }
    }

    fn cmd_mkdir(&mut self, store: &mut TreeStore, name: Option<&str>) {
        let Some(name) = name else {
            self.error("The syntax of the command is incorrect.");
            return;
        };
        let here = self.cursor.current_path().clone();
        match store.create_directory(&here, name) {
            Ok(()) => self.output(format!("Directory created: {name}")),
            Err(FsError::AlreadyExists(_)) => {
                self.error(format!("A subdirectory or file {name} already exists."));
            }
            Err(err) => self.error(err.to_string()),
        }
    }

    fn cmd_touch(&mut self, store: &mut TreeStore, name: Option<&str>) {
        let Some(name) = name else {
            self.error("Usage: touch <filename>");
            return;
        };
        let here = self.cursor.current_path().clone();
        match store.create_file(&here, name, "") {
            Ok(()) => self.output(format!("File created: {name}")),
            Err(FsError::AlreadyExists(_)) => {
                self.error(format!("A subdirectory or file {name} already exists."));
            }
            Err(err) => self.error(err.to_string()),
        }
    }

    fn cmd_rm(&mut self, store: &mut TreeStore, name: Option<&str>) {
        let Some(name) = name else {
            self.error("Usage: rm <filename>");
            return;
        };
        let here = self.cursor.current_path().clone();
        let kind = store.resolve(&here).and_then(|d| d.child(name)).map(|n| n.kind());
        match kind {
            None => self.error(format!("File not found: {name}")),
            Some(NodeKind::Directory) => self.error(format!(
                "{name} is a directory. Use 'rmdir' to remove directories."
            )),
            Some(NodeKind::File) => match store.delete_item(&here, name) {
                Ok(()) => self.output(format!("File deleted: {name}")),
                Err(err) => self.error(err.to_string()),
            },
        }
    }

    fn cmd_rmdir(&mut self, store: &mut TreeStore, name: Option<&str>) {
        let Some(name) = name else {
            self.error("Usage: rmdir <directory>");
            return;
        };
        let here = self.cursor.current_path().clone();
        let kind = store.resolve(&here).and_then(|d| d.child(name)).map(|n| n.kind());
        match kind {
            None => self.error(format!("Directory not found: {name}")),
            Some(NodeKind::File) => self.error(format!("{name} is not a directory.")),
            Some(NodeKind::Directory) => match store.delete_item(&here, name) {
                Ok(()) => self.output(format!("Directory deleted: {name}")),
                Err(FsError::DirectoryNotEmpty(_)) => {
                    self.error(format!("Directory not empty: {name}"));
                }
                Err(err) => self.error(err.to_string()),
            },
        }
    }

    fn cmd_cat(&mut self, store: &TreeStore, name: Option<&str>) {
        let Some(name) = name else {
            self.error("Usage: cat <filename>");
            return;
        };
        let here = self.cursor.current_path().clone();
        match store.read_file(&here, name) {
            Ok(content) => {
                let lines: Vec<String> = content.split('\n').map(str::to_string).collect();
                self.output_lines(lines);
            }
            Err(FsError::NotFound(_)) => self.error(format!("File not found: {name}")),
            Err(FsError::IsADirectory(_)) => self.error(format!("{name} is a directory.")),
            Err(err) => self.error(err.to_string()),
        }
    }

    /// `echo text` prints; `echo text > file` writes the file instead
    fn cmd_echo(&mut self, store: &mut TreeStore, args: &[&str]) {
        match args.iter().position(|a| *a == ">") {
            None => self.output(args.join(" ")),
            Some(split) => {
                let Some(target) = args.get(split + 1) else {
                    self.error("The syntax of the command is incorrect.");
                    return;
                };
                let text = args[..split].join(" ");
                let here = self.cursor.current_path().clone();
                match store.write_file(&here, target, &text) {
                    Ok(()) => {}
                    Err(FsError::IsADirectory(_)) => {
                        self.error(format!("{target} is a directory."));
                    }
                    Err(err) => self.error(err.to_string()),
                }
            }
        }
    }
}

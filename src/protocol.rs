//! Line-oriented text protocol for driving a game from another program.
//!
//! Modelled on GTP: each line is an optional numeric id, a command and its
//! arguments. Replies are `=id message` on success and `?id message` on
//! failure, each followed by a blank line.
//!
//! ## Supported Commands
//!
//! - `name`, `version`, `protocol_version`
//! - `list_commands`, `known_command <cmd>`
//! - `quit`
//! - `clear_board` - Start a new game
//! - `play <color> <vertex|pass>` - Play for the side to move
//! - `valid_moves <color>` - List legal moves for a color
//! - `showboard` - Dump the board
//! - `score` - Disc counts
//! - `is_over` - Whether neither side can move

use std::io::{self, BufRead, Write};

use crate::coord::{parse_coord, str_coord};
use crate::error::EngineError;
use crate::game::Game;
use crate::piece::Color;

/// The list of known commands.
const KNOWN_COMMANDS: &[&str] = &[
    "clear_board",
    "is_over",
    "known_command",
    "list_commands",
    "name",
    "play",
    "protocol_version",
    "quit",
    "score",
    "showboard",
    "valid_moves",
    "version",
];

pub struct Engine {
    game: Game,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    pub fn new() -> Self {
        Self { game: Game::new() }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Run the command loop on stdin/stdout until `quit` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.serve(stdin.lock(), stdout.lock())
    }

    /// Run the command loop over arbitrary streams.
    pub fn serve<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            // Parse optional command ID
            let (id, command_line) = Self::parse_id(line);

            // Parse command and arguments
            let parts: Vec<&str> = command_line.split_whitespace().collect();
            if parts.is_empty() {
                continue;
            }

            let command = parts[0].to_lowercase();
            let args = &parts[1..];

            // Execute command
            let (success, message) = self.execute(&command, args);

            // Format and send response
            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();

            writeln!(output, "{prefix}{id_str} {message}\n")?;
            output.flush()?;

            // Quit if requested
            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Split an optional leading numeric id off a command line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());

        if end > 0 {
            if let Ok(id) = trimmed[..end].parse::<u32>() {
                return (Some(id), trimmed[end..].trim());
            }
        }

        (None, trimmed)
    }

    fn parse_color(args: &[&str]) -> Result<Color, String> {
        let arg = args.first().ok_or_else(|| "missing argument".to_string())?;
        arg.parse::<Color>().map_err(|e| e.to_string())
    }

    /// Execute one command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match command {
            "name" => (true, env!("CARGO_PKG_NAME").to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "protocol_version" => (true, "1".to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => {
                if args.is_empty() {
                    return (false, "missing argument".to_string());
                }
                let known = KNOWN_COMMANDS.contains(&args[0].to_lowercase().as_str());
                (true, if known { "true" } else { "false" }.to_string())
            }

            "quit" => (true, String::new()),

            "clear_board" => {
                self.game = Game::new();
                (true, String::new())
            }

            "play" => {
                if args.len() < 2 {
                    return (false, "missing arguments".to_string());
                }
                let color = match Self::parse_color(args) {
                    Ok(c) => c,
                    Err(e) => return (false, e),
                };
                if self.game.is_over() {
                    return (false, EngineError::GameOver.to_string());
                }
                if color != self.game.to_move() {
                    return (false, format!("it is {}'s turn", self.game.to_move()));
                }

                let vertex = args[1].to_lowercase();
                let result = if vertex == "pass" {
                    self.game.pass()
                } else {
                    match parse_coord(&vertex) {
                        Ok(pos) => self.game.play(pos),
                        Err(e) => return (false, e.to_string()),
                    }
                };

                match result {
                    Ok(()) => (true, String::new()),
                    Err(e) => (false, e.to_string()),
                }
            }

            "valid_moves" => match Self::parse_color(args) {
                Ok(color) => {
                    let moves: Vec<String> = self
                        .game
                        .board()
                        .valid_moves(color)
                        .into_iter()
                        .map(str_coord)
                        .collect();
                    (true, moves.join(" "))
                }
                Err(e) => (false, e),
            },

            "showboard" => (true, format!("\n{}", self.game)),

            "score" => {
                let (black, white) = self.game.score();
                (true, format!("black {black} white {white}"))
            }

            "is_over" => (true, self.game.is_over().to_string()),

            _ => (false, format!("unknown command: {command}")),
        }
    }
}

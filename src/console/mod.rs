//! Command interpreter for the console game.
//!
//! A prompt loop reads whitespace-delimited commands from the input
//! stream, drives the game engine, and renders results to the output
//! stream. The interpreter is generic over [`BufRead`] and [`Write`] so
//! tests can script entire sessions through in-memory buffers.

mod tokens;

use crate::game::{Game, GameStatus, PlaceError};
use std::io::{self, BufRead, Write};
use tokens::TokenReader;
use tracing::debug;

/// What the command loop should do after a command has been handled.
enum Flow {
    Continue,
    Exit,
}

/// Console front end driving a single game.
pub struct Console<R, W> {
    game: Game,
    tokens: TokenReader<R>,
    out: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console over the given input and output streams.
    pub fn new(input: R, out: W) -> Self {
        Self {
            game: Game::new(),
            tokens: TokenReader::new(input),
            out,
        }
    }

    /// Returns the game driven by this console.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Runs the command loop.
    ///
    /// Returns when quit is confirmed, when the game ends in a win or a
    /// draw, or when the input stream is exhausted.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.out, "Welcome to the Tic-Tac-Toe game!")?;
        writeln!(self.out)?;
        self.print_help()?;
        writeln!(self.out, "New game started!")?;
        self.print_turn()?;
        self.print_board()?;

        loop {
            write!(self.out, "> ")?;
            self.out.flush()?;

            let Some(command) = self.tokens.next()? else {
                break;
            };
            match self.execute(&command)? {
                Flow::Continue => {}
                Flow::Exit => break,
            }
        }

        Ok(())
    }

    fn execute(&mut self, command: &str) -> io::Result<Flow> {
        match command.to_lowercase().as_str() {
            "place" => self.execute_place(),
            "quit" => self.execute_quit(),
            other => {
                debug!(command = other, "unrecognized command");
                writeln!(self.out, "Invalid command. I don't know what to do.")?;
                self.print_help()?;
                Ok(Flow::Continue)
            }
        }
    }

    fn execute_place(&mut self) -> io::Result<Flow> {
        let row = self.read_coordinate()?;
        let col = self.read_coordinate()?;

        match self.game.place(row, col) {
            Ok(status) => {
                self.print_board()?;
                match status {
                    GameStatus::Won(winner) => {
                        writeln!(self.out, "Player {winner} won!!")?;
                        Ok(Flow::Exit)
                    }
                    GameStatus::Draw => {
                        writeln!(self.out, "The board is full. It's a draw!")?;
                        Ok(Flow::Exit)
                    }
                    GameStatus::InProgress => {
                        self.print_turn()?;
                        Ok(Flow::Continue)
                    }
                }
            }
            Err(PlaceError::AlreadyTaken(pos)) => {
                writeln!(
                    self.out,
                    "The position: ({}, {}) already has the symbol.",
                    pos.row(),
                    pos.col()
                )?;
                Ok(Flow::Continue)
            }
            Err(PlaceError::OutOfBounds(..)) => {
                writeln!(
                    self.out,
                    "You passed wrong position. Check if you are passing positions between 0 and 2."
                )?;
                Ok(Flow::Continue)
            }
            Err(PlaceError::GameOver) => {
                writeln!(self.out, "The game is already over.")?;
                Ok(Flow::Exit)
            }
        }
    }

    fn execute_quit(&mut self) -> io::Result<Flow> {
        writeln!(self.out, "Are you sure? Y/N")?;
        write!(self.out, "> ")?;
        self.out.flush()?;

        let Some(answer) = self.tokens.next()? else {
            return Ok(Flow::Exit);
        };
        match answer.to_lowercase().as_str() {
            "y" => {
                writeln!(self.out, "Bye!")?;
                Ok(Flow::Exit)
            }
            "n" => Ok(Flow::Continue),
            // Anything else is treated as a fresh top-level command.
            _ => self.execute(&answer),
        }
    }

    /// Reads one coordinate token.
    ///
    /// A missing token or one that fails to parse becomes `-1`, which the
    /// engine rejects as out of bounds.
    fn read_coordinate(&mut self) -> io::Result<i32> {
        Ok(self
            .tokens
            .next()?
            .and_then(|token| token.parse().ok())
            .unwrap_or(-1))
    }

    fn print_help(&mut self) -> io::Result<()> {
        writeln!(self.out, "The game supports following commands:")?;
        writeln!(self.out)?;
        writeln!(
            self.out,
            "  place - format: \"place X Y\". Places the mark into coordinates (X, Y)."
        )?;
        writeln!(self.out, "  quit - Quits the simulator.")?;
        writeln!(self.out)?;
        Ok(())
    }

    fn print_turn(&mut self) -> io::Result<()> {
        writeln!(self.out, "Player {} turn.", self.game.to_move())
    }

    fn print_board(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", self.game.board())?;
        writeln!(self.out)?;
        Ok(())
    }
}

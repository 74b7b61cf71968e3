// Copyright (C) 2020-2026 Andy Kurnia.

use super::{board, coord, error, tokens};
use std::io::Write;

pub const PROMPT: &str = "What's the next square (x,y)? Type 'exit' to quit";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    Running,
    Terminated,
}

// The game is the only owner of the board once play starts.
pub struct Game {
    board: board::Board,
    moves: usize,
}

impl Game {
    pub fn new(board: board::Board) -> Self {
        Self { board, moves: 0 }
    }

    #[inline(always)]
    pub fn board(&self) -> &board::Board {
        &self.board
    }

    #[inline(always)]
    pub fn moves(&self) -> usize {
        self.moves
    }

    // Handles one token. Rejected input prints one line and changes nothing.
    pub fn apply(
        &mut self,
        token: &str,
        out: &mut dyn Write,
    ) -> error::Returns<GameState> {
        match coord::parse_command(token, &self.board.dim()) {
            Ok(coord::Command::Exit) => Ok(GameState::Terminated),
            Ok(coord::Command::Mark(coord)) => {
                match self.board.set_square(coord.row(), coord.col()) {
                    Ok(()) => {
                        self.moves += 1;
                        log::debug!(
                            "move {}: marked {},{}",
                            self.moves,
                            coord.row(),
                            coord.col()
                        );
                        write!(out, "{}", self.board)?;
                    }
                    Err(error::BoardError::OutOfBounds { size, .. }) => {
                        writeln!(out, "{}", error::InputError::OutOfRange { size })?;
                    }
                    Err(err) => {
                        return Err(err.into());
                    }
                }
                Ok(GameState::Running)
            }
            Err(err) => {
                log::debug!("rejected {:?}: {:?}", token, err);
                writeln!(out, "{}", err)?;
                Ok(GameState::Running)
            }
        }
    }

    // End of input ends the game the same way "exit" does.
    pub fn run(
        &mut self,
        tokens: &mut dyn tokens::TokenSource,
        out: &mut dyn Write,
    ) -> error::Returns<GameState> {
        loop {
            writeln!(out, "{}", PROMPT)?;
            out.flush()?;
            match tokens.next_token()? {
                Some(token) => {
                    if self.apply(&token, out)? == GameState::Terminated {
                        return Ok(GameState::Terminated);
                    }
                }
                None => {
                    log::debug!("end of input after {} moves", self.moves);
                    return Ok(GameState::Terminated);
                }
            }
        }
    }
}

// Copyright (C) 2020-2026 Andy Kurnia.

use super::{dictionary, error, game_config, matrix};
use rand::prelude::*;

#[derive(Clone, Debug)]
pub struct Board {
    dim: matrix::Dim,
    marker: &'static str,
    cells: Box<[String]>,
    longest_word: usize,
}

impl Board {
    // Fills row by row. The free square never consumes a word.
    pub fn new(
        game_config: &game_config::GameConfig,
        dictionary: &mut dictionary::Dictionary,
        rng: &mut dyn RngCore,
    ) -> Result<Board, error::BoardError> {
        let dim = game_config.dim;
        let needed = game_config.words_needed();
        if dictionary.len() < needed {
            return Err(error::BoardError::InsufficientWords {
                needed,
                available: dictionary.len(),
            });
        }
        let mut cells = Vec::with_capacity(dim.area());
        let mut longest_word = 0;
        let mut drawn = 0;
        for row in 0..dim.rows {
            for col in 0..dim.cols {
                let word = if game_config.is_free_square(row, col) {
                    game_config.free_label.to_string()
                } else {
                    match dictionary.draw(rng, game_config.draw_range) {
                        Some(word) => {
                            drawn += 1;
                            word
                        }
                        None => {
                            // ExcludeLast can run dry one word early.
                            return Err(error::BoardError::InsufficientWords {
                                needed,
                                available: drawn,
                            });
                        }
                    }
                };
                longest_word = std::cmp::max(longest_word, word.chars().count());
                cells.push(word);
            }
        }
        Ok(Board {
            dim,
            marker: game_config.marker,
            cells: cells.into_boxed_slice(),
            longest_word,
        })
    }

    #[inline(always)]
    pub fn dim(&self) -> matrix::Dim {
        self.dim
    }

    #[inline(always)]
    pub fn size(&self) -> usize {
        self.dim.size()
    }

    #[inline(always)]
    pub fn longest_word(&self) -> usize {
        self.longest_word
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        if self.dim.contains(row, col) {
            Some(&self.cells[self.dim.at_row_col(row, col)])
        } else {
            None
        }
    }

    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    // Marking overwrites the word for good. Marking twice is harmless.
    pub fn set_square(&mut self, row: usize, col: usize) -> Result<(), error::BoardError> {
        if !self.dim.contains(row, col) {
            return Err(error::BoardError::OutOfBounds {
                row,
                col,
                size: self.size(),
            });
        }
        self.cells[self.dim.at_row_col(row, col)] = self.marker.to_string();
        Ok(())
    }

    pub fn print(&self) {
        print!("{}", self);
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.dim.rows {
            let strider = self.dim.across(row);
            for i in 0..strider.len() {
                write!(
                    f,
                    "{:<width$}| ",
                    self.cells[strider.at(i)],
                    width = self.longest_word
                )?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

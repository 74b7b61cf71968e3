// Copyright (C) 2020-2026 Andy Kurnia.

use super::{error, matrix};

pub const DICTIONARY_FILE_NAME: &str = "dictionary.txt";

// Full draws from [0, n). ExcludeLast draws from [0, n-1), which never picks
// the last remaining word; kept only to reproduce old boards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawRange {
    Full,
    ExcludeLast,
}

pub struct GameConfig {
    pub dictionary_path: std::path::PathBuf,
    pub dim: matrix::Dim,
    pub free_row: usize,
    pub free_col: usize,
    pub free_label: &'static str,
    pub marker: &'static str,
    pub draw_range: DrawRange,
    pub debug: bool,
    pub seed: Option<u64>,
}

impl GameConfig {
    #[inline(always)]
    pub fn is_free_square(&self, row: usize, col: usize) -> bool {
        row == self.free_row && col == self.free_col
    }

    // number of cells that must come from the dictionary.
    #[inline(always)]
    pub fn words_needed(&self) -> usize {
        self.dim.area() - self.dim.contains(self.free_row, self.free_col) as usize
    }

    pub fn apply_args(&mut self, args: &[String]) -> error::Returns<()> {
        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--debug" => {
                    self.debug = true;
                }
                "--seed" => match iter.next() {
                    Some(v) => match v.parse::<u64>() {
                        Ok(seed) => self.seed = Some(seed),
                        Err(_) => {
                            return_error!(format!("invalid seed {:?}", v));
                        }
                    },
                    None => {
                        return_error!("--seed needs a number".into());
                    }
                },
                _ => {
                    return_error!(format!(
                        "unrecognized argument {:?}\nargs:\n  [--debug] [--seed N]",
                        arg
                    ));
                }
            }
        }
        Ok(())
    }
}

pub fn make_cliche_bingo_game_config() -> GameConfig {
    GameConfig {
        dictionary_path: DICTIONARY_FILE_NAME.into(),
        dim: matrix::Dim { rows: 5, cols: 5 },
        free_row: 2,
        free_col: 2,
        free_label: "FREE SQUARE",
        marker: "X",
        draw_range: DrawRange::Full,
        debug: false,
        seed: None,
    }
}

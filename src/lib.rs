// Copyright (C) 2020-2026 Andy Kurnia.

#[macro_use]
pub mod error;

pub mod board;
pub mod coord;
pub mod dictionary;
pub mod game;
pub mod game_config;
pub mod matrix;
pub mod tokens;

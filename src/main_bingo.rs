// Copyright (C) 2020-2026 Andy Kurnia.

use cliche_bingo::{board, dictionary, error, game, game_config, tokens};
use rand::prelude::*;
use std::io::IsTerminal;

fn main() -> error::Returns<()> {
    let mut game_config = game_config::make_cliche_bingo_game_config();
    game_config.apply_args(&std::env::args().skip(1).collect::<Vec<_>>())?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(
        if game_config.debug { "debug" } else { "warn" },
    ))
    .init();

    eprint!("Reading dictionary...");
    let mut dictionary = match dictionary::load_dictionary(&game_config.dictionary_path) {
        Ok(dictionary) => {
            eprintln!("loaded");
            dictionary
        }
        Err(err) => {
            // keep going; the board will report that it has no words.
            eprintln!("Error reading dictionary file: {}", err);
            dictionary::Dictionary::new(Vec::new())
        }
    };
    log::debug!(
        "{} entries in {}",
        dictionary.len(),
        game_config.dictionary_path.display()
    );
    for word in dictionary.words() {
        log::debug!("  {}", word);
    }

    let seed = game_config.seed.unwrap_or_else(|| rand::rng().random());
    log::debug!("seed {}", seed);
    let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(seed);

    let board = board::Board::new(&game_config, &mut dictionary, &mut rng)
        .map_err(|err| error::new(err.to_string()))?;
    drop(dictionary);
    board.print();

    let mut game = game::Game::new(board);
    let stdin = std::io::stdin();
    let mut token_source: Box<dyn tokens::TokenSource> = if stdin.is_terminal() {
        Box::new(tokens::EditorTokens::new()?)
    } else {
        Box::new(tokens::ReaderTokens::new(stdin.lock()))
    };
    game.run(token_source.as_mut(), &mut std::io::stdout())?;
    log::debug!("{} moves played", game.moves());

    Ok(())
}

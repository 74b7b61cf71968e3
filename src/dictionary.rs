// Copyright (C) 2020-2026 Andy Kurnia.

use super::{error, game_config};
use rand::prelude::*;

// Words are removed as they are drawn, so no word can appear twice on a board.
pub struct Dictionary(pub Vec<String>);

impl Dictionary {
    pub fn new(words: Vec<String>) -> Dictionary {
        Dictionary(words)
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline(always)]
    pub fn words(&self) -> &[String] {
        &self.0
    }

    // remove() keeps the remaining words in file order.
    pub fn draw(
        &mut self,
        rng: &mut dyn RngCore,
        draw_range: game_config::DrawRange,
    ) -> Option<String> {
        let num_candidates = match draw_range {
            game_config::DrawRange::Full => self.0.len(),
            game_config::DrawRange::ExcludeLast => self.0.len().saturating_sub(1),
        };
        if num_candidates == 0 {
            return None;
        }
        let idx = rng.random_range(0..num_candidates);
        log::debug!("drew index {} of {}", idx, num_candidates);
        Some(self.0.remove(idx))
    }
}

// One entry per line. Blank lines are dropped so no entry is empty.
pub fn read_dictionary(giant_string: &str) -> Vec<String> {
    giant_string
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.to_string())
        .collect()
}

pub fn load_dictionary<P: AsRef<std::path::Path>>(
    path: P,
) -> Result<Dictionary, error::DictionaryError> {
    let bytes = std::fs::read(path)?;
    if let Some(pos) = bytes.iter().position(|b| !b.is_ascii()) {
        return Err(error::DictionaryError::NotAscii {
            line: bytes[..pos].iter().filter(|&&b| b == b'\n').count() + 1,
        });
    }
    // all bytes are ASCII, so each byte is exactly one char.
    let giant_string = bytes.iter().map(|&b| b as char).collect::<String>();
    Ok(Dictionary::new(read_dictionary(&giant_string)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn words(n: usize) -> Vec<String> {
        (0..n).map(|x| format!("word-{}", x)).collect()
    }

    #[test]
    fn test_read_dictionary_lines() {
        assert_eq!(
            read_dictionary("at the end of the day\nthink outside the box\n"),
            vec!["at the end of the day", "think outside the box"]
        );
        assert_eq!(read_dictionary("a\r\nb\r\n\r\nc"), vec!["a", "b", "c"]);
        assert!(read_dictionary("").is_empty());
        assert!(read_dictionary("\n\n  \n").is_empty());
    }

    #[test]
    fn test_load_dictionary_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "synergy\nlow-hanging fruit\nmove the needle\n").unwrap();
        let dictionary = load_dictionary(file.path()).unwrap();
        assert_eq!(
            dictionary.words(),
            &["synergy", "low-hanging fruit", "move the needle"]
        );
    }

    #[test]
    fn test_load_dictionary_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        match load_dictionary(dir.path().join("nope.txt")) {
            Err(error::DictionaryError::Io(err)) => {
                assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
            }
            _ => panic!("missing file must be an io error"),
        }
    }

    #[test]
    fn test_load_dictionary_rejects_non_ascii() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all("ok\nna\u{ef}ve\n".as_bytes()).unwrap();
        match load_dictionary(file.path()) {
            Err(error::DictionaryError::NotAscii { line }) => assert_eq!(line, 2),
            _ => panic!("non-ASCII input must be rejected"),
        }
    }

    #[test]
    fn test_draw_removes_word() {
        let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(7);
        let mut dictionary = Dictionary::new(words(10));
        let mut seen = std::collections::HashSet::new();
        for remaining in (0..10).rev() {
            let word = dictionary
                .draw(&mut rng, game_config::DrawRange::Full)
                .unwrap();
            assert!(seen.insert(word), "word drawn twice");
            assert_eq!(dictionary.len(), remaining);
        }
        assert!(dictionary.is_empty());
        assert_eq!(dictionary.draw(&mut rng, game_config::DrawRange::Full), None);
    }

    #[test]
    fn test_draw_exclude_last_never_picks_last() {
        let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(11);
        for _ in 0..200 {
            let mut dictionary = Dictionary::new(words(3));
            let word = dictionary
                .draw(&mut rng, game_config::DrawRange::ExcludeLast)
                .unwrap();
            assert_ne!(word, "word-2");
        }
        let mut dictionary = Dictionary::new(words(1));
        assert_eq!(
            dictionary.draw(&mut rng, game_config::DrawRange::ExcludeLast),
            None
        );
        assert_eq!(dictionary.len(), 1);
    }

    #[test]
    fn test_draw_full_reaches_last() {
        let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(3);
        let hit_last = (0..200).any(|_| {
            let mut dictionary = Dictionary::new(words(3));
            dictionary.draw(&mut rng, game_config::DrawRange::Full)
                == Some("word-2".to_string())
        });
        assert!(hit_last);
    }
}

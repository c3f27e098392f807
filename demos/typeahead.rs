//! Interactive typeahead over a newline-delimited word list.
//!
//! ```text
//! cargo run --example typeahead [WORDLIST]
//! ```
//!
//! Defaults to `/usr/share/dict/words`. Type a prefix and get completions
//! whose stems are within one edit of it.

use levtrie::Trie;
use std::io::{self, BufRead, Write};

fn main() -> io::Result<()> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "/usr/share/dict/words".to_string());
    let wordlist = std::fs::read_to_string(&path)?;

    let mut trie = Trie::new();
    for line in wordlist.lines() {
        let word = line.trim().to_lowercase();
        if !word.is_empty() {
            trie.insert(&word, word.clone());
        }
    }
    eprintln!("{} words loaded from {path}", trie.len());

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    write!(stdout, "> ")?;
    stdout.flush()?;
    for line in stdin.lock().lines() {
        let query = line?;
        let query = query.trim();
        if !query.is_empty() {
            for entry in trie.suggest_suffixes(query, 1, 10) {
                println!("  {}", entry.key);
            }
        }
        write!(stdout, "> ")?;
        stdout.flush()?;
    }
    Ok(())
}

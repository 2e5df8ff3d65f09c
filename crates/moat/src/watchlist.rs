//! Watchlist management.
//!
//! A watchlist is the set of ticker symbols a report run covers. Symbols
//! are upper-cased on entry; empty and duplicate entries are dropped.

use std::collections::BTreeSet;
use std::path::Path;

/// A set of ticker symbols to report on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Watchlist {
    symbols: Vec<String>,
    seen: BTreeSet<String>,
}

impl Watchlist {
    /// Create a watchlist from an iterator of symbols, preserving first
    /// occurrence order.
    pub fn new(symbols: impl IntoIterator<Item = impl AsRef<str>>) -> Self {
        let mut watchlist = Self::default();
        for symbol in symbols {
            watchlist.add(symbol.as_ref());
        }
        watchlist
    }

    /// Load a watchlist from a file with one symbol per line. Blank lines
    /// and `#` comments are skipped.
    pub fn from_file(path: &Path) -> std::io::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::new(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        ))
    }

    /// Add a symbol, ignoring empty and duplicate entries.
    pub fn add(&mut self, symbol: &str) {
        let symbol = symbol.trim().to_uppercase();
        if !symbol.is_empty() && self.seen.insert(symbol.clone()) {
            self.symbols.push(symbol);
        }
    }

    /// All symbols, in first-occurrence order.
    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    /// Check if a symbol is in the watchlist.
    pub fn contains(&self, symbol: &str) -> bool {
        self.seen.contains(&symbol.trim().to_uppercase())
    }

    /// Number of symbols.
    pub fn size(&self) -> usize {
        self.symbols.len()
    }

    /// Whether the watchlist is empty.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_are_uppercased_and_deduplicated() {
        let watchlist = Watchlist::new(["aapl", "MSFT", "AAPL", "  dis "]);

        assert_eq!(watchlist.symbols(), ["AAPL", "MSFT", "DIS"]);
        assert_eq!(watchlist.size(), 3);
        assert!(watchlist.contains("aapl"));
        assert!(!watchlist.contains("NVDA"));
    }

    #[test]
    fn test_empty_entries_dropped() {
        let watchlist = Watchlist::new(["", "  ", "TGT"]);
        assert_eq!(watchlist.symbols(), ["TGT"]);
    }

    #[test]
    fn test_from_file_skips_comments_and_blanks() {
        let path = std::env::temp_dir().join("moat_watchlist_test.txt");
        std::fs::write(&path, "# growth names\naapl\n\nnvda\n# retail\ntgt\n").unwrap();

        let watchlist = Watchlist::from_file(&path).unwrap();
        assert_eq!(watchlist.symbols(), ["AAPL", "NVDA", "TGT"]);

        std::fs::remove_file(&path).ok();
    }
}

//! Tokenizing text and accumulating word counts

use bstmap::BstMap;
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use tracing::{debug, info};

use crate::error::IndexError;

/// Splits `text` into lowercase words.
///
/// A word is a maximal run of alphanumeric characters; everything else
/// separates words.
///
/// # Examples
///
/// ```
/// use word_index::words;
///
/// let found: Vec<String> = words("It's a Tree, a TREE!").collect();
/// assert_eq!(found, vec!["it", "s", "a", "tree", "a", "tree"]);
/// ```
pub fn words(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|character: char| !character.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
}

/// Word occurrence counts, ordered alphabetically.
#[derive(Debug, Default)]
pub struct WordIndex {
    counts: BstMap<String, usize>,
    sources: usize,
}

impl WordIndex {
    /// Creates an empty index.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            counts: BstMap::new(),
            sources: 0,
        }
    }

    /// Adds every word of `text` and returns how many words were read.
    pub fn add_text(&mut self, text: &str) -> usize {
        let mut added = 0;
        for word in words(text) {
            match self.counts.get_mut(word.as_str()) {
                Some(count) => *count += 1,
                None => self.counts.put(word, 1),
            }
            added += 1;
        }
        self.sources += 1;
        added
    }

    /// Reads a file and adds its words.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::Read`] when the file cannot be read as UTF-8 text.
    pub fn add_file(&mut self, path: &Path) -> Result<usize, IndexError> {
        let text = fs::read_to_string(path).map_err(|source| IndexError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let added = self.add_text(&text);
        info!(path = %path.display(), words = added, "indexed file");
        Ok(added)
    }

    /// Reads standard input to the end and adds its words.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::Stdin`] when standard input cannot be read.
    pub fn add_stdin(&mut self) -> Result<usize, IndexError> {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .map_err(IndexError::Stdin)?;
        let added = self.add_text(&text);
        info!(words = added, "indexed standard input");
        Ok(added)
    }

    /// The underlying map from word to count.
    pub const fn counts(&self) -> &BstMap<String, usize> {
        &self.counts
    }

    /// Number of texts added so far.
    pub const fn sources(&self) -> usize {
        self.sources
    }

    /// The `limit` most frequent words, most frequent first.
    ///
    /// Words with equal counts keep their alphabetical order.
    pub fn top(&self, limit: usize) -> Vec<(&str, usize)> {
        let mut ranked: Vec<(&str, usize)> = self
            .counts
            .iter()
            .map(|(word, count)| (word.as_str(), *count))
            .collect();
        ranked.sort_by(|left, right| right.1.cmp(&left.1));
        ranked.truncate(limit);
        debug!(
            distinct = self.counts.size(),
            depth = self.counts.max_depth(),
            "ranked words"
        );
        ranked
    }
}

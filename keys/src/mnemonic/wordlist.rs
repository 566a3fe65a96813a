//! # Word Lists
//!
//! The 2048-word vocabularies BIP-39 maps 11-bit groups onto.
//!
//! Lists live in a process-wide cache keyed by language code. The first
//! request for a language parses its dataset; later requests get the same
//! `Arc<WordList>`. The cache sits behind a `parking_lot::RwLock`: lookups
//! share the read lock, and a miss takes the write lock and checks again
//! before inserting, so two threads racing on a cold language still end up
//! with one cached list.
//!
//! Only English ships inside the crate. Other vocabularies can be supplied at
//! runtime with [`WordList::install`] or [`WordList::load_file`].

use parking_lot::RwLock;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::{Arc, OnceLock};
use tracing::debug;

use crate::config::{DEFAULT_LANGUAGE, WORD_LIST_SIZE};
use crate::error::{KeyError, Result};

const ENGLISH: &str = include_str!("wordlists/english.txt");

type Cache = RwLock<HashMap<String, Arc<WordList>>>;

static CACHE: OnceLock<Cache> = OnceLock::new();

fn cache() -> &'static Cache {
    CACHE.get_or_init(|| RwLock::new(HashMap::new()))
}

/// An immutable 2048-word vocabulary.
#[derive(Debug, PartialEq, Eq)]
pub struct WordList {
    language: String,
    words: Vec<String>,
    index: HashMap<String, u16>,
}

impl WordList {
    /// Fetch the cached list for `code`, loading it on first use.
    ///
    /// Codes are case-insensitive; `en` is accepted for English.
    pub fn for_language(code: &str) -> Result<Arc<Self>> {
        let language = normalize(code);

        if let Some(list) = cache().read().get(&language) {
            return Ok(Arc::clone(list));
        }

        let mut guard = cache().write();
        // Another thread may have loaded it while we waited for the lock.
        if let Some(list) = guard.get(&language) {
            return Ok(Arc::clone(list));
        }

        let text =
            bundled(&language).ok_or_else(|| KeyError::UnsupportedLanguage(code.to_string()))?;
        let list = Arc::new(Self::parse(&language, text)?);
        debug!(language = %language, words = list.len(), "loaded bundled word list");
        guard.insert(language, Arc::clone(&list));
        Ok(list)
    }

    /// Register a word list from newline-separated text.
    ///
    /// Cached lists are never replaced. Installing under a code that is
    /// bundled or already registered succeeds only when the words are
    /// identical, and then returns the cached list.
    pub fn install(code: &str, text: &str) -> Result<Arc<Self>> {
        let language = normalize(code);
        let list = Self::parse(&language, text)?;

        let mut guard = cache().write();
        let existing = match guard.get(&language) {
            Some(cached) => Some(Arc::clone(cached)),
            None => match bundled(&language) {
                Some(dataset) => {
                    let bundled = Arc::new(Self::parse(&language, dataset)?);
                    guard.insert(language.clone(), Arc::clone(&bundled));
                    Some(bundled)
                }
                None => None,
            },
        };

        if let Some(existing) = existing {
            if existing.words == list.words {
                return Ok(existing);
            }
            return Err(KeyError::WordListInstalled(language));
        }

        let list = Arc::new(list);
        debug!(language = %language, "installed word list");
        guard.insert(language, Arc::clone(&list));
        Ok(list)
    }

    /// Read a word list file and [`install`](Self::install) it.
    pub fn load_file(code: &str, path: impl AsRef<Path>) -> Result<Arc<Self>> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| KeyError::WordListIo {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "read word list file");
        Self::install(code, &text)
    }

    /// Parse a newline-separated dataset without touching the cache.
    ///
    /// Surrounding whitespace and blank lines are ignored. Anything other
    /// than exactly 2048 words is rejected, and so is a list where two
    /// entries differ only in case or repeat outright.
    pub fn parse(language: &str, text: &str) -> Result<Self> {
        let words: Vec<String> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        let corrupt = |count| KeyError::CorruptWordList {
            language: language.to_string(),
            count,
        };

        if words.len() != WORD_LIST_SIZE {
            return Err(corrupt(words.len()));
        }

        let distinct: HashSet<String> = words.iter().map(|w| w.to_lowercase()).collect();
        if distinct.len() != WORD_LIST_SIZE {
            return Err(corrupt(distinct.len()));
        }

        let index = words
            .iter()
            .enumerate()
            .map(|(i, w)| (w.clone(), i as u16))
            .collect();

        Ok(Self {
            language: language.to_string(),
            words,
            index,
        })
    }

    /// The language code this list was registered under.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Word at `index`, or `None` past 2047.
    pub fn word_at(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    /// Position of `word` in the list.
    ///
    /// Exact matches use a hash lookup; the case-insensitive path scans.
    pub fn index_of(&self, word: &str, case_insensitive: bool) -> Option<usize> {
        if let Some(&i) = self.index.get(word) {
            return Some(i as usize);
        }
        if !case_insensitive {
            return None;
        }
        let wanted = word.to_lowercase();
        self.words.iter().position(|w| w.to_lowercase() == wanted)
    }

    /// Number of words; 2048 for every list that parsed.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always `false` for a parsed list.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words in index order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

fn normalize(code: &str) -> String {
    let code = code.trim().to_lowercase();
    match code.as_str() {
        "en" => DEFAULT_LANGUAGE.to_string(),
        _ => code,
    }
}

fn bundled(language: &str) -> Option<&'static str> {
    match language {
        "english" => Some(ENGLISH),
        _ => None,
    }
}

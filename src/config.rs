//! Configuration for the corpus builder

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Main corpus builder configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CorpusConfig {
    /// Catalog endpoints
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// Sentence filter settings
    #[serde(default)]
    pub filter: FilterConfig,
    /// Driver run settings
    #[serde(default)]
    pub run: RunConfig,
}

impl CorpusConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        toml::from_str(&raw).map_err(|e| Error::config(format!("{}: {}", path.display(), e)))
    }

    /// Apply environment variable overrides
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_overrides(|name| std::env::var(name).ok())
    }

    /// Apply overrides from a variable lookup (the environment in production)
    pub fn apply_overrides(&mut self, get: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(raw) = get("BOOK_AMOUNT") {
            self.run.book_amount = parse_var("BOOK_AMOUNT", &raw)?;
        }
        if let Some(raw) = get("WORDS_PER_LINE") {
            self.filter.min_words_per_line = parse_var("WORDS_PER_LINE", &raw)?;
        }
        if let Some(raw) = get("DISCARD_LINES_THRESHOLD") {
            self.filter.discard_line_threshold = parse_var("DISCARD_LINES_THRESHOLD", &raw)?;
        }
        if let Some(raw) = get("SKIP_ALREADY_ADDED") {
            self.run.skip_already_added = raw == "1";
        }
        if let Some(raw) = get("BOOKS_DIRNAME") {
            self.run.output_directory = PathBuf::from(raw);
        }
        Ok(())
    }
}

fn parse_var(name: &str, raw: &str) -> Result<usize> {
    raw.trim()
        .parse()
        .map_err(|_| Error::config(format!("invalid value for {}: '{}'", name, raw)))
}

/// Catalog endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Catalog page listing the books to scrape
    pub catalog_url: String,
    /// Base URL the plain-text files are served under
    pub text_base_url: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            catalog_url: "https://wolnelektury.pl/katalog/rodzaj/epika/".to_string(),
            text_base_url: "https://wolnelektury.pl/media/book/txt/".to_string(),
        }
    }
}

/// Sentence filter configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Characters a line may contain; any other character drops the whole line
    pub allowed_characters: String,
    /// Minimum whitespace-separated tokens per line
    pub min_words_per_line: usize,
    /// Lines cut from the end of every document after filtering
    pub trailing_lines_to_trim: usize,
    /// Minimum surviving lines for a book to be kept
    pub discard_line_threshold: usize,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            allowed_characters: default_allowed_characters(),
            min_words_per_line: 5,
            trailing_lines_to_trim: 5,
            discard_line_threshold: 300,
        }
    }
}

/// ASCII letters and digits, space, sentence punctuation, and the Polish alphabet
fn default_allowed_characters() -> String {
    let mut set = String::new();
    set.extend('a'..='z');
    set.extend('A'..='Z');
    set.extend('0'..='9');
    set.push_str(" .,?!");
    set.push_str("ąęćłńóśźżĄĘĆŁŃÓŚŹŻ");
    set
}

/// Driver run configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Stop after this many books have been accepted
    pub book_amount: usize,
    /// Leave already-saved books untouched instead of re-fetching them
    pub skip_already_added: bool,
    /// Directory the book files are written to
    pub output_directory: PathBuf,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            book_amount: 5,
            skip_already_added: true,
            output_directory: PathBuf::from("books"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_match_reference_values() {
        let config = CorpusConfig::default();
        assert_eq!(config.run.book_amount, 5);
        assert_eq!(config.filter.min_words_per_line, 5);
        assert_eq!(config.filter.trailing_lines_to_trim, 5);
        assert_eq!(config.filter.discard_line_threshold, 300);
        assert!(config.run.skip_already_added);
        assert_eq!(config.run.output_directory, PathBuf::from("books"));
    }

    #[test]
    fn default_whitelist_covers_polish_text() {
        let allowed = default_allowed_characters();
        for ch in "aZ9 .,?!ąĘłŻ".chars() {
            assert!(allowed.contains(ch), "missing '{}'", ch);
        }
        assert!(!allowed.contains(';'));
        assert!(!allowed.contains('\n'));
        assert!(!allowed.contains('-'));
    }

    #[test]
    fn overrides_apply_in_place() {
        let vars: HashMap<&str, &str> = [
            ("BOOK_AMOUNT", "10"),
            ("WORDS_PER_LINE", "3"),
            ("DISCARD_LINES_THRESHOLD", "50"),
            ("SKIP_ALREADY_ADDED", "0"),
            ("BOOKS_DIRNAME", "corpus-out"),
        ]
        .into_iter()
        .collect();

        let mut config = CorpusConfig::default();
        config
            .apply_overrides(|name| vars.get(name).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.run.book_amount, 10);
        assert_eq!(config.filter.min_words_per_line, 3);
        assert_eq!(config.filter.discard_line_threshold, 50);
        assert!(!config.run.skip_already_added);
        assert_eq!(config.run.output_directory, PathBuf::from("corpus-out"));
    }

    #[test]
    fn missing_variables_leave_defaults() {
        let mut config = CorpusConfig::default();
        config.apply_overrides(|_| None).unwrap();
        assert_eq!(config.run.book_amount, 5);
        assert!(config.run.skip_already_added);
    }

    #[test]
    fn malformed_numeric_override_is_a_config_error() {
        let mut config = CorpusConfig::default();
        let err = config
            .apply_overrides(|name| (name == "BOOK_AMOUNT").then(|| "many".to_string()))
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn skip_flag_only_accepts_one_as_true() {
        let mut config = CorpusConfig::default();
        config
            .apply_overrides(|name| (name == "SKIP_ALREADY_ADDED").then(|| "true".to_string()))
            .unwrap();
        assert!(!config.run.skip_already_added);
    }

    #[test]
    fn toml_round_trip() {
        let config = CorpusConfig::default();
        let serialized = toml::to_string(&config).unwrap();
        let restored: CorpusConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(restored.filter.discard_line_threshold, 300);
        assert_eq!(restored.catalog.catalog_url, config.catalog.catalog_url);
    }
}

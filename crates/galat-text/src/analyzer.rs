use std::collections::BTreeSet;
use tantivy::tokenizer::{
    AsciiFoldingFilter, LowerCaser, RemoveLongFilter, SimpleTokenizer, StopWordFilter, TextAnalyzer, TokenStream,
};

use crate::normalize::normalize;

/// Tokens longer than this are noise (urls, hashes) rather than words.
const MAX_TOKEN_LEN: usize = 40;

/// Folded French and English function words. Tokens are compared after
/// normalization, so the list carries no accents.
pub const STOP_WORDS: &[&str] = &[
    // fr
    "le", "la", "les", "un", "une", "des", "de", "du", "et", "ou", "mais", "donc", "ni", "car", "au", "aux",
    "ce", "cet", "cette", "ces", "ca", "se", "sa", "son", "ses", "leur", "leurs", "mon", "ma", "mes", "ton",
    "ta", "tes", "notre", "nos", "votre", "vos", "qui", "que", "qu", "quoi", "dont", "en", "ne", "pas",
    "plus", "moins", "tres", "il", "elle", "ils", "elles", "on", "nous", "vous", "je", "tu", "me", "te",
    "lui", "eux", "est", "sont", "etre", "avoir", "ont", "ete", "fait", "comme", "pour", "par", "sur",
    "sous", "dans", "avec", "sans", "entre", "vers", "chez", "tout", "tous", "toute", "toutes", "aussi",
    "bien", "peu", "deja", "encore", "alors", "ainsi", "cela", "ceci", "celui", "celle", "ceux", "autre",
    // en
    "a", "an", "and", "are", "as", "at", "be", "by", "for", "from", "has", "he", "in", "is", "it", "its",
    "of", "on", "that", "the", "to", "was", "will", "with", "or", "but", "not", "this", "these", "they",
    "them", "their", "there", "then", "than", "so", "if", "when", "where", "why", "how", "what", "which",
    "who", "whom", "whose", "can", "could", "should", "would", "may", "might", "must", "shall", "do",
    "does", "did", "have", "had", "having",
];

/// Splits text into the set of meaningful terms the semantic matcher compares.
///
/// Wraps a tantivy analyzer chain (simple tokenizer, long-token removal,
/// lowercasing, ASCII folding, stop words) run over already-normalized text,
/// then drops terms shorter than `min_term_len` characters.
#[derive(Clone)]
pub struct TermAnalyzer {
    analyzer: TextAnalyzer,
    min_term_len: usize,
}

impl TermAnalyzer {
    pub fn new(min_term_len: usize) -> Self {
        let analyzer = TextAnalyzer::builder(SimpleTokenizer::default())
            .filter(RemoveLongFilter::limit(MAX_TOKEN_LEN))
            .filter(LowerCaser)
            .filter(AsciiFoldingFilter)
            .filter(StopWordFilter::remove(STOP_WORDS.iter().map(|s| (*s).to_string())))
            .build();
        Self { analyzer, min_term_len }
    }

    pub fn min_term_len(&self) -> usize {
        self.min_term_len
    }

    /// Distinct terms of `text`. Order-free, so reordering words never changes it.
    pub fn terms(&mut self, text: &str) -> BTreeSet<String> {
        let normalized = normalize(text);
        let mut terms = BTreeSet::new();
        let mut stream = self.analyzer.token_stream(&normalized);
        while stream.advance() {
            let token = &stream.token().text;
            if token.chars().count() >= self.min_term_len {
                terms.insert(token.clone());
            }
        }
        terms
    }

    /// Union of the terms of several fields.
    pub fn terms_of<'a, I>(&mut self, fields: I) -> BTreeSet<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut all = BTreeSet::new();
        for field in fields {
            all.extend(self.terms(field));
        }
        all
    }
}

impl Default for TermAnalyzer {
    fn default() -> Self {
        Self::new(3)
    }
}

//! Word-lookup query builder.
//!
//! A [`WordQuery`] accumulates the constraints of one lookup and serializes
//! them into the query-string format understood by the remote service. The
//! builder is a plain value: setters consume and return it, and
//! [`crate::Client::search`] takes it by value, so a query cannot be reused
//! once it has been sent.

use indexmap::IndexMap;

// ============================================================================
// Wire Tags
// ============================================================================

/// Lexical relation between the constraint word and the results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationKind {
    /// Nouns typically modified by the given adjective.
    NounsModifiedBy,
    /// Adjectives typically used with the given noun.
    AdjectivesModifying,
    SynonymsOf,
    /// Words statistically associated with the given word in the same text.
    TriggeredBy,
    AntonymsOf,
    /// More specific terms (hyponyms).
    KindOf,
    /// More general terms (hypernyms).
    MoreGeneralThan,
    /// Holonyms: things the given word is a part of.
    Comprises,
    /// Meronyms: parts of the given word.
    PartOf,
    /// Words that typically follow the given word in a sentence.
    Follows,
    /// Words that typically precede the given word in a sentence.
    Precedes,
    RhymesWith,
    NearRhymesWith,
    HomophonesOf,
    /// Words matching in consonants only.
    ConsonantMatch,
}

impl RelationKind {
    pub fn as_code(&self) -> &'static str {
        match self {
            RelationKind::NounsModifiedBy => "rel_jja",
            RelationKind::AdjectivesModifying => "rel_jjb",
            RelationKind::SynonymsOf => "rel_syn",
            RelationKind::TriggeredBy => "rel_trg",
            RelationKind::AntonymsOf => "rel_ant",
            RelationKind::KindOf => "rel_spc",
            RelationKind::MoreGeneralThan => "rel_gen",
            RelationKind::Comprises => "rel_com",
            RelationKind::PartOf => "rel_par",
            RelationKind::Follows => "rel_bga",
            RelationKind::Precedes => "rel_bgb",
            RelationKind::RhymesWith => "rel_rhy",
            RelationKind::NearRhymesWith => "rel_nry",
            RelationKind::HomophonesOf => "rel_hom",
            RelationKind::ConsonantMatch => "rel_cns",
        }
    }
}

/// Position of a context word relative to the results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

/// Alternative vocabularies the service can search instead of its default
/// English corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vocabulary {
    /// Vocabulary drawn from Spanish-language books.
    SpanishBooks,
    /// Article titles from the English-language Wikipedia.
    EnglishWikipedia,
}

impl Vocabulary {
    pub fn as_code(&self) -> &'static str {
        match self {
            Vocabulary::SpanishBooks => "es",
            Vocabulary::EnglishWikipedia => "enwiki",
        }
    }
}

/// Per-word detail requested alongside the results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetadataFlag {
    Definitions,
    PartsOfSpeech,
    SyllableCount,
    Pronunciation,
    WordFrequency,
}

impl MetadataFlag {
    pub fn as_char(&self) -> char {
        match self {
            MetadataFlag::Definitions => 'd',
            MetadataFlag::PartsOfSpeech => 'p',
            MetadataFlag::SyllableCount => 's',
            MetadataFlag::Pronunciation => 'r',
            MetadataFlag::WordFrequency => 'f',
        }
    }
}

/// Query parameter tags understood by the remote `/words` endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum QueryKey {
    SoundsLike,
    MeansLike,
    SpelledLike,
    Topics,
    Vocabulary,
    MaxResults,
    Related(RelationKind),
    Context(Side),
    Metadata,
}

impl QueryKey {
    pub(crate) fn wire(&self) -> &'static str {
        match self {
            QueryKey::SoundsLike => "sl",
            QueryKey::MeansLike => "ml",
            QueryKey::SpelledLike => "sp",
            QueryKey::Topics => "topics",
            QueryKey::Vocabulary => "v",
            QueryKey::MaxResults => "max",
            QueryKey::Related(kind) => kind.as_code(),
            QueryKey::Context(Side::Left) => "lc",
            QueryKey::Context(Side::Right) => "rc",
            QueryKey::Metadata => "md",
        }
    }
}

// ============================================================================
// Query Builder
// ============================================================================

/// Accumulated constraints for one word lookup.
///
/// Setting the same constraint twice replaces the earlier value. Constraint
/// values are passed through to the service unvalidated; range and content
/// checks happen remotely.
#[derive(Debug, Clone, Default)]
pub struct WordQuery {
    options: IndexMap<QueryKey, Vec<String>>,
    metadata: Vec<MetadataFlag>,
}

impl WordQuery {
    pub fn new() -> Self {
        Self::default()
    }

    fn set(mut self, key: QueryKey, value: String) -> Self {
        self.options.insert(key, vec![value]);
        self
    }

    /// Constrain results to words that sound like the given word.
    pub fn sounds_like(self, word: impl Into<String>) -> Self {
        self.set(QueryKey::SoundsLike, word.into())
    }

    /// Constrain results to words with a meaning like the given word.
    pub fn means_like(self, word: impl Into<String>) -> Self {
        self.set(QueryKey::MeansLike, word.into())
    }

    /// Constrain results to words spelled like the given pattern. Wildcard
    /// tokens in the pattern are interpreted by the remote service.
    pub fn spelled_like(self, pattern: impl Into<String>) -> Self {
        self.set(QueryKey::SpelledLike, pattern.into())
    }

    /// Bias results toward the given topic words.
    pub fn topics<I, S>(mut self, topics: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values = topics.into_iter().map(Into::into).collect();
        self.options.insert(QueryKey::Topics, values);
        self
    }

    /// Constrain results by a lexical relation to the given word.
    pub fn related(self, kind: RelationKind, word: impl Into<String>) -> Self {
        self.set(QueryKey::Related(kind), word.into())
    }

    /// Search an alternative vocabulary instead of the default English corpus.
    pub fn vocabulary(self, vocabulary: Vocabulary) -> Self {
        self.set(QueryKey::Vocabulary, vocabulary.as_code().to_string())
    }

    /// Cap the number of results. Out-of-range values are passed through;
    /// the service applies its own limits.
    pub fn max_results(self, max: u32) -> Self {
        self.set(QueryKey::MaxResults, max.to_string())
    }

    /// Constrain results to words appearing directly to the given side of
    /// the given word in running text.
    pub fn word_on(self, side: Side, word: impl Into<String>) -> Self {
        self.set(QueryKey::Context(side), word.into())
    }

    /// Request extra per-word detail in the results. Flags accumulate in
    /// invocation order; requesting the same flag twice has no effect.
    pub fn with_metadata(mut self, flag: MetadataFlag) -> Self {
        if !self.metadata.contains(&flag) {
            self.metadata.push(flag);
        }
        self
    }

    pub fn with_definitions(self) -> Self {
        self.with_metadata(MetadataFlag::Definitions)
    }

    pub fn with_parts_of_speech(self) -> Self {
        self.with_metadata(MetadataFlag::PartsOfSpeech)
    }

    pub fn with_syllable_count(self) -> Self {
        self.with_metadata(MetadataFlag::SyllableCount)
    }

    pub fn with_pronunciation(self) -> Self {
        self.with_metadata(MetadataFlag::Pronunciation)
    }

    pub fn with_word_frequency(self) -> Self {
        self.with_metadata(MetadataFlag::WordFrequency)
    }

    /// Serialize into the service's query-string format.
    ///
    /// Entries appear in the order their keys were first set, with the
    /// metadata flags last. Values are percent-encoded; topic lists keep a
    /// literal `,` between encoded elements. No trailing separator is
    /// emitted, and `md` is omitted entirely when no flags were requested.
    pub(crate) fn encode(&self) -> String {
        let mut parts: Vec<String> = self
            .options
            .iter()
            .map(|(key, values)| {
                let encoded: Vec<String> = values
                    .iter()
                    .map(|v| urlencoding::encode(v).into_owned())
                    .collect();
                // Only topic lists take a delimiter between values
                let joined = match key {
                    QueryKey::Topics => encoded.join(","),
                    _ => encoded.concat(),
                };
                format!("{}={}", key.wire(), joined)
            })
            .collect();

        if !self.metadata.is_empty() {
            let flags: String = self.metadata.iter().map(MetadataFlag::as_char).collect();
            parts.push(format!("{}={}", QueryKey::Metadata.wire(), flags));
        }

        parts.join("&")
    }
}

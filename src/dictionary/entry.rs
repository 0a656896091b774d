use crate::dictionary::Language;

/// One complete lookup result for a headword, as read from the dictionary
/// store. Discarded after rendering.
#[derive(Debug, Clone)]
pub struct LexicalRecord {
    pub word: String,
    pub entries: Vec<LanguageEntry>,
    pub source: Source,
}

/// One (word, part of speech) entry. A record may carry several entries with
/// the same part of speech; the renderer merges them.
#[derive(Debug, Clone)]
pub struct LanguageEntry {
    pub language: Language,
    pub part_of_speech: String,
    pub pronunciations: Vec<Pronunciation>,
    pub forms: Vec<Form>,
    pub senses: Vec<Sense>,
}

#[derive(Debug, Clone)]
pub struct Pronunciation {
    pub system: String,
    pub text: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Form {
    pub form: String,
    pub tags: Vec<String>,
}

/// One meaning of a word. Subsenses nest without a depth limit.
#[derive(Debug, Clone, Default)]
pub struct Sense {
    pub definition: String,
    pub examples: Vec<String>,
    pub quotes: Vec<Quote>,
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
    pub translations: Vec<String>,
    pub subsenses: Vec<Sense>,
}

#[derive(Debug, Clone)]
pub struct Quote {
    pub text: String,
    pub reference: String,
}

#[derive(Debug, Clone)]
pub struct Source {
    pub url: String,
    pub license: License,
}

#[derive(Debug, Clone)]
pub struct License {
    pub name: String,
    pub url: String,
}

mod forms;
mod pronunciation;
mod senses;

use crate::dictionary::entry::{Form, LanguageEntry, LexicalRecord, Pronunciation, Sense};
use crate::dictionary::Language;

/// A rendered lookup: the markdown document plus the escaped source url it
/// cites.
#[derive(Debug, Clone)]
pub struct Document {
    pub markdown: String,
    pub source_url: String,
}

struct PosGroup {
    part_of_speech: String,
    language: Language,
    pronunciations: Vec<Pronunciation>,
    forms: Vec<Form>,
    senses: Vec<Sense>,
}

/// Renders one lexical record into a markdown document. Pure and
/// deterministic: the same record always yields the same bytes.
pub fn render_record(record: &LexicalRecord) -> Document {
    let source_url = record.source.url.replace(' ', "%20");

    let mut out = String::new();
    out.push_str(&format!("# {}\n\n", capitalize(&record.word)));
    out.push_str(&format!(
        "Source: [{url}]({url}), license: [{}]({})\n\n",
        record.source.license.name,
        record.source.license.url,
        url = source_url,
    ));

    for group in group_by_part_of_speech(&record.entries) {
        out.push_str(&format!("## {}\n\n", capitalize(&group.part_of_speech)));

        let pronunciations = pronunciation::render_pronunciations(&group.pronunciations);
        if !pronunciations.is_empty() {
            out.push_str(&pronunciations);
            out.push('\n');
        }

        out.push_str(&senses::render_senses(&group.senses));
        out.push_str(&forms::render_forms(&group.forms, &group.language.code));
    }

    Document {
        // concatenated abbreviations leave "etc.." behind
        markdown: out.replace("..", "."),
        source_url,
    }
}

/// Merges entries sharing a part-of-speech tag, keeping first-encountered
/// group order and appending lists rather than replacing them.
fn group_by_part_of_speech(entries: &[LanguageEntry]) -> Vec<PosGroup> {
    let mut groups: Vec<PosGroup> = Vec::new();

    for entry in entries {
        match groups
            .iter_mut()
            .find(|group| group.part_of_speech == entry.part_of_speech)
        {
            Some(group) => {
                group
                    .pronunciations
                    .extend(entry.pronunciations.iter().cloned());
                group.forms.extend(entry.forms.iter().cloned());
                group.senses.extend(entry.senses.iter().cloned());
            }
            None => groups.push(PosGroup {
                part_of_speech: entry.part_of_speech.clone(),
                language: entry.language.clone(),
                pronunciations: entry.pronunciations.clone(),
                forms: entry.forms.clone(),
                senses: entry.senses.clone(),
            }),
        }
    }

    groups
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();

    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::entry::{License, Source};

    fn source(url: &str) -> Source {
        Source {
            url: url.to_owned(),
            license: License {
                name: String::from("X"),
                url: String::from("y"),
            },
        }
    }

    fn entry(pos: &str, definitions: &[&str]) -> LanguageEntry {
        LanguageEntry {
            language: Language::new("en", "English"),
            part_of_speech: pos.to_owned(),
            pronunciations: Vec::new(),
            forms: Vec::new(),
            senses: definitions
                .iter()
                .map(|definition| Sense {
                    definition: definition.to_string(),
                    ..Default::default()
                })
                .collect(),
        }
    }

    #[test]
    fn grouping_merges_repeated_part_of_speech_in_order() {
        let entries = vec![
            entry("noun", &["a1", "a2"]),
            entry("verb", &["b1"]),
            entry("noun", &["c1"]),
        ];

        let groups = group_by_part_of_speech(&entries);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].part_of_speech, "noun");
        assert_eq!(groups[1].part_of_speech, "verb");

        let noun_definitions: Vec<&str> = groups[0]
            .senses
            .iter()
            .map(|sense| sense.definition.as_str())
            .collect();
        assert_eq!(noun_definitions, ["a1", "a2", "c1"]);
    }

    #[test]
    fn empty_record_renders_header_only() {
        let record = LexicalRecord {
            word: String::from("run"),
            entries: Vec::new(),
            source: source("https://example.com/run"),
        };

        assert_eq!(
            render_record(&record).markdown,
            "# Run\n\n\
             Source: [https://example.com/run](https://example.com/run), license: [X](y)\n\n"
        );
    }

    #[test]
    fn source_url_spaces_are_escaped() {
        let record = LexicalRecord {
            word: String::from("a b"),
            entries: Vec::new(),
            source: source("https://example.com/a b"),
        };

        let document = render_record(&record);

        assert_eq!(document.source_url, "https://example.com/a%20b");
        assert!(document
            .markdown
            .contains("[https://example.com/a%20b](https://example.com/a%20b)"));
    }

    #[test]
    fn doubled_periods_collapse() {
        let record = LexicalRecord {
            word: String::from("etc"),
            entries: vec![entry("noun", &["and so on, etc.."])],
            source: source("https://example.com/etc"),
        };

        let document = render_record(&record);

        assert!(document.markdown.contains("1. and so on, etc.\n"));
        assert!(!document.markdown.contains(".."));
    }

    #[test]
    fn rendering_is_deterministic() {
        let record = LexicalRecord {
            word: String::from("run"),
            entries: vec![entry("verb", &["move fast"]), entry("noun", &["a jog"])],
            source: source("https://example.com/run"),
        };

        assert_eq!(render_record(&record).markdown, render_record(&record).markdown);
    }

    #[test]
    fn full_document_for_a_single_entry() {
        let record = LexicalRecord {
            word: String::from("run"),
            entries: vec![LanguageEntry {
                language: Language::new("en", "English"),
                part_of_speech: String::from("verb"),
                pronunciations: vec![Pronunciation {
                    system: String::from("IPA"),
                    text: String::from("rʌn"),
                    tags: vec![String::from("US")],
                }],
                forms: vec![Form {
                    form: String::from("running"),
                    tags: vec![String::from("gerund")],
                }],
                senses: vec![Sense {
                    definition: String::from("move fast"),
                    examples: vec![String::from("he ran")],
                    synonyms: vec![String::from("sprint")],
                    ..Default::default()
                }],
            }],
            source: source("https://example.com/run"),
        };

        assert_eq!(
            render_record(&record).markdown,
            "# Run\n\n\
             Source: [https://example.com/run](https://example.com/run), license: [X](y)\n\n\
             ## Verb\n\n\
             | Dialect | Pronunciation | Phonetic System |\n\
             |---|---|---|\n\
             | US | rʌn | IPA |\n\
             \n\
             ### Senses\n\n\
             1. move fast\n\
             \x20   Examples: he ran\n\
             \x20   Synonyms: sprint\n\
             \n\
             ### Forms\n\n\
             - running (gerund)\n\
             \n"
        );
    }
}

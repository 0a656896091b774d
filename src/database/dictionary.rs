use std::fs::File;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use rusqlite::{params, Transaction};
use serde_json::Value;
use tokio_rusqlite::{Connection, Result};

use crate::dictionary::entry::{
    Form, LanguageEntry, LexicalRecord, License, Pronunciation, Quote, Sense, Source,
};
use crate::dictionary::Language;
use crate::Error;

const KEPT_POS: [&str; 10] = [
    "noun", "verb", "adj", "adv", "det", "particle", "intj", "conj", "prep", "pron",
];

fn read_lines<P>(filename: P) -> io::Result<io::Lines<io::BufReader<File>>>
where
    P: AsRef<Path>,
{
    let file = File::open(filename)?;
    Ok(io::BufReader::new(file).lines())
}

pub async fn create_tables(wiktionary_path: PathBuf) -> Result<()> {
    let conn = Connection::open("./db/database.db").await?;

    conn.call(move |conn| {
        conn.execute_batch(
            "DROP TABLE IF EXISTS pronunciation_tags;
                DROP TABLE IF EXISTS pronunciation;
                DROP TABLE IF EXISTS form_tags;
                DROP TABLE IF EXISTS word_forms;
                DROP TABLE IF EXISTS forms;
                DROP TABLE IF EXISTS sense_synonyms;
                DROP TABLE IF EXISTS synonyms;
                DROP TABLE IF EXISTS sense_antonyms;
                DROP TABLE IF EXISTS antonyms;
                DROP TABLE IF EXISTS translations;
                DROP TABLE IF EXISTS quotes;
                DROP TABLE IF EXISTS examples;
                DROP TABLE IF EXISTS senses;
                DROP TABLE IF EXISTS words;",
        )?;

        conn.execute(
            "CREATE TABLE words (
                id INTEGER PRIMARY KEY,
                word TEXT NOT NULL,
                pos TEXT NOT NULL,
                lang_code TEXT NOT NULL,
                lang_name TEXT NOT NULL
            )",
            (),
        )?;

        conn.execute(
            "CREATE TABLE senses (
                id INTEGER PRIMARY KEY,
                word_id INTEGER NOT NULL REFERENCES words(id),
                parent_id INTEGER REFERENCES senses(id),
                definition TEXT,
                relevance INTEGER NOT NULL
            )",
            (),
        )?;

        conn.execute(
            "CREATE TABLE examples (
                sense_id INTEGER NOT NULL REFERENCES senses(id),
                text TEXT NOT NULL
            )",
            (),
        )?;

        conn.execute(
            "CREATE TABLE quotes (
                sense_id INTEGER NOT NULL REFERENCES senses(id),
                text TEXT NOT NULL,
                reference TEXT NOT NULL
            )",
            (),
        )?;

        conn.execute(
            "CREATE TABLE translations (
                sense_id INTEGER NOT NULL REFERENCES senses(id),
                translation TEXT NOT NULL
            )",
            (),
        )?;

        conn.execute(
            "CREATE TABLE synonyms (
                id INTEGER PRIMARY KEY,
                synonym TEXT NOT NULL
            )",
            (),
        )?;

        conn.execute(
            "CREATE TABLE sense_synonyms (
                sense_id INTEGER NOT NULL REFERENCES senses(id),
                synonym_id INTEGER NOT NULL REFERENCES synonyms(id)
            )",
            (),
        )?;

        conn.execute(
            "CREATE TABLE antonyms (
                id INTEGER PRIMARY KEY,
                antonym TEXT NOT NULL
            )",
            (),
        )?;

        conn.execute(
            "CREATE TABLE sense_antonyms (
                sense_id INTEGER NOT NULL REFERENCES senses(id),
                antonym_id INTEGER NOT NULL REFERENCES antonyms(id)
            )",
            (),
        )?;

        conn.execute(
            "CREATE TABLE forms (
                id INTEGER PRIMARY KEY,
                form TEXT NOT NULL
            )",
            (),
        )?;

        conn.execute(
            "CREATE TABLE word_forms (
                word_id INTEGER NOT NULL REFERENCES words(id),
                form_id INTEGER NOT NULL REFERENCES forms(id)
            )",
            (),
        )?;

        conn.execute(
            "CREATE TABLE form_tags (
                form_id INTEGER NOT NULL REFERENCES forms(id),
                tag TEXT NOT NULL
            )",
            (),
        )?;

        conn.execute(
            "CREATE TABLE pronunciation (
                id INTEGER PRIMARY KEY,
                word_id INTEGER NOT NULL REFERENCES words(id),
                system TEXT NOT NULL,
                text TEXT NOT NULL
            )",
            (),
        )?;

        conn.execute(
            "CREATE TABLE pronunciation_tags (
                pronunciation_id INTEGER NOT NULL REFERENCES pronunciation(id),
                tag TEXT NOT NULL
            )",
            (),
        )?;

        conn.execute("CREATE INDEX word_index ON words(word, lang_code)", ())?;

        let start = std::time::Instant::now();

        let mut ta = conn.transaction()?;
        insert_data(&mut ta, &wiktionary_path)?;
        ta.commit()?;

        let duration = start.elapsed();
        println!("Time elapsed for insertion: {:?}", duration);

        Ok(())
    })
    .await?;

    conn.close().await?;
    Ok(())
}

fn get_value<'a>(value: &'a Value, key: &str, line: usize) -> crate::Result<&'a Value> {
    value
        .get(key)
        .ok_or_else(|| Error::GetValueFailed(value.clone(), line))
}

fn as_str(value: &Value, line: usize) -> crate::Result<&str> {
    value
        .as_str()
        .ok_or_else(|| Error::ValueConversionFailed(value.clone(), line))
}

fn as_array<'a>(value: &'a Value, line: usize) -> crate::Result<&'a Vec<Value>> {
    value
        .as_array()
        .ok_or_else(|| Error::ValueConversionFailed(value.clone(), line))
}

fn insert_data(ta: &mut Transaction, wiktionary_path: &Path) -> crate::Result<()> {
    let mut word_stmt =
        ta.prepare("INSERT INTO words (word, pos, lang_code, lang_name) VALUES (?1, ?2, ?3, ?4)")?;

    let mut sense_stmt = ta.prepare(
        "INSERT INTO senses (word_id, parent_id, definition, relevance) VALUES (?1, ?2, ?3, ?4)",
    )?;

    let mut example_stmt = ta.prepare("INSERT INTO examples (sense_id, text) VALUES (?1, ?2)")?;
    let mut quote_stmt =
        ta.prepare("INSERT INTO quotes (sense_id, text, reference) VALUES (?1, ?2, ?3)")?;
    let mut translation_stmt =
        ta.prepare("INSERT INTO translations (sense_id, translation) VALUES (?1, ?2)")?;

    let mut synonym_stmt = ta.prepare("INSERT INTO synonyms (synonym) VALUES (?1)")?;
    let mut sense_synonym_stmt =
        ta.prepare("INSERT INTO sense_synonyms (sense_id, synonym_id) VALUES (?1, ?2)")?;
    let mut antonym_stmt = ta.prepare("INSERT INTO antonyms (antonym) VALUES (?1)")?;
    let mut sense_antonym_stmt =
        ta.prepare("INSERT INTO sense_antonyms (sense_id, antonym_id) VALUES (?1, ?2)")?;

    let mut form_stmt = ta.prepare("INSERT INTO forms (form) VALUES (?1)")?;
    let mut word_form_stmt =
        ta.prepare("INSERT INTO word_forms (word_id, form_id) VALUES (?1, ?2)")?;
    let mut form_tag_stmt = ta.prepare("INSERT INTO form_tags (form_id, tag) VALUES (?1, ?2)")?;

    let mut pronunciation_stmt =
        ta.prepare("INSERT INTO pronunciation (word_id, system, text) VALUES (?1, ?2, ?3)")?;
    let mut pronunciation_tag_stmt =
        ta.prepare("INSERT INTO pronunciation_tags (pronunciation_id, tag) VALUES (?1, ?2)")?;

    let lines = read_lines(wiktionary_path)?;

    'iteration: for (line_number, line) in lines.flatten().enumerate() {
        let json: Value = serde_json::from_str(&line)?;

        let word = as_str(get_value(&json, "word", line_number)?, line_number)?;
        let pos = as_str(get_value(&json, "pos", line_number)?, line_number)?;
        let lang_code = as_str(get_value(&json, "lang_code", line_number)?, line_number)?;
        let lang_name = as_str(get_value(&json, "lang", line_number)?, line_number)?;

        if !KEPT_POS.contains(&pos) {
            continue 'iteration;
        }

        let json_senses = as_array(get_value(&json, "senses", line_number)?, line_number)?;
        let mut senses = Vec::new();

        'senses: for sense in json_senses {
            if sense.get("form_of").is_some() {
                continue;
            }

            if let Some(tags) = sense.get("tags") {
                for tag in as_array(tags, line_number)? {
                    if as_str(tag, line_number)? == "form-of" {
                        continue 'senses;
                    }
                }
            }

            senses.push(sense);
        }

        if senses.is_empty() {
            continue 'iteration;
        }

        word_stmt.execute([word, pos, lang_code, lang_name])?;

        let word_id = ta.last_insert_rowid();

        // glosses list the path from the broadest sense down to this one;
        // depth beyond one nests the sense under the previous shallower id
        let mut sense_stack: Vec<i64> = Vec::new();

        for (i, sense) in senses.iter().enumerate() {
            let (depth, definition) = match sense.get("glosses") {
                Some(glosses) => {
                    let glosses = as_array(glosses, line_number)?;
                    match glosses.last() {
                        Some(last) => (glosses.len(), Some(as_str(last, line_number)?)),
                        None => (1, None),
                    }
                }
                None => (1, None),
            };

            let parent_id = if depth > 1 {
                sense_stack.get(depth - 2).copied()
            } else {
                None
            };

            sense_stmt.execute(params![word_id, parent_id, definition, i])?;

            let sense_id = ta.last_insert_rowid();

            sense_stack.truncate(depth - 1);
            sense_stack.push(sense_id);

            if let Some(examples) = sense.get("examples") {
                for example in as_array(examples, line_number)? {
                    let text = as_str(get_value(example, "text", line_number)?, line_number)?;

                    match example.get("ref") {
                        Some(reference) => {
                            let reference = as_str(reference, line_number)?;
                            quote_stmt.execute(params![sense_id, text, reference])?;
                        }
                        None => {
                            example_stmt.execute(params![sense_id, text])?;
                        }
                    }
                }
            }

            if let Some(synonyms) = sense.get("synonyms") {
                for synonym in as_array(synonyms, line_number)? {
                    let synonym = as_str(get_value(synonym, "word", line_number)?, line_number)?;

                    synonym_stmt.execute([synonym])?;
                    let synonym_id = ta.last_insert_rowid();
                    sense_synonym_stmt.execute([sense_id, synonym_id])?;
                }
            }

            if let Some(antonyms) = sense.get("antonyms") {
                for antonym in as_array(antonyms, line_number)? {
                    let antonym = as_str(get_value(antonym, "word", line_number)?, line_number)?;

                    antonym_stmt.execute([antonym])?;
                    let antonym_id = ta.last_insert_rowid();
                    sense_antonym_stmt.execute([sense_id, antonym_id])?;
                }
            }

            if let Some(translations) = sense.get("translations") {
                for translation in as_array(translations, line_number)? {
                    let translation =
                        as_str(get_value(translation, "word", line_number)?, line_number)?;

                    translation_stmt.execute(params![sense_id, translation])?;
                }
            }
        }

        if let Some(forms) = json.get("forms") {
            'forms: for form in as_array(forms, line_number)? {
                let word = as_str(get_value(form, "form", line_number)?, line_number)?;

                let source = match form.get("source") {
                    Some(source) => as_str(source, line_number)?,
                    None => continue 'forms,
                };
                if source != "declension" && source != "conjugation" {
                    continue 'forms;
                }

                let tags = match form.get("tags") {
                    Some(tags) => as_array(tags, line_number)?,
                    None => continue 'forms,
                };

                form_stmt.execute([word])?;
                let form_id = ta.last_insert_rowid();
                word_form_stmt.execute([word_id, form_id])?;

                for tag in tags {
                    let tag = as_str(tag, line_number)?;
                    form_tag_stmt.execute(params![form_id, tag])?;
                }
            }
        }

        if let Some(sounds) = json.get("sounds") {
            for sound in as_array(sounds, line_number)? {
                let (system, text) = if let Some(ipa) = sound.get("ipa") {
                    ("IPA", as_str(ipa, line_number)?)
                } else if let Some(enpr) = sound.get("enpr") {
                    ("enPR", as_str(enpr, line_number)?)
                } else {
                    continue;
                };

                pronunciation_stmt.execute(params![word_id, system, text])?;
                let pronunciation_id = ta.last_insert_rowid();

                if let Some(tags) = sound.get("tags") {
                    for tag in as_array(tags, line_number)? {
                        let tag = as_str(tag, line_number)?;
                        pronunciation_tag_stmt.execute(params![pronunciation_id, tag])?;
                    }
                }
            }
        }
    }

    Ok(())
}

/// Reads the full record for a (language, word) pair. `None` means the word
/// is not in the dictionary; the caller decides what to show for that.
pub async fn read_record(language_code: String, word: String) -> Result<Option<LexicalRecord>> {
    let conn = Connection::open("./db/database.db").await?;

    let record = conn
        .call(move |conn| {
            let ta = conn.transaction()?;

            let mut word_stmt = ta.prepare(
                "SELECT id, word, pos, lang_code, lang_name FROM words
                WHERE word = ?1 AND lang_code = ?2",
            )?;

            let mut form_stmt = ta.prepare(
                "SELECT forms.id, form FROM forms
                JOIN word_forms ON forms.id = form_id
                WHERE word_id = ?1",
            )?;

            let mut form_tag_stmt = ta.prepare("SELECT tag FROM form_tags WHERE form_id = ?1")?;

            let mut sense_stmt = ta.prepare(
                "SELECT id, parent_id, definition FROM senses
                WHERE word_id = ?1 ORDER BY relevance",
            )?;

            let mut example_stmt = ta.prepare("SELECT text FROM examples WHERE sense_id = ?1")?;
            let mut quote_stmt =
                ta.prepare("SELECT text, reference FROM quotes WHERE sense_id = ?1")?;
            let mut translation_stmt =
                ta.prepare("SELECT translation FROM translations WHERE sense_id = ?1")?;

            let mut synonym_stmt = ta.prepare(
                "SELECT synonym FROM synonyms
                JOIN sense_synonyms ON synonyms.id = synonym_id
                WHERE sense_id = ?1",
            )?;

            let mut antonym_stmt = ta.prepare(
                "SELECT antonym FROM antonyms
                JOIN sense_antonyms ON antonyms.id = antonym_id
                WHERE sense_id = ?1",
            )?;

            let mut pronunciation_stmt =
                ta.prepare("SELECT id, system, text FROM pronunciation WHERE word_id = ?1")?;

            let mut pronunciation_tag_stmt = ta.prepare(
                "SELECT tag FROM pronunciation_tags
                WHERE pronunciation_id = ?1",
            )?;

            let mut entries = Vec::new();

            let entry_iter = word_stmt.query_map([&word, &language_code], |row| {
                let id: i64 = row.get(0)?;
                let word: String = row.get(1)?;
                let pos: String = row.get(2)?;
                let lang_code: String = row.get(3)?;
                let lang_name: String = row.get(4)?;
                Ok((id, word, pos, lang_code, lang_name))
            })?;

            for entry in entry_iter {
                let (id, _, pos, lang_code, lang_name) = entry?;

                let mut forms = Vec::new();
                let mut pronunciations = Vec::new();

                let form_iter = form_stmt.query_map([id], |row| {
                    let id: i64 = row.get(0)?;
                    let form: String = row.get(1)?;

                    Ok((id, form))
                })?;

                for form in form_iter {
                    let (id, form) = form?;

                    let mut tags = Vec::new();

                    let tag_iter =
                        form_tag_stmt.query_map([id], |row| row.get::<usize, String>(0))?;

                    for tag in tag_iter {
                        tags.push(tag?);
                    }

                    forms.push(Form { form, tags });
                }

                // senses come back parents-before-children; pop from the back
                // so every subtree is complete before it is attached
                let sense_iter = sense_stmt.query_map([id], |row| {
                    let id: i64 = row.get(0)?;
                    let parent_id: Option<i64> = row.get(1)?;
                    let definition: Option<String> = row.get(2)?;

                    Ok((id, parent_id, definition))
                })?;

                let mut nodes: Vec<(i64, Option<i64>, Sense)> = Vec::new();

                for sense in sense_iter {
                    let (id, parent_id, definition) = sense?;

                    let mut sense = Sense {
                        definition: definition.unwrap_or_default(),
                        ..Default::default()
                    };

                    let example_iter =
                        example_stmt.query_map([id], |row| row.get::<usize, String>(0))?;

                    for example in example_iter {
                        sense.examples.push(example?);
                    }

                    let quote_iter = quote_stmt.query_map([id], |row| {
                        let text: String = row.get(0)?;
                        let reference: String = row.get(1)?;

                        Ok(Quote { text, reference })
                    })?;

                    for quote in quote_iter {
                        sense.quotes.push(quote?);
                    }

                    let synonym_iter =
                        synonym_stmt.query_map([id], |row| row.get::<usize, String>(0))?;

                    for synonym in synonym_iter {
                        sense.synonyms.push(synonym?);
                    }

                    let antonym_iter =
                        antonym_stmt.query_map([id], |row| row.get::<usize, String>(0))?;

                    for antonym in antonym_iter {
                        sense.antonyms.push(antonym?);
                    }

                    let translation_iter =
                        translation_stmt.query_map([id], |row| row.get::<usize, String>(0))?;

                    for translation in translation_iter {
                        sense.translations.push(translation?);
                    }

                    nodes.push((id, parent_id, sense));
                }

                let mut senses = Vec::new();

                while let Some((_, parent_id, sense)) = nodes.pop() {
                    let parent = parent_id
                        .and_then(|parent_id| nodes.iter_mut().find(|(id, _, _)| *id == parent_id));

                    match parent {
                        Some((_, _, parent)) => parent.subsenses.insert(0, sense),
                        None => senses.insert(0, sense),
                    }
                }

                let pronunciation_iter = pronunciation_stmt.query_map([id], |row| {
                    let id: i64 = row.get(0)?;
                    let system: String = row.get(1)?;
                    let text: String = row.get(2)?;

                    Ok((id, system, text))
                })?;

                for pronunciation in pronunciation_iter {
                    let (id, system, text) = pronunciation?;

                    let mut tags = Vec::new();

                    let tag_iter =
                        pronunciation_tag_stmt.query_map([id], |row| row.get::<usize, String>(0))?;

                    for tag in tag_iter {
                        tags.push(tag?);
                    }

                    pronunciations.push(Pronunciation { system, text, tags });
                }

                entries.push(LanguageEntry {
                    language: Language::new(&lang_code, &lang_name),
                    part_of_speech: pos,
                    pronunciations,
                    forms,
                    senses,
                });
            }

            drop(word_stmt);
            drop(form_stmt);
            drop(form_tag_stmt);
            drop(sense_stmt);
            drop(example_stmt);
            drop(quote_stmt);
            drop(translation_stmt);
            drop(synonym_stmt);
            drop(antonym_stmt);
            drop(pronunciation_stmt);
            drop(pronunciation_tag_stmt);

            ta.commit()?;

            if entries.is_empty() {
                return Ok(None);
            }

            Ok(Some(LexicalRecord {
                source: Source {
                    url: format!("https://en.wiktionary.org/wiki/{word}"),
                    license: License {
                        name: String::from("CC BY-SA 3.0"),
                        url: String::from("https://creativecommons.org/licenses/by-sa/3.0/"),
                    },
                },
                word,
                entries,
            }))
        })
        .await?;

    Ok(record)
}

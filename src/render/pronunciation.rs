use crate::dictionary::entry::Pronunciation;

struct DialectRow {
    dialect: String,
    texts: Vec<String>,
    system: String,
}

/// Groups pronunciations by dialect tag into a table. A pronunciation tagged
/// with several dialects appears in every matching row; one without tags goes
/// under the "-" row.
pub fn render_pronunciations(pronunciations: &[Pronunciation]) -> String {
    if pronunciations.is_empty() {
        return String::new();
    }

    let mut rows: Vec<DialectRow> = Vec::new();

    for pronunciation in pronunciations {
        if pronunciation.tags.is_empty() {
            add_text(&mut rows, "-", pronunciation);
        } else {
            for tag in &pronunciation.tags {
                add_text(&mut rows, tag, pronunciation);
            }
        }
    }

    let mut out = String::from("| Dialect | Pronunciation | Phonetic System |\n|---|---|---|\n");

    for row in rows {
        out.push_str(&format!(
            "| {} | {} | {} |\n",
            row.dialect,
            row.texts.join(", "),
            row.system
        ));
    }

    out
}

fn add_text(rows: &mut Vec<DialectRow>, dialect: &str, pronunciation: &Pronunciation) {
    match rows.iter_mut().find(|row| row.dialect == dialect) {
        Some(row) => row.texts.push(pronunciation.text.clone()),
        None => rows.push(DialectRow {
            dialect: dialect.to_owned(),
            texts: vec![pronunciation.text.clone()],
            // the first pronunciation assigned to a dialect decides its system column
            system: pronunciation.system.clone(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pronunciation(system: &str, text: &str, tags: &[&str]) -> Pronunciation {
        Pronunciation {
            system: system.to_owned(),
            text: text.to_owned(),
            tags: tags.iter().map(|tag| tag.to_string()).collect(),
        }
    }

    #[test]
    fn empty_input_renders_nothing() {
        assert_eq!(render_pronunciations(&[]), "");
    }

    #[test]
    fn multi_tag_pronunciation_appears_in_every_row() {
        let out = render_pronunciations(&[pronunciation("IPA", "fu:", &["UK", "US"])]);

        assert_eq!(
            out,
            "| Dialect | Pronunciation | Phonetic System |\n\
             |---|---|---|\n\
             | UK | fu: | IPA |\n\
             | US | fu: | IPA |\n"
        );
    }

    #[test]
    fn untagged_pronunciation_goes_under_dash() {
        let out = render_pronunciations(&[pronunciation("IPA", "fu:", &[])]);

        assert_eq!(
            out,
            "| Dialect | Pronunciation | Phonetic System |\n\
             |---|---|---|\n\
             | - | fu: | IPA |\n"
        );
    }

    #[test]
    fn repeated_dialect_accumulates_and_keeps_first_system() {
        let out = render_pronunciations(&[
            pronunciation("IPA", "ɹʌn", &["US"]),
            pronunciation("enPR", "rŭn", &["US"]),
        ]);

        assert_eq!(
            out,
            "| Dialect | Pronunciation | Phonetic System |\n\
             |---|---|---|\n\
             | US | ɹʌn, rŭn | IPA |\n"
        );
    }
}

use crate::dictionary::entry::Sense;

const INDENT: &str = "    ";

/// Renders the sense outline for one part-of-speech group. Top-level senses
/// are numbered from 1; every subsense list renumbers from 1 on its own.
pub fn render_senses(senses: &[Sense]) -> String {
    if senses.is_empty() {
        return String::new();
    }

    let mut out = String::from("### Senses\n\n");

    for (i, sense) in senses.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, sense.definition));

        if !sense.examples.is_empty() {
            out.push_str(&format!(
                "{INDENT}Examples: {}\n",
                sense.examples.join("; ")
            ));
        }
        for (k, quote) in sense.quotes.iter().enumerate() {
            out.push_str(&format!(
                "{INDENT}Quote {}: {} - {}\n",
                k + 1,
                quote.text,
                quote.reference
            ));
        }
        if !sense.synonyms.is_empty() {
            out.push_str(&format!(
                "{INDENT}Synonyms: {}\n",
                sense.synonyms.join(", ")
            ));
        }
        if !sense.antonyms.is_empty() {
            out.push_str(&format!(
                "{INDENT}Antonyms: {}\n",
                sense.antonyms.join(", ")
            ));
        }

        render_subsenses(&mut out, &sense.subsenses, 2);
    }

    out.push('\n');
    out
}

// Subsenses list their fields in a different order than top-level senses do,
// and emit quotes twice; both match the output this replaces.
fn render_subsenses(out: &mut String, senses: &[Sense], depth: usize) {
    if senses.is_empty() {
        return;
    }

    let indent = INDENT.repeat(depth);
    let field_indent = INDENT.repeat(depth + 1);

    for (i, sense) in senses.iter().enumerate() {
        out.push_str(&format!("{indent}{}. {}\n", i + 1, sense.definition));

        if !sense.synonyms.is_empty() {
            out.push_str(&format!(
                "{field_indent}Synonyms: {}\n",
                sense.synonyms.join(", ")
            ));
        }
        if !sense.antonyms.is_empty() {
            out.push_str(&format!(
                "{field_indent}Antonyms: {}\n",
                sense.antonyms.join(", ")
            ));
        }
        if !sense.examples.is_empty() {
            out.push_str(&format!(
                "{field_indent}Examples: {}\n",
                sense.examples.join("; ")
            ));
        }
        for (k, quote) in sense.quotes.iter().enumerate() {
            out.push_str(&format!(
                "{field_indent}Quote {}: {} - {}\n",
                k + 1,
                quote.text,
                quote.reference
            ));
        }
        for (k, quote) in sense.quotes.iter().enumerate() {
            out.push_str(&format!(
                "{field_indent}Quote {}: {} - {}\n",
                k + 1,
                quote.text,
                quote.reference
            ));
        }

        render_subsenses(out, &sense.subsenses, depth + 1);
    }

    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::entry::Quote;

    fn sense(definition: &str) -> Sense {
        Sense {
            definition: definition.to_owned(),
            ..Default::default()
        }
    }

    #[test]
    fn empty_input_renders_nothing() {
        assert_eq!(render_senses(&[]), "");
    }

    #[test]
    fn top_level_fields_in_order() {
        let s = Sense {
            definition: String::from("move fast"),
            examples: vec![String::from("he ran"), String::from("she ran")],
            quotes: vec![Quote {
                text: String::from("they ran far"),
                reference: String::from("Book"),
            }],
            synonyms: vec![String::from("sprint")],
            antonyms: vec![String::from("walk")],
            ..Default::default()
        };

        assert_eq!(
            render_senses(&[s]),
            "### Senses\n\n\
             1. move fast\n\
             \x20   Examples: he ran; she ran\n\
             \x20   Quote 1: they ran far - Book\n\
             \x20   Synonyms: sprint\n\
             \x20   Antonyms: walk\n\
             \n"
        );
    }

    #[test]
    fn subsense_numbering_and_indentation() {
        let mut sub2 = sense("sub2");
        sub2.subsenses.push(sense("subsub1"));

        let mut top = sense("def");
        top.subsenses.push(sense("sub1"));
        top.subsenses.push(sub2);

        assert_eq!(
            render_senses(&[top]),
            "### Senses\n\n\
             1. def\n\
             \x20       1. sub1\n\
             \x20       2. sub2\n\
             \x20           1. subsub1\n\
             \n\n\n"
        );
    }

    #[test]
    fn subsense_fields_reordered_and_quotes_doubled() {
        let mut top = sense("top");
        top.subsenses.push(Sense {
            definition: String::from("sub"),
            examples: vec![String::from("e")],
            quotes: vec![Quote {
                text: String::from("q"),
                reference: String::from("r"),
            }],
            synonyms: vec![String::from("s")],
            antonyms: vec![String::from("a")],
            ..Default::default()
        });

        assert_eq!(
            render_senses(&[top]),
            "### Senses\n\n\
             1. top\n\
             \x20       1. sub\n\
             \x20           Synonyms: s\n\
             \x20           Antonyms: a\n\
             \x20           Examples: e\n\
             \x20           Quote 1: q - r\n\
             \x20           Quote 1: q - r\n\
             \n\n"
        );
    }
}

use crate::dictionary;
use crate::dictionary::entry::Form;

const STRUCTURAL_TAGS: [&str; 3] = ["inflection-template", "table-tags", "class"];

// Classification vocabularies, searched in order; the first tag match wins.
const MOODS: [&str; 5] = [
    "indicative",
    "subjunctive-i",
    "subjunctive-ii",
    "subjunctive",
    "imperative",
];
const NON_FINITE_MOODS: [&str; 3] = ["gerund", "participle", "infinitive"];
const TENSES: [&str; 12] = [
    "future-i",
    "future-ii",
    "present",
    "imperfect",
    "preterite",
    "future",
    "conditional",
    "perfect",
    "pluperfect",
    "past perfect",
    "future perfect",
    "conditional perfect",
];
const NUMBERS: [&str; 2] = ["singular", "plural"];
const PERSONS: [&str; 3] = ["first-person", "second-person", "third-person"];

struct MoodGroup<'a> {
    mood: String,
    tenses: Vec<TenseGroup<'a>>,
}

struct TenseGroup<'a> {
    tense: String,
    numbers: Vec<NumberGroup<'a>>,
}

struct NumberGroup<'a> {
    number: String,
    persons: Vec<PersonGroup<'a>>,
}

struct PersonGroup<'a> {
    person: String,
    forms: Vec<&'a Form>,
}

/// Renders the forms section for one part-of-speech group. Languages with
/// rich conjugation morphology get mood/tense tables, everything else a flat
/// list.
pub fn render_forms(forms: &[Form], language_code: &str) -> String {
    if forms.is_empty() {
        return String::new();
    }

    let mut out = String::from("### Forms\n\n");

    if dictionary::has_complex_morphology(language_code) {
        let surviving: Vec<&Form> = forms
            .iter()
            .filter(|form| !has_structural_tag(form) && !word_carries_table_label(form))
            .collect();

        out.push_str(&render_grouped(&group_forms(&surviving)));
    } else {
        for form in forms.iter().filter(|form| !has_structural_tag(form)) {
            out.push_str(&format!("- {} ({})\n", form.form, form.tags.join(", ")));
        }
        out.push('\n');
    }

    out
}

fn has_structural_tag(form: &Form) -> bool {
    form.tags
        .iter()
        .any(|tag| STRUCTURAL_TAGS.contains(&tag.as_str()))
}

// Conjugation templates sometimes leak a table label ("second-person
// singular", ...) into the word field itself.
fn word_carries_table_label(form: &Form) -> bool {
    let word = form.form.to_lowercase();

    TENSES
        .iter()
        .chain(NUMBERS.iter())
        .chain(PERSONS.iter())
        .any(|label| word.contains(*label))
}

fn classify(tags: &[String], vocabulary: &[&'static str]) -> &'static str {
    for label in vocabulary {
        if tags.iter().any(|tag| tag.as_str() == *label) {
            return *label;
        }
    }

    ""
}

fn classify_mood(tags: &[String]) -> String {
    let mood = classify(tags, &MOODS);
    if !mood.is_empty() {
        return mood.to_owned();
    }

    if !classify(tags, &NON_FINITE_MOODS).is_empty() {
        return String::from("non-finite");
    }

    String::from("indicative")
}

fn group_forms<'a>(forms: &[&'a Form]) -> Vec<MoodGroup<'a>> {
    let mut moods: Vec<MoodGroup> = Vec::new();

    for &form in forms {
        let mood = classify_mood(&form.tags);
        let tense = classify(&form.tags, &TENSES);
        let number = classify(&form.tags, &NUMBERS);
        let person = classify(&form.tags, &PERSONS);

        let m = match moods.iter().position(|group| group.mood == mood) {
            Some(m) => m,
            None => {
                moods.push(MoodGroup {
                    mood,
                    tenses: Vec::new(),
                });
                moods.len() - 1
            }
        };

        let tenses = &mut moods[m].tenses;
        let t = match tenses.iter().position(|group| group.tense == tense) {
            Some(t) => t,
            None => {
                tenses.push(TenseGroup {
                    tense: tense.to_owned(),
                    numbers: Vec::new(),
                });
                tenses.len() - 1
            }
        };

        let numbers = &mut tenses[t].numbers;
        let n = match numbers.iter().position(|group| group.number == number) {
            Some(n) => n,
            None => {
                numbers.push(NumberGroup {
                    number: number.to_owned(),
                    persons: Vec::new(),
                });
                numbers.len() - 1
            }
        };

        let persons = &mut numbers[n].persons;
        let p = match persons.iter().position(|group| group.person == person) {
            Some(p) => p,
            None => {
                persons.push(PersonGroup {
                    person: person.to_owned(),
                    forms: Vec::new(),
                });
                persons.len() - 1
            }
        };

        persons[p].forms.push(form);
    }

    moods
}

fn render_grouped(moods: &[MoodGroup]) -> String {
    let mut out = String::new();

    for mood_group in moods {
        if mood_group.mood == "non-finite" {
            out.push_str("#### Non-finite forms\n\n");
            out.push_str("| Name | Form |\n|---|---|\n");

            let mut seen: Vec<String> = Vec::new();

            for tense_group in &mood_group.tenses {
                // a tense tag on a non-finite form is a conjugation-table artifact
                if !tense_group.tense.is_empty() {
                    continue;
                }

                for number_group in &tense_group.numbers {
                    for person_group in &number_group.persons {
                        for form in &person_group.forms {
                            let row = format!("| {} | {} |\n", form.tags.join(", "), form.form);
                            if !seen.contains(&row) {
                                out.push_str(&row);
                                seen.push(row);
                            }
                        }
                    }
                }
            }

            out.push('\n');
        } else {
            out.push_str(&format!("#### Mood: {}\n\n", mood_group.mood));

            for tense_group in &mood_group.tenses {
                // imperatives carry no tense tag; everywhere else an untagged
                // tense means the form belongs to no table
                if tense_group.tense.is_empty() && mood_group.mood != "imperative" {
                    continue;
                }

                let tense = if tense_group.tense.is_empty() {
                    "present"
                } else {
                    tense_group.tense.as_str()
                };

                out.push_str(&format!("##### Tense: {tense}\n\n"));
                out.push_str("| Person & Number | Form |\n|---|---|\n");

                let mut seen: Vec<String> = Vec::new();

                for number_group in &tense_group.numbers {
                    for person_group in &number_group.persons {
                        for form in &person_group.forms {
                            let row = format!(
                                "| {} {} | {} |\n",
                                person_group.person, number_group.number, form.form
                            );
                            if !seen.contains(&row) {
                                out.push_str(&row);
                                seen.push(row);
                            }
                        }
                    }
                }

                out.push('\n');
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(word: &str, tags: &[&str]) -> Form {
        Form {
            form: word.to_owned(),
            tags: tags.iter().map(|tag| tag.to_string()).collect(),
        }
    }

    #[test]
    fn empty_input_renders_nothing() {
        assert_eq!(render_forms(&[], "es"), "");
        assert_eq!(render_forms(&[], "en"), "");
    }

    #[test]
    fn simple_branch_renders_bullets() {
        let forms = vec![
            form("running", &["gerund"]),
            form("ran", &["past"]),
            form("es-conj", &["inflection-template"]),
        ];

        assert_eq!(
            render_forms(&forms, "en"),
            "### Forms\n\n\
             - running (gerund)\n\
             - ran (past)\n\
             \n"
        );
    }

    #[test]
    fn complex_branch_builds_person_number_table() {
        let forms = vec![
            form("corro", &["first-person", "singular", "present", "indicative"]),
            form("corres", &["second-person", "singular", "present", "indicative"]),
        ];

        assert_eq!(
            render_forms(&forms, "es"),
            "### Forms\n\n\
             #### Mood: indicative\n\n\
             ##### Tense: present\n\n\
             | Person & Number | Form |\n\
             |---|---|\n\
             | first-person singular | corro |\n\
             | second-person singular | corres |\n\
             \n"
        );
    }

    #[test]
    fn duplicate_rows_suppressed_per_tense_only() {
        let forms = vec![
            form("hablo", &["first-person", "singular", "present", "indicative"]),
            form("hablo", &["first-person", "singular", "present", "indicative"]),
            form("hablo", &["first-person", "singular", "imperfect", "indicative"]),
        ];

        assert_eq!(
            render_forms(&forms, "es"),
            "### Forms\n\n\
             #### Mood: indicative\n\n\
             ##### Tense: present\n\n\
             | Person & Number | Form |\n\
             |---|---|\n\
             | first-person singular | hablo |\n\
             \n\
             ##### Tense: imperfect\n\n\
             | Person & Number | Form |\n\
             |---|---|\n\
             | first-person singular | hablo |\n\
             \n"
        );
    }

    #[test]
    fn imperative_without_tense_displays_present() {
        let forms = vec![form("corre", &["imperative", "singular", "second-person"])];

        assert_eq!(
            render_forms(&forms, "es"),
            "### Forms\n\n\
             #### Mood: imperative\n\n\
             ##### Tense: present\n\n\
             | Person & Number | Form |\n\
             |---|---|\n\
             | second-person singular | corre |\n\
             \n"
        );
    }

    #[test]
    fn non_finite_forms_merge_into_one_table() {
        let forms = vec![
            form("corriendo", &["gerund"]),
            form("corrido", &["participle", "past"]),
            form("habiendo corrido", &["gerund", "perfect"]),
        ];

        // the perfect-tagged gerund belongs to no bucket of the merged table
        assert_eq!(
            render_forms(&forms, "es"),
            "### Forms\n\n\
             #### Non-finite forms\n\n\
             | Name | Form |\n\
             |---|---|\n\
             | gerund | corriendo |\n\
             | participle, past | corrido |\n\
             \n"
        );
    }

    #[test]
    fn leaked_table_labels_filtered_on_complex_branch() {
        let forms = vec![form("first-person singular of correr", &["present"])];

        assert_eq!(render_forms(&forms, "es"), "### Forms\n\n");
    }

    #[test]
    fn untensed_finite_forms_render_no_table() {
        let forms = vec![form("corra", &["subjunctive"])];

        assert_eq!(
            render_forms(&forms, "es"),
            "### Forms\n\n#### Mood: subjunctive\n\n"
        );
    }
}

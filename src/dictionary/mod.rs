pub mod entry;

#[derive(Debug, Clone)]
pub struct Language {
    pub code: String,
    pub name: String,
}

impl Language {
    pub fn new(code: &str, name: &str) -> Language {
        Language {
            code: code.to_owned(),
            name: name.to_owned(),
        }
    }
}

/// Languages whose verb forms get the mood/tense/number/person table
/// treatment. Everything else gets a flat form list.
pub const COMPLEX_MORPHOLOGY: [&str; 14] = [
    "ca", "cs", "fr", "de", "el", "hu", "it", "la", "pt", "ro", "ru", "sh", "es", "nl",
];

pub fn has_complex_morphology(code: &str) -> bool {
    COMPLEX_MORPHOLOGY.contains(&code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spanish_conjugates_english_does_not() {
        assert!(has_complex_morphology("es"));
        assert!(has_complex_morphology("ru"));
        assert!(!has_complex_morphology("en"));
        assert!(!has_complex_morphology("ja"));
    }
}

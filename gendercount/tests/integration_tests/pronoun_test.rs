// tests/integration_tests/pronoun_test.rs
use gendercount::{PronounFamily, count_pronouns, tokenize};

#[test]
fn test_case_variants_count_identically() {
    for family in PronounFamily::ALL {
        let [base, object, possessive] = family.forms();
        let tokens: Vec<String> = [base, object, possessive]
            .iter()
            .flat_map(|form| [form.to_uppercase(), form.to_lowercase(), capitalize(form)])
            .collect();

        let tally = count_pronouns(family, &tokens);
        assert_eq!(tally.as_tuple(), (3, 3, 3), "{family:?}");
    }
}

#[test]
fn test_families_are_independent() {
    let tokens = tokenize("hen hon han henom henne honom hens hennes hans");

    assert_eq!(count_pronouns(PronounFamily::Hen, &tokens).as_tuple(), (1, 1, 1));
    assert_eq!(count_pronouns(PronounFamily::Hon, &tokens).as_tuple(), (1, 1, 1));
    assert_eq!(count_pronouns(PronounFamily::Han, &tokens).as_tuple(), (1, 1, 1));
}

#[test]
fn test_whole_word_inside_token() {
    let tokens = tokenize("\"hon\" (han) hen's hen-och-hon");

    assert_eq!(count_pronouns(PronounFamily::Hon, &tokens).as_tuple(), (2, 0, 0));
    assert_eq!(count_pronouns(PronounFamily::Han, &tokens).as_tuple(), (1, 0, 0));
    assert_eq!(count_pronouns(PronounFamily::Hen, &tokens).as_tuple(), (2, 0, 0));
}

#[test]
fn test_longer_words_do_not_match() {
    let tokens = tokenize("hantverk honung hennessy henomsnitt hanses");

    for family in PronounFamily::ALL {
        assert_eq!(count_pronouns(family, &tokens).sum(), 0, "{family:?}");
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

//! Greek-to-Latin transliteration for addresses returned by the Greek VIES
//! service.
//!
//! The rules are applied in table order, each one over the whole string.
//! Digraphs and diphthongs come first: once a pair such as `αυ` has been
//! rewritten to Latin, the single-letter rules for `α` and `υ` can no longer
//! match it.
//!
//! ```
//! use vies_address::greek::transliterate;
//!
//! assert_eq!(transliterate("ΑΘΗΝΑ"), "athina");
//! assert_eq!(transliterate("αυτή"), "afti");
//! ```

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// `(pattern, replacement)` pairs, in application order.
///
/// Context-sensitive rules capture the following (or preceding) character in
/// group 1 and put it back through `${1}`.
static RULE_TABLE: &[(&str, &str)] = &[
    // Diphthongs
    (r"[αΑ][ιίΙΊ]", "e"),
    (r"[οΟεΕ][ιίΙΊ]", "i"),
    (r"[αΑ][υύΥΎ]([θΘκΚξΞπΠσςΣτΤφΦχΧψΨ]|\s|$)", "af${1}"),
    (r"[αΑ][υύΥΎ]", "av"),
    (r"[εΕ][υύΥΎ]([θΘκΚξΞπΠσςΣτΤφΦχΧψΨ]|\s|$)", "ef${1}"),
    (r"[εΕ][υύΥΎ]", "ev"),
    (r"[οΟ][υύΥΎ]", "ou"),
    // Consonant clusters
    (r"(^|\s)[μΜ][πΠ]", "${1}b"),
    (r"[μΜ][πΠ](\s|$)", "b${1}"),
    (r"[μΜ][πΠ]", "mp"),
    (r"[νΝ][τΤ]", "nt"),
    (r"[τΤ][σςΣ]", "ts"),
    (r"[τΤ][ζΖ]", "tz"),
    (r"[γΓ][γΓ]", "ng"),
    (r"[γΓ][κΚ]", "gk"),
    (r"[ηΗ][υύΥΎ]([θΘκΚξΞπΠσςΣτΤφΦχΧψΨ]|\s|$)", "if${1}"),
    (r"[ηΗ][υύΥΎ]", "iu"),
    (r"[θΘ]", "th"),
    (r"[χΧ]", "ch"),
    (r"[ψΨ]", "ps"),
    // Single letters
    (r"[αάΑΆ]", "a"),
    (r"[βΒ]", "v"),
    (r"[γΓ]", "g"),
    (r"[δΔ]", "d"),
    (r"[εέΕΈ]", "e"),
    (r"[ζΖ]", "z"),
    (r"[ηήΗΉ]", "i"),
    (r"[ιίϊΐΙΊΪ]", "i"),
    (r"[κΚ]", "k"),
    (r"[λΛ]", "l"),
    (r"[μΜ]", "m"),
    (r"[νΝ]", "n"),
    (r"[ξΞ]", "x"),
    (r"[οόΟΌ]", "o"),
    (r"[πΠ]", "p"),
    (r"[ρΡ]", "r"),
    (r"[σςΣ]", "s"),
    (r"[τΤ]", "t"),
    (r"[υύϋΰΥΎΫ]", "i"),
    (r"[φΦ]", "f"),
    (r"[ωώΩΏ]", "o"),
];

static RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    RULE_TABLE
        .iter()
        .map(|&(pattern, replacement)| {
            (Regex::new(pattern).expect("valid regex"), replacement)
        })
        .collect()
});

/// Check whether `s` contains a monotonic Greek letter (`Ά` to `ώ`).
///
/// These are exactly the letters [`transliterate`] rewrites. Polytonic
/// letters from the Greek Extended block, archaic letters and Coptic are
/// not counted.
pub fn contains_greek(s: &str) -> bool {
    s.chars().any(is_greek_char)
}

fn is_greek_char(c: char) -> bool {
    matches!(c, '\u{0386}'..='\u{03CE}') && c.is_alphabetic()
}

/// Rewrite monotonic Greek letters in `s` into a lowercase Latin
/// approximation.
///
/// Everything else passes through untouched, including polytonic letters
/// (Greek Extended, e.g. `ἀ`), which VIES does not emit. Input without
/// monotonic Greek is returned borrowed. Running the result through
/// `transliterate` again changes nothing.
pub fn transliterate(s: &str) -> Cow<'_, str> {
    if !contains_greek(s) {
        return Cow::Borrowed(s);
    }

    let mut out = s.to_string();
    for (re, replacement) in RULES.iter() {
        let replaced = match re.replace_all(&out, *replacement) {
            Cow::Borrowed(_) => continue,
            Cow::Owned(r) => r,
        };
        out = replaced;
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(pattern: &str) -> usize {
        RULE_TABLE
            .iter()
            .position(|(p, _)| *p == pattern)
            .unwrap_or_else(|| panic!("no rule {pattern}"))
    }

    #[test]
    fn all_patterns_compile() {
        assert_eq!(RULES.len(), RULE_TABLE.len());
    }

    #[test]
    fn digraphs_precede_single_letters() {
        let first_single = position(r"[αάΑΆ]");
        for (i, (pattern, _)) in RULE_TABLE.iter().enumerate() {
            let classes = pattern.matches('[').count();
            if classes >= 2 {
                assert!(
                    i < first_single,
                    "digraph rule {pattern} runs after single-letter rules"
                );
            }
        }
        assert!(position(r"[θΘ]") < first_single);
        assert!(position(r"[χΧ]") < first_single);
        assert!(position(r"[ψΨ]") < first_single);
    }

    #[test]
    fn contextual_rule_precedes_its_fallback() {
        assert!(
            position(r"[αΑ][υύΥΎ]([θΘκΚξΞπΠσςΣτΤφΦχΧψΨ]|\s|$)") < position(r"[αΑ][υύΥΎ]")
        );
        assert!(position(r"(^|\s)[μΜ][πΠ]") < position(r"[μΜ][πΠ]"));
    }

    #[test]
    fn detects_greek() {
        assert!(contains_greek("Αθήνα"));
        assert!(contains_greek("Odos ά"));
        assert!(!contains_greek("Ljubljana"));
        assert!(!contains_greek(""));
        assert!(!contains_greek("ἀ"));
        assert!(!contains_greek("ϐϗ"));
        assert!(!contains_greek("·"));
    }

    #[test]
    fn latin_input_is_borrowed() {
        assert!(matches!(transliterate("Bratislava 1"), Cow::Borrowed(_)));
    }

    #[test]
    fn single_letters() {
        assert_eq!(transliterate("ΑΘΗΝΑ"), "athina");
        assert_eq!(transliterate("Πάτρα"), "patra");
        assert_eq!(transliterate("Βόλος"), "volos");
    }

    #[test]
    fn diphthongs() {
        assert_eq!(transliterate("και"), "ke");
        assert_eq!(transliterate("ΟΙΚΟΣ"), "ikos");
        assert_eq!(transliterate("ΕΙΡΗΝΗ"), "irini");
        assert_eq!(transliterate("ΟΥΡΑΝΟΣ"), "ouranos");
    }

    #[test]
    fn upsilon_digraphs_depend_on_context() {
        assert_eq!(transliterate("αυτή"), "afti");
        assert_eq!(transliterate("αυλή"), "avli");
        assert_eq!(transliterate("ευχή"), "efchi");
        assert_eq!(transliterate("Ευαγγελία"), "evangelia");
        assert_eq!(transliterate("ΠΑΥ"), "paf");
    }

    #[test]
    fn mp_is_b_at_word_edges() {
        assert_eq!(transliterate("ΜΠΑΡ"), "bar");
        assert_eq!(transliterate("ΛΑΜΠ"), "lab");
        assert_eq!(transliterate("ΛΑΜΠΑ"), "lampa");
        assert_eq!(transliterate("ΟΔΟΣ ΜΠΕΝΑΚΗ"), "odos benaki");
    }

    #[test]
    fn consonant_clusters() {
        assert_eq!(transliterate("ΠΕΝΤΕ"), "pente");
        assert_eq!(transliterate("ΤΣΑΙ"), "tse");
        assert_eq!(transliterate("ΑΓΚΥΡΑ"), "agkira");
        assert_eq!(transliterate("ΨΑΡΙ"), "psari");
        assert_eq!(transliterate("ΧΑΝΙΑ"), "chania");
    }

    #[test]
    fn digits_and_punctuation_pass_through() {
        assert_eq!(transliterate("ΟΔΟΣ 12-14, Α'"), "odos 12-14, a'");
    }

    #[test]
    fn every_monotonic_letter_is_rewritten() {
        let letters: String = ('\u{0386}'..='\u{03CE}').filter(|c| is_greek_char(*c)).collect();
        let out = transliterate(&letters);
        assert!(!contains_greek(&out), "{out}");
    }

    #[test]
    fn polytonic_letters_pass_through() {
        let out = transliterate("ἀθήνα");
        assert_eq!(out, "ἀthina");
        assert!(!contains_greek(&out));
    }

    #[test]
    fn output_is_stable() {
        let once = transliterate("ΛΕΩΦΟΡΟΣ ΚΗΦΙΣΙΑΣ 44").into_owned();
        assert_eq!(transliterate(&once), once);
        assert!(!contains_greek(&once));
    }
}

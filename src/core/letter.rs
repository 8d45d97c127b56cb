//! Letter normalization
//!
//! Guesses and word letters are compared in a canonical form: lower-cased, with the
//! Polish diacritic letters folded onto their base Latin letter. A diacritic guess and
//! its base letter are therefore the same guess.

/// Canonicalize a letter for comparison
///
/// Lower-cases the character, then maps `ą ć ę ł ń ó ś ź ż` to `a c e l n o s z z`.
/// Characters outside that set are returned lower-cased and otherwise unchanged.
///
/// # Examples
/// ```
/// use hangman_rpg::core::normalize;
///
/// assert_eq!(normalize('Ą'), 'a');
/// assert_eq!(normalize('ż'), 'z');
/// assert_eq!(normalize('ź'), 'z');
/// assert_eq!(normalize('K'), 'k');
/// ```
#[must_use]
pub fn normalize(letter: char) -> char {
    // Multi-char lowercase mappings only exist outside the alphabets we fold
    let lower = letter.to_lowercase().next().unwrap_or(letter);

    match lower {
        'ą' => 'a',
        'ć' => 'c',
        'ę' => 'e',
        'ł' => 'l',
        'ń' => 'n',
        'ó' => 'o',
        'ś' => 's',
        'ź' | 'ż' => 'z',
        other => other,
    }
}

/// Check whether a character is a guessable letter
#[inline]
#[must_use]
pub fn is_letter(ch: char) -> bool {
    ch.is_alphabetic()
}

/// Check whether two characters are the same guess after normalization
#[inline]
#[must_use]
pub fn same_letter(a: char, b: char) -> bool {
    normalize(a) == normalize(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_lowercases_ascii() {
        assert_eq!(normalize('A'), 'a');
        assert_eq!(normalize('z'), 'z');
        assert_eq!(normalize('Q'), 'q');
    }

    #[test]
    fn normalize_folds_every_polish_letter() {
        let pairs = [
            ('ą', 'a'),
            ('ć', 'c'),
            ('ę', 'e'),
            ('ł', 'l'),
            ('ń', 'n'),
            ('ó', 'o'),
            ('ś', 's'),
            ('ź', 'z'),
            ('ż', 'z'),
        ];

        for (diacritic, base) in pairs {
            assert_eq!(normalize(diacritic), base, "{diacritic} should fold to {base}");
        }
    }

    #[test]
    fn normalize_folds_uppercase_diacritics() {
        assert_eq!(normalize('Ł'), 'l');
        assert_eq!(normalize('Ż'), 'z');
        assert_eq!(normalize('Ó'), 'o');
    }

    #[test]
    fn normalize_leaves_other_characters() {
        assert_eq!(normalize('-'), '-');
        assert_eq!(normalize('7'), '7');
        assert_eq!(normalize('é'), 'é');
    }

    #[test]
    fn same_letter_compares_folded_forms() {
        assert!(same_letter('ź', 'ż'));
        assert!(same_letter('Z', 'ż'));
        assert!(!same_letter('a', 'e'));
    }

    #[test]
    fn is_letter_accepts_diacritics() {
        assert!(is_letter('ą'));
        assert!(is_letter('K'));
        assert!(!is_letter('1'));
        assert!(!is_letter(' '));
    }
}

//! Classification of committed Tamil code points.
//!
//! The engine itself reasons over keystrokes, but after a host-side delete
//! the only truth left is the document tail. These predicates classify a
//! tail code point so composition can resume coherently.

/// Returns true for the twelve independent vowels.
pub fn is_independent_vowel(c: char) -> bool {
    "அஆஇஈஉஊஎஏஐஒஓஔ".contains(c)
}

/// Returns true for consonant bases, Grantha letters included.
pub fn is_consonant(c: char) -> bool {
    "கசடதபறயரலவழளஙஞணநமனஜஹஸஶஷ".contains(c)
}

/// Returns true for dependent vowel signs, the pulli included.
pub fn is_vowel_sign(c: char) -> bool {
    "ாிீுூெேைொோௌ்".contains(c)
}

/// Returns true for the left-half vowel signs (the kombus and the ai sign),
/// which precede their base visually.
pub fn is_left_vowel_sign(c: char) -> bool {
    "ெேை".contains(c)
}

/// Returns true for the two-part vowel signs that wrap their base.
pub fn is_two_part_vowel_sign(c: char) -> bool {
    "ொோௌ".contains(c)
}

/// The left half of a two-part vowel sign, if `c` is one.
pub fn left_half_of(c: char) -> Option<char> {
    match c {
        'ொ' | 'ௌ' => Some('ெ'),
        'ோ' => Some('ே'),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classes_are_disjoint() {
        for c in "அஆஇஈஉஊஎஏஐஒஓஔகசடதபறயரலவழளஙஞணநமனஜஹஸஶஷாிீுூெேைொோௌ்".chars() {
            let classes = [
                is_independent_vowel(c),
                is_consonant(c),
                is_vowel_sign(c),
            ];
            assert_eq!(classes.iter().filter(|&&b| b).count(), 1, "{c}");
        }
    }

    #[test]
    fn left_halves() {
        assert!(is_left_vowel_sign('ெ'));
        assert!(!is_left_vowel_sign('ா'));
        assert_eq!(left_half_of('ொ'), Some('ெ'));
        assert_eq!(left_half_of('ோ'), Some('ே'));
        assert_eq!(left_half_of('ௌ'), Some('ெ'));
        assert_eq!(left_half_of('ா'), None);
    }

    #[test]
    fn two_part_signs_are_vowel_signs() {
        for c in "ொோௌ".chars() {
            assert!(is_two_part_vowel_sign(c));
            assert!(is_vowel_sign(c));
        }
    }
}

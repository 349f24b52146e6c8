use crate::script::TamilLayout;

/// The classification assigned to the previous keystroke.
///
/// The transducers are driven by this classification: the same key means
/// different things after a first consonant, after a vowel sign, or at the
/// start of a fresh sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KeyClass {
    /// No composition in progress; the next key starts a fresh sequence.
    #[default]
    Fresh,
    /// The first vowel key of an independent-vowel sequence.
    FirstVowel,
    /// The second vowel key of an independent-vowel sequence.
    SecondVowel,
    /// The third vowel key of an independent-vowel sequence.
    ThirdVowel,
    /// The first vowel key applied to a consonant (a dependent sign).
    FirstVowelSign,
    /// The second vowel key applied to a consonant.
    SecondVowelSign,
    /// The third vowel key applied to a consonant.
    ThirdVowelSign,
    /// The first consonant key of a cluster.
    FirstConsonant,
    /// The second consonant key of a cluster.
    SecondConsonant,
    /// The third consonant key of a cluster.
    ThirdConsonant,
    /// A modifier was typed that waits for its base (typewriter layouts).
    DeadKey,
    /// A left-half vowel sign was typed ahead of its base (WYTIWYG layouts).
    LeftHalfVowel,
    /// A precomposed u/uu-modified consonant key (WYTIWYG layouts).
    PrecomposedConsonant,
    /// The previous key was whitespace.
    WhiteSpace,
    /// The previous key completed a character outside any matrix.
    CharacterEnd,
    /// The previous key produced a non-Indic character (digit, danda, …).
    NonIndic,
}

/// The broad class of the last emitted base character.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CharClass {
    /// Not an Indic character.
    #[default]
    NonIndic,
    /// A consonant base.
    Consonant,
    /// A vowel.
    Vowel,
}

/// The composition state of one independent keystream.
///
/// Exactly one `Session` exists per engine instance. It is mutated only by
/// key translation and by the explicit reset operations; nothing in it is
/// shared between engines.
#[derive(Clone, Debug)]
pub struct Session {
    /// The previous keystroke, raw. `'\0'` when there is none.
    pub prev_key: char,
    /// The classification assigned to `prev_key` by the transducer.
    pub prev_key_class: KeyClass,
    /// The class of the last emitted base character.
    pub prev_char_class: CharClass,
    /// First vowel key of the current run, for three-key vowel sequences.
    pub first_vowel_key: char,
    /// First consonant key of the current run, for three-key clusters.
    pub first_conso_key: char,
    /// The base character currently being modified. `'\0'` when none.
    pub current_base_char: char,
    /// One code point to the left of the cursor, supplied by the host.
    pub context_before: char,
    /// Canonical vowel identifier of the current run (a column letter).
    pub vowel_char: char,
    /// Canonical consonant identifier of the last composed base (a row
    /// letter).
    pub last_conso_char: char,
    /// A buffered left-half vowel sign awaiting its base consonant.
    pub wytiwyg_left_half: char,
    /// Whether Tamil99 auto-pulli is active.
    pub auto_pulli: bool,
    /// One-shot marker: the edit just emitted already carried a retroactive
    /// pulli for the previous consonant.
    pub t99_pulli_handled: bool,
    /// The active Tamil layout. Ignored for every other script.
    pub layout: TamilLayout,
}

impl Session {
    pub(crate) fn new(layout: TamilLayout) -> Self {
        Session {
            prev_key: '\0',
            prev_key_class: KeyClass::Fresh,
            prev_char_class: CharClass::NonIndic,
            first_vowel_key: '\0',
            first_conso_key: '\0',
            current_base_char: '\0',
            context_before: '\0',
            vowel_char: '\0',
            last_conso_char: '\0',
            wytiwyg_left_half: '\0',
            auto_pulli: true,
            t99_pulli_handled: false,
            layout,
        }
    }

    /// Clears all composition state, keeping the layout and mode flags.
    pub(crate) fn reset(&mut self) {
        self.prev_key = '\0';
        self.prev_key_class = KeyClass::Fresh;
        self.prev_char_class = CharClass::NonIndic;
        self.first_vowel_key = '\0';
        self.first_conso_key = '\0';
        self.current_base_char = '\0';
        self.context_before = '\0';
        self.vowel_char = '\0';
        self.last_conso_char = '\0';
        self.wytiwyg_left_half = '\0';
        self.t99_pulli_handled = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_keeps_layout_and_mode() {
        let mut s = Session::new(TamilLayout::Tamil99);
        s.auto_pulli = false;
        s.prev_key = 'k';
        s.prev_key_class = KeyClass::FirstConsonant;
        s.wytiwyg_left_half = '\u{0BC6}';
        s.reset();
        assert_eq!(s.layout, TamilLayout::Tamil99);
        assert!(!s.auto_pulli);
        assert_eq!(s.prev_key, '\0');
        assert_eq!(s.prev_key_class, KeyClass::Fresh);
        assert_eq!(s.wytiwyg_left_half, '\0');
    }
}

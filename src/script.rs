/// A script the engine can compose into.
///
/// Scripts vary on two dimensions that matter to the composition state
/// machine:
///
/// - whether a freshly typed consonant carries an automatic virama that is
///   retracted once a vowel arrives (Tamil, Malayalam, Kannada, Telugu) or
///   is emitted bare (Devanagari, Gurmukhi);
/// - whether the script is an abugida at all (the diacritic transcription
///   set is a plain alphabet and has neither vowel signs nor a virama).
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum Script {
    /// Tamil script.
    ///
    /// <https://unicode.org/charts/PDF/U0B80.pdf>
    ///
    /// The only script with more than one keyboard layout; see
    /// [`TamilLayout`].
    Tamil,

    /// Devanagari script (Hindi, Sanskrit, Marathi, Nepali).
    ///
    /// <https://unicode.org/charts/PDF/U0900.pdf>
    Devanagari,

    /// Malayalam script.
    ///
    /// <https://unicode.org/charts/PDF/U0D00.pdf>
    Malayalam,

    /// Kannada script.
    ///
    /// <https://unicode.org/charts/PDF/U0C80.pdf>
    Kannada,

    /// Telugu script.
    ///
    /// <https://unicode.org/charts/PDF/U0C00.pdf>
    Telugu,

    /// Gurmukhi script (Punjabi).
    ///
    /// <https://unicode.org/charts/PDF/U0A00.pdf>
    Gurmukhi,

    /// Latin-letter linguistic transcription with combining-free diacritic
    /// forms (ā, ṭ, ṅ, …).
    ///
    /// An alphabet, not an abugida: vowels are letters in their own right
    /// and there is no virama.
    Diacritic,
}

impl Script {
    /// Returns an iterator over all supported `Script`s.
    ///
    /// Every script is present exactly once; no guarantee is made on
    /// iteration order.
    pub fn iter() -> impl Iterator<Item = &'static Script> {
        use Script::*;
        const SCRIPTS: &[Script] = &[
            Tamil, Devanagari, Malayalam, Kannada, Telugu, Gurmukhi, Diacritic,
        ];
        SCRIPTS.iter()
    }

    /// Returns whether a freshly typed consonant is emitted with a trailing
    /// virama that later edits retract.
    pub(crate) fn auto_virama(&self) -> bool {
        use Script::*;

        // Use an exhaustive match (no `_`) so that we explicitly account for
        // all scripts.
        match self {
            Tamil | Malayalam | Kannada | Telugu => true,
            Devanagari | Gurmukhi | Diacritic => false,
        }
    }

    /// The script's virama (halant / pulli / chandrakkala), if it has one.
    pub(crate) fn virama(&self) -> Option<char> {
        use Script::*;
        match self {
            Tamil => Some('\u{0BCD}'),
            Devanagari => Some('\u{094D}'),
            Malayalam => Some('\u{0D4D}'),
            Kannada => Some('\u{0CCD}'),
            Telugu => Some('\u{0C4D}'),
            Gurmukhi => Some('\u{0A4D}'),
            Diacritic => None,
        }
    }

    /// Returns whether an `a` key after a consonant is silent (the abugida
    /// inherent vowel) rather than a letter of its own.
    pub(crate) fn inherent_a(&self) -> bool {
        !matches!(self, Script::Diacritic)
    }
}

/// A Tamil keyboard arrangement.
///
/// Only the Tamil script supports more than one layout. The phonetic
/// layouts (Anjal, AnjalIndic) and the positional layouts (Tamil99,
/// TamilNet97, Murasu6) commit code points in logical order; the
/// typewriter-derived layouts are *what-you-type-is-what-you-get*: keys are
/// struck in visual order and the engine reorders the emitted code points
/// into logical order.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum TamilLayout {
    /// The phonetic Latin-to-Tamil convention (`k` + `a` → க).
    Anjal,

    /// The Tamil99 standard positional layout, with the auto-pulli aid.
    Tamil99,

    /// The TamilNet97 positional layout.
    TamilNet97,

    /// The Mylai typewriter-style layout (WYTIWYG).
    Mylai,

    /// The revised Tamil typewriter layout (WYTIWYG).
    TypewriterNew,

    /// The legacy Tamil typewriter layout (WYTIWYG, dead-key modifiers).
    TypewriterOld,

    /// Anjal keystrokes routed through the generic Indic transducer.
    AnjalIndic,

    /// The Murasu-6 (Kaniyan) compatibility layout.
    Murasu6,

    /// The Bamini layout (WYTIWYG, with doubled-key vowel elongation).
    Bamini,

    /// The Tamil Nadu government typewriter layout (WYTIWYG, dead-key
    /// modifiers, append-mode uu-kaal).
    TnTypewriter,
}

impl TamilLayout {
    /// Returns an iterator over all supported `TamilLayout`s.
    pub fn iter() -> impl Iterator<Item = &'static TamilLayout> {
        use TamilLayout::*;
        const LAYOUTS: &[TamilLayout] = &[
            Anjal,
            Tamil99,
            TamilNet97,
            Mylai,
            TypewriterNew,
            TypewriterOld,
            AnjalIndic,
            Murasu6,
            Bamini,
            TnTypewriter,
        ];
        LAYOUTS.iter()
    }

    /// Returns whether this layout commits keystrokes in visual order,
    /// requiring the engine to reorder emitted code points.
    pub fn is_wytiwyg(&self) -> bool {
        use TamilLayout::*;

        match self {
            Mylai | TypewriterNew | TypewriterOld | Bamini | TnTypewriter => true,
            Anjal | Tamil99 | TamilNet97 | AnjalIndic | Murasu6 => false,
        }
    }

    /// Returns whether keystrokes route through the generic phonetic
    /// transducer rather than the per-layout key tables.
    pub(crate) fn is_phonetic(&self) -> bool {
        matches!(self, TamilLayout::Anjal | TamilLayout::AnjalIndic)
    }
}

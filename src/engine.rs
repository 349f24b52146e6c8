//! The engine handle: one composition session, one script, one layout.

use log::debug;

use crate::edit::{self, Delete, Edit};
use crate::errors::{Error, Result};
use crate::keys;
use crate::script::{Script, TamilLayout};
use crate::session::{KeyClass, Session};
use crate::tables::ScriptTables;
use crate::tamil;
use crate::translit::{indic, tamil_multi};

/// A keystroke-to-edit translation engine for one independent keystream.
///
/// The engine owns exactly one [`Session`] and shares nothing; create one
/// engine per text field. All calls are synchronous and deterministic.
pub struct Engine {
    script: Script,
    session: Session,
    /// Code points inserted by the previous emission, used to resolve the
    /// "delete the previous emission" sentinel of the layout machines.
    prev_insert_len: usize,
    wytiwyg_delete_reverse: bool,
}

impl Engine {
    /// Creates an engine for `script`. Tamil starts on the Anjal layout.
    pub fn new(script: Script) -> Self {
        Engine {
            script,
            session: Session::new(TamilLayout::Anjal),
            prev_insert_len: 0,
            wytiwyg_delete_reverse: false,
        }
    }

    /// Creates a Tamil engine on the given layout.
    pub fn with_layout(layout: TamilLayout) -> Self {
        let mut engine = Engine::new(Script::Tamil);
        engine.session.layout = layout;
        engine
    }

    /// The active script.
    pub fn script(&self) -> Script {
        self.script
    }

    /// The active Tamil layout. Meaningful only when the script is Tamil.
    pub fn layout(&self) -> TamilLayout {
        self.session.layout
    }

    /// The composition session, for hosts that inspect engine state.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Switches script, resetting the composition session.
    pub fn set_script(&mut self, script: Script) {
        self.script = script;
        self.reset_session();
    }

    /// Switches the Tamil keyboard layout, resetting the session.
    ///
    /// Layouts are only honoured for the Tamil script; any other script
    /// yields [`Error::UnsupportedLayout`].
    pub fn set_layout(&mut self, layout: TamilLayout) -> Result<()> {
        if self.script != Script::Tamil {
            return Err(Error::UnsupportedLayout(layout));
        }
        self.session.layout = layout;
        self.reset_session();
        Ok(())
    }

    /// Clears all composition state; mode flags and layout survive.
    pub fn reset_session(&mut self) {
        self.session.reset();
        self.prev_insert_len = 0;
    }

    /// Commits the in-flight composition: the next key starts fresh.
    pub fn terminate_composition(&mut self) {
        self.reset_session();
    }

    /// Supplies the code point immediately left of the cursor. Feeds the
    /// Tamil dental/alveolar `n` decision.
    pub fn set_context_before(&mut self, ch: char) {
        self.session.context_before = ch;
    }

    /// Enables or disables the Tamil99 auto-pulli aid.
    pub fn set_auto_pulli(&mut self, enabled: bool) {
        self.session.auto_pulli = enabled;
    }

    /// Whether auto-pulli is active.
    pub fn auto_pulli(&self) -> bool {
        self.session.auto_pulli
    }

    /// Records the host's preference for deleting WYTIWYG pairs in typing
    /// order rather than logical order. The engine only stores the flag;
    /// deletion is a host concern.
    pub fn set_wytiwyg_delete_reverse(&mut self, reverse: bool) {
        self.wytiwyg_delete_reverse = reverse;
    }

    /// Whether WYTIWYG deletes run in reverse typing order.
    pub fn wytiwyg_delete_reverse(&self) -> bool {
        self.wytiwyg_delete_reverse
    }

    /// The layouts available for the active script. Only Tamil has more
    /// than one.
    pub fn supported_layouts(&self) -> &'static [TamilLayout] {
        use TamilLayout::*;
        match self.script {
            Script::Tamil => &[
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
            ],
            _ => &[],
        }
    }

    /// Re-derives the composition state from the document tail after a
    /// host-side delete, so that the next key composes onto what is
    /// actually there.
    pub fn reclassify_after_delete(&mut self, last_tail: char) {
        let class = if self.script == Script::Tamil {
            if tamil::is_independent_vowel(last_tail) {
                KeyClass::FirstVowel
            } else if tamil::is_consonant(last_tail) {
                KeyClass::FirstConsonant
            } else if tamil::is_left_vowel_sign(last_tail) {
                KeyClass::LeftHalfVowel
            } else if tamil::is_vowel_sign(last_tail) {
                KeyClass::FirstVowel
            } else {
                KeyClass::Fresh
            }
        } else {
            let t = ScriptTables::get(self.script);
            if t.v1_char.contains(&last_tail) || t.v2_char.contains(&last_tail) {
                KeyClass::FirstVowel
            } else if t.c1_char.contains(&last_tail) || t.c2_char.contains(&last_tail) {
                KeyClass::FirstConsonant
            } else if t.vs1_char.contains(&last_tail) || t.vs2_char.contains(&last_tail) {
                KeyClass::FirstVowel
            } else {
                KeyClass::Fresh
            }
        };

        debug!("reclassify {last_tail:?} -> {class:?}");
        self.session.prev_key_class = class;
        self.session.wytiwyg_left_half = if class == KeyClass::LeftHalfVowel {
            last_tail
        } else {
            '\0'
        };
        self.prev_insert_len = 0;
    }

    /// Translates one keystroke into a structured edit.
    ///
    /// `prev_was_backspace` suppresses word-initial substitutions that
    /// would be wrong right after an edit (the Tamil dental `n`).
    pub fn translate(&mut self, key: char, shifted: bool, prev_was_backspace: bool) -> Edit {
        let key = keys::resolve_shift(key, shifted);

        let emit = if self.script == Script::Tamil && !self.session.layout.is_phonetic() {
            tamil_multi::translate(key, &mut self.session)
        } else {
            indic::translate(self.script, key, &mut self.session, prev_was_backspace)
        };

        let delete = match emit.delete {
            Delete::Count(n) => n,
            Delete::PrevEmission => self.prev_insert_len,
        };
        self.prev_insert_len = emit.insert.chars().count();

        Edit {
            delete,
            insert: emit.insert,
            fix_previous: emit.fix_previous,
        }
    }

    /// Translates one keystroke into the framed wire form.
    ///
    /// On success the buffer holds the emitted code points and the return
    /// value is their count. See the crate documentation for the frame
    /// layout.
    pub fn translate_key(
        &mut self,
        key: char,
        shifted: bool,
        prev_was_backspace: bool,
        out: &mut [char],
    ) -> Result<usize> {
        if out.len() < edit::MIN_OUTPUT_BUFFER {
            return Err(Error::BufferTooSmall(out.len()));
        }
        let record = self.translate(key, shifted, prev_was_backspace);
        edit::encode_wire(&record, out)
    }

    /// Whether this key should commit the active composition before being
    /// processed.
    ///
    /// Takes the same raw key plus shift flag as [`translate`](Self::translate).
    /// The default rule: any key outside the active layout's mapping
    /// terminates. On Tamil99, the shifted K/L/quote/slash shortcuts force
    /// termination even though they are mapped.
    pub fn ok_to_terminate(&self, key: char, shifted: bool) -> bool {
        let resolved = keys::resolve_shift(key, shifted);
        if resolved != '\0'
            && shifted
            && self.script == Script::Tamil
            && self.session.layout == TamilLayout::Tamil99
            && matches!(resolved, 'K' | 'L' | ':' | '?')
        {
            return true;
        }
        !self.is_key_mapped(key, shifted)
    }

    /// Whether the active (script, layout) translates this key at all.
    ///
    /// Shift is resolved the same way as in [`translate`](Self::translate):
    /// pass the raw key and the shift state, and the shifted faces are
    /// derived here.
    pub fn is_key_mapped(&self, key: char, shifted: bool) -> bool {
        let key = keys::resolve_shift(key, shifted);
        if self.script != Script::Tamil {
            let t = ScriptTables::get(self.script);
            return key.is_ascii_alphabetic()
                || (key.is_ascii_digit() && t.digits.is_some())
                || (key == '|' && !matches!(self.script, Script::Diacritic))
                || (key == '#' && self.script == Script::Devanagari);
        }

        use TamilLayout::*;
        let layout = self.session.layout;
        if shifted {
            match layout {
                Anjal | AnjalIndic => "ERUIOASLNM$W".contains(key),
                Tamil99 => "QWERTYOPFKLM$:\"".contains(key),
                TamilNet97 => "QWERYUIOPFKLZX{<>".contains(key),
                Murasu6 => "YUIOPJKL".contains(key),
                Mylai => {
                    key.is_ascii_uppercase() || "!@#$^~_{}|:\"<>?".contains(key)
                }
                TypewriterNew | TypewriterOld => {
                    key.is_ascii_uppercase() || "$&#*%^|_+\">:~{}<".contains(key)
                }
                Bamini => key.is_ascii_uppercase() || "`_=+[]{}\\;,/<>@#$%^&~".contains(key),
                TnTypewriter => {
                    ('!'..='~').contains(&key) && !"&()=+|".contains(key)
                }
            }
        } else {
            match layout {
                Anjal | AnjalIndic => key.is_ascii_alphabetic() || "-=\\".contains(key),
                Tamil99 => key.is_ascii_alphabetic() || "[];'/".contains(key),
                TamilNet97 => key.is_ascii_alphabetic() || "[;'/]".contains(key),
                Murasu6 => {
                    (key.is_ascii_alphabetic() && key.to_ascii_uppercase() != 'Q')
                        || ";[/']".contains(key)
                }
                Mylai => key.is_ascii_alphabetic() || "`[]\\;'".contains(key),
                TypewriterNew | TypewriterOld => {
                    key.is_ascii_alphabetic() || "'-[];`/".contains(key)
                }
                Bamini => key.is_ascii_alphabetic() || "`_=+[]{}\\;,/<>@#$%^&~".contains(key),
                TnTypewriter => {
                    ('!'..='~').contains(&key) && !"&()=+|".contains(key)
                }
            }
        }
    }

    /// The character a key should produce once composition has been
    /// terminated and keys pass through untranslated.
    pub fn unmapped_key_char(&self, key: char, shifted: bool) -> char {
        keys::unmapped_char(key, shifted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edit::DELCODE;

    #[test]
    fn tamil_anjal_scenario() {
        let mut engine = Engine::new(Script::Tamil);
        let first = engine.translate('k', false, false);
        assert_eq!(first.delete, 0);
        assert_eq!(first.insert, "க்");
        let second = engine.translate('a', false, false);
        assert_eq!(second.delete, 1);
        assert_eq!(second.insert, "");
    }

    #[test]
    fn wire_framing() {
        let mut engine = Engine::new(Script::Tamil);
        let mut buf = ['\0'; 16];
        let n = engine
            .translate_key('k', false, false, &mut buf)
            .expect("buffer is large enough");
        assert_eq!(&buf[..n], ['க', '\u{0BCD}']);

        let n = engine
            .translate_key('a', false, false, &mut buf)
            .expect("buffer is large enough");
        assert_eq!(&buf[..n], [DELCODE, '1']);
    }

    #[test]
    fn buffer_too_small_is_an_error() {
        let mut engine = Engine::new(Script::Tamil);
        let mut buf = ['\0'; 9];
        assert_eq!(
            engine.translate_key('k', false, false, &mut buf),
            Err(Error::BufferTooSmall(9))
        );
    }

    #[test]
    fn layout_requires_tamil() {
        let mut engine = Engine::new(Script::Devanagari);
        assert_eq!(
            engine.set_layout(TamilLayout::Tamil99),
            Err(Error::UnsupportedLayout(TamilLayout::Tamil99))
        );
        let mut engine = Engine::new(Script::Tamil);
        assert!(engine.set_layout(TamilLayout::Tamil99).is_ok());
    }

    #[test]
    fn supported_layouts_only_for_tamil() {
        assert_eq!(Engine::new(Script::Tamil).supported_layouts().len(), 10);
        assert!(Engine::new(Script::Kannada).supported_layouts().is_empty());
    }

    #[test]
    fn reset_replays_identically() {
        let mut engine = Engine::new(Script::Malayalam);
        let run = |e: &mut Engine| {
            "dharma"
                .chars()
                .map(|k| e.translate(k, false, false))
                .collect::<Vec<_>>()
        };
        let first = run(&mut engine);
        engine.reset_session();
        let second = run(&mut engine);
        assert_eq!(first, second);
    }

    #[test]
    fn reclassification_resumes_composition() {
        let mut engine = Engine::new(Script::Tamil);
        // Type க, then pretend the host deleted the pulli by hand.
        engine.translate('k', false, false);
        engine.reclassify_after_delete('க');
        assert_eq!(engine.session().prev_key_class, KeyClass::FirstConsonant);
        // The left-half sign restores the WYTIWYG buffer too.
        engine.reclassify_after_delete('ெ');
        assert_eq!(engine.session().prev_key_class, KeyClass::LeftHalfVowel);
        assert_eq!(engine.session().wytiwyg_left_half, 'ெ');
    }

    #[test]
    fn termination_rules() {
        let engine = Engine::new(Script::Tamil);
        assert!(!engine.ok_to_terminate('k', false));
        assert!(engine.ok_to_terminate('1', false));

        let engine = Engine::with_layout(TamilLayout::Tamil99);
        assert!(engine.ok_to_terminate('K', true));
        assert!(!engine.ok_to_terminate('h', false));

        let engine = Engine::new(Script::Devanagari);
        assert!(!engine.ok_to_terminate('1', false));
        assert!(engine.ok_to_terminate('~', false));
    }

    /// The predicates take the same raw key plus shift flag as `translate`:
    /// a shifted letter resolves to its uppercase face before the lookup.
    #[test]
    fn termination_resolves_shift_like_translate() {
        let engine = Engine::with_layout(TamilLayout::Tamil99);
        // Shift+w is the mapped ஷ key, not a terminator.
        assert!(engine.is_key_mapped('w', true));
        assert!(!engine.ok_to_terminate('w', true));
        // The commit shortcuts work from the raw faces too.
        assert!(engine.ok_to_terminate(';', true));
        assert!(engine.ok_to_terminate('/', true));
        // Shift+1 resolves to !, which no Tamil99 table maps.
        assert!(engine.ok_to_terminate('1', true));

        let engine = Engine::new(Script::Tamil);
        assert!(engine.is_key_mapped('e', true));
        assert!(!engine.ok_to_terminate('e', true));
    }

    #[test]
    fn tamil99_autopulli_via_engine() {
        let mut engine = Engine::with_layout(TamilLayout::Tamil99);
        let first = engine.translate('b', false, false);
        assert_eq!(first.insert, "ங");
        let second = engine.translate('h', false, false);
        assert_eq!(second.delete, 1);
        assert_eq!(second.insert, "ங்க");
    }
}

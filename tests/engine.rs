//! End-to-end checks driving the public engine API against a document
//! model, the way a host text field would.

use visai::{Engine, Script, TamilLayout, DELCODE, MIN_OUTPUT_BUFFER};

/// A minimal host: a document plus the edit-stream protocol.
struct Host {
    engine: Engine,
    document: String,
}

impl Host {
    fn new(script: Script) -> Self {
        Host {
            engine: Engine::new(script),
            document: String::new(),
        }
    }

    fn with_layout(layout: TamilLayout) -> Self {
        Host {
            engine: Engine::with_layout(layout),
            document: String::new(),
        }
    }

    /// Feeds one key through the wire protocol.
    fn key(&mut self, key: char) {
        if let Some(tail) = self.document.chars().last() {
            self.engine.set_context_before(tail);
        }
        let mut buf = ['\0'; 16];
        let n = self
            .engine
            .translate_key(key, false, false, &mut buf)
            .expect("buffer is large enough");
        let mut cursor = 0;
        if n > 0 && buf[0] == DELCODE {
            let count = (buf[1] as u8 - b'0') as usize;
            for _ in 0..count {
                self.document.pop();
            }
            cursor = 2;
        }
        for &ch in &buf[cursor..n] {
            self.document.push(ch);
        }
    }

    fn type_keys(&mut self, keys: &str) -> &str {
        for k in keys.chars() {
            self.key(k);
        }
        &self.document
    }
}

#[test]
fn scenario_tamil_anjal_ka() {
    let mut engine = Engine::new(Script::Tamil);
    let first = engine.translate('k', false, false);
    assert_eq!((first.delete, first.insert.as_str()), (0, "க்"));
    let second = engine.translate('a', false, false);
    assert_eq!(second.delete, 1);

    let mut host = Host::new(Script::Tamil);
    assert_eq!(host.type_keys("ka"), "க");
}

#[test]
fn scenario_tamil_anjal_nd_digraph() {
    let mut engine = Engine::new(Script::Tamil);
    let first = engine.translate('n', false, false);
    assert_eq!(first.insert, "ந்");
    let second = engine.translate('d', false, false);
    assert_eq!((second.delete, second.insert.as_str()), (2, "ண்ட்"));
}

#[test]
fn scenario_tamil99_auto_pulli() {
    let mut engine = Engine::with_layout(TamilLayout::Tamil99);
    engine.set_auto_pulli(true);
    let first = engine.translate('b', false, false);
    assert_eq!(first.insert, "ங");
    let second = engine.translate('h', false, false);
    assert_eq!(second.delete, first.insert.chars().count());
    assert_eq!(second.insert, "ங்க");

    let mut host = Host::with_layout(TamilLayout::Tamil99);
    assert_eq!(host.type_keys("bh"), "ங்க");
}

#[test]
fn scenario_devanagari_nukta() {
    let mut host = Host::new(Script::Devanagari);
    host.key('k');
    assert_eq!(host.document, "क");
    host.key('q');
    assert_eq!(host.document, "क्");
    host.key('q');
    assert_eq!(host.document, "\u{0958}");
}

#[test]
fn scenario_malayalam_rr() {
    let mut engine = Engine::new(Script::Malayalam);
    let first = engine.translate('r', false, false);
    assert_eq!(first.insert, "ര്");
    let second = engine.translate('r', false, false);
    assert_eq!((second.delete, second.insert.as_str()), (2, "റ്റ്"));
}

#[test]
fn scenario_mylai_left_half() {
    let mut engine = Engine::with_layout(TamilLayout::Mylai);
    let first = engine.translate('e', false, false);
    assert_eq!(first.insert.chars().collect::<Vec<_>>(), ['\u{200B}', 'ெ']);
    let second = engine.translate('k', false, false);
    assert_eq!(second.delete, 2);
    assert_eq!(second.insert, "கெ");

    let mut host = Host::with_layout(TamilLayout::Mylai);
    assert_eq!(host.type_keys("ek"), "கெ");
}

#[test]
fn wytiwyg_reorder_holds_for_every_wytiwyg_layout() {
    // (layout, left-half key, base key, expected logical commit)
    let cases = [
        (TamilLayout::Mylai, 'e', 'k', "கெ"),
        (TamilLayout::TypewriterNew, 'b', 'f', "கெ"),
        (TamilLayout::Bamini, 'n', 'f', "கெ"),
    ];
    for (layout, sign, base, expected) in cases {
        let mut host = Host::with_layout(layout);
        host.key(sign);
        host.key(base);
        assert_eq!(host.document, expected, "{layout:?}");
        // Logical order: base consonant first, sign second.
        let chars: Vec<char> = host.document.chars().collect();
        assert!(visai::tamil::is_consonant(chars[0]), "{layout:?}");
        assert!(visai::tamil::is_left_vowel_sign(chars[1]), "{layout:?}");
    }
}

#[test]
fn determinism_over_replays() {
    for script in Script::iter() {
        let keys = "kathai nadndhadhu. rr qq 12 || aiyoo";
        let mut first = Engine::new(*script);
        let mut second = Engine::new(*script);
        for k in keys.chars() {
            assert_eq!(
                first.translate(k, false, false),
                second.translate(k, false, false),
                "{script:?} diverged at {k:?}"
            );
        }
    }
}

#[test]
fn reset_correctness() {
    let mut engine = Engine::with_layout(TamilLayout::Bamini);
    let keys = "fmmEkaH$nnf";
    let run = |e: &mut Engine| {
        keys.chars()
            .map(|k| e.translate(k, false, false))
            .collect::<Vec<_>>()
    };
    let first = run(&mut engine);
    engine.reset_session();
    let second = run(&mut engine);
    assert_eq!(first, second);
}

#[test]
fn totality_and_length_safety() {
    let printable: Vec<char> = (0x20u8..0x7f).map(|b| b as char).collect();
    for script in Script::iter() {
        let layouts: &[TamilLayout] = if *script == Script::Tamil {
            &[
                TamilLayout::Anjal,
                TamilLayout::Tamil99,
                TamilLayout::TamilNet97,
                TamilLayout::Mylai,
                TamilLayout::TypewriterNew,
                TamilLayout::TypewriterOld,
                TamilLayout::AnjalIndic,
                TamilLayout::Murasu6,
                TamilLayout::Bamini,
                TamilLayout::TnTypewriter,
            ]
        } else {
            &[TamilLayout::Anjal]
        };
        for layout in layouts {
            let mut engine = if *script == Script::Tamil {
                Engine::with_layout(*layout)
            } else {
                Engine::new(*script)
            };
            for &a in &printable {
                for &b in &printable {
                    let first = engine.translate(a, false, false);
                    let second = engine.translate(b, false, false);
                    for edit in [&first, &second] {
                        assert!(
                            edit.insert.chars().count() <= 6,
                            "{script:?}/{layout:?}: {a:?}{b:?} inserted {:?}",
                            edit.insert
                        );
                    }
                    engine.reset_session();
                }
            }
        }
    }
}

#[test]
fn classification_round_trip() {
    // Emitting a consonant, reclassifying from its base, and retyping the
    // follow-up key reproduces the original second edit.
    let mut engine = Engine::new(Script::Tamil);
    engine.translate('k', false, false);
    let direct = engine.translate('a', false, false);

    let mut resumed = Engine::new(Script::Tamil);
    resumed.translate('k', false, false);
    resumed.reclassify_after_delete('க');
    // The session forgot the pending pulli delete, but the vowel still
    // lands on the consonant.
    let replayed = resumed.translate('a', false, false);
    assert_eq!(direct.insert, replayed.insert);
}

#[test]
fn auto_pulli_disabled_is_monotone() {
    let mut engine = Engine::with_layout(TamilLayout::Tamil99);
    engine.set_auto_pulli(false);
    for k in "bhbhkjiu".chars() {
        let edit = engine.translate(k, false, false);
        assert_eq!(edit.delete, 0, "retroactive delete at {k:?}");
    }
}

#[test]
fn buffer_contract() {
    let mut engine = Engine::new(Script::Telugu);
    let mut small = ['\0'; MIN_OUTPUT_BUFFER - 1];
    assert!(engine.translate_key('k', false, false, &mut small).is_err());
    let mut exact = ['\0'; MIN_OUTPUT_BUFFER];
    assert!(engine.translate_key('k', false, false, &mut exact).is_ok());
}

#[test]
fn independent_sessions_do_not_interact() {
    let mut left = Host::new(Script::Tamil);
    let mut right = Host::new(Script::Tamil);
    left.key('k');
    right.key('p');
    left.key('a');
    right.key('U');
    assert_eq!(left.document, "க");
    assert_eq!(right.document, "பூ");
}

#[test]
fn diacritic_transcription_stream() {
    let mut host = Host::new(Script::Diacritic);
    assert_eq!(host.type_keys("naaTakam"), "nāṭakam");
}

#[test]
fn gurmukhi_stream() {
    let mut host = Host::new(Script::Gurmukhi);
    assert_eq!(host.type_keys("pataa"), "ਪਤਾ");
}

#[test]
fn kannada_stream() {
    let mut host = Host::new(Script::Kannada);
    assert_eq!(host.type_keys("kamala"), "ಕಮಲ");
}

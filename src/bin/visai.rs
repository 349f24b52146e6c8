//! Composes text from keystrokes read on stdin.
//!
//! Each input line is an independent keystream; the composed document is
//! printed once the line ends. Set `RUST_LOG=trace` to watch the edit
//! stream.

use std::io::{self, BufRead};

use clap::Parser;

use visai::{Engine, Script, TamilLayout};

#[derive(Parser)]
#[command(name = "visai", about = "Phonetic keystroke composition for Indic scripts")]
struct Args {
    /// Target script.
    #[arg(long, default_value = "tamil")]
    script: String,

    /// Tamil keyboard layout.
    #[arg(long, default_value = "anjal")]
    layout: String,

    /// Disable the Tamil99 auto-pulli aid.
    #[arg(long)]
    no_auto_pulli: bool,

    /// Print every edit as it is emitted.
    #[arg(long)]
    edits: bool,
}

fn parse_script(name: &str) -> Option<Script> {
    let script = match name.to_ascii_lowercase().as_str() {
        "tamil" => Script::Tamil,
        "devanagari" => Script::Devanagari,
        "malayalam" => Script::Malayalam,
        "kannada" => Script::Kannada,
        "telugu" => Script::Telugu,
        "gurmukhi" => Script::Gurmukhi,
        "diacritic" => Script::Diacritic,
        _ => return None,
    };
    Some(script)
}

fn parse_layout(name: &str) -> Option<TamilLayout> {
    let layout = match name.to_ascii_lowercase().as_str() {
        "anjal" => TamilLayout::Anjal,
        "anjal-indic" => TamilLayout::AnjalIndic,
        "tamil99" => TamilLayout::Tamil99,
        "tamilnet97" => TamilLayout::TamilNet97,
        "murasu6" => TamilLayout::Murasu6,
        "mylai" => TamilLayout::Mylai,
        "typewriter-new" => TamilLayout::TypewriterNew,
        "typewriter-old" => TamilLayout::TypewriterOld,
        "bamini" => TamilLayout::Bamini,
        "tn-typewriter" => TamilLayout::TnTypewriter,
        _ => return None,
    };
    Some(layout)
}

fn main() -> io::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let Some(script) = parse_script(&args.script) else {
        eprintln!("unknown script: {}", args.script);
        std::process::exit(2);
    };
    let Some(layout) = parse_layout(&args.layout) else {
        eprintln!("unknown layout: {}", args.layout);
        std::process::exit(2);
    };

    let mut engine = if script == Script::Tamil {
        Engine::with_layout(layout)
    } else {
        Engine::new(script)
    };
    engine.set_auto_pulli(!args.no_auto_pulli);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let mut document = String::new();
        engine.reset_session();

        for key in line.chars() {
            if let Some(tail) = document.chars().last() {
                engine.set_context_before(tail);
            }
            let edit = engine.translate(key, false, false);
            if args.edits {
                eprintln!("{key:?}: -{} +{:?}", edit.delete, edit.insert.as_str());
            }
            for _ in 0..edit.delete {
                document.pop();
            }
            document.push_str(&edit.insert);
        }
        println!("{document}");
    }
    Ok(())
}

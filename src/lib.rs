#![doc = include_str!("../README.md")]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]

pub use crate::edit::{Edit, DELCODE, MIN_OUTPUT_BUFFER};
pub use crate::engine::Engine;
pub use crate::errors::{Error, Result};
pub use crate::script::{Script, TamilLayout};
pub use crate::session::{CharClass, KeyClass, Session};

/// Tamil character classification helpers.
///
/// These are exposed for hosts that need to reason about the committed
/// document tail (e.g. when deleting through a two-part vowel sign).
pub mod tamil;

mod edit;
mod engine;
mod errors;
mod keys;
mod lookup;
mod script;
mod session;
mod tables;
mod translit;

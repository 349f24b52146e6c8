use crate::edit::MIN_OUTPUT_BUFFER;
use crate::script::TamilLayout;
use thiserror::Error;

/// An error raised by the engine surface.
///
/// The translation state machines themselves are total: every key produces
/// an edit, possibly the empty edit. Errors arise only from malformed
/// arguments at the API boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The caller-provided output buffer is smaller than
    /// [`MIN_OUTPUT_BUFFER`] code points.
    #[error("output buffer holds {0} code points but at least {MIN_OUTPUT_BUFFER} are required")]
    BufferTooSmall(usize),

    /// The edit would delete more trailing code points than the wire format
    /// can express (a single ASCII digit, so at most 9).
    #[error("edit deletes {0} code points; the wire format caps deletions at 9")]
    DeleteTooLarge(usize),

    /// A Tamil keyboard layout was requested for a script other than Tamil.
    #[error("layout {0:?} is only meaningful for the Tamil script")]
    UnsupportedLayout(TamilLayout),
}

/// A `Result` specialised to engine errors.
pub type Result<T> = std::result::Result<T, Error>;

//! The per-script keystroke transducers.
//!
//! Six Indic scripts and the diacritic alphabet share one state-machine
//! skeleton ([`indic`]), parameterised by table contents, virama behaviour
//! and per-script cluster rules. The non-phonetic Tamil layouts run the
//! compound-matrix machine in [`tamil_multi`] instead.

pub(crate) mod indic;
pub(crate) mod tamil_multi;

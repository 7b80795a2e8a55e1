#![warn(clippy::pedantic)]
#![allow(
    clippy::cast_lossless,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::many_single_char_names,
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::doc_markdown,
    clippy::float_cmp
)]
pub mod bodies;
pub mod cache;
pub mod catalog;
pub mod format;
pub mod illumination;
pub mod kepler;
pub mod scale;
pub mod time;

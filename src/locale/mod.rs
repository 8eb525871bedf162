//! Locale data used when rendering textual fields.

mod builtin;

pub use builtin::Locale;

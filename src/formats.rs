//! Typed descriptions of bioinformatics file formats and the secondary files
//! (indexes, dictionaries) that must accompany them.

pub mod descriptor;
pub mod error;
pub mod pattern;

pub use self::descriptor::FileFormat;
pub use self::error::FormatError;
pub use self::pattern::SuffixPattern;

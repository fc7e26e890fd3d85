//! Errors raised while registering, looking up, or applying file formats.

use std::error;
use std::fmt;
use std::path::PathBuf;

//==============//
// Format Error //
//==============//

/// An error related to a [`FileFormat`](super::FileFormat) or the
/// [`Catalog`](crate::catalog::Catalog) it is registered in.
///
/// Every variant describes a mistake in a format declaration or in the way a
/// format was used. None of them are transient: repeating the same call with
/// the same input fails the same way.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FormatError {
    /// A format with this name has already been registered.
    DuplicateName(String),

    /// No format with this name has been registered.
    UnknownFormat(String),

    /// A replacement pattern (`^X`) whose `X` does not begin with a literal
    /// `.`.
    MalformedPattern {
        /// The offending pattern, as declared (including the caret).
        pattern: String,
    },

    /// A pattern was applied to a primary path that does not end in a file
    /// name (for example `ref.fasta/`, `/` or `..`).
    NoFileName {
        /// The primary file path.
        path: PathBuf,
    },

    /// A replacement pattern was applied to a primary file whose name has no
    /// extension to strip.
    NoExtension {
        /// The replacement pattern being applied (including the caret).
        pattern: String,

        /// The primary file path.
        path: PathBuf,
    },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::DuplicateName(name) => {
                write!(f, "a format named \"{}\" is already registered", name)
            }
            FormatError::UnknownFormat(name) => write!(f, "unknown format: \"{}\"", name),
            FormatError::MalformedPattern { pattern } => write!(
                f,
                "malformed replacement pattern \"{}\": the replacement must start with a '.'",
                pattern
            ),
            FormatError::NoFileName { path } => write!(
                f,
                "cannot derive companion files for {}: path does not end in a file name",
                path.display()
            ),
            FormatError::NoExtension { pattern, path } => write!(
                f,
                "cannot apply \"{}\" to {}: path did not have an extension",
                pattern,
                path.display()
            ),
        }
    }
}

impl error::Error for FormatError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_culprit() {
        let err = FormatError::UnknownFormat(String::from("Fastq"));
        assert_eq!(err.to_string(), "unknown format: \"Fastq\"");

        let err = FormatError::NoExtension {
            pattern: String::from("^.dict"),
            path: PathBuf::from("reference"),
        };
        assert_eq!(
            err.to_string(),
            "cannot apply \"^.dict\" to reference: path did not have an extension"
        );
    }
}

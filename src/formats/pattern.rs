//! Suffix patterns, the rules for deriving a companion file path from a
//! primary file path.

use std::convert::Infallible;
use std::fmt;
use std::path::Path;
use std::path::PathBuf;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use super::FormatError;
use crate::utils::pathbuf::AppendSuffix;
use crate::utils::pathbuf::ReplaceExtension;

/// The character which marks a pattern as an extension replacement.
pub const REPLACEMENT_MARKER: char = '^';

//================//
// Suffix Pattern //
//================//

/// A rule for deriving the path of a secondary (companion) file from the path
/// of its primary file.
///
/// Patterns are written the way the workflow description languages write
/// them: a plain string is appended to the primary file name, while a string
/// prefixed with `^` replaces the primary file's final extension.
///
/// ```
/// use ngs_formats::formats::SuffixPattern;
///
/// let fai: SuffixPattern = ".fai".parse().unwrap();
/// assert_eq!(fai, SuffixPattern::Append(String::from(".fai")));
///
/// let dict: SuffixPattern = "^.dict".parse().unwrap();
/// assert_eq!(dict, SuffixPattern::Replace(String::from(".dict")));
/// assert_eq!(dict.to_string(), "^.dict");
/// ```
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SuffixPattern {
    /// Append the contained string to the full primary file name
    /// (`ref.fasta` + `.fai` → `ref.fasta.fai`).
    Append(String),

    /// Strip the final extension of the primary file name and append the
    /// contained string (`ref.fasta` + `^.dict` → `ref.dict`). The contained
    /// string does not include the caret.
    Replace(String),
}

impl SuffixPattern {
    /// Creates a new [`SuffixPattern::Append`].
    pub fn append<S>(suffix: S) -> Self
    where
        S: Into<String>,
    {
        SuffixPattern::Append(suffix.into())
    }

    /// Creates a new [`SuffixPattern::Replace`]. `replacement` must not include
    /// the leading caret.
    pub fn replace<S>(replacement: S) -> Self
    where
        S: Into<String>,
    {
        SuffixPattern::Replace(replacement.into())
    }

    /// Whether or not this is an extension replacement pattern.
    pub fn is_replacement(&self) -> bool {
        matches!(self, SuffixPattern::Replace(_))
    }

    /// Derives the companion file path for `primary`.
    ///
    /// `primary` must end in its file name: a trailing separator
    /// (`ref.fasta/`), a trailing `.` component or a final `..` is rejected
    /// for every kind of pattern.
    ///
    /// Replacement patterns are validated here rather than at construction, so
    /// a malformed one fails every time it is applied (and never before). The
    /// replacement must start with a literal `.` and the primary file name must
    /// have an extension to strip.
    pub fn apply<P>(&self, primary: P) -> Result<PathBuf, FormatError>
    where
        P: AsRef<Path>,
    {
        let primary = primary.as_ref();

        let ends_in_file_name = match primary.file_name() {
            Some(name) => primary
                .as_os_str()
                .to_string_lossy()
                .ends_with(name.to_string_lossy().as_ref()),
            None => false,
        };

        if !ends_in_file_name {
            return Err(FormatError::NoFileName {
                path: primary.to_path_buf(),
            });
        }

        match self {
            SuffixPattern::Append(suffix) => Ok(primary.to_path_buf().append_suffix(suffix)),
            SuffixPattern::Replace(replacement) => {
                if !replacement.starts_with('.') {
                    return Err(FormatError::MalformedPattern {
                        pattern: self.to_string(),
                    });
                }

                primary
                    .to_path_buf()
                    .replace_extension(replacement)
                    .ok_or_else(|| FormatError::NoExtension {
                        pattern: self.to_string(),
                        path: primary.to_path_buf(),
                    })
            }
        }
    }
}

impl fmt::Display for SuffixPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SuffixPattern::Append(suffix) => write!(f, "{}", suffix),
            SuffixPattern::Replace(replacement) => {
                write!(f, "{}{}", REPLACEMENT_MARKER, replacement)
            }
        }
    }
}

impl FromStr for SuffixPattern {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.strip_prefix(REPLACEMENT_MARKER) {
            Some(replacement) => Ok(SuffixPattern::replace(replacement)),
            None => Ok(SuffixPattern::append(s)),
        }
    }
}

impl From<&str> for SuffixPattern {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(pattern) => pattern,
            Err(never) => match never {},
        }
    }
}

impl From<String> for SuffixPattern {
    fn from(s: String) -> Self {
        SuffixPattern::from(s.as_str())
    }
}

impl From<SuffixPattern> for String {
    fn from(pattern: SuffixPattern) -> Self {
        pattern.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append() {
        let pattern = SuffixPattern::from(".fai");
        assert_eq!(
            pattern.apply("sample.fasta").unwrap(),
            PathBuf::from("sample.fasta.fai")
        );
    }

    #[test]
    fn test_replace() {
        let pattern = SuffixPattern::from("^.dict");
        assert!(pattern.is_replacement());
        assert_eq!(
            pattern.apply("/data/sample.fasta").unwrap(),
            PathBuf::from("/data/sample.dict")
        );
    }

    #[test]
    fn test_replace_missing_dot_is_malformed() {
        let pattern = SuffixPattern::from("^dict");
        assert_eq!(
            pattern.apply("sample.fasta"),
            Err(FormatError::MalformedPattern {
                pattern: String::from("^dict")
            })
        );

        // Fails the same way regardless of the primary path.
        assert_eq!(
            pattern.apply("sample"),
            Err(FormatError::MalformedPattern {
                pattern: String::from("^dict")
            })
        );
    }

    #[test]
    fn test_replace_without_extension() {
        let pattern = SuffixPattern::from("^.dict");
        assert_eq!(
            pattern.apply("sample"),
            Err(FormatError::NoExtension {
                pattern: String::from("^.dict"),
                path: PathBuf::from("sample"),
            })
        );
    }

    #[test]
    fn test_trailing_separator_is_rejected_for_both_kinds() {
        for raw in [".fai", "^.dict"] {
            let pattern = SuffixPattern::from(raw);
            assert_eq!(
                pattern.apply("ref.fasta/"),
                Err(FormatError::NoFileName {
                    path: PathBuf::from("ref.fasta/")
                })
            );
        }
    }

    #[test]
    fn test_path_without_file_name_is_rejected() {
        let pattern = SuffixPattern::from(".fai");
        assert!(matches!(
            pattern.apply("/"),
            Err(FormatError::NoFileName { .. })
        ));
        assert!(matches!(
            pattern.apply("refs/.."),
            Err(FormatError::NoFileName { .. })
        ));
        assert!(matches!(
            pattern.apply("ref.fasta/."),
            Err(FormatError::NoFileName { .. })
        ));
    }

    #[test]
    fn test_plain_suffix_without_dot_is_allowed() {
        let pattern = SuffixPattern::from("_1.fastq");
        assert_eq!(
            pattern.apply("sample").unwrap(),
            PathBuf::from("sample_1.fastq")
        );
    }

    #[test]
    fn test_serde_uses_declared_form() {
        let patterns: Vec<SuffixPattern> = serde_json::from_str(r#"[".fai", "^.dict"]"#).unwrap();
        assert_eq!(
            patterns,
            vec![SuffixPattern::append(".fai"), SuffixPattern::replace(".dict")]
        );
        assert_eq!(
            serde_json::to_string(&patterns).unwrap(),
            r#"[".fai","^.dict"]"#
        );
    }
}

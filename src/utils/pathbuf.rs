//! Extensions to and utilities concerning [`PathBuf`]s.
//!
//! # Overview
//!
//! Companion files in genomics are named after the primary file they travel
//! with. There are two conventions in common use:
//!
//! * the companion name is the full primary name plus some suffix (a FASTA
//!   index for `ref.fasta` is `ref.fasta.fai`), and
//! * the companion name is the primary name with its final extension swapped
//!   out (the sequence dictionary for `ref.fasta` is `ref.dict`).
//!
//! [`PathBuf`] does not quite cover either of these: `set_extension` replaces
//! rather than appends, and it silently succeeds on paths with no extension.
//! This module provides [`AppendSuffix`] and [`ReplaceExtension`] for the two
//! conventions respectively.
//!
//! ```
//! use std::path::PathBuf;
//! // Traits must be in scope to use them.
//! use ngs_formats::utils::pathbuf::{AppendSuffix, ReplaceExtension};
//!
//! assert_eq!(
//!     PathBuf::from("ref.fasta").append_suffix(".fai"),
//!     PathBuf::from("ref.fasta.fai")
//! );
//! assert_eq!(
//!     PathBuf::from("ref.fasta").replace_extension(".dict"),
//!     Some(PathBuf::from("ref.dict"))
//! );
//! ```

use std::ffi::OsStr;
use std::path::PathBuf;

/// Adds an [`append_suffix`][AppendSuffix::append_suffix] method to
/// [`PathBuf`].
pub trait AppendSuffix {
    /// Appends `suffix` verbatim to the end of the path. No separator is
    /// inserted, so the suffix should carry its own leading `.` if one is
    /// desired.
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use ngs_formats::utils::pathbuf::AppendSuffix;
    ///
    /// let bam = PathBuf::from("~/test.bam");
    /// let bai = bam.append_suffix(".bai");
    /// assert_eq!(bai.file_name().unwrap(), "test.bam.bai");
    /// ```
    fn append_suffix<S>(self, suffix: S) -> Self
    where
        Self: Sized,
        S: AsRef<OsStr>;
}

impl AppendSuffix for PathBuf {
    fn append_suffix<S>(self, suffix: S) -> Self
    where
        S: AsRef<OsStr>,
    {
        let mut raw = self.into_os_string();
        raw.push(suffix);
        PathBuf::from(raw)
    }
}

/// Adds a [`replace_extension`][ReplaceExtension::replace_extension] method to
/// [`PathBuf`].
pub trait ReplaceExtension {
    /// Removes the final extension of the file name and appends `replacement`
    /// in its place. Returns [`None`] if the file name has no extension (note
    /// that a lone leading dot, as in `.bashrc`, is not an extension).
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use ngs_formats::utils::pathbuf::ReplaceExtension;
    ///
    /// let fasta = PathBuf::from("/refs/hg38.fa");
    /// assert_eq!(
    ///     fasta.replace_extension(".dict"),
    ///     Some(PathBuf::from("/refs/hg38.dict"))
    /// );
    /// assert_eq!(PathBuf::from("/refs/hg38").replace_extension(".dict"), None);
    /// ```
    fn replace_extension<S>(self, replacement: S) -> Option<Self>
    where
        Self: Sized,
        S: AsRef<OsStr>;
}

impl ReplaceExtension for PathBuf {
    fn replace_extension<S>(mut self, replacement: S) -> Option<Self>
    where
        S: AsRef<OsStr>,
    {
        self.extension()?;

        // Only strips the final extension: `a.vcf.gz` becomes `a.vcf`.
        self.set_extension("");
        Some(self.append_suffix(replacement))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_suffix_keeps_full_name() {
        let path = PathBuf::from("calls.vcf.gz").append_suffix(".tbi");
        assert_eq!(path, PathBuf::from("calls.vcf.gz.tbi"));
    }

    #[test]
    fn test_append_suffix_without_extension() {
        let path = PathBuf::from("reads").append_suffix(".bai");
        assert_eq!(path, PathBuf::from("reads.bai"));
    }

    #[test]
    fn test_replace_extension_only_strips_last() {
        let path = PathBuf::from("calls.vcf.gz").replace_extension(".idx");
        assert_eq!(path, Some(PathBuf::from("calls.vcf.idx")));
    }

    #[test]
    fn test_replace_extension_ignores_dots_in_directories() {
        let path = PathBuf::from("refs.d/genome").replace_extension(".dict");
        assert_eq!(path, None);
    }

    #[test]
    fn test_replace_extension_hidden_file() {
        assert_eq!(PathBuf::from(".genome").replace_extension(".dict"), None);
    }
}

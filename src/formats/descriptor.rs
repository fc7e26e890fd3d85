//! File format descriptors and the resolution of their secondary files.

use std::fmt;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;

use indexmap::IndexMap;
use indexmap::IndexSet;
use tracing::debug;

use super::FormatError;
use super::SuffixPattern;

//=============//
// File Format //
//=============//

/// A named description of a logical file type along with the secondary
/// (companion) files that must accompany a primary file of this type.
///
/// A format may refine a `parent` format. A refinement requires every
/// companion file its parent requires, in the parent's order, followed by its
/// own additions. Because a parent has to exist before a child can point at
/// it, the parent relation is always a tree.
///
/// ```
/// use std::sync::Arc;
/// use ngs_formats::formats::{FileFormat, SuffixPattern};
///
/// let bam = Arc::new(FileFormat::new("Bam", None, vec![]));
/// let bam_bai = FileFormat::new("BamBai", Some(bam), vec![SuffixPattern::from(".bai")]);
///
/// assert_eq!(bam_bai.resolve_secondary_suffixes(), vec![SuffixPattern::from(".bai")]);
/// ```
#[derive(Debug)]
pub struct FileFormat {
    /// The unique name of the format.
    name: String,

    /// The format this one refines, if any.
    parent: Option<Arc<FileFormat>>,

    /// Suffix patterns declared directly on this format (not inherited).
    secondary_suffixes: Vec<SuffixPattern>,
}

impl FileFormat {
    /// Creates a new [`FileFormat`].
    pub fn new<S>(
        name: S,
        parent: Option<Arc<FileFormat>>,
        secondary_suffixes: Vec<SuffixPattern>,
    ) -> Self
    where
        S: Into<String>,
    {
        FileFormat {
            name: name.into(),
            parent,
            secondary_suffixes,
        }
    }

    /// Gets the name of the format.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Gets the format this one refines, if any.
    pub fn parent(&self) -> Option<&Arc<FileFormat>> {
        self.parent.as_ref()
    }

    /// Gets the suffix patterns declared on this format alone, without any
    /// inherited from the parent chain.
    pub fn own_secondary_suffixes(&self) -> &[SuffixPattern] {
        &self.secondary_suffixes
    }

    /// Iterates over this format followed by each of its ancestors, ending at
    /// the root of the chain.
    pub fn ancestors(&self) -> Ancestors<'_> {
        Ancestors { next: Some(self) }
    }

    /// The number of ancestors above this format (a format without a parent
    /// has a depth of zero).
    pub fn depth(&self) -> usize {
        self.ancestors().count() - 1
    }

    /// Whether this format is `other` or refines it, directly or through
    /// intermediate formats. Formats are compared by identity, so a distinct
    /// format that merely shares a name is never considered an ancestor.
    pub fn is_refinement_of(&self, other: &FileFormat) -> bool {
        self.ancestors().any(|format| std::ptr::eq(format, other))
    }

    /// Resolves the full, ordered list of secondary suffix patterns for this
    /// format.
    ///
    /// The root's own patterns come first, followed by each descendant's own
    /// patterns down to this format, each level in its declared order. An
    /// entry that exactly matches an earlier one is dropped, so the result
    /// never contains duplicates.
    pub fn resolve_secondary_suffixes(&self) -> Vec<SuffixPattern> {
        let chain = self.ancestors().collect::<Vec<_>>();

        let resolved = chain
            .iter()
            .rev()
            .flat_map(|format| format.secondary_suffixes.iter())
            .collect::<IndexSet<_>>();

        resolved.into_iter().cloned().collect()
    }

    /// Computes the companion file path for every resolved suffix pattern.
    /// Entries are ordered as in
    /// [`resolve_secondary_suffixes`](FileFormat::resolve_secondary_suffixes).
    ///
    /// Fails on the first pattern that cannot be applied to `primary` (see
    /// [`SuffixPattern::apply`]).
    pub fn apply<P>(&self, primary: P) -> Result<IndexMap<SuffixPattern, PathBuf>, FormatError>
    where
        P: AsRef<Path>,
    {
        let primary = primary.as_ref();
        let mut companions = IndexMap::new();

        for pattern in self.resolve_secondary_suffixes() {
            let path = pattern.apply(primary)?;
            companions.insert(pattern, path);
        }

        Ok(companions)
    }

    /// Computes the companion files for `primary` and returns those that do
    /// not exist on the filesystem, in resolved order.
    pub fn missing_companions<P>(
        &self,
        primary: P,
    ) -> Result<Vec<(SuffixPattern, PathBuf)>, FormatError>
    where
        P: AsRef<Path>,
    {
        let companions = self.apply(primary)?;

        Ok(companions
            .into_iter()
            .filter(|(pattern, path)| {
                let exists = path.exists();
                debug!(
                    "  [*] {} companion {} ({}).",
                    if exists { "Found" } else { "Missing" },
                    path.display(),
                    pattern
                );
                !exists
            })
            .collect())
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

//===========//
// Ancestors //
//===========//

/// An iterator over a [`FileFormat`] and its ancestors. Created by
/// [`FileFormat::ancestors`].
pub struct Ancestors<'a> {
    next: Option<&'a FileFormat>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a FileFormat;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.parent.as_deref();
        Some(current)
    }
}

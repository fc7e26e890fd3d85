//! Declarative (serializable) descriptions of file formats.
//!
//! Declarations are what a [`Catalog`](super::Catalog) is built from. Besides
//! the built-in declarations, they can be read from a JSON file of the form:
//!
//! ```json
//! [
//!   { "name": "FastaGz", "parent": "Fasta", "secondaryFiles": [".gzi"] },
//!   { "name": "Gvcf", "secondaryFiles": [".tbi"] }
//! ]
//! ```
//!
//! Both `parent` and `secondaryFiles` may be omitted.

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use serde::Serialize;

use crate::formats::SuffixPattern;

/// A single format declaration: a name, an optional parent name, and the
/// suffix patterns the format adds on top of its parent's.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FormatDeclaration {
    /// The unique name of the format.
    pub name: String,

    /// The name of the format this one refines.
    #[serde(default)]
    pub parent: Option<String>,

    /// Suffix patterns declared on this format.
    #[serde(default)]
    pub secondary_files: Vec<SuffixPattern>,
}

impl FormatDeclaration {
    /// Creates a new [`FormatDeclaration`].
    pub fn new<N, S>(name: N, parent: Option<&str>, secondary_files: Vec<S>) -> Self
    where
        N: Into<String>,
        S: Into<SuffixPattern>,
    {
        FormatDeclaration {
            name: name.into(),
            parent: parent.map(String::from),
            secondary_files: secondary_files.into_iter().map(Into::into).collect(),
        }
    }
}

/// Attempts to read a list of [`FormatDeclaration`]s from a JSON file.
pub fn read(filepath: impl AsRef<Path>) -> anyhow::Result<Vec<FormatDeclaration>> {
    let path = filepath.as_ref();
    let contents = fs::read_to_string(path)
        .with_context(|| format!("reading format declarations: {}", path.display()))?;

    serde_json::from_str(&contents)
        .with_context(|| format!("parsing format declarations: {}", path.display()))
}

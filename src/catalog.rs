//! Registration and lookup of [`FileFormat`]s.
//!
//! # Overview
//!
//! A [`Catalog`] maps unique format names to their descriptors. Catalogs are
//! built during startup, generally by declaring formats one after another
//! with [`Catalog::declare`], where each format may name an already-declared
//! parent. Once built, a catalog is only ever read.
//!
//! The formats that ship with this crate are available through [`builtin()`],
//! which builds the catalog exactly once and shares it for the remainder of
//! the process.
//!
//! ```
//! use ngs_formats::catalog::Catalog;
//! use ngs_formats::formats::SuffixPattern;
//!
//! let mut catalog = Catalog::new();
//! catalog.declare("Bam", None, vec![]).unwrap();
//! catalog
//!     .declare("BamBai", Some("Bam"), vec![SuffixPattern::from(".bai")])
//!     .unwrap();
//!
//! let bam_bai = catalog.get_by_name("BamBai").unwrap();
//! assert_eq!(bam_bai.parent().unwrap().name(), "Bam");
//! ```

pub mod builtin;
pub mod declaration;

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use indexmap::IndexMap;
use tracing::debug;
use tracing::info;

use crate::formats::FileFormat;
use crate::formats::FormatError;
use crate::formats::SuffixPattern;

pub use self::builtin::builtin;
pub use self::declaration::FormatDeclaration;

//=========//
// Catalog //
//=========//

/// A set of [`FileFormat`]s with unique names, kept in registration order.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    formats: IndexMap<String, Arc<FileFormat>>,
}

impl Catalog {
    /// Creates a new, empty [`Catalog`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `format`, returning a shared handle to it that can be used as
    /// the parent of further formats.
    ///
    /// Fails with [`FormatError::DuplicateName`] if a format with the same
    /// name is already registered, and with [`FormatError::UnknownFormat`] if
    /// any ancestor of `format` is not the very format registered under that
    /// ancestor's name. The catalog is unchanged on failure.
    pub fn register(&mut self, format: FileFormat) -> Result<Arc<FileFormat>, FormatError> {
        if self.formats.contains_key(format.name()) {
            return Err(FormatError::DuplicateName(format.name().to_string()));
        }

        for ancestor in format.ancestors().skip(1) {
            match self.formats.get(ancestor.name()) {
                Some(registered) if std::ptr::eq(registered.as_ref(), ancestor) => {}
                _ => return Err(FormatError::UnknownFormat(ancestor.name().to_string())),
            }
        }

        debug!(
            "Registering format {} (parent: {}).",
            format.name(),
            format.parent().map(|p| p.name()).unwrap_or("none")
        );

        let format = Arc::new(format);
        self.formats
            .insert(format.name().to_string(), Arc::clone(&format));
        Ok(format)
    }

    /// Declares and registers a new format whose parent, if any, is looked up
    /// by name in this catalog.
    ///
    /// Fails with [`FormatError::UnknownFormat`] if `parent` is not registered
    /// and with [`FormatError::DuplicateName`] if `name` already is.
    pub fn declare<S>(
        &mut self,
        name: S,
        parent: Option<&str>,
        secondary_suffixes: Vec<SuffixPattern>,
    ) -> Result<Arc<FileFormat>, FormatError>
    where
        S: Into<String>,
    {
        let parent = parent
            .map(|parent| self.get_by_name(parent).map(Arc::clone))
            .transpose()?;

        self.register(FileFormat::new(name, parent, secondary_suffixes))
    }

    /// Declares each of `declarations` in order. A declaration may only name a
    /// parent that is already registered or that appears earlier in
    /// `declarations`.
    ///
    /// Stops at the first failing declaration. Declarations before it remain
    /// registered.
    pub fn extend<I>(&mut self, declarations: I) -> Result<(), FormatError>
    where
        I: IntoIterator<Item = FormatDeclaration>,
    {
        for declaration in declarations {
            self.declare(
                declaration.name,
                declaration.parent.as_deref(),
                declaration.secondary_files,
            )?;
        }

        Ok(())
    }

    /// Looks up a format by its exact name.
    pub fn get_by_name(&self, name: &str) -> Result<&Arc<FileFormat>, FormatError> {
        self.formats
            .get(name)
            .ok_or_else(|| FormatError::UnknownFormat(name.to_string()))
    }

    /// Whether or not a format with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// Iterates over the registered formats in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<FileFormat>> {
        self.formats.values()
    }

    /// The number of registered formats.
    pub fn len(&self) -> usize {
        self.formats.len()
    }

    /// Whether or not the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.formats.is_empty()
    }
}

//================//
// Utility method //
//================//

/// Gets a copy of the built-in catalog, extended with the declarations in
/// `declarations_file` if one is provided. Used by every subcommand that
/// accepts `--formats`.
pub fn load<P>(declarations_file: Option<P>) -> anyhow::Result<Catalog>
where
    P: AsRef<Path>,
{
    let mut catalog = builtin().clone();

    if let Some(path) = declarations_file {
        let path = path.as_ref();
        let declarations = declaration::read(path)?;
        let count = declarations.len();

        catalog
            .extend(declarations)
            .with_context(|| format!("registering formats declared in {}", path.display()))?;
        info!(
            "Registered {} additional format(s) from {}.",
            count,
            path.display()
        );
    }

    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_name() {
        let mut catalog = Catalog::new();
        catalog.declare("Vcf", None, vec![]).unwrap();

        let err = catalog
            .declare("Vcf", None, vec![SuffixPattern::from(".idx")])
            .unwrap_err();
        assert_eq!(err, FormatError::DuplicateName(String::from("Vcf")));

        // The original registration is untouched.
        assert_eq!(catalog.len(), 1);
        assert!(catalog
            .get_by_name("Vcf")
            .unwrap()
            .own_secondary_suffixes()
            .is_empty());
    }

    #[test]
    fn test_unknown_lookup() {
        let catalog = Catalog::new();
        assert_eq!(
            catalog.get_by_name("Fastq").unwrap_err(),
            FormatError::UnknownFormat(String::from("Fastq"))
        );
    }

    #[test]
    fn test_declare_with_unknown_parent() {
        let mut catalog = Catalog::new();
        let err = catalog
            .declare("BamBai", Some("Bam"), vec![SuffixPattern::from(".bai")])
            .unwrap_err();

        assert_eq!(err, FormatError::UnknownFormat(String::from("Bam")));
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_register_rejects_foreign_parent() {
        let mut catalog = Catalog::new();
        let fasta = catalog
            .declare("Fasta", None, vec![SuffixPattern::from(".fai")])
            .unwrap();

        let impostor = Arc::new(FileFormat::new(
            "Fasta",
            None,
            vec![SuffixPattern::from(".zzz")],
        ));
        let child = FileFormat::new("Child", Some(Arc::clone(&impostor)), vec![]);
        assert!(!child.is_refinement_of(&fasta));

        assert_eq!(
            catalog.register(child).unwrap_err(),
            FormatError::UnknownFormat(String::from("Fasta"))
        );
        assert!(!catalog.contains("Child"));
    }

    #[test]
    fn test_register_rejects_unregistered_ancestor() {
        let mut catalog = Catalog::new();
        let bam = Arc::new(FileFormat::new("Bam", None, vec![]));
        let child = FileFormat::new("BamBai", Some(bam), vec![SuffixPattern::from(".bai")]);

        assert_eq!(
            catalog.register(child).unwrap_err(),
            FormatError::UnknownFormat(String::from("Bam"))
        );
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_register_accepts_registered_parent() {
        let mut catalog = Catalog::new();
        let bam = catalog.declare("Bam", None, vec![]).unwrap();
        let bam_bai = catalog
            .register(FileFormat::new(
                "BamBai",
                Some(Arc::clone(&bam)),
                vec![SuffixPattern::from(".bai")],
            ))
            .unwrap();

        assert!(bam_bai.is_refinement_of(&bam));
    }

    #[test]
    fn test_declared_parent_is_shared() {
        let mut catalog = Catalog::new();
        let bam = catalog.declare("Bam", None, vec![]).unwrap();
        let bam_bai = catalog
            .declare("BamBai", Some("Bam"), vec![SuffixPattern::from(".bai")])
            .unwrap();

        assert!(Arc::ptr_eq(bam_bai.parent().unwrap(), &bam));
    }

    #[test]
    fn test_extend_requires_declaration_order() {
        let mut catalog = Catalog::new();
        let declarations = vec![
            FormatDeclaration::new("CramCrai", Some("Cram"), vec![".crai"]),
            FormatDeclaration::new("Cram", None, Vec::<&str>::new()),
        ];

        assert_eq!(
            catalog.extend(declarations),
            Err(FormatError::UnknownFormat(String::from("Cram")))
        );
    }

    #[test]
    fn test_iter_in_registration_order() {
        let mut catalog = Catalog::new();
        catalog.declare("Bed", None, vec![]).unwrap();
        catalog.declare("Bam", None, vec![]).unwrap();
        catalog.declare("Vcf", None, vec![]).unwrap();

        let names = catalog.iter().map(|f| f.name()).collect::<Vec<_>>();
        assert_eq!(names, vec!["Bed", "Bam", "Vcf"]);
    }

    #[test]
    fn test_load_extends_builtin() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            br#"[{ "name": "FastaGz", "parent": "Fasta", "secondaryFiles": [".gzi"] }]"#,
        )
        .unwrap();

        let catalog = load(Some(file.path())).unwrap();
        assert_eq!(catalog.len(), builtin().len() + 1);
        assert!(catalog.contains("FastaGz"));

        // The shared built-in catalog is never modified.
        assert!(!builtin().contains("FastaGz"));
    }

    #[test]
    fn test_load_rejects_builtin_redeclaration() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"[{ "name": "Fasta" }]"#).unwrap();

        assert!(load(Some(file.path())).is_err());
    }
}

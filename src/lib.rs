//! `ngs-formats` is a typed catalog of next-generation sequencing file
//! formats and the secondary (companion) files that must travel with them:
//! indexes, sequence dictionaries, aligner indices, and so on. This package is
//! composed of both a library crate, as well as a binary crate.
//!
//! The library exposes two surfaces:
//!
//! * a registration API ([`catalog::Catalog`], [`formats::FileFormat`]) for
//!   declaring formats, usually as refinements of existing ones, and
//! * a query API ([`formats::FileFormat::resolve_secondary_suffixes`],
//!   [`formats::FileFormat::apply`]) for determining exactly which companion
//!   files must be staged or verified alongside a primary file.
//!
//! ```
//! use ngs_formats::catalog;
//!
//! let reference = catalog::builtin().get_by_name("FastaWithDict").unwrap();
//! let companions = reference.apply("hg38.fa").unwrap();
//!
//! let paths = companions
//!     .values()
//!     .map(|p| p.to_str().unwrap())
//!     .collect::<Vec<_>>();
//! assert_eq!(
//!     paths,
//!     vec![
//!         "hg38.fa.fai",
//!         "hg38.fa.amb",
//!         "hg38.fa.ann",
//!         "hg38.fa.bwt",
//!         "hg38.fa.pac",
//!         "hg38.fa.sa",
//!         "hg38.dict"
//!     ]
//! );
//! ```
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![warn(rust_2021_compatibility)]

pub mod catalog;
pub mod check;
pub mod formats;
pub mod list;
pub mod resolve;
pub mod utils;

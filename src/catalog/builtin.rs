//! The file formats shipped with `ngs-formats`.
//!
//! When new formats are added, they need to be declared in
//! [`builtin_declarations`] after their parent (if any).

use std::sync::OnceLock;

use super::Catalog;
use super::FormatDeclaration;

/// FASTA with a samtools index (`.fai`).
pub const FASTA_FAI: &str = "FastaFai";
/// FASTA with the samtools index and the BWA index files.
pub const FASTA: &str = "Fasta";
/// [`FASTA`] with a Picard/GATK sequence dictionary (`ref.dict`).
pub const FASTA_WITH_DICT: &str = "FastaWithDict";
/// BAM.
pub const BAM: &str = "Bam";
/// BAM with a `.bai` index.
pub const BAM_BAI: &str = "BamBai";
/// CRAM.
pub const CRAM: &str = "Cram";
/// CRAM with a `.crai` index.
pub const CRAM_CRAI: &str = "CramCrai";
/// Uncompressed VCF.
pub const VCF: &str = "Vcf";
/// BGZF-compressed VCF.
pub const COMPRESSED_VCF: &str = "CompressedVcf";
/// BGZF-compressed VCF with a tabix index.
pub const VCF_TABIX: &str = "VcfTabix";
/// Uncompressed BED.
pub const BED: &str = "Bed";
/// BGZF-compressed BED.
pub const BED_GZ: &str = "BedGz";
/// BGZF-compressed BED with a tabix index.
pub const BED_TABIX: &str = "BedTabix";

static BUILTIN: OnceLock<Catalog> = OnceLock::new();

/// Gets the catalog of built-in formats. The catalog is constructed on first
/// use and is read-only thereafter, so it can be shared freely across threads.
pub fn builtin() -> &'static Catalog {
    BUILTIN.get_or_init(|| {
        let mut catalog = Catalog::new();
        catalog
            .extend(builtin_declarations())
            .expect("built-in format declarations to be valid");
        catalog
    })
}

/// Declarations for every built-in format, parents before children.
pub fn builtin_declarations() -> Vec<FormatDeclaration> {
    vec![
        // Reference sequences
        FormatDeclaration::new(FASTA_FAI, None, vec![".fai"]),
        FormatDeclaration::new(
            FASTA,
            Some(FASTA_FAI),
            vec![".amb", ".ann", ".bwt", ".pac", ".sa"],
        ),
        FormatDeclaration::new(FASTA_WITH_DICT, Some(FASTA), vec!["^.dict"]),
        // Alignments
        FormatDeclaration::new(BAM, None, Vec::<&str>::new()),
        FormatDeclaration::new(BAM_BAI, Some(BAM), vec![".bai"]),
        FormatDeclaration::new(CRAM, None, Vec::<&str>::new()),
        FormatDeclaration::new(CRAM_CRAI, Some(CRAM), vec![".crai"]),
        // Variants
        FormatDeclaration::new(VCF, None, Vec::<&str>::new()),
        FormatDeclaration::new(COMPRESSED_VCF, None, Vec::<&str>::new()),
        FormatDeclaration::new(VCF_TABIX, Some(COMPRESSED_VCF), vec![".tbi"]),
        // Intervals
        FormatDeclaration::new(BED, None, Vec::<&str>::new()),
        FormatDeclaration::new(BED_GZ, None, Vec::<&str>::new()),
        FormatDeclaration::new(BED_TABIX, Some(BED_GZ), vec![".tbi"]),
    ]
}

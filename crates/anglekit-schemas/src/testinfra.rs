//! Query builders for the `testinfra` coverage schema.
//!
//! A representative slice: identifiers, assemblies, covered files, and the
//! file-metadata family. `FileMetadata` and `CoveredFileTestIds` each ship
//! two live versions; the builders carry the version in the type name so
//! neither shadows the other.

use crate::macros::{predicates, schema_enum};

predicates! {
    /// A numeric test identifier.
    TestId / TestIdQuery = positional("testinfra.TestId", 1) {
        id => "id",
    }

    /// An assembly tag string.
    Tag / TagQuery = positional("testinfra.Tag", 4) {
        tag => "tag",
    }

    FbId / FbIdQuery = positional("testinfra.FbId", 4) {
        id => "id",
    }

    DatabaseMetadataField / DatabaseMetadataFieldQuery =
        positional("testinfra.DatabaseMetadataField", 4) {
        field => "field",
    }

    /// Sum over the two assembly identifier spaces.
    AssemblyId / AssemblyIdQuery = union("testinfra.AssemblyId", 4) {
        test_id => "testId",
        fb_id => "fbId",
    }

    /// Coverage observed for one file.
    CoveredFile / CoveredFileQuery = record("testinfra.CoveredFile", 3) {
        file => "file",
        coverage => "coverage",
    }

    CoveredFileTestIds4 / CoveredFileTestIds4Query = record("testinfra.CoveredFileTestIds", 4) {
        file => "file",
        assemblies => "assemblies",
    }

    CoveredFileTestIds5 / CoveredFileTestIds5Query = record("testinfra.CoveredFileTestIds", 5) {
        file => "file",
        assemblies => "assemblies",
    }

    FileMetadata2 / FileMetadata2Query = record("testinfra.FileMetadata", 2) {
        file => "file",
        hash => "hash",
        length => "length",
        nonexecutable_ranges => "nonexecutableRanges",
    }

    FileMetadata4 / FileMetadata4Query = record("testinfra.FileMetadata", 4) {
        file => "file",
        hash => "hash",
        length => "length",
        nonexecutable_ranges => "nonexecutableRanges",
        executable_length => "executableLength",
    }

    MeasuredFile / MeasuredFileQuery = record("testinfra.MeasuredFile", 4) {
        file => "file",
        assemblies => "assemblies",
    }

    /// Inner sum type: covered ranges by line or by byte offset.
    CoverageRange / CoverageRangeQuery = union("testinfra.CoverageRange", 1).anonymous() {
        line_ranges => "lineRanges",
        byte_ranges => "byteRanges",
    }

    /// Inner type: a half-open span as offset plus length.
    OffsetSpan / OffsetSpanQuery = record("testinfra.OffsetSpan", 1).anonymous() {
        offset_from_zero => "offsetFromZero",
        length_at_least_zero => "lengthAtLeastZero",
    }

    /// Inner sum type: whole-file coverage or per-range detail.
    CoverageGranularity / CoverageGranularityQuery =
        union("testinfra.CoverageGranularity", 1).anonymous() {
        file => "file",
        range => "range",
    }

    /// Inner type: one content hash of a measured file.
    FileHash / FileHashQuery = record("testinfra.FileHash", 1).anonymous() {
        algo => "algo",
        hash => "hash",
    }

    /// Inner sum type: the ways a file's length is recorded.
    FileLength / FileLengthQuery = union("testinfra.FileLength", 1).anonymous() {
        lines => "lines",
        offset => "offset",
        line_offsets => "lineOffsets",
        lines_and_offset => "linesAndOffset",
    }
}

schema_enum! {
    /// Hash algorithm of a [`FileHash`] fact.
    HashAlgo {
        Crc32 => "crc32",
        Md5 => "md5",
        Sha1 => "sha1",
    }
}

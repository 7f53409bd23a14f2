//! Base source-file predicates the other schemas reference.

use crate::macros::predicates;

predicates! {
    /// A source file, keyed by repo-relative path.
    File / FileQuery = positional("src.File", 1) {
        path => "path",
    }

    /// A byte range within a file. Inner type: always rendered inline.
    ByteSpan / ByteSpanQuery = record("src.ByteSpan", 1).anonymous() {
        start => "start",
        length => "length",
    }

    /// A file plus the span the fact covers.
    FileLocation / FileLocationQuery = record("src.FileLocation", 1) {
        file => "file",
        span => "span",
    }
}

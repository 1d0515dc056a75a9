/// Subject-area tag whose rules are merged into every selection.
pub const GENERAL_SUBJECT_AREA: &str = "general";

/// Maximum number of unmatched expressions sampled by a coverage report.
pub const MAX_UNMATCHED_SAMPLES: usize = 10;

/// Characters of raw text kept in an unmatched sample.
pub const UNMATCHED_SAMPLE_CHARS: usize = 100;

/// Marker appended to every unmatched sample.
pub const ELLIPSIS: &str = "...";

/// Prefix of the expression audit label recorded per applied rule.
pub const TRANSFORMATION_LABEL_PREFIX: &str = "pattern:";

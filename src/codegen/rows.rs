// Row builder: fixed-width grouping of byte literals
use crate::constants::ROW_INDENT;
use std::num::NonZeroUsize;

/// Number of rows `n` tokens occupy at `chunk_size` tokens per row.
pub fn row_count(
    n: usize,
    chunk_size: NonZeroUsize,
) -> usize {
    n.div_ceil(chunk_size.get())
}

/// Groups tokens into rows of at most `chunk_size`, joined by a single space
/// and indented. The last row may be shorter.
pub fn format_rows(
    tokens: &[String],
    chunk_size: NonZeroUsize,
) -> Vec<String> {
    tokens
        .chunks(chunk_size.get())
        .map(|group| format!("{ROW_INDENT}{}", group.join(" ")))
        .collect()
}

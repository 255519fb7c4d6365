use crate::codegen::{hex::hex_tokens, rows::format_rows};
use crate::constants::{ARRAY_IDENT, GUARD_MACRO, LEN_IDENT};
use std::num::NonZeroUsize;

/// Builds the complete header text declaring `bytes` as a C array and its length.
///
/// The rows block is always followed by a newline before the closing brace, so
/// an empty input still leaves one empty line inside the braces.
pub fn render_header(
    bytes: &[u8],
    chunk_size: NonZeroUsize,
) -> String {
    let rows = format_rows(&hex_tokens(bytes), chunk_size).join("\n");
    format!(
        "#ifndef {GUARD_MACRO}\n#define {GUARD_MACRO}\n\n\
         const unsigned char {ARRAY_IDENT}[] = {{\n\
         {rows}\n\
         }};\n\
         const unsigned int {LEN_IDENT} = {len};\n\n\
         #endif // {GUARD_MACRO}\n",
        len = bytes.len(),
    )
}

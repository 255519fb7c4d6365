#![allow(dead_code)]
use std::num::NonZeroUsize;

pub fn nz(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).expect("chunk size must be non-zero")
}

/// The lines between `= {` and `};`, i.e. the formatted rows.
pub fn array_rows(header: &str) -> Vec<&str> {
    let start = header.find("[] = {\n").expect("array opening") + "[] = {\n".len();
    let end = header[start..].find("\n};\n").expect("array closing") + start;
    header[start..end]
        .split('\n')
        .filter(|row| !row.is_empty())
        .collect()
}

/// Parses the emitted array literal back into bytes, row by row.
pub fn decode_header(header: &str) -> Vec<u8> {
    array_rows(header)
        .into_iter()
        .flat_map(str::split_whitespace)
        .map(|tok| {
            let hex = tok
                .strip_prefix("0x")
                .and_then(|t| t.strip_suffix(','))
                .unwrap_or_else(|| panic!("malformed token {tok:?}"));
            u8::from_str_radix(hex, 16).unwrap()
        })
        .collect()
}

/// Value of the `modelo_esp32_len` constant.
pub fn declared_len(header: &str) -> usize {
    let line = header
        .lines()
        .find(|l| l.starts_with("const unsigned int modelo_esp32_len = "))
        .expect("length constant");
    line.trim_start_matches("const unsigned int modelo_esp32_len = ")
        .trim_end_matches(';')
        .parse()
        .unwrap()
}

/// Renders one byte as a C literal token, e.g. `0x1F,`.
#[inline]
pub fn hex_token(byte: u8) -> String {
    format!("0x{byte:02X},")
}

/// One token per input byte, in input order.
pub fn hex_tokens(bytes: &[u8]) -> Vec<String> {
    bytes.iter().copied().map(hex_token).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_zero_padded_uppercase() {
        assert_eq!(hex_token(0x00), "0x00,");
        assert_eq!(hex_token(0x0a), "0x0A,");
        assert_eq!(hex_token(0xff), "0xFF,");
    }

    #[test]
    fn one_token_per_byte() {
        let tokens = hex_tokens(&[0x00, 0x1F, 0xFF]);
        assert_eq!(tokens, vec!["0x00,", "0x1F,", "0xFF,"]);
        assert!(hex_tokens(&[]).is_empty());
    }
}

/// `0x` followed by two lowercase hex digits, e.g. `0x0a`.
pub fn byte_literal(b: u8) -> String {
    format!("0x{}", hex::encode([b]))
}

/// Comma separated literals for one array row, without leading indent.
pub fn byte_row(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| byte_literal(b))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literals_are_zero_padded_lowercase() {
        assert_eq!(byte_literal(0), "0x00");
        assert_eq!(byte_literal(0x0a), "0x0a");
        assert_eq!(byte_literal(0xff), "0xff");
        for b in 0..=u8::MAX {
            let lit = byte_literal(b);
            assert_eq!(lit.len(), 4, "{lit}");
            assert_eq!(lit, lit.to_lowercase());
            assert_eq!(u8::from_str_radix(&lit[2..], 16).unwrap(), b);
        }
    }

    #[test]
    fn row_joins_with_comma_space() {
        assert_eq!(byte_row(&[0x00, 0x01, 0xab]), "0x00, 0x01, 0xab");
        assert_eq!(byte_row(&[0x10]), "0x10");
    }
}

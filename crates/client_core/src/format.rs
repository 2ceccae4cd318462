//! Pure display formatting: code point extraction, binary octets, and
//! fixed-width chunking for multi-line output blocks.

/// Line width for chunked hex display blocks.
pub const HEX_LINE_WIDTH: usize = 64;

/// Line width for chunked binary display blocks.
pub const BINARY_LINE_WIDTH: usize = 256;

/// One numeric code per Unicode code point, in order.
pub fn code_points(text: &str) -> Vec<u32> {
    text.chars().map(|ch| ch as u32).collect()
}

/// Zero-padded base-2 rendering of each code, 8 digits minimum.
pub fn binary_octets(codes: &[u32]) -> Vec<String> {
    codes.iter().map(|code| format!("{code:08b}")).collect()
}

/// Partition `s` left to right into substrings of at most `width` code
/// points. Concatenating the chunks restores `s`; only the final chunk may
/// be shorter than `width`. An empty string yields no chunks.
pub fn chunk(s: &str, width: usize) -> Vec<&str> {
    assert!(width > 0, "chunk width must be positive");
    let mut chunks = Vec::with_capacity(s.len() / width + 1);
    let mut rest = s;
    while !rest.is_empty() {
        let cut = rest
            .char_indices()
            .nth(width)
            .map_or(rest.len(), |(idx, _)| idx);
        let (head, tail) = rest.split_at(cut);
        chunks.push(head);
        rest = tail;
    }
    chunks
}

/// Chunks of `s` joined with line breaks for display. Empty input renders
/// as the empty string, never as a missing value.
pub fn chunk_lines(s: &str, width: usize) -> String {
    chunk(s, width).join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_points_follow_character_order() {
        assert_eq!(code_points("Hi"), vec![72, 105]);
        assert_eq!(code_points(""), Vec::<u32>::new());
    }

    #[test]
    fn code_points_count_characters_not_bytes() {
        // Three code points, five bytes.
        assert_eq!(code_points("héé").len(), 3);
        assert_eq!(code_points("é"), vec![0xE9]);
    }

    #[test]
    fn binary_octets_are_eight_zero_padded_digits() {
        let octets = binary_octets(&code_points("Hi"));
        assert_eq!(octets, vec!["01001000", "01101001"]);
        for (octet, code) in octets.iter().zip([72u32, 105]) {
            assert_eq!(octet.len(), 8);
            assert!(octet.chars().all(|c| c == '0' || c == '1'));
            assert_eq!(u32::from_str_radix(octet, 2).expect("parse"), code);
        }
    }

    #[test]
    fn chunks_partition_without_overlap() {
        let chunks = chunk("abcdefgh", 3);
        assert_eq!(chunks, vec!["abc", "def", "gh"]);
        assert_eq!(chunks.concat(), "abcdefgh");

        let exact = chunk("abcdef", 3);
        assert_eq!(exact, vec!["abc", "def"]);
        assert!(exact.iter().all(|c| c.len() == 3));
    }

    #[test]
    fn chunk_of_empty_string_renders_as_empty() {
        assert!(chunk("", 64).is_empty());
        assert_eq!(chunk_lines("", 64), "");
    }

    #[test]
    fn chunk_lines_joins_at_display_width() {
        let hex: String = "a".repeat(130);
        let lines = chunk_lines(&hex, HEX_LINE_WIDTH);
        let rendered: Vec<&str> = lines.split('\n').collect();
        assert_eq!(rendered.len(), 3);
        assert_eq!(rendered[0].len(), 64);
        assert_eq!(rendered[1].len(), 64);
        assert_eq!(rendered[2].len(), 2);

        // A single short block stays on one line.
        assert_eq!(chunk_lines("a1b2", HEX_LINE_WIDTH), "a1b2");
    }
}

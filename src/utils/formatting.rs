/// Utility functions for formatting display values

/// Shorten an address for display: first 10 characters, ellipsis, last 8
pub fn format_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() > 18 {
        let head: String = chars[..10].iter().collect();
        let tail: String = chars[chars.len() - 8..].iter().collect();
        format!("{}...{}", head, tail)
    } else {
        address.to_string()
    }
}

/// Escape text for Telegram MarkdownV2
pub fn escape_markdown(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '_' | '*' | '[' | ']' | '(' | ')' | '~' | '`' | '>' | '#' | '+' | '-' | '='
            | '|' | '{' | '}' | '.' | '!' => format!("\\{}", c),
            _ => c.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_address() {
        let address = "0x1234567890abcdef1234567890abcdef12345678";
        assert_eq!(format_address(address), "0x12345678...12345678");
        assert_eq!(format_address("short"), "short");
    }

    #[test]
    fn test_escape_markdown() {
        assert_eq!(escape_markdown("a.b!c"), "a\\.b\\!c");
        assert_eq!(escape_markdown("plain text"), "plain text");
    }
}

//! Keeps response bodies short in debug logs.
//!
//! Zone files and TXT records can be large; only a prefix is logged.

const LOG_BODY_CHARS: usize = 256;

/// First `LOG_BODY_CHARS` characters of `body`, with the full byte length
/// appended when something was cut.
pub fn truncate_for_log(body: &str) -> String {
    match body.char_indices().nth(LOG_BODY_CHARS) {
        None => body.to_string(),
        Some((cut, _)) => format!("{}... ({} bytes total)", &body[..cut], body.len()),
    }
}

/// Replace all but the last four characters of a token.
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 4 {
        return "****".to_string();
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("****{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_body_unchanged() {
        assert_eq!(truncate_for_log("{\"data\":[]}"), "{\"data\":[]}");
    }

    #[test]
    fn long_body_truncated_on_char_boundary() {
        let body = "é".repeat(300);
        let out = truncate_for_log(&body);
        assert!(out.starts_with(&"é".repeat(256)));
        assert!(out.ends_with("(600 bytes total)"));
    }

    #[test]
    fn token_masking() {
        assert_eq!(mask_token("abc"), "****");
        assert_eq!(mask_token("dnsimple_token_1234"), "****1234");
    }
}

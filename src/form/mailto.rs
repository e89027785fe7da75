//! mailto: link construction
//!
//! Delivery is delegated to the visitor's own mail client: submit builds a
//! `mailto:` URL with the subject and a prefilled body, and the host opens it.
//! Encoding matches JavaScript's `encodeURIComponent` (unreserved set
//! `A-Z a-z 0-9 - _ . ! ~ * ' ( )`, everything else per UTF-8 byte).

/// Percent-encode one component of a mailto URL.
fn encode_component(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(byte as char),
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

/// Build the full mailto URL for a submitted contact form.
///
/// Body layout: `Name: {name}\nEmail: {email}\n\nMessage:\n{message}`.
pub fn mailto_link(to: &str, subject: &str, name: &str, email: &str, message: &str) -> String {
    let body = format!("Name: {name}\nEmail: {email}\n\nMessage:\n{message}");
    format!(
        "mailto:{to}?subject={}&body={}",
        encode_component(subject),
        encode_component(&body)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_unreserved_passthrough() {
        assert_eq!(encode_component("Abc-_.!~*'()123"), "Abc-_.!~*'()123");
    }

    #[test]
    fn test_encode_specials() {
        assert_eq!(encode_component("a b"), "a%20b");
        assert_eq!(encode_component("a\nb"), "a%0Ab");
        assert_eq!(encode_component("a&b=c?d"), "a%26b%3Dc%3Fd");
        assert_eq!(encode_component("50%"), "50%25");
    }

    #[test]
    fn test_encode_utf8_bytes() {
        // Multi-byte characters are encoded per UTF-8 byte
        assert_eq!(encode_component("ü"), "%C3%BC");
        assert_eq!(encode_component("日"), "%E6%97%A5");
    }

    #[test]
    fn test_mailto_link_layout() {
        let url = mailto_link(
            "owner@example.dev",
            "Job offer",
            "Jane Doe",
            "jane@corp.com",
            "Hello there!",
        );
        assert_eq!(
            url,
            "mailto:owner@example.dev?subject=Job%20offer\
             &body=Name%3A%20Jane%20Doe%0AEmail%3A%20jane%40corp.com%0A%0AMessage%3A%0AHello%20there!"
        );
    }
}

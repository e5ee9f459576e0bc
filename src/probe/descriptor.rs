//! Reduction of free-form introspection text to a canonical descriptor.

use std::path::Path;

/// Token that marks a multi-architecture image
pub const UNIVERSAL_TOKEN: &str = "universal";

/// Descriptor used when the text is too short to carry an architecture
pub const UNKNOWN_DESCRIPTOR: &str = "unknown";

/// Fewer tokens than this cannot describe an architecture.
const MIN_TOKENS: usize = 5;

/// Tokens before this index are `<path>`, `:` and the format name.
const DESCRIPTOR_START: usize = 3;

/// Splits introspection output into tokens.
///
/// Output of the form `<path>: <description>` keeps the probed path as a
/// single token (even if it contains spaces) and the colon as its own token.
/// Anything else is split on whitespace.
pub fn tokenize<'a>(output: &'a str, path: &Path) -> Vec<&'a str> {
    let prefix = path.to_string_lossy();
    let mut tokens = Vec::new();

    let rest = match output
        .strip_prefix(prefix.as_ref())
        .and_then(|rest| rest.strip_prefix(':'))
    {
        Some(rest) if !prefix.is_empty() => {
            tokens.push(&output[..prefix.len()]);
            tokens.push(":");
            rest
        }
        _ => output,
    };

    tokens.extend(rest.split_whitespace());
    tokens
}

/// Extracts the canonical architecture descriptor from introspection output.
///
/// Any token equal to `universal` wins outright. Otherwise tokens from index 3
/// onward are joined with single spaces, provided at least five tokens exist;
/// shorter output yields `unknown`.
pub fn extract_architecture(output: &str, path: &Path) -> String {
    let tokens = tokenize(output, path);

    if tokens.iter().any(|token| *token == UNIVERSAL_TOKEN) {
        return UNIVERSAL_TOKEN.to_string();
    }

    if tokens.len() >= MIN_TOKENS {
        tokens[DESCRIPTOR_START..].join(" ")
    } else {
        UNKNOWN_DESCRIPTOR.to_string()
    }
}

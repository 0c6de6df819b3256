use crate::compat::String;
use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};

// Components are stored decoded, so every set below also encodes `%` to keep
// re-encoding lossless.

/// Fragment percent-encode set
/// C0 control + space, ", %, <, >, \`
pub const FRAGMENT_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'`');

/// Path segment percent-encode set
/// Fragment + #, /, ?, ^, {, }
pub const PATH_SEGMENT_SET: &AsciiSet = &FRAGMENT_SET
    .add(b'#')
    .add(b'/')
    .add(b'?')
    .add(b'^')
    .add(b'{')
    .add(b'}');

/// Userinfo percent-encode set
/// Path segment + :, ;, =, @, [, \, ], |
pub const USERINFO_SET: &AsciiSet = &PATH_SEGMENT_SET
    .add(b':')
    .add(b';')
    .add(b'=')
    .add(b'@')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'|');

/// Write percent-encoded string directly to buffer
pub fn percent_encode_into(buffer: &mut String, input: &str, encode_set: &'static AsciiSet) {
    buffer.reserve(input.len());
    for chunk in utf8_percent_encode(input, encode_set) {
        buffer.push_str(chunk);
    }
}

/// Percent-encode for userinfo (user name or password)
pub fn percent_encode_userinfo_into(buffer: &mut String, input: &str) {
    percent_encode_into(buffer, input, USERINFO_SET);
}

/// Percent-encode a single path segment
pub fn percent_encode_segment_into(buffer: &mut String, input: &str) {
    percent_encode_into(buffer, input, PATH_SEGMENT_SET);
}

/// Percent-encode fragment directly into buffer
pub fn percent_encode_fragment_into(buffer: &mut String, input: &str) {
    percent_encode_into(buffer, input, FRAGMENT_SET);
}

/// Decode percent-encoded string.
/// Invalid UTF-8 after decoding is replaced rather than rejected.
pub fn percent_decode(input: &str) -> String {
    percent_decode_str(input).decode_utf8_lossy().into_owned()
}

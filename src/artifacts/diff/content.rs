use bytes::Bytes;

/// Number of leading bytes inspected when sniffing for binary content
const BINARY_SNIFF_LEN: usize = 8000;

/// One version of a file, shared cheaply between snapshots and renderers
pub type Content = Bytes;

/// Split content into lines on `\n`
///
/// A trailing terminator yields a final empty line, so joining the result
/// with `\n` reproduces the input exactly.
pub fn split_lines(content: &[u8]) -> Vec<&[u8]> {
    content.split(|&b| b == b'\n').collect()
}

/// Same heuristic as git: a NUL byte near the start means binary
pub fn is_binary(content: &[u8]) -> bool {
    content[..content.len().min(BINARY_SNIFF_LEN)].contains(&0)
}

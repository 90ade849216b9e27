//! Encoding detection and transcoding module
//!
//! Word lists in the wild are not always UTF-8 (older `/usr/share/dict`
//! files are often ISO-8859-1). The dictionary bytes are sniffed once and
//! every line is decoded to UTF-8 before it is inserted.

use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use std::borrow::Cow;

/// Result of encoding detection
#[derive(Debug, Clone)]
pub struct EncodingInfo {
    /// Detected encoding name
    pub name: &'static str,
    /// Confidence level (0.0 - 1.0)
    pub confidence: f32,
    /// The encoding_rs Encoding reference
    pub encoding: &'static Encoding,
    /// Length of the byte order mark, if one was found
    pub bom_len: usize,
}

impl Default for EncodingInfo {
    fn default() -> Self {
        Self {
            name: "UTF-8",
            confidence: 1.0,
            encoding: encoding_rs::UTF_8,
            bom_len: 0,
        }
    }
}

/// Detect the encoding of a word list.
///
/// The whole buffer is checked: a single non-UTF-8 byte deep in the file
/// is enough to switch to a legacy decoder.
pub fn detect_encoding(content: &[u8]) -> EncodingInfo {
    if content.is_empty() {
        return EncodingInfo::default();
    }

    if let Some((encoding, bom_len)) = Encoding::for_bom(content) {
        return EncodingInfo {
            name: encoding.name(),
            confidence: 1.0,
            encoding,
            bom_len,
        };
    }

    // Valid UTF-8 wins outright; chardetng would otherwise guess a legacy
    // encoding for pure ASCII input, which decodes identically anyway.
    if std::str::from_utf8(content).is_ok() {
        return EncodingInfo::default();
    }

    let mut detector = EncodingDetector::new();
    detector.feed(content, true);
    let encoding = detector.guess(None, true);

    let confidence = if encoding == encoding_rs::UTF_8 { 0.5 } else { 0.8 };

    EncodingInfo {
        name: encoding.name(),
        confidence,
        encoding,
        bom_len: 0,
    }
}

/// Iterator over the lines of a byte buffer, decoded to UTF-8.
///
/// Lines are split on `\n`; a trailing `\r` is stripped as well. Nothing
/// else is trimmed. A final line without a terminator is still yielded, but
/// a trailing terminator does not produce an extra empty line.
pub struct DecodedLines<'a> {
    content: Cow<'a, [u8]>,
    encoding: &'static Encoding,
    position: usize,
}

impl<'a> DecodedLines<'a> {
    pub fn new(content: &'a [u8], info: &EncodingInfo) -> Self {
        let body = &content[info.bom_len.min(content.len())..];

        // UTF-16 newlines are two bytes wide; transcode the whole buffer up
        // front and split the UTF-8 result instead.
        if info.encoding == encoding_rs::UTF_16LE || info.encoding == encoding_rs::UTF_16BE {
            let (decoded, had_errors) = info.encoding.decode_without_bom_handling(body);
            if had_errors {
                log::warn!("Encoding errors in word list, using lossy conversion");
            }
            return Self {
                content: Cow::Owned(decoded.into_owned().into_bytes()),
                encoding: encoding_rs::UTF_8,
                position: 0,
            };
        }

        Self {
            content: Cow::Borrowed(body),
            encoding: info.encoding,
            position: 0,
        }
    }
}

impl<'a> Iterator for DecodedLines<'a> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position >= self.content.len() {
            return None;
        }

        let remaining = &self.content[self.position..];
        let line_end = memchr::memchr(b'\n', remaining)
            .map(|i| i + 1)
            .unwrap_or(remaining.len());

        let line_bytes = &remaining[..line_end];
        self.position += line_end;

        let line_bytes = line_bytes.strip_suffix(b"\n").unwrap_or(line_bytes);
        let line_bytes = line_bytes.strip_suffix(b"\r").unwrap_or(line_bytes);

        if self.encoding == encoding_rs::UTF_8 {
            match std::str::from_utf8(line_bytes) {
                Ok(s) => Some(s.to_string()),
                Err(_) => {
                    log::warn!("Invalid UTF-8 in word list, using lossy conversion");
                    Some(String::from_utf8_lossy(line_bytes).into_owned())
                }
            }
        } else {
            let (decoded, _, had_errors) = self.encoding.decode(line_bytes);
            if had_errors {
                log::warn!("Encoding errors in word list line, using lossy conversion");
            }
            Some(decoded.into_owned())
        }
    }
}

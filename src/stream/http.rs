//! HTTP/1.x response head parsing.
//!
//! Only used to describe the header block stripped from the stream; the
//! artifact bytes never depend on it.

/// End-of-headers delimiter.
pub const HEADER_DELIMITER: &[u8; 4] = b"\r\n\r\n";

/// Find the end of HTTP headers.
///
/// Returns the offset of the first body byte (just past `\r\n\r\n`).
pub fn find_header_end(data: &[u8]) -> Option<usize> {
    data.windows(HEADER_DELIMITER.len())
        .position(|w| w == HEADER_DELIMITER)
        .map(|p| p + HEADER_DELIMITER.len())
}

/// A parsed HTTP response status line and headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseHead {
    pub version: String,
    pub status: u16,
    pub reason: String,
    /// Header names lowercased, in order of appearance.
    pub headers: Vec<(String, String)>,
}

impl ResponseHead {
    /// Parse a header block (status line plus headers).
    ///
    /// Returns `None` when the block is not UTF-8 or does not start with an
    /// HTTP status line.
    pub fn parse(block: &[u8]) -> Option<Self> {
        let text = std::str::from_utf8(block).ok()?;
        let mut lines = text.lines();
        let (version, status, reason) = parse_status_line(lines.next()?)?;

        let headers = lines
            .filter_map(|line| line.split_once(':'))
            .map(|(key, value)| (key.trim().to_lowercase(), value.trim().to_string()))
            .collect();

        Some(Self {
            version,
            status,
            reason,
            headers,
        })
    }

    /// First value of a header, by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        let name = name.to_lowercase();
        self.headers
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn content_length(&self) -> Option<usize> {
        self.header("content-length").and_then(|v| v.parse().ok())
    }

    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }

    /// Check if transfer encoding is chunked.
    pub fn is_chunked(&self) -> bool {
        self.header("transfer-encoding")
            .map(|v| v.to_lowercase().contains("chunked"))
            .unwrap_or(false)
    }
}

/// Parse HTTP status line: "VERSION STATUS TEXT"
fn parse_status_line(line: &str) -> Option<(String, u16, String)> {
    if !line.starts_with("HTTP/") {
        return None;
    }
    let parts: Vec<&str> = line.splitn(3, ' ').collect();
    if parts.len() >= 2 {
        let version = parts[0].to_string();
        let status = parts[1].parse().ok()?;
        let text = parts.get(2).unwrap_or(&"").to_string();
        Some((version, status, text))
    } else {
        None
    }
}

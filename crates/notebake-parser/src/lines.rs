//! Offset-tracking line scanner shared by the structural scanners

/// One source line with its position and code-fence state
#[derive(Debug, Clone, Copy)]
pub struct Line<'a> {
    /// Zero-based line number
    pub index: usize,
    /// Byte offset of the line start
    pub offset: usize,
    /// Line text without the trailing newline or carriage return
    pub text: &'a str,
    /// Whether the line sits inside a fenced code block (fence markers
    /// themselves count as inside)
    pub in_fence: bool,
}

impl Line<'_> {
    /// Byte offset just past the visible line content
    pub fn end(&self) -> usize {
        self.offset + self.text.len()
    }
}

/// Split content into lines with byte offsets and fence tracking
pub fn scan_lines(content: &str) -> Vec<Line<'_>> {
    let mut lines = Vec::new();
    let mut offset = 0;
    let mut in_fence = false;

    for (index, raw) in content.split_inclusive('\n').enumerate() {
        let text = raw.trim_end_matches(['\n', '\r']);
        let is_fence_marker = text.trim_start().starts_with("```");
        if is_fence_marker && !in_fence {
            in_fence = true;
            lines.push(Line {
                index,
                offset,
                text,
                in_fence: true,
            });
        } else {
            lines.push(Line {
                index,
                offset,
                text,
                in_fence,
            });
            if is_fence_marker && in_fence {
                in_fence = false;
            }
        }
        offset += raw.len();
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets_and_text() {
        let lines = scan_lines("ab\ncd\n\nef");
        assert_eq!(lines.len(), 4);
        assert_eq!((lines[0].offset, lines[0].text), (0, "ab"));
        assert_eq!((lines[1].offset, lines[1].text), (3, "cd"));
        assert_eq!((lines[2].offset, lines[2].text), (6, ""));
        assert_eq!((lines[3].offset, lines[3].text), (7, "ef"));
        assert_eq!(lines[3].end(), 9);
    }

    #[test]
    fn test_crlf_lines() {
        let lines = scan_lines("ab\r\ncd");
        assert_eq!(lines[0].text, "ab");
        assert_eq!(lines[1].offset, 4);
    }

    #[test]
    fn test_fence_tracking() {
        let lines = scan_lines("a\n```\n- not a list\n```\nb");
        let flags: Vec<bool> = lines.iter().map(|l| l.in_fence).collect();
        assert_eq!(flags, vec![false, true, true, true, false]);
    }
}

/// Line ending emitted after each formatted line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    /// `\n`
    Lf,
    /// `\r\n`
    CrLf,
}

impl LineEnding {
    fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// Pretty-print XML markup with depth-based indentation.
///
/// Instantiated via `XmlFormatterBuilder`
#[derive(Debug, Clone)]
pub struct XmlFormatter {
    indent_factor: u8,
    line_ending: LineEnding,
}

impl Default for XmlFormatter {
    fn default() -> Self {
        XmlFormatterBuilder::new().build()
    }
}

/// Construct a customized xml formatter
///
/// ```
/// use secom_content::{LineEnding, XmlFormatterBuilder};
/// let formatter = XmlFormatterBuilder::new()
///     .indent_factor(4)
///     .line_ending(LineEnding::CrLf)
///     .build();
/// assert_eq!(formatter.format("<a><b/></a>"), "<a>\r\n    <b/>\r\n</a>\r\n");
/// ```
#[derive(Debug, Clone)]
pub struct XmlFormatterBuilder {
    indent_factor: u8,
    line_ending: LineEnding,
}

impl Default for XmlFormatterBuilder {
    fn default() -> Self {
        XmlFormatterBuilder {
            indent_factor: 2,
            line_ending: LineEnding::Lf,
        }
    }
}

impl XmlFormatterBuilder {
    /// Creates a builder with two space indents and `\n` line endings
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of spaces per nesting level. Defaults to 2
    pub fn indent_factor(mut self, factor: u8) -> Self {
        self.indent_factor = factor;
        self
    }

    /// Line ending emitted after each line. Defaults to [`LineEnding::Lf`]
    pub fn line_ending(mut self, ending: LineEnding) -> Self {
        self.line_ending = ending;
        self
    }

    /// Construct the formatter
    pub fn build(self) -> XmlFormatter {
        XmlFormatter {
            indent_factor: self.indent_factor,
            line_ending: self.line_ending,
        }
    }
}

impl XmlFormatter {
    /// Formats the given markup, one tag per line, indented by depth
    ///
    /// Empty input yields an empty string. Mismatched tags are not an
    /// error: depth simply never drops below zero and may end non-zero.
    ///
    /// ```
    /// use secom_content::XmlFormatter;
    /// let formatter = XmlFormatter::default();
    /// assert_eq!(
    ///     formatter.format("<a><b>x</b></a>"),
    ///     "<a>\n  <b>x</b>\n</a>\n"
    /// );
    /// ```
    pub fn format(&self, xml: &str) -> String {
        let mut formatted = String::with_capacity(xml.len() + xml.len() / 4);
        let mut depth: usize = 0;

        for line in split_tag_boundaries(xml) {
            let kind = classify(line.as_bytes());
            if kind == LineKind::Closing {
                depth = depth.saturating_sub(1);
            }

            for _ in 0..depth * usize::from(self.indent_factor) {
                formatted.push(' ');
            }
            formatted.push_str(line);
            formatted.push_str(self.line_ending.as_str());

            if kind == LineKind::Opening {
                depth += 1;
            }
        }

        formatted
    }
}

/// Formats markup with the default two-space, `\n` convention
///
/// ```
/// use secom_content::format_xml;
/// assert_eq!(format_xml("<r><v>1</v></r>"), "<r>\n  <v>1</v>\n</r>\n");
/// assert_eq!(format_xml(""), "");
/// ```
pub fn format_xml(xml: &str) -> String {
    XmlFormatter::default().format(xml)
}

/// Splits the markup at every `>` immediately followed by `<`
///
/// The boundary characters stay attached to their own lines, so
/// concatenating the pieces reproduces the input exactly.
fn split_tag_boundaries(xml: &str) -> TagBoundarySplit<'_> {
    TagBoundarySplit { rest: xml }
}

struct TagBoundarySplit<'a> {
    rest: &'a str,
}

impl<'a> Iterator for TagBoundarySplit<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }

        let bytes = self.rest.as_bytes();
        let split = bytes
            .windows(2)
            .position(|pair| pair == b"><")
            .map(|at| at + 1)
            .unwrap_or(bytes.len());

        let (line, rest) = self.rest.split_at(split);
        self.rest = rest;
        Some(line)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    /// Opens and closes an element on the same line, eg: `<b>x</b>`
    SelfContained,
    /// A closing tag, eg: `</a>`
    Closing,
    /// Opens a non-self-closing element, eg: `<a>` or `<a attr="1">text`
    Opening,
    /// Anything else: text, declarations, comments, self-closing tags
    Other,
}

fn classify(line: &[u8]) -> LineKind {
    if ends_with_inline_close(line) {
        LineKind::SelfContained
    } else if is_closing(line) {
        LineKind::Closing
    } else if is_opening(line) {
        LineKind::Opening
    } else {
        LineKind::Other
    }
}

fn is_name_start(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Content followed by a closing tag running to the end of the line
fn ends_with_inline_close(line: &[u8]) -> bool {
    // shortest match is one content byte plus `</x>`
    if line.len() < 5 || line[line.len() - 1] != b'>' {
        return false;
    }

    let open = match line.iter().rposition(|&b| b == b'<') {
        Some(at) => at,
        None => return false,
    };

    open > 0
        && line.get(open + 1) == Some(&b'/')
        && line.get(open + 2).copied().is_some_and(is_name_start)
        && line[open..line.len() - 1].iter().all(|&b| b != b'>')
}

fn is_closing(line: &[u8]) -> bool {
    line.len() >= 3 && line[0] == b'<' && line[1] == b'/' && is_name_start(line[2])
}

fn is_opening(line: &[u8]) -> bool {
    if line.len() < 3 || line[0] != b'<' || !is_name_start(line[1]) {
        return false;
    }

    match line.iter().position(|&b| b == b'>') {
        Some(gt) => line[gt - 1] != b'/',
        None => false,
    }
}

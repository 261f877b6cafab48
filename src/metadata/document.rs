use std::ops::Range;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use super::path::ElementPath;
use crate::error::{BumperError, Result};

const BOM: char = '\u{feff}';
const CDATA_OPEN: &str = "<![CDATA[";
const CDATA_CLOSE: &str = "]]>";

/// An XML package metadata document held as its original text.
///
/// Lookups re-scan the text with a streaming reader and record byte offsets,
/// so [`MetadataDocument::set_text`] rewrites only the element's leading
/// character data and leaves every other byte of the document untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct MetadataDocument {
    source: String,
}

/// An element located in a [`MetadataDocument`].
///
/// Offsets refer to the document the element was found in; an element is
/// consumed by [`MetadataDocument::set_text`].
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    name: String,
    text: String,
    span: TextSpan,
}

#[derive(Debug, Clone, PartialEq)]
enum TextSpan {
    /// Text and CDATA right after the start tag, up to the first other node
    Leading(Range<usize>),
    /// Whole `<name .../>` tag, plus what is needed to expand it
    SelfClosing {
        tag: Range<usize>,
        open_tag: String,
        qname: String,
    },
}

impl Element {
    /// Local name of the element
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unescaped character data right after the start tag, whitespace included.
    ///
    /// Stops at the first comment, processing instruction or child element.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl MetadataDocument {
    /// Parse and validate a document.
    ///
    /// # Returns
    /// * `Ok(MetadataDocument)` - The text is well-formed
    /// * `Err(BumperError::MalformedDocument)` - Syntax errors, mismatched or
    ///   unclosed tags
    pub fn parse(source: impl Into<String>) -> Result<Self> {
        let document = MetadataDocument {
            source: source.into(),
        };
        document.validate()?;
        Ok(document)
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn into_string(self) -> String {
        self.source
    }

    /// The document without a leading byte order mark, and the BOM's length.
    ///
    /// The reader drops a BOM without counting it in its positions, so it is
    /// never handed one and its offsets are shifted back by hand.
    fn body(&self) -> (usize, &str) {
        match self.source.strip_prefix(BOM) {
            Some(body) => (BOM.len_utf8(), body),
            None => (0, &self.source),
        }
    }

    fn validate(&self) -> Result<()> {
        let (_, body) = self.body();
        let mut reader = Reader::from_str(body);
        let mut depth = 0usize;
        let mut roots = 0usize;

        loop {
            match reader.read_event().map_err(|e| malformed(&reader, e))? {
                Event::Start(_) => {
                    if depth == 0 {
                        roots += 1;
                    }
                    depth += 1;
                }
                Event::Empty(_) if depth == 0 => roots += 1,
                Event::End(_) => {
                    depth = depth.checked_sub(1).ok_or_else(|| {
                        BumperError::malformed("closing tag without a matching opening tag")
                    })?;
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if depth != 0 {
            return Err(BumperError::malformed(format!(
                "unexpected end of document with {} unclosed element(s)",
                depth
            )));
        }
        if roots > 1 {
            return Err(BumperError::malformed(format!(
                "document has {} root elements, expected one",
                roots
            )));
        }
        Ok(())
    }

    /// Find the first element, in document order, addressed by `path`.
    pub fn find(&self, path: &ElementPath) -> Result<Option<Element>> {
        let (offset, body) = self.body();
        let mut reader = Reader::from_str(body);
        let mut open: Vec<String> = Vec::new();

        loop {
            match reader.read_event().map_err(|e| malformed(&reader, e))? {
                Event::Start(start) => {
                    open.push(local_name(&start));
                    if path.matches(open.as_slice()) {
                        let content_start = offset + reader.buffer_position();
                        let (text, run) = self.leading_text(content_start)?;
                        return Ok(Some(Element {
                            name: path.leaf().to_string(),
                            text,
                            span: TextSpan::Leading(run),
                        }));
                    }
                }
                Event::Empty(start) => {
                    open.push(local_name(&start));
                    if path.matches(open.as_slice()) {
                        let tag_end = offset + reader.buffer_position();
                        let tag_start = self.source[..tag_end].rfind('<').unwrap_or(offset);
                        return Ok(Some(Element {
                            name: path.leaf().to_string(),
                            text: String::new(),
                            span: TextSpan::SelfClosing {
                                tag: tag_start..tag_end,
                                open_tag: String::from_utf8_lossy(&start).into_owned(),
                                qname: String::from_utf8_lossy(start.name().as_ref())
                                    .into_owned(),
                            },
                        }));
                    }
                    open.pop();
                }
                Event::End(_) => {
                    open.pop();
                }
                Event::Eof => break,
                _ => {}
            }
        }

        Ok(None)
    }

    /// Collect the text and CDATA starting at byte `start`, stopping at the
    /// first markup that is not CDATA.
    fn leading_text(&self, start: usize) -> Result<(String, Range<usize>)> {
        let mut text = String::new();
        let mut end = start;

        loop {
            let rest = &self.source[end..];
            if let Some(cdata) = rest.strip_prefix(CDATA_OPEN) {
                let len = cdata
                    .find(CDATA_CLOSE)
                    .ok_or_else(|| BumperError::malformed("unterminated CDATA section"))?;
                text.push_str(&cdata[..len]);
                end += CDATA_OPEN.len() + len + CDATA_CLOSE.len();
            } else if rest.is_empty() || rest.starts_with('<') {
                break;
            } else {
                // Well-formed character data never contains a raw '<'
                let len = rest.find('<').unwrap_or(rest.len());
                let unescaped = quick_xml::escape::unescape(&rest[..len]).map_err(|e| {
                    BumperError::malformed(format!("error at byte {}: {}", end, e))
                })?;
                text.push_str(&unescaped);
                end += len;
            }
        }

        Ok((text, start..end))
    }

    /// Find `path`, failing with [`BumperError::MissingElement`] if absent.
    pub fn require(&self, path: &ElementPath) -> Result<Element> {
        self.find(path)?
            .ok_or_else(|| BumperError::missing_element(path.leaf(), path.to_string()))
    }

    /// Replace the leading character data of `element` with the escaped `value`.
    ///
    /// Comments, processing instructions and child elements after that text
    /// are kept. A self-closing element becomes an open/close pair with its
    /// attributes kept.
    pub fn set_text(&mut self, element: Element, value: &str) {
        let escaped = quick_xml::escape::escape(value);
        match element.span {
            TextSpan::Leading(range) => {
                self.source.replace_range(range, &escaped);
            }
            TextSpan::SelfClosing {
                tag,
                open_tag,
                qname,
            } => {
                let open_tag = open_tag.trim_end();
                let expanded = format!("<{}>{}</{}>", open_tag, escaped, qname);
                self.source.replace_range(tag, &expanded);
            }
        }
    }
}

fn local_name(start: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(start.local_name().as_ref()).into_owned()
}

fn malformed(reader: &Reader<&[u8]>, err: quick_xml::Error) -> BumperError {
    BumperError::malformed(format!(
        "error at byte {}: {}",
        reader.buffer_position(),
        err
    ))
}

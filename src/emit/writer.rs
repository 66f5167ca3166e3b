//! Indent-aware element writer for job descriptor XML.
//!
//! Descriptors use 4-space indentation. Attribute values are escaped on
//! every write, regardless of upstream sanitization.

/// Element writer that produces formatted, deterministic XML text.
pub struct XmlWriter {
    buf: String,
    open: Vec<String>,
}

impl XmlWriter {
    pub fn new() -> Self {
        Self {
            buf: String::with_capacity(4096),
            open: Vec::new(),
        }
    }

    /// Write the XML declaration. Must be the first write.
    pub fn declaration(&mut self) {
        self.buf
            .push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    }

    /// Open an element with the given attributes, in the given order.
    pub fn open(&mut self, name: &str, attrs: &[(&str, &str)]) {
        self.write_indent();
        self.buf.push('<');
        self.buf.push_str(name);
        self.write_attrs(attrs);
        self.buf.push_str(">\n");
        self.open.push(name.to_string());
    }

    /// Write a self-closing element.
    pub fn empty(&mut self, name: &str, attrs: &[(&str, &str)]) {
        self.write_indent();
        self.buf.push('<');
        self.buf.push_str(name);
        self.write_attrs(attrs);
        self.buf.push_str("/>\n");
    }

    /// Close the most recently opened element.
    pub fn close(&mut self) {
        let Some(name) = self.open.pop() else { return };
        self.write_indent();
        self.buf.push_str("</");
        self.buf.push_str(&name);
        self.buf.push_str(">\n");
    }

    /// Consume the writer and return the document text.
    pub fn finish(mut self) -> String {
        while !self.open.is_empty() {
            self.close();
        }
        self.buf
    }

    fn write_indent(&mut self) {
        for _ in 0..self.open.len() {
            self.buf.push_str("    ");
        }
    }

    fn write_attrs(&mut self, attrs: &[(&str, &str)]) {
        for (name, value) in attrs {
            self.buf.push(' ');
            self.buf.push_str(name);
            self.buf.push_str("=\"");
            self.buf.push_str(&escape_attr(value));
            self.buf.push('"');
        }
    }
}

impl Default for XmlWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Escape the five XML-special characters for use in an attribute value.
pub fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_element_with_attrs() {
        let mut w = XmlWriter::new();
        w.empty("property", &[("name", "a"), ("value", "b")]);
        assert_eq!(w.finish(), "<property name=\"a\" value=\"b\"/>\n");
    }

    #[test]
    fn open_close_indents_children() {
        let mut w = XmlWriter::new();
        w.open("job", &[("id", "j")]);
        w.empty("batchlet", &[("ref", "com.x.B")]);
        w.close();
        assert_eq!(
            w.finish(),
            "<job id=\"j\">\n    <batchlet ref=\"com.x.B\"/>\n</job>\n"
        );
    }

    #[test]
    fn declaration_first() {
        let mut w = XmlWriter::new();
        w.declaration();
        w.open("job", &[]);
        w.close();
        assert_eq!(
            w.finish(),
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<job>\n</job>\n"
        );
    }

    #[test]
    fn finish_closes_dangling_elements() {
        let mut w = XmlWriter::new();
        w.open("job", &[]);
        w.open("step", &[("id", "s")]);
        assert_eq!(w.finish(), "<job>\n    <step id=\"s\">\n    </step>\n</job>\n");
    }

    #[test]
    fn close_saturates_at_root() {
        let mut w = XmlWriter::new();
        w.close();
        assert_eq!(w.finish(), "");
    }

    #[test]
    fn escapes_attribute_values() {
        let mut w = XmlWriter::new();
        w.empty("property", &[("name", "k"), ("value", "a<b>&\"c'")]);
        assert_eq!(
            w.finish(),
            "<property name=\"k\" value=\"a&lt;b&gt;&amp;&quot;c&apos;\"/>\n"
        );
    }

    #[test]
    fn escape_leaves_clean_text_alone() {
        assert_eq!(escape_attr("com.test.Reader"), "com.test.Reader");
    }
}

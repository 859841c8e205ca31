// src/html/mod.rs

use scraper::{ElementRef, Html, Node as DomNode, Selector};

/// Marker substituted for every `<br>` when a cell is linearised.
pub const LINE_BREAK: &str = "<br>";

/// Read-only view of a parsed element. The scraping logic only ever needs
/// these three accessors, so it stays independent of the parser behind them.
pub trait Node {
    /// Visible text of the element and all of its descendants.
    fn text(&self) -> String;

    fn attr(&self, name: &str) -> Option<&str>;

    /// Visible text with each `<br>` replaced by `marker`. Other inline
    /// markup such as `<b>` or `<a>` does not introduce a marker.
    fn text_with_breaks(&self, marker: &str) -> String;
}

impl Node for ElementRef<'_> {
    fn text(&self) -> String {
        ElementRef::text(self).collect()
    }

    fn attr(&self, name: &str) -> Option<&str> {
        self.value().attr(name)
    }

    fn text_with_breaks(&self, marker: &str) -> String {
        let mut out = String::new();
        for node in self.descendants() {
            match node.value() {
                DomNode::Text(text) => out.push_str(text),
                DomNode::Element(el) if el.name() == "br" => out.push_str(marker),
                _ => {}
            }
        }
        out
    }
}

/// A parsed HTML page.
pub struct Page {
    document: Html,
}

impl Page {
    /// Parses raw page bytes. Invalid UTF-8 is replaced rather than rejected;
    /// malformed markup is repaired by the parser.
    pub fn parse(bytes: &[u8]) -> Self {
        let body = String::from_utf8_lossy(bytes);
        Self {
            document: Html::parse_document(&body),
        }
    }

    /// Every `<a>` element in document order.
    pub fn anchors(&self) -> Vec<ElementRef<'_>> {
        self.select("a")
    }

    /// Every `<td>` element in document order, whatever table or row it sits in.
    pub fn cells(&self) -> Vec<ElementRef<'_>> {
        self.select("td")
    }

    fn select(&self, css: &str) -> Vec<ElementRef<'_>> {
        let selector = Selector::parse(css).expect("selector should parse");
        self.document.select(&selector).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_with_breaks_marks_line_breaks() {
        let page = Page::parse(
            b"<table><tr><td>New Jersey<br>United</td><td><b>Boeing</b> 737</td></tr></table>",
        );
        let cells = page.cells();
        assert_eq!(cells.len(), 2);
        assert_eq!(cells[0].text_with_breaks(LINE_BREAK), "New Jersey<br>United");
        assert_eq!(Node::text(&cells[0]), "New JerseyUnited");
        assert_eq!(cells[1].text_with_breaks(LINE_BREAK), "Boeing 737");
    }

    #[test]
    fn test_anchor_attributes() {
        let page = Page::parse(b"<p><a href='/1970/1970.htm'>1970</a><a name='top'>x</a></p>");
        let anchors = page.anchors();
        assert_eq!(anchors.len(), 2);
        assert_eq!(Node::attr(&anchors[0], "href"), Some("/1970/1970.htm"));
        assert_eq!(Node::attr(&anchors[1], "href"), None);
    }
}

// src/process/extract.rs

use scraper::ElementRef;

use crate::html::Page;

/// Every table cell of a year page, in document order.
///
/// Row and table boundaries are ignored: the layout is carried purely by
/// cell order, header cells included.
pub fn extract_cells(page: &Page) -> Vec<ElementRef<'_>> {
    page.cells()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::{Node, LINE_BREAK};

    const YEAR_PAGE: &[u8] = b"\
        <html>
          <body>
            <table>
              <tr>
                <td>Date</td>
                <td>Location / Operator</td>
                <td>Aircraft Type / Registration</td>
                <td>Fatalities</td>
              </tr>
              <tr>
                <td>23 Oct 2024</td>
                <td>New Jersey<br>United</td>
                <td>Boeing 737 Max 9<br>N2794B</td>
                <td>100/200(0)</td>
              </tr>
            </table>
          </body>
        </html>
    ";

    #[test]
    fn test_extract_cells_in_document_order() {
        let page = Page::parse(YEAR_PAGE);
        let cells = extract_cells(&page);
        assert_eq!(cells.len(), 8);
        assert_eq!(Node::text(&cells[0]), "Date");
        assert_eq!(Node::text(&cells[4]), "23 Oct 2024");
        assert_eq!(cells[5].text_with_breaks(LINE_BREAK), "New Jersey<br>United");
    }

    #[test]
    fn test_extract_cells_ignores_nesting() {
        let page = Page::parse(
            b"<table><tr><td>a</td><td><table><tr><td>b</td></tr></table></td></tr></table>\
              <table><tr><td>c</td></tr></table>",
        );
        let texts: Vec<String> = extract_cells(&page).iter().map(Node::text).collect();
        assert_eq!(texts, vec!["a", "b", "b", "c"]);
    }

    #[test]
    fn test_extract_cells_empty_page() {
        let page = Page::parse(b"<html><body><p>nothing here</p></body></html>");
        assert!(extract_cells(&page).is_empty());
    }
}

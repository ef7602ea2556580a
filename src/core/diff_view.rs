//! Diff text shown above the entry list.

/// Diff output for one entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffView {
    text: String,
}

impl DiffView {
    pub fn new(text: String) -> Self {
        Self { text }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of terminal rows the diff occupies
    pub fn line_count(&self) -> usize {
        self.text.lines().count()
    }

    /// Every diff line terminated by a newline, whether or not the text had one.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.text.len() + 1);
        for line in self.text.lines() {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_count() {
        assert_eq!(DiffView::new(String::new()).line_count(), 0);
        assert_eq!(DiffView::new("a\nb\n".to_string()).line_count(), 2);
        assert_eq!(DiffView::new("a\nb".to_string()).line_count(), 2);
    }

    #[test]
    fn test_render_matches_line_count() {
        for text in ["", "one", "one\ntwo\n", "one\r\ntwo"] {
            let view = DiffView::new(text.to_string());
            let rendered = view.render();
            assert_eq!(rendered.matches('\n').count(), view.line_count());
        }
    }
}

use crate::line_ref::DialogueLineRef;

/// Lines shown one after another, wrapping back to the first.
#[derive(Clone, Debug, Default)]
pub struct DialogueSeries<'t> {
    lines: Vec<DialogueLineRef<'t>>,
    next: usize,
}

impl<'t> DialogueSeries<'t> {
    pub fn new(lines: Vec<DialogueLineRef<'t>>) -> Self {
        Self { lines, next: 0 }
    }

    pub fn push(&mut self, line: DialogueLineRef<'t>) {
        self.lines.push(line);
    }

    /// Text of the next line, or `None` when the series is empty.
    pub fn advance(&mut self) -> Option<&'t str> {
        if self.next >= self.lines.len() {
            self.next = 0;
        }
        let text = self.lines.get(self.next)?.display_text();
        self.next += 1;
        Some(text)
    }

    pub fn reset(&mut self) {
        self.next = 0;
    }

    pub fn lines(&self) -> &[DialogueLineRef<'t>] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

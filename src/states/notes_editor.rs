//! Notes Editor State
//!
//! A single free-text buffer. The toolbar actions append fixed template blocks;
//! editing history is left to the text input.

/// Initial buffer content
pub const NOTES_TEMPLATE: &str = "# React Hooks Tutorial Notes

## Introduction (0:00 - 2:15)
- React Hooks introduced in version 16.8
- Allows state and lifecycle in functional components

## useState Hook (2:15 - 5:30)
";

/// Block appended by "insert frame"
pub const FRAME_SNAPSHOT: &str =
    "\n\n![Video Frame](frame-snapshot-5-30.png)\n*Frame from 5:30 - useState example*\n\n";

/// AI key points offered next to the editor
pub const AI_SUGGESTIONS: &[&str] = &[
    "• React Hooks revolutionized functional components",
    "• useState manages local component state",
    "• useEffect handles side effects and lifecycle",
    "• Custom hooks promote code reusability",
    "• Always follow the Rules of Hooks",
];

const CODE_EXAMPLE: &str = "```javascript
const [count, setCount] = useState(0);

useEffect(() => {
  document.title = `Count: ${count}`;
}, [count]);
```";

const BEST_PRACTICES: &str = "1. Always call hooks at the top level
2. Use descriptive names for state variables
3. Separate concerns with multiple useState calls
";

/// Block appended by "generate AI notes"
pub fn ai_summary_block() -> String {
    format!(
        "\n\n## AI-Generated Summary\nBased on the video content, here are the key points:\n\n{}\n\n## Code Examples\n{}\n\n## Best Practices\n{}",
        AI_SUGGESTIONS.join("\n"),
        CODE_EXAMPLE,
        BEST_PRACTICES,
    )
}

/// Export targets offered by the editor toolbar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Markdown,
    Pdf,
    Docx,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [
        ExportFormat::Markdown,
        ExportFormat::Pdf,
        ExportFormat::Docx,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ExportFormat::Markdown => "markdown",
            ExportFormat::Pdf => "pdf",
            ExportFormat::Docx => "docx",
        }
    }
}

/// Editor buffer and panel toggles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotesEditorState {
    buffer: String,
    show_suggestions: bool,
}

impl Default for NotesEditorState {
    fn default() -> Self {
        Self {
            buffer: NOTES_TEMPLATE.to_string(),
            show_suggestions: true,
        }
    }
}

impl NotesEditorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn show_suggestions(&self) -> bool {
        self.show_suggestions
    }

    /// Replace the buffer with what the user typed
    pub fn set_buffer(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
    }

    pub fn insert_frame_snapshot(&mut self) {
        self.buffer.push_str(FRAME_SNAPSHOT);
    }

    pub fn append_ai_notes(&mut self) {
        self.buffer.push_str(&ai_summary_block());
    }

    /// Append one suggestion on a new line
    pub fn append_suggestion(&mut self, suggestion: &str) {
        self.buffer.push('\n');
        self.buffer.push_str(suggestion);
    }

    pub fn toggle_suggestions(&mut self) {
        self.show_suggestions = !self.show_suggestions;
    }

    pub fn word_count(&self) -> usize {
        self.buffer.split_whitespace().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_the_template() {
        let state = NotesEditorState::new();
        assert_eq!(state.buffer(), NOTES_TEMPLATE);
        assert!(state.show_suggestions());
    }

    #[test]
    fn insert_frame_appends_snapshot() {
        let mut state = NotesEditorState::new();
        state.set_buffer("draft");
        state.insert_frame_snapshot();
        assert_eq!(state.buffer(), format!("draft{FRAME_SNAPSHOT}"));
    }

    #[test]
    fn generated_notes_keep_existing_text_and_list_every_suggestion() {
        let mut state = NotesEditorState::new();
        state.append_ai_notes();

        assert!(state.buffer().starts_with(NOTES_TEMPLATE));
        assert!(state.buffer().contains("## AI-Generated Summary"));
        for suggestion in AI_SUGGESTIONS {
            assert!(state.buffer().contains(suggestion));
        }
        assert!(state.buffer().ends_with("multiple useState calls\n"));
    }

    #[test]
    fn clicked_suggestion_lands_on_its_own_line() {
        let mut state = NotesEditorState::new();
        state.set_buffer("## Key points");
        state.append_suggestion(AI_SUGGESTIONS[1]);
        state.append_suggestion(AI_SUGGESTIONS[3]);
        assert_eq!(
            state.buffer(),
            format!("## Key points\n{}\n{}", AI_SUGGESTIONS[1], AI_SUGGESTIONS[3])
        );
    }

    #[test]
    fn every_export_format_has_a_distinct_label() {
        let labels: Vec<_> = ExportFormat::ALL.iter().map(|f| f.label()).collect();
        assert_eq!(labels, vec!["markdown", "pdf", "docx"]);
    }

    #[test]
    fn word_count_follows_the_buffer() {
        let mut state = NotesEditorState::new();
        state.set_buffer("one two  three\nfour");
        assert_eq!(state.word_count(), 4);
        state.set_buffer("");
        assert_eq!(state.word_count(), 0);
    }
}

//! Library State
//!
//! Saved notes with search, type filter and sort order. Filtering is pure and
//! recomputed from scratch on every change.

use gpui::Action;
use schemars::JsonSchema;
use serde::Deserialize;
use std::cmp::Ordering;

/// How a note was written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteKind {
    Manual,
    AiGenerated,
}

/// A saved note
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteRecord {
    pub id: &'static str,
    pub title: &'static str,
    pub video_title: &'static str,
    pub last_edited: &'static str,
    pub kind: NoteKind,
    pub preview: &'static str,
    pub tags: &'static [&'static str],
    pub starred: bool,
}

/// Type filter applied on top of the search term
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Deserialize, JsonSchema, Action)]
pub enum TypeFilter {
    #[default]
    All,
    Manual,
    AiGenerated,
    Starred,
}

impl TypeFilter {
    pub const ALL: [TypeFilter; 4] = [
        TypeFilter::All,
        TypeFilter::Manual,
        TypeFilter::AiGenerated,
        TypeFilter::Starred,
    ];

    pub fn i18n_key(self) -> &'static str {
        match self {
            TypeFilter::All => "filter_all",
            TypeFilter::Manual => "filter_manual",
            TypeFilter::AiGenerated => "filter_ai",
            TypeFilter::Starred => "filter_starred",
        }
    }

    fn matches(self, note: &NoteRecord) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Manual => note.kind == NoteKind::Manual,
            TypeFilter::AiGenerated => note.kind == NoteKind::AiGenerated,
            TypeFilter::Starred => note.starred,
        }
    }
}

/// Sort order of the result list
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Deserialize, JsonSchema, Action)]
pub enum SortKey {
    /// Source order (most recently edited first)
    #[default]
    Recent,
    Title,
    Video,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Recent, SortKey::Title, SortKey::Video];

    pub fn i18n_key(self) -> &'static str {
        match self {
            SortKey::Recent => "sort_recent",
            SortKey::Title => "sort_title",
            SortKey::Video => "sort_video",
        }
    }
}

pub const SAMPLE_NOTES: &[NoteRecord] = &[
    NoteRecord {
        id: "1",
        title: "React Hooks Fundamentals",
        video_title: "React Hooks Tutorial",
        last_edited: "2 hours ago",
        kind: NoteKind::Manual,
        preview: "React Hooks revolutionized functional components by allowing state and lifecycle methods...",
        tags: &["react", "hooks", "javascript"],
        starred: true,
    },
    NoteRecord {
        id: "2",
        title: "useState and useEffect Examples",
        video_title: "React Hooks Tutorial",
        last_edited: "1 day ago",
        kind: NoteKind::AiGenerated,
        preview: "Key examples of useState for state management and useEffect for side effects...",
        tags: &["react", "useState", "useEffect"],
        starred: false,
    },
    NoteRecord {
        id: "3",
        title: "Custom Hooks Best Practices",
        video_title: "Advanced React Patterns",
        last_edited: "3 days ago",
        kind: NoteKind::Manual,
        preview: "Custom hooks allow you to extract component logic into reusable functions...",
        tags: &["react", "custom-hooks", "patterns"],
        starred: true,
    },
    NoteRecord {
        id: "4",
        title: "JavaScript ES6 Features",
        video_title: "Modern JavaScript Course",
        last_edited: "1 week ago",
        kind: NoteKind::AiGenerated,
        preview: "Arrow functions, destructuring, template literals, and other ES6 features...",
        tags: &["javascript", "es6", "modern"],
        starred: false,
    },
];

/// Per-note commands offered on a library card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteCommand {
    Open,
    Edit,
    Export,
    ToggleStar,
    RegenerateWithAi,
}

impl NoteCommand {
    /// Commands in the card menu; regeneration only applies to hand-written notes
    pub fn menu_for(note: &NoteRecord) -> Vec<NoteCommand> {
        let mut commands = vec![NoteCommand::Edit, NoteCommand::Export, NoteCommand::ToggleStar];
        if note.kind == NoteKind::Manual {
            commands.push(NoteCommand::RegenerateWithAi);
        }
        commands
    }

    pub fn i18n_key(self, note: &NoteRecord) -> &'static str {
        match self {
            NoteCommand::Open => "open",
            NoteCommand::Edit => "edit",
            NoteCommand::Export => "export",
            NoteCommand::ToggleStar if note.starred => "unstar",
            NoteCommand::ToggleStar => "star",
            NoteCommand::RegenerateWithAi => "regenerate_ai",
        }
    }
}

/// Current search, filter and sort selection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LibraryQuery {
    pub search: String,
    pub filter: TypeFilter,
    pub sort: SortKey,
}

impl LibraryQuery {
    fn matches_search(&self, note: &NoteRecord) -> bool {
        let needle = self.search.to_lowercase();
        if needle.is_empty() {
            return true;
        }
        note.title.to_lowercase().contains(&needle)
            || note.video_title.to_lowercase().contains(&needle)
            || note.tags.iter().any(|tag| tag.to_lowercase().contains(&needle))
    }

    /// Apply the query to `notes`, preserving source order for [`SortKey::Recent`]
    pub fn apply<'a>(&self, notes: &'a [NoteRecord]) -> Vec<&'a NoteRecord> {
        let mut result: Vec<&NoteRecord> = notes
            .iter()
            .filter(|note| self.matches_search(note) && self.filter.matches(note))
            .collect();

        match self.sort {
            SortKey::Recent => {}
            SortKey::Title => result.sort_by(|a, b| compare_text(a.title, b.title)),
            SortKey::Video => result.sort_by(|a, b| compare_text(a.video_title, b.video_title)),
        }
        result
    }
}

/// Case-insensitive ordering with a case-sensitive tie break
fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Library contents and the active query
#[derive(Debug, Clone)]
pub struct LibraryState {
    notes: Vec<NoteRecord>,
    query: LibraryQuery,
}

impl Default for LibraryState {
    fn default() -> Self {
        Self {
            notes: SAMPLE_NOTES.to_vec(),
            query: LibraryQuery::default(),
        }
    }
}

impl LibraryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &LibraryQuery {
        &self.query
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.query.search = search.into();
    }

    pub fn set_filter(&mut self, filter: TypeFilter) {
        self.query.filter = filter;
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.query.sort = sort;
    }

    /// Notes matching the active query, in display order
    pub fn visible_notes(&self) -> Vec<&NoteRecord> {
        self.query.apply(&self.notes)
    }

    /// Number of notes matching the active query
    pub fn visible_count(&self) -> usize {
        self.visible_notes().len()
    }

    /// Starred notes across the whole library, independent of the query
    pub fn starred_count(&self) -> usize {
        self.notes.iter().filter(|note| note.starred).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(notes: &[&NoteRecord]) -> Vec<&'static str> {
        notes.iter().map(|note| note.id).collect()
    }

    #[test]
    fn empty_query_lists_everything_in_source_order() {
        let state = LibraryState::new();
        assert_eq!(ids(&state.visible_notes()), vec!["1", "2", "3", "4"]);
        assert_eq!(state.visible_count(), 4);
        assert_eq!(state.starred_count(), 2);
    }

    #[test]
    fn header_counts_follow_the_query() {
        let mut state = LibraryState::new();
        state.set_search("kotlin");
        assert_eq!(state.visible_count(), 0);
        assert_eq!(state.starred_count(), 2);

        state.set_search("react");
        assert_eq!(state.visible_count(), 3);

        state.set_filter(TypeFilter::AiGenerated);
        assert_eq!(state.visible_count(), 1);
        assert_eq!(state.starred_count(), 2);
    }

    #[test]
    fn search_term_is_matched_verbatim() {
        let mut state = LibraryState::new();
        state.set_search(" react");
        assert!(state.visible_notes().is_empty());
        state.set_search("");
        assert_eq!(state.visible_count(), 4);
    }

    #[test]
    fn only_manual_notes_offer_regeneration() {
        let manual = &SAMPLE_NOTES[0];
        let generated = &SAMPLE_NOTES[1];
        assert_eq!(manual.kind, NoteKind::Manual);
        assert_eq!(generated.kind, NoteKind::AiGenerated);

        assert!(NoteCommand::menu_for(manual).contains(&NoteCommand::RegenerateWithAi));
        assert_eq!(
            NoteCommand::menu_for(generated),
            vec![NoteCommand::Edit, NoteCommand::Export, NoteCommand::ToggleStar]
        );
    }

    #[test]
    fn star_label_reflects_the_note() {
        assert_eq!(NoteCommand::ToggleStar.i18n_key(&SAMPLE_NOTES[0]), "unstar");
        assert_eq!(NoteCommand::ToggleStar.i18n_key(&SAMPLE_NOTES[1]), "star");
    }

    #[test]
    fn search_matches_title_video_and_tags_case_insensitively() {
        let mut state = LibraryState::new();
        state.set_search("react");
        assert_eq!(ids(&state.visible_notes()), vec!["1", "2", "3"]);

        state.set_search("REACT");
        assert_eq!(state.visible_notes().len(), 3);

        state.set_search("modern");
        assert_eq!(ids(&state.visible_notes()), vec!["4"]);

        state.set_search("useeffect");
        assert_eq!(ids(&state.visible_notes()), vec!["2"]);

        state.set_search("kotlin");
        assert!(state.visible_notes().is_empty());
    }

    #[test]
    fn starred_filter_keeps_only_starred_notes() {
        let mut state = LibraryState::new();
        state.set_filter(TypeFilter::Starred);
        let visible = state.visible_notes();
        assert_eq!(ids(&visible), vec!["1", "3"]);
        assert!(visible.iter().all(|note| note.starred));
    }

    #[test]
    fn type_filters_select_by_kind() {
        let mut state = LibraryState::new();
        state.set_filter(TypeFilter::Manual);
        assert_eq!(ids(&state.visible_notes()), vec!["1", "3"]);
        state.set_filter(TypeFilter::AiGenerated);
        assert_eq!(ids(&state.visible_notes()), vec!["2", "4"]);
    }

    #[test]
    fn search_and_filter_compose() {
        let mut state = LibraryState::new();
        state.set_search("javascript");
        state.set_filter(TypeFilter::AiGenerated);
        assert_eq!(ids(&state.visible_notes()), vec!["4"]);
    }

    #[test]
    fn sorting_by_title_and_video() {
        let mut state = LibraryState::new();
        state.set_sort(SortKey::Title);
        assert_eq!(ids(&state.visible_notes()), vec!["3", "4", "1", "2"]);

        state.set_sort(SortKey::Video);
        // Ties keep source order
        assert_eq!(ids(&state.visible_notes()), vec!["3", "4", "1", "2"]);

        state.set_sort(SortKey::Recent);
        assert_eq!(ids(&state.visible_notes()), vec!["1", "2", "3", "4"]);
    }
}

//! Notes Library View
//!
//! Full-width list of saved notes with search, type filter and sort order.

use crate::assets::CustomIconName;
use crate::states::{
    LibraryState, NoteCommand, NoteKind, NoteRecord, SortKey, TypeFilter, i18n_format,
    i18n_library,
};
use gpui::{
    Context, Corner, Entity, FocusHandle, MouseButton, SharedString, Subscription, Window, div,
    prelude::*, px,
};
use gpui_component::{
    ActiveTheme, Icon, IconName, Sizable,
    button::{Button, ButtonVariants, DropdownButton},
    h_flex,
    input::{Input, InputEvent, InputState},
    label::Label,
    menu::{DropdownMenu, PopupMenuItem},
    v_flex,
};
use tracing::{debug, info};

const SEARCH_WIDTH: f32 = 320.0;

/// Saved notes browser
pub struct NotesLibraryView {
    state: LibraryState,
    search: Entity<InputState>,
    /// Menu actions are dispatched relative to this handle
    focus_handle: FocusHandle,
    _subscriptions: Vec<Subscription>,
}

impl NotesLibraryView {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let search = cx.new(|cx| {
            let placeholder = i18n_library(cx, "search_placeholder");
            InputState::new(window, cx)
                .clean_on_escape()
                .placeholder(placeholder)
        });

        let subscriptions = vec![cx.subscribe(&search, |this, search, event, cx| {
            if matches!(event, InputEvent::Change | InputEvent::PressEnter { .. }) {
                let term = search.read(cx).value().to_string();
                this.state.set_search(term);
                cx.notify();
            }
        })];

        Self {
            state: LibraryState::new(),
            search,
            focus_handle: cx.focus_handle(),
            _subscriptions: subscriptions,
        }
    }

    fn set_filter(&mut self, filter: &TypeFilter, cx: &mut Context<Self>) {
        debug!(filter = ?filter, "Library filter changed");
        self.state.set_filter(*filter);
        cx.notify();
    }

    fn set_sort(&mut self, sort: &SortKey, cx: &mut Context<Self>) {
        debug!(sort = ?sort, "Library sort changed");
        self.state.set_sort(*sort);
        cx.notify();
    }

    fn run_command(note_id: &'static str, command: NoteCommand) {
        // Notes are sample data; card commands are acknowledged only
        info!(note = note_id, command = ?command, "Note command requested");
    }

    fn render_note_menu(
        &self,
        index: usize,
        note: &NoteRecord,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let note_id = note.id;
        let items: Vec<(NoteCommand, SharedString)> = NoteCommand::menu_for(note)
            .into_iter()
            .map(|command| (command, i18n_library(cx, command.i18n_key(note))))
            .collect();

        Button::new(("library-note-menu", index))
            .ghost()
            .xsmall()
            .icon(IconName::EllipsisVertical)
            .dropdown_menu(move |menu, _, _| {
                items.iter().fold(menu, |menu, (command, label)| {
                    let command = *command;
                    let icon = match command {
                        NoteCommand::Edit | NoteCommand::Open => {
                            Icon::from(CustomIconName::FileText)
                        }
                        NoteCommand::Export => Icon::from(CustomIconName::Download),
                        NoteCommand::ToggleStar => Icon::new(IconName::Star),
                        NoteCommand::RegenerateWithAi => Icon::from(CustomIconName::Sparkles),
                    };
                    menu.item(
                        PopupMenuItem::new(label.clone())
                            .icon(icon)
                            .on_click(move |_, _, _| Self::run_command(note_id, command)),
                    )
                })
            })
            .anchor(Corner::TopRight)
    }

    fn render_header(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let shown = self.state.visible_count().to_string();
        let starred = self.state.starred_count().to_string();

        h_flex()
            .items_center()
            .justify_between()
            .child(
                h_flex()
                    .items_center()
                    .gap_2()
                    .child(Icon::from(CustomIconName::BookOpen))
                    .child(Label::new(i18n_library(cx, "title")).text_xl()),
            )
            .child(
                h_flex()
                    .gap_4()
                    .text_sm()
                    .text_color(cx.theme().muted_foreground)
                    .child(Label::new(i18n_format(
                        cx,
                        "library.notes_count",
                        &[("count", &shown)],
                    )))
                    .child(
                        h_flex()
                            .items_center()
                            .gap_1()
                            .child(Icon::new(IconName::Star).small())
                            .child(Label::new(i18n_format(
                                cx,
                                "library.starred_count",
                                &[("count", &starred)],
                            ))),
                    ),
            )
    }

    fn render_controls(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let query = self.state.query();
        let (filter, sort) = (query.filter, query.sort);

        let filter_labels: Vec<_> = TypeFilter::ALL
            .iter()
            .map(|f| (*f, i18n_library(cx, f.i18n_key())))
            .collect();
        let sort_labels: Vec<_> = SortKey::ALL
            .iter()
            .map(|s| (*s, i18n_library(cx, s.i18n_key())))
            .collect();
        let filter_label = i18n_library(cx, filter.i18n_key());
        let sort_label = i18n_library(cx, sort.i18n_key());

        let filter_dropdown = DropdownButton::new("library-filter-dropdown")
            .button(
                Button::new("library-filter-btn")
                    .outline()
                    .small()
                    .label(filter_label),
            )
            .dropdown_menu_with_anchor(Corner::TopLeft, move |menu, _, _| {
                filter_labels.iter().fold(menu, |menu, (option, label)| {
                    let label = label.clone();
                    menu.menu_element_with_check(
                        filter == *option,
                        Box::new(*option),
                        move |_, _cx| Label::new(label.clone()).ml_2().text_xs(),
                    )
                })
            });

        let sort_dropdown = DropdownButton::new("library-sort-dropdown")
            .button(
                Button::new("library-sort-btn")
                    .outline()
                    .small()
                    .label(sort_label),
            )
            .dropdown_menu_with_anchor(Corner::TopLeft, move |menu, _, _| {
                sort_labels.iter().fold(menu, |menu, (option, label)| {
                    let label = label.clone();
                    menu.menu_element_with_check(
                        sort == *option,
                        Box::new(*option),
                        move |_, _cx| Label::new(label.clone()).ml_2().text_xs(),
                    )
                })
            });

        h_flex()
            .items_center()
            .gap_2()
            .child(
                div()
                    .w(px(SEARCH_WIDTH))
                    .child(Input::new(&self.search).prefix(Icon::new(IconName::Search).small())),
            )
            .child(filter_dropdown)
            .child(sort_dropdown)
    }

    fn render_note(&self, index: usize, note: &NoteRecord, cx: &mut Context<Self>) -> impl IntoElement {
        let (kind_key, kind_color) = match note.kind {
            NoteKind::Manual => ("kind_manual", cx.theme().muted_foreground),
            NoteKind::AiGenerated => ("kind_ai", cx.theme().primary),
        };
        let muted = cx.theme().muted_foreground;
        let tags: Vec<_> = note
            .tags
            .iter()
            .map(|tag| {
                div()
                    .px_2()
                    .rounded_md()
                    .bg(cx.theme().secondary)
                    .text_xs()
                    .child(format!("#{tag}"))
            })
            .collect();
        let note_id = note.id;

        v_flex()
            .id(("library-note", index))
            .gap_2()
            .p_4()
            .rounded_lg()
            .border_1()
            .border_color(cx.theme().border)
            .hover(|this| this.border_color(kind_color))
            .child(
                h_flex()
                    .items_center()
                    .justify_between()
                    .child(Label::new(note.title).text_base())
                    .child(
                        h_flex()
                            .items_center()
                            .gap_1()
                            .when(note.starred, |this| {
                                this.child(
                                    Icon::new(IconName::Star)
                                        .small()
                                        .text_color(cx.theme().warning),
                                )
                            })
                            .child(self.render_note_menu(index, note, cx)),
                    ),
            )
            .child(
                h_flex()
                    .gap_2()
                    .items_center()
                    .text_xs()
                    .text_color(muted)
                    .child(Icon::from(CustomIconName::Video).xsmall())
                    .child(note.video_title)
                    .child("·")
                    .child(note.last_edited),
            )
            .child(div().text_sm().text_color(muted).child(note.preview))
            .child(
                h_flex()
                    .justify_between()
                    .items_center()
                    .child(h_flex().gap_1().children(tags))
                    .child(
                        h_flex()
                            .items_center()
                            .gap_2()
                            .child(
                                Label::new(i18n_library(cx, kind_key))
                                    .text_xs()
                                    .text_color(kind_color),
                            )
                            .child(
                                Button::new(("library-note-open", index))
                                    .ghost()
                                    .xsmall()
                                    .icon(IconName::ExternalLink)
                                    .label(i18n_library(cx, "open"))
                                    .on_click(move |_, _, _| {
                                        Self::run_command(note_id, NoteCommand::Open)
                                    }),
                            ),
                    ),
            )
    }

    fn render_empty(&self, cx: &mut Context<Self>) -> impl IntoElement {
        v_flex()
            .flex_1()
            .items_center()
            .justify_center()
            .gap_2()
            .py_8()
            .child(Icon::from(CustomIconName::FileText).large())
            .child(Label::new(i18n_library(cx, "empty_title")).text_base())
            .child(
                Label::new(i18n_library(cx, "empty_hint"))
                    .text_sm()
                    .text_color(cx.theme().muted_foreground),
            )
    }
}

impl Render for NotesLibraryView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let notes = self.state.visible_notes();
        let body = if notes.is_empty() {
            self.render_empty(cx).into_any_element()
        } else {
            let cards: Vec<_> = notes
                .iter()
                .enumerate()
                .map(|(index, note)| self.render_note(index, note, cx).into_any_element())
                .collect();
            v_flex().gap_3().children(cards).into_any_element()
        };

        v_flex()
            .id("library-view")
            .track_focus(&self.focus_handle)
            .on_mouse_down(
                MouseButton::Left,
                cx.listener(|this, _, window, cx| {
                    if !this.focus_handle.contains_focused(window, cx) {
                        this.focus_handle.focus(window);
                    }
                }),
            )
            .on_action(cx.listener(|this, filter: &TypeFilter, _, cx| this.set_filter(filter, cx)))
            .on_action(cx.listener(|this, sort: &SortKey, _, cx| this.set_sort(sort, cx)))
            .size_full()
            .gap_4()
            .p_6()
            .bg(cx.theme().background)
            .child(self.render_header(cx))
            .child(self.render_controls(cx))
            .child(
                div()
                    .id("library-notes")
                    .flex_1()
                    .overflow_y_scroll()
                    .child(body),
            )
    }
}

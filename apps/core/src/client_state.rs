//! Browser-side application state as plain data.
//!
//! Every UI event becomes an [`Action`]; [`reduce`] folds it into a new [`AppState`]
//! and returns the [`Effect`]s (clipboard, network, notifications) for the shell to run.
//! Results of those effects come back in as further actions.

use crate::model::Snippet;
use crate::search;
use crate::selection::{SelectAction, SelectionState};
use crate::settings::Settings;

pub const MANUAL_COPY_HINT: &str = "Snippet selected - press Cmd/Ctrl+C to copy";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NoticeKind,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Error,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SettingsLoaded(Settings),
    SnippetsLoaded(Vec<Snippet>),
    LoadFailed(String),
    QueryChanged(String),
    MoveUp,
    MoveDown,
    Pick(usize),
    Confirm,
    SetAutoCopy(bool),
    CopyFinished { ok: bool },
    SnippetCreated,
    SnippetDeleted,
    MutationFailed(String),
    NotificationExpired,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    CopyToClipboard(String),
    /// Highlight the command of the row at this position for a manual copy.
    MarkForManualCopy(usize),
    Notify(Notification),
    ReloadSnippets,
    SaveSettings(Settings),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    snippets: Vec<Snippet>,
    query: String,
    filtered: Vec<Snippet>,
    selection: SelectionState,
    auto_copy: bool,
    notification: Option<Notification>,
}

impl AppState {
    pub fn snippets(&self) -> &[Snippet] {
        &self.snippets
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn filtered(&self) -> &[Snippet] {
        &self.filtered
    }

    pub fn selected_index(&self) -> isize {
        self.selection.index()
    }

    pub fn selected(&self) -> Option<&Snippet> {
        self.selection.selected().and_then(|index| self.filtered.get(index))
    }

    pub fn auto_copy(&self) -> bool {
        self.auto_copy
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    fn refilter(&mut self) {
        self.filtered = search::filter(&self.snippets, &self.query);
        self.selection.reset(self.filtered.len());
    }

    fn apply_select(&self, action: SelectAction, effects: &mut Vec<Effect>) {
        match action {
            SelectAction::Copy(index) => {
                if let Some(snippet) = self.filtered.get(index) {
                    effects.push(Effect::CopyToClipboard(snippet.command.clone()));
                }
            }
            SelectAction::MarkForManualCopy(index) => {
                effects.push(Effect::MarkForManualCopy(index));
                effects.push(Effect::Notify(Notification::success(MANUAL_COPY_HINT)));
            }
            SelectAction::None => {}
        }
    }

    pub fn view(&self) -> ListView {
        let count = self.filtered.len();
        let plural = if count == 1 { "" } else { "s" };
        let selected = self.selection.selected();
        ListView {
            result_count_label: format!("{count} snippet{plural} found"),
            rows: self
                .filtered
                .iter()
                .enumerate()
                .map(|(index, snippet)| RowView {
                    id: snippet.id.clone(),
                    command: snippet.command.clone(),
                    description: snippet.description.clone(),
                    keywords: snippet.keywords.clone(),
                    selected: selected == Some(index),
                })
                .collect(),
            empty: self.selection.is_empty(),
            notification: self.notification.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub id: String,
    pub command: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    pub result_count_label: String,
    pub rows: Vec<RowView>,
    pub empty: bool,
    pub notification: Option<Notification>,
}

/// Applies one action. Never touches the clipboard or network itself.
pub fn reduce(mut state: AppState, action: Action) -> (AppState, Vec<Effect>) {
    let mut effects = Vec::new();

    match action {
        Action::SettingsLoaded(settings) => {
            state.auto_copy = settings.auto_copy;
        }
        Action::SnippetsLoaded(snippets) => {
            state.snippets = snippets;
            state.refilter();
        }
        Action::LoadFailed(message) | Action::MutationFailed(message) => {
            effects.push(Effect::Notify(Notification::error(message)));
        }
        Action::QueryChanged(query) => {
            state.query = query;
            state.refilter();
        }
        Action::MoveUp => state.selection.move_up(),
        Action::MoveDown => state.selection.move_down(),
        Action::Pick(index) => {
            let select = state.selection.pick(index, state.auto_copy);
            state.apply_select(select, &mut effects);
        }
        Action::Confirm => {
            let select = state.selection.confirm(state.auto_copy);
            state.apply_select(select, &mut effects);
        }
        Action::SetAutoCopy(enabled) => {
            state.auto_copy = enabled;
            effects.push(Effect::SaveSettings(Settings::with_auto_copy(enabled)));
            let label = if enabled { "enabled" } else { "disabled" };
            effects.push(Effect::Notify(Notification::success(format!(
                "Auto-copy {label}"
            ))));
        }
        Action::CopyFinished { ok: true } => {
            effects.push(Effect::Notify(Notification::success("Copied to clipboard!")));
        }
        Action::CopyFinished { ok: false } => {
            effects.push(Effect::Notify(Notification::error(
                "Failed to copy to clipboard",
            )));
        }
        Action::SnippetCreated => {
            effects.push(Effect::Notify(Notification::success(
                "Snippet added successfully",
            )));
            effects.push(Effect::ReloadSnippets);
        }
        Action::SnippetDeleted => {
            effects.push(Effect::Notify(Notification::success(
                "Snippet deleted successfully",
            )));
            effects.push(Effect::ReloadSnippets);
        }
        Action::NotificationExpired => {
            state.notification = None;
        }
    }

    if let Some(notice) = effects.iter().rev().find_map(|effect| match effect {
        Effect::Notify(notice) => Some(notice.clone()),
        _ => None,
    }) {
        state.notification = Some(notice);
    }

    (state, effects)
}

/// Folds a sequence of actions, collecting every effect in order.
pub fn reduce_all(
    state: AppState,
    actions: impl IntoIterator<Item = Action>,
) -> (AppState, Vec<Effect>) {
    actions
        .into_iter()
        .fold((state, Vec::new()), |(state, mut all), action| {
            let (next, effects) = reduce(state, action);
            all.extend(effects);
            (next, all)
        })
}

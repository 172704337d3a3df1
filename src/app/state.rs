// src/app/state.rs
//! Application state management.

use std::path::PathBuf;

use crossterm::event::KeyEvent;
use ratatui::{widgets::ListState, Frame};
use tracing::info;

use crate::{
    fs::{detect_category, resolve_entries, tail_path, Entry, FileCategory, LocationSpec},
    open::{Dispatcher, OpenAction, Shortcut},
    ui::{
        keybindings::{key_to_action, NavigationAction},
        layout::{compute_layout, Section, SectionVisibility},
        widgets::{render_details, render_file_list, render_status_bar},
    },
};

/// What the event loop should do after a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    Continue,
    Quit,
    /// Hand a file to the external viewer.
    View {
        uri: String,
        mime_type: String,
        new_task: bool,
    },
}

/// One step of back-navigation: where we were and what was selected.
#[derive(Debug, Clone)]
struct HistoryFrame {
    location: Option<PathBuf>,
    selected: usize,
}

/// Main application state.
pub struct App {
    /// Root that default locations resolve against
    pub storage_root: PathBuf,
    /// Configured default locations
    pub locations: Vec<LocationSpec>,
    /// Directory being listed; `None` shows the default locations
    pub current: Option<PathBuf>,
    /// Sorted entries of the current listing
    pub entries: Vec<Entry>,
    /// Icon category per entry, parallel to `entries`
    pub categories: Vec<FileCategory>,
    /// List widget state
    pub state: ListState,
    /// Currently selected index
    pub selected: usize,
    pub dispatcher: Dispatcher,
    /// Section visibility state
    pub visibility: SectionVisibility,
    /// One-line message shown at the bottom
    pub status: Option<String>,

    history: Vec<HistoryFrame>,
}

impl App {
    /// Create the app, listing `start` or the default locations.
    pub fn new(storage_root: PathBuf, locations: Vec<LocationSpec>, start: Option<PathBuf>) -> Self {
        let mut app = Self {
            storage_root,
            locations,
            current: start,
            entries: Vec::new(),
            categories: Vec::new(),
            state: ListState::default(),
            selected: 0,
            dispatcher: Dispatcher::new(),
            visibility: SectionVisibility::default(),
            status: None,
            history: Vec::new(),
        };
        app.reload();
        if app.current.is_none() && app.locations.is_empty() {
            app.status = Some("no default locations configured".to_string());
        }
        app
    }

    /// Relist the current location from disk.
    pub fn reload(&mut self) {
        self.entries = resolve_entries(
            self.current.as_deref(),
            &self.storage_root,
            &self.locations,
        );
        self.categories = self
            .entries
            .iter()
            .map(|e| {
                if e.is_dir {
                    FileCategory::Binary
                } else {
                    detect_category(&e.path, &self.dispatcher.mime().resolve(&e.name))
                }
            })
            .collect();
        self.select(self.selected);
    }

    pub fn selected_entry(&self) -> Option<&Entry> {
        self.entries.get(self.selected)
    }

    /// Title for the file list.
    pub fn location_label(&self) -> String {
        match &self.current {
            Some(path) => tail_path(path, 3),
            None => "defaults".to_string(),
        }
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    /// Handle a key event.
    pub fn on_key(&mut self, key: KeyEvent) -> KeyOutcome {
        match key_to_action(&key) {
            NavigationAction::ToggleSection(d) => self.visibility.toggle(d),
            NavigationAction::Down => {
                if self.selected + 1 < self.entries.len() {
                    self.select(self.selected + 1);
                }
            }
            NavigationAction::Up => {
                if self.selected > 0 {
                    self.select(self.selected - 1);
                }
            }
            NavigationAction::Enter => return self.open_selected(),
            NavigationAction::Back => self.back(),
            NavigationAction::Refresh => {
                self.reload();
                self.status = Some(format!("{} entries", self.entries.len()));
            }
            NavigationAction::Pin => self.pin_selected(),
            NavigationAction::Quit => return KeyOutcome::Quit,
            NavigationAction::None => {}
        }
        KeyOutcome::Continue
    }

    /// Dispatch the selected entry. Directories are entered here; files are
    /// returned to the event loop for launching.
    pub fn open_selected(&mut self) -> KeyOutcome {
        let Some(entry) = self.selected_entry() else {
            return KeyOutcome::Continue;
        };

        match self.dispatcher.dispatch(entry) {
            OpenAction::Navigate { path } => {
                self.navigate(path);
                KeyOutcome::Continue
            }
            OpenAction::ViewExternally {
                uri,
                mime_type,
                new_task,
                ..
            } => {
                self.status = Some(format!("opening {} ({})", entry.name, mime_type));
                KeyOutcome::View {
                    uri,
                    mime_type,
                    new_task,
                }
            }
        }
    }

    /// Enter `path`, remembering where we came from.
    pub fn navigate(&mut self, path: PathBuf) {
        info!(path = %path.display(), "navigate");
        self.history.push(HistoryFrame {
            location: self.current.take(),
            selected: self.selected,
        });
        self.current = Some(path);
        self.selected = 0;
        self.status = None;
        self.reload();
    }

    /// Return to the previous location, if any.
    pub fn back(&mut self) {
        if let Some(frame) = self.history.pop() {
            self.current = frame.location;
            self.selected = frame.selected;
            self.status = None;
            self.reload();
        }
    }

    fn pin_selected(&mut self) {
        let Some(entry) = self.selected_entry() else {
            return;
        };
        let shortcut = Shortcut::for_entry(entry, &self.dispatcher);
        info!(id = %shortcut.id, action = %shortcut.action, "shortcut requested");
        self.status = Some(format!("shortcut \"{}\": {}", shortcut.label, shortcut.action));
    }

    fn select(&mut self, index: usize) {
        self.selected = index.min(self.entries.len().saturating_sub(1));
        self.state
            .select(if self.entries.is_empty() { None } else { Some(self.selected) });
    }

    /// Draw the application UI.
    pub fn draw(&mut self, f: &mut Frame<'_>) {
        let layout = compute_layout(f.area(), &self.visibility);

        for (section, area) in layout.sections() {
            match section {
                Section::Files => {
                    let title = format!("1: {}", self.location_label());
                    render_file_list(
                        f,
                        area,
                        &title,
                        &self.entries,
                        &self.categories,
                        &mut self.state,
                    );
                }
                Section::Details => {
                    let entry = self.selected_entry();
                    let category = self.categories.get(self.selected).copied();
                    let action = entry.map(|e| self.dispatcher.dispatch(e));
                    let mime = entry
                        .filter(|e| !e.is_dir)
                        .map(|e| self.dispatcher.mime().resolve(&e.name));
                    render_details(f, area, entry, category, mime.as_deref(), action.as_ref());
                }
            }
        }

        render_status_bar(
            f,
            layout.status_area,
            self.status.as_deref(),
            self.entries.len(),
            self.can_go_back(),
        );
    }
}

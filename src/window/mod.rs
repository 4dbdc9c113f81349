/// Terminal window for jotting down and browsing thoughts
///
/// This module owns the interaction state machine. Key presses either edit
/// the input, submit it to the store, move the list selection or close the
/// window. Every successful submit rebuilds the list from a fresh read.

pub mod ui;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::widgets::ListState;
use ratatui::DefaultTerminal;
use tracing::{debug, info};

use crate::domain::normalize_input;
use crate::storage::{StorageError, ThoughtStorage};
use crate::view::{build_rows, next_selectable, Row};
use crate::AppError;

/// Which control receives key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    Button,
    List,
}

impl Focus {
    fn next(self) -> Focus {
        match self {
            Focus::Input => Focus::Button,
            Focus::Button => Focus::List,
            Focus::List => Focus::Input,
        }
    }

    fn prev(self) -> Focus {
        match self {
            Focus::Input => Focus::List,
            Focus::Button => Focus::Input,
            Focus::List => Focus::Button,
        }
    }
}

/// What the event loop should do after a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Close,
}

/// State of the one window, borrowing the store for its lifetime
pub struct Window<'a, S: ThoughtStorage> {
    storage: &'a S,
    input: String,
    rows: Vec<Row>,
    focus: Focus,
    list_state: ListState,
}

impl<'a, S: ThoughtStorage> Window<'a, S> {
    /// Create the window and load the current log
    pub fn new(storage: &'a S) -> Result<Self, StorageError> {
        let mut window = Self {
            storage,
            input: String::new(),
            rows: Vec::new(),
            focus: Focus::Input,
            list_state: ListState::default(),
        };
        window.refresh()?;
        Ok(window)
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Index into `rows` of the selected entry, if any
    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    /// Hand the trimmed input to the store
    ///
    /// On success the input is cleared and the list rebuilt. When the store
    /// rejects the text (empty after trimming) nothing changes.
    pub fn submit(&mut self) -> Result<bool, StorageError> {
        let text = normalize_input(&self.input);

        if !self.storage.append(text)? {
            debug!("Ignored empty submission");
            return Ok(false);
        }

        self.input.clear();
        self.refresh()?;
        Ok(true)
    }

    /// Rebuild the list from a fresh read of the store
    pub fn refresh(&mut self) -> Result<(), StorageError> {
        self.rows.clear();
        let thoughts = self.storage.read_all_ordered()?;
        self.rows = build_rows(&thoughts);

        let selection = if self.focus == Focus::List {
            next_selectable(&self.rows, 0, true)
        } else {
            None
        };
        self.list_state.select(selection);

        debug!("Rendered {} thoughts as {} rows", thoughts.len(), self.rows.len());
        Ok(())
    }

    /// React to one key press
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<Control, StorageError> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => return Ok(Control::Close),
            KeyCode::Char('c') if ctrl => return Ok(Control::Close),
            KeyCode::Tab => self.set_focus(self.focus.next()),
            KeyCode::BackTab => self.set_focus(self.focus.prev()),
            _ => match self.focus {
                Focus::Input => self.handle_input_key(key, ctrl)?,
                Focus::Button => {
                    if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                        self.submit()?;
                    }
                }
                Focus::List => self.handle_list_key(key),
            },
        }

        Ok(Control::Continue)
    }

    fn handle_input_key(&mut self, key: KeyEvent, ctrl: bool) -> Result<(), StorageError> {
        match key.code {
            KeyCode::Enter => {
                self.submit()?;
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) if !ctrl => self.input.push(c),
            _ => {}
        }
        Ok(())
    }

    fn handle_list_key(&mut self, key: KeyEvent) {
        let target = match (key.code, self.list_state.selected()) {
            (KeyCode::Down, Some(i)) => next_selectable(&self.rows, i + 1, true),
            (KeyCode::Down, None) | (KeyCode::Home, _) => next_selectable(&self.rows, 0, true),
            (KeyCode::Up, Some(i)) if i > 0 => next_selectable(&self.rows, i - 1, false),
            (KeyCode::End, _) => next_selectable(&self.rows, usize::MAX, false),
            _ => None,
        };

        if target.is_some() {
            self.list_state.select(target);
        }
    }

    fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        if focus == Focus::List && self.list_state.selected().is_none() {
            self.list_state.select(next_selectable(&self.rows, 0, true));
        }
    }
}

/// Run the window until the user closes it
///
/// Takes over the terminal for the duration and restores it on the way out,
/// also when the store fails.
pub fn run<S: ThoughtStorage>(storage: &S) -> Result<(), AppError> {
    let mut window = Window::new(storage)?;

    let mut terminal = ratatui::try_init()?;
    let result = event_loop(&mut terminal, &mut window);
    ratatui::restore();

    result
}

fn event_loop<S: ThoughtStorage>(
    terminal: &mut DefaultTerminal,
    window: &mut Window<'_, S>,
) -> Result<(), AppError> {
    info!("Window opened with {} rows", window.rows().len());

    loop {
        terminal.draw(|frame| ui::draw(frame, window))?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if window.handle_key(key)? == Control::Close {
                    info!("Window closed");
                    return Ok(());
                }
            }
            // Resize and everything else just redraw
            _ => {}
        }
    }
}

use crossterm::event::KeyCode;
use lesson_solver_engine::{Solution, export_html, export_text};
use ratatui::widgets::ListState;
use std::path::PathBuf;

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    Quit,
    /// Files were written; anything logged to the terminal needs a full redraw.
    Exported,
}

pub struct App {
    pub solution: Solution,
    /// Answer visibility, one flag per block. Only question blocks use theirs.
    pub revealed: Vec<bool>,
    pub list_state: ListState,
    pub export_dir: PathBuf,
    pub status: Option<String>,
}

impl App {
    pub fn new(solution: Solution, export_dir: PathBuf, reveal_answers: bool) -> Self {
        let revealed = vec![reveal_answers; solution.blocks().len()];
        let mut list_state = ListState::default();
        if !solution.is_empty() {
            list_state.select(Some(0));
        }

        Self {
            solution,
            revealed,
            list_state,
            export_dir,
            status: None,
        }
    }

    pub fn handle_key(&mut self, code: KeyCode) -> Action {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return Action::Quit,
            KeyCode::Down | KeyCode::Char('j') => self.next_card(),
            KeyCode::Up | KeyCode::Char('k') => self.previous_card(),
            KeyCode::Enter | KeyCode::Char(' ') => self.toggle_selected(),
            KeyCode::Char('a') => self.toggle_all(),
            KeyCode::Char('s') => {
                self.export(Export::Text);
                return Action::Exported;
            }
            KeyCode::Char('h') => {
                self.export(Export::Html);
                return Action::Exported;
            }
            _ => {}
        }
        Action::None
    }

    pub fn next_card(&mut self) {
        let len = self.solution.blocks().len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % len,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn previous_card(&mut self) {
        let len = self.solution.blocks().len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(i));
    }

    /// Flips the selected answer. Non-question cards have nothing to reveal.
    pub fn toggle_selected(&mut self) {
        if let Some(index) = self.list_state.selected()
            && self.solution.blocks().get(index).is_some_and(|b| b.is_qa())
            && let Some(flag) = self.revealed.get_mut(index)
        {
            *flag = !*flag;
        }
    }

    /// Reveals every answer unless all are already shown, in which case hides them.
    pub fn toggle_all(&mut self) {
        let blocks = self.solution.blocks();
        let all_shown = blocks
            .iter()
            .zip(&self.revealed)
            .filter(|(block, _)| block.is_qa())
            .all(|(_, shown)| *shown);
        self.revealed.iter_mut().for_each(|flag| *flag = !all_shown);
    }

    fn export(&mut self, kind: Export) {
        let result = match kind {
            Export::Text => export_text(&self.solution, &self.export_dir),
            Export::Html => export_html(&self.solution, &self.export_dir),
        };
        self.status = Some(match result {
            Ok(path) => format!("Saved {}", path.display()),
            Err(e) => {
                log::error!("Export failed: {e}");
                format!("Export failed: {e}")
            }
        });
    }
}

enum Export {
    Text,
    Html,
}

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use fuzzy_matcher::skim::SkimMatcherV2;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use super::render;
use crate::config::Palette;
use crate::skins::{Skin, SkinRegistry};
use crate::util::fuzzy_match_rank_with_matcher;

/// In-memory state of the selector: candidates, filter text, selection.
///
/// Pure data; the terminal loop feeds key events in and reads the chosen
/// skin back out, which keeps the navigation logic testable headlessly.
pub struct SelectorState<'a> {
    /// All candidate skins in display order.
    candidates: Vec<&'a Skin>,
    /// Indices into `candidates` surviving the current filter, best first.
    filtered: Vec<usize>,
    /// Filter text typed so far.
    input: String,
    /// Selected row within `filtered`.
    selected: usize,
    /// Identifier of the currently applied skin, when known.
    current_id: Option<String>,
    /// Reused fuzzy matcher.
    matcher: SkimMatcherV2,
}

impl<'a> SelectorState<'a> {
    /// Build selector state over ordered candidates, pre-selecting the
    /// currently applied skin when it is in the list.
    #[must_use]
    pub fn new(candidates: Vec<&'a Skin>, current_id: Option<String>) -> Self {
        let mut state = Self {
            candidates,
            filtered: Vec::new(),
            input: String::new(),
            selected: 0,
            current_id,
            matcher: SkimMatcherV2::default(),
        };
        state.refilter();
        state
    }

    /// Filter text typed so far.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Identifier of the currently applied skin, when known.
    #[must_use]
    pub fn current_id(&self) -> Option<&str> {
        self.current_id.as_deref()
    }

    /// Append a character to the filter and recompute matches.
    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
        self.refilter();
    }

    /// Drop the last filter character and recompute matches.
    pub fn backspace(&mut self) {
        self.input.pop();
        self.refilter();
    }

    /// Move the selection up one row.
    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Move the selection down one row.
    pub fn move_down(&mut self) {
        if self.selected + 1 < self.filtered.len() {
            self.selected += 1;
        }
    }

    /// Move the selection up one page of `page` rows.
    pub fn page_up(&mut self, page: usize) {
        self.selected = self.selected.saturating_sub(page.max(1));
    }

    /// Move the selection down one page of `page` rows.
    pub fn page_down(&mut self, page: usize) {
        if self.filtered.is_empty() {
            return;
        }
        self.selected = (self.selected + page.max(1)).min(self.filtered.len() - 1);
    }

    /// Selected row index within the visible list.
    #[must_use]
    pub fn selected_row(&self) -> usize {
        self.selected
    }

    /// Skins surviving the current filter, in display order.
    pub fn visible(&self) -> impl Iterator<Item = &'a Skin> + '_ {
        self.filtered.iter().map(|&i| self.candidates[i])
    }

    /// The highlighted skin, if any row is visible.
    #[must_use]
    pub fn current(&self) -> Option<&'a Skin> {
        self.filtered
            .get(self.selected)
            .map(|&i| self.candidates[i])
    }

    /// Recompute `filtered` from the input; empty input keeps every
    /// candidate and re-selects the active skin, a query ranks by fuzzy
    /// score over the `package/name` identifier.
    fn refilter(&mut self) {
        if self.input.trim().is_empty() {
            self.filtered = (0..self.candidates.len()).collect();
            self.selected = self
                .current_id
                .as_deref()
                .and_then(|id| self.candidates.iter().position(|s| s.id() == id))
                .unwrap_or(0);
            return;
        }
        let mut scored: Vec<(i64, usize)> = self
            .candidates
            .iter()
            .enumerate()
            .filter_map(|(i, skin)| {
                fuzzy_match_rank_with_matcher(&skin.id(), &self.input, &self.matcher)
                    .map(|score| (score, i))
            })
            .collect();
        scored.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));
        self.filtered = scored.into_iter().map(|(_, i)| i).collect();
        self.selected = 0;
    }
}

/// What: Run the interactive selector and return the confirmed choice.
///
/// Inputs:
/// - `registry`: Scanned skin registry to choose from.
/// - `package`: Optional package filter restricting the candidate list.
/// - `palette`: Selector colors.
/// - `current_id`: Identifier of the currently applied skin, for
///   pre-selection.
///
/// Output:
/// - `Ok(Some(skin))` on Enter, `Ok(None)` on Esc/Ctrl-C, `Err(msg)` when
///   no candidates exist or the terminal cannot be driven.
///
/// Details:
/// - No settings file is touched while the selector is open; cancellation
///   has zero side effects.
pub fn run_selector(
    registry: &SkinRegistry,
    package: Option<&str>,
    palette: &Palette,
    current_id: Option<String>,
) -> Result<Option<Skin>, String> {
    let candidates = match package {
        Some(p) => registry.in_package(p),
        None => registry.ordered(),
    };
    if candidates.is_empty() {
        return Err(match package {
            Some(p) => format!("No skins found in package {p:?}"),
            None => "No skins found; add *.skins files to your packages directory".to_string(),
        });
    }
    let mut state = SelectorState::new(candidates, current_id);

    enable_raw_mode().map_err(|e| format!("Failed to enter raw mode: {e}"))?;
    let mut stdout = io::stdout();
    if let Err(e) = crossterm::execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(format!("Failed to enter alternate screen: {e}"));
    }
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend);
    let result = match terminal {
        Ok(mut terminal) => {
            let out = event_loop(&mut terminal, &mut state, palette);
            let _ = crossterm::execute!(terminal.backend_mut(), LeaveAlternateScreen);
            out
        }
        Err(e) => {
            let _ = crossterm::execute!(io::stdout(), LeaveAlternateScreen);
            Err(format!("Failed to initialize terminal: {e}"))
        }
    };
    let _ = disable_raw_mode();
    result
}

/// Draw and react to key events until a choice is confirmed or abandoned.
fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut SelectorState<'_>,
    palette: &Palette,
) -> Result<Option<Skin>, String> {
    loop {
        terminal
            .draw(|f| render::draw(f, state, palette))
            .map_err(|e| format!("Failed to draw selector: {e}"))?;
        let ev = event::read().map_err(|e| format!("Failed to read input: {e}"))?;
        let Event::Key(key) = ev else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        match key.code {
            KeyCode::Esc => return Ok(None),
            KeyCode::Enter => return Ok(state.current().cloned()),
            KeyCode::Up => state.move_up(),
            KeyCode::Down => state.move_down(),
            KeyCode::PageUp => state.page_up(10),
            KeyCode::PageDown => state.page_down(10),
            KeyCode::Backspace => state.backspace(),
            KeyCode::Char(c) => {
                if key.modifiers.contains(KeyModifiers::CONTROL) {
                    if c == 'c' {
                        return Ok(None);
                    }
                } else {
                    state.push_char(c);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skins::{PREFERENCES, SkinTargets, TargetSettings};
    use serde_json::json;

    fn skin(package: &str, name: &str) -> Skin {
        let mut prefs = TargetSettings::new();
        prefs.insert("theme".to_string(), json!("t"));
        prefs.insert("color_scheme".to_string(), json!("c"));
        let mut targets = SkinTargets::new();
        targets.insert(PREFERENCES.to_string(), prefs);
        Skin {
            package: package.to_string(),
            name: name.to_string(),
            targets,
        }
    }

    #[test]
    /// What: Filtering narrows the list and Enter-equivalent state tracks it.
    ///
    /// Inputs:
    /// - Three candidates; filter text matching one of them.
    ///
    /// Output:
    /// - Only the match stays visible and becomes the current row.
    fn filter_narrows_candidates() {
        let a = skin("User", "Daylight");
        let b = skin("User", "Nord");
        let c = skin("Pack", "Solar");
        let mut state = SelectorState::new(vec![&a, &b, &c], None);
        assert_eq!(state.visible().count(), 3);

        for ch in "solar".chars() {
            state.push_char(ch);
        }
        assert_eq!(state.visible().count(), 1);
        assert_eq!(state.current().map(Skin::id), Some("Pack/Solar".to_string()));

        // clearing the filter restores everything
        for _ in 0.."solar".len() {
            state.backspace();
        }
        assert_eq!(state.visible().count(), 3);
    }

    #[test]
    fn current_skin_is_preselected() {
        let a = skin("User", "Daylight");
        let b = skin("User", "Nord");
        let state = SelectorState::new(vec![&a, &b], Some("User/Nord".to_string()));
        assert_eq!(state.current().map(Skin::id), Some("User/Nord".to_string()));
    }

    #[test]
    fn navigation_clamps_at_both_ends() {
        let a = skin("User", "A");
        let b = skin("User", "B");
        let c = skin("User", "C");
        let mut state = SelectorState::new(vec![&a, &b, &c], None);
        state.move_up();
        assert_eq!(state.selected_row(), 0);
        state.page_down(10);
        assert_eq!(state.selected_row(), 2);
        state.move_down();
        assert_eq!(state.selected_row(), 2);
        state.page_up(10);
        assert_eq!(state.selected_row(), 0);
    }

    #[test]
    fn unmatched_filter_leaves_no_current() {
        let a = skin("User", "A");
        let mut state = SelectorState::new(vec![&a], None);
        for ch in "zzzz".chars() {
            state.push_char(ch);
        }
        assert_eq!(state.visible().count(), 0);
        assert!(state.current().is_none());
    }
}

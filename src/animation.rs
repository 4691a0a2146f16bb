//! Demo preview timeline.
//!
//! The demo plays as a fixed sequence of phases:
//! typing, pause, suggestion, pause, staggered score rows, dwell, reset.
//! Each row's bar fills shortly after the row itself appears.
//! [`DemoScript`] lays those phases out on a timeline measured from the end
//! of typing, and [`DemoState`] is what the preview renders at any point.

use std::rc::Rc;

use yew::prelude::*;

use crate::config;

#[derive(Clone, Debug, PartialEq)]
pub struct FeedbackRow {
    pub label: String,
    /// Raw `data-target` value as written in the markup.
    pub raw_target: Option<String>,
}

impl FeedbackRow {
    pub fn new(label: &str, raw_target: Option<&str>) -> Self {
        Self {
            label: label.to_string(),
            raw_target: raw_target.map(str::to_string),
        }
    }

    pub fn from_config() -> Vec<Self> {
        config::DEMO_FEEDBACK
            .iter()
            .map(|(label, target)| Self::new(label, *target))
            .collect()
    }

    /// Fill percentage, or `None` when the row has nothing to animate.
    pub fn target(&self) -> Option<u8> {
        parse_target(self.raw_target.as_deref()?)
    }
}

/// Parses a percentage such as `"92"` or `"92%"`, clamped to 100.
pub fn parse_target(raw: &str) -> Option<u8> {
    let trimmed = raw.trim().trim_end_matches('%').trim();
    let value: f64 = trimmed.parse().ok()?;
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    Some(value.min(100.0).round() as u8)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Nothing typed yet: waiting for the panel to come into view.
    Reset,
    Typing,
    PauseBeforeSuggestion,
    /// Suggestion shown, scores still pending.
    Suggestion,
    Scores,
    Dwell,
}

/// A point on the timeline where something becomes visible.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cue {
    ShowSuggestion,
    RevealRow(usize),
    FillRow(usize),
    Reset,
}

/// A cue and its offset from the moment typing completed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scheduled {
    pub after_ms: u32,
    pub cue: Cue,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DemoScript {
    char_count: usize,
    interval_ms: u32,
    cues: Vec<Scheduled>,
}

impl DemoScript {
    /// Lays out the feedback timeline. The dwell is measured from the start of
    /// the score phase, so rows that would land after the reset are dropped.
    pub fn new(text: &str, rows: usize) -> Self {
        let suggestion_at = config::SUGGESTION_DELAY_MS;
        let scores_at = suggestion_at + config::SCORES_DELAY_MS;
        let reset_at = scores_at + config::DEMO_DWELL_MS;

        let mut cues = vec![Scheduled { after_ms: suggestion_at, cue: Cue::ShowSuggestion }];
        for index in 0..rows {
            let shown = scores_at + index as u32 * config::SCORE_STAGGER_MS;
            cues.push(Scheduled { after_ms: shown, cue: Cue::RevealRow(index) });
            cues.push(Scheduled { after_ms: shown + config::SCORE_FILL_DELAY_MS, cue: Cue::FillRow(index) });
        }
        cues.retain(|s| s.after_ms < reset_at);
        cues.sort_by_key(|s| s.after_ms);
        cues.push(Scheduled { after_ms: reset_at, cue: Cue::Reset });

        Self {
            char_count: text.chars().count(),
            interval_ms: config::TYPING_INTERVAL_MS,
            cues,
        }
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Time from the first tick until the last character lands.
    pub fn typing_ms(&self) -> u32 {
        self.char_count as u32 * self.interval_ms
    }

    pub fn cues(&self) -> &[Scheduled] {
        &self.cues
    }

    pub fn total_ms(&self) -> u32 {
        self.typing_ms() + self.cues.last().map(|s| s.after_ms).unwrap_or(0)
    }
}

pub enum DemoAction {
    Tick,
    Cue(Cue),
}

/// What the preview panel currently shows.
#[derive(Clone, Debug, PartialEq)]
pub struct DemoState {
    text: Rc<str>,
    pub typed: String,
    pub suggestion_visible: bool,
    pub revealed_rows: usize,
    pub filled_rows: usize,
}

impl DemoState {
    pub fn new(text: &str) -> Self {
        Self {
            text: Rc::from(text),
            typed: String::new(),
            suggestion_visible: false,
            revealed_rows: 0,
            filled_rows: 0,
        }
    }

    pub fn typing_complete(&self) -> bool {
        self.text[self.typed.len()..].is_empty()
    }

    /// Appends the next character. Returns `false` once nothing is left.
    pub fn type_next(&mut self) -> bool {
        match self.text[self.typed.len()..].chars().next() {
            Some(c) => {
                self.typed.push(c);
                true
            }
            None => false,
        }
    }

    pub fn apply(&mut self, cue: Cue) {
        match cue {
            Cue::ShowSuggestion => self.suggestion_visible = true,
            Cue::RevealRow(index) => self.revealed_rows = self.revealed_rows.max(index + 1),
            Cue::FillRow(index) => self.filled_rows = self.filled_rows.max(index + 1),
            Cue::Reset => *self = Self::new(&self.text),
        }
    }

    /// Phase implied by what is on screen, for a panel with `rows` feedback rows.
    pub fn phase(&self, rows: usize) -> Phase {
        if self.typed.is_empty() {
            Phase::Reset
        } else if !self.typing_complete() {
            Phase::Typing
        } else if !self.suggestion_visible {
            Phase::PauseBeforeSuggestion
        } else if self.revealed_rows == 0 && rows > 0 {
            Phase::Suggestion
        } else if self.revealed_rows < rows {
            Phase::Scores
        } else {
            Phase::Dwell
        }
    }

    pub fn row_revealed(&self, index: usize) -> bool {
        index < self.revealed_rows
    }

    /// Width of a row's fill bar in percent, once its fill cue has fired.
    pub fn fill_width(&self, index: usize, row: &FeedbackRow) -> Option<u8> {
        if index >= self.filled_rows {
            return None;
        }
        row.target()
    }
}

impl Reducible for DemoState {
    type Action = DemoAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            DemoAction::Tick => {
                if !next.type_next() {
                    return self;
                }
            }
            DemoAction::Cue(cue) => next.apply(cue),
        }
        next.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Plays the script against a fresh state for `elapsed_ms` of simulated time.
    fn simulate(text: &str, rows: usize, elapsed_ms: u32) -> DemoState {
        let script = DemoScript::new(text, rows);
        let mut state = DemoState::new(text);

        let mut now = script.interval_ms();
        while now <= elapsed_ms && state.type_next() {
            now += script.interval_ms();
        }
        if !state.typing_complete() {
            return state;
        }
        for scheduled in script.cues() {
            if script.typing_ms() + scheduled.after_ms > elapsed_ms {
                break;
            }
            state.apply(scheduled.cue);
        }
        state
    }

    #[test]
    fn typing_fills_whole_text_after_one_interval_per_char() {
        let text = "Can we feature your video?";
        let len = text.chars().count() as u32;

        let state = simulate(text, 3, len * config::TYPING_INTERVAL_MS);
        assert_eq!(state.typed, text);
        assert!(state.typing_complete());
        assert!(!state.suggestion_visible);

        let partial = simulate(text, 3, (len - 1) * config::TYPING_INTERVAL_MS);
        assert_eq!(partial.typed.chars().count(), text.len() - 1);
    }

    #[test]
    fn multibyte_text_types_by_character() {
        let text = "héllo ✨";
        let state = simulate(text, 0, 7 * config::TYPING_INTERVAL_MS);
        assert_eq!(state.typed, text);
        assert_eq!(state.typed.chars().count(), 7);
    }

    #[test]
    fn feedback_phase_follows_typing() {
        let text = "abcd";
        let typed = DemoScript::new(text, 3).typing_ms();
        let phase = |elapsed| simulate(text, 3, elapsed).phase(3);

        assert_eq!(phase(0), Phase::Reset);
        assert_eq!(phase(typed - 1), Phase::Typing);
        assert_eq!(phase(typed), Phase::PauseBeforeSuggestion);
        assert_eq!(phase(typed + 500), Phase::Suggestion);
        assert_eq!(phase(typed + 900), Phase::Scores);
        assert_eq!(phase(typed + 1500), Phase::Dwell);
        assert_eq!(phase(typed + 900 + 8000), Phase::Reset);
    }

    #[test]
    fn cues_are_staggered() {
        let script = DemoScript::new("x", 3);
        let offsets: Vec<(u32, Cue)> = script.cues().iter().map(|s| (s.after_ms, s.cue)).collect();
        assert_eq!(
            offsets,
            vec![
                (500, Cue::ShowSuggestion),
                (900, Cue::RevealRow(0)),
                (1100, Cue::FillRow(0)),
                (1200, Cue::RevealRow(1)),
                (1400, Cue::FillRow(1)),
                (1500, Cue::RevealRow(2)),
                (1700, Cue::FillRow(2)),
                (8900, Cue::Reset),
            ]
        );
        assert_eq!(script.total_ms(), 50 + 8900);
    }

    #[test]
    fn loop_period_does_not_depend_on_row_count() {
        let reset_at = |rows| DemoScript::new("x", rows).cues().last().map(|s| (s.after_ms, s.cue));
        assert_eq!(reset_at(0), Some((8900, Cue::Reset)));
        assert_eq!(reset_at(3), Some((8900, Cue::Reset)));
        assert_eq!(reset_at(40), Some((8900, Cue::Reset)));

        // Rows that would appear after the reset are never scheduled.
        let crowded = DemoScript::new("x", 40);
        assert!(crowded.cues().iter().all(|s| s.after_ms <= 8900));
        assert!(crowded.cues().windows(2).all(|w| w[0].after_ms <= w[1].after_ms));
    }

    #[test]
    fn rows_reveal_in_order_and_reset_clears_everything() {
        let text = "hi";
        let typed = DemoScript::new(text, 2).typing_ms();

        let state = simulate(text, 2, typed + 900);
        assert!(state.suggestion_visible);
        assert!(state.row_revealed(0));
        assert!(!state.row_revealed(1));

        let state = simulate(text, 2, typed + 900 + 8000);
        assert_eq!(state, DemoState::new(text));
    }

    #[test]
    fn bars_fill_after_their_row_appears() {
        let text = "hi";
        let typed = DemoScript::new(text, 1).typing_ms();
        let row = FeedbackRow::new("Tone", Some("92"));

        let shown = simulate(text, 1, typed + 900);
        assert!(shown.row_revealed(0));
        assert_eq!(shown.fill_width(0, &row), None);

        let filled = simulate(text, 1, typed + 1100);
        assert_eq!(filled.fill_width(0, &row), Some(92));
    }

    #[test]
    fn rows_without_target_skip_their_fill() {
        let mut state = DemoState::new("x");
        state.apply(Cue::RevealRow(1));
        state.apply(Cue::FillRow(1));

        let scored = FeedbackRow::new("Tone", Some("92%"));
        let missing = FeedbackRow::new("Clarity", None);
        let garbage = FeedbackRow::new("Fit", Some("lots"));

        assert_eq!(state.fill_width(0, &scored), Some(92));
        assert_eq!(state.fill_width(1, &missing), None);
        assert_eq!(state.fill_width(1, &garbage), None);
        assert_eq!(state.fill_width(2, &scored), None);
    }

    #[test]
    fn targets_are_clamped() {
        assert_eq!(parse_target(" 150 "), Some(100));
        assert_eq!(parse_target("-3"), None);
        assert_eq!(parse_target(""), None);
    }

    #[test]
    fn reducer_ignores_ticks_after_completion() {
        let state = Rc::new(DemoState::new("a"));
        let state = state.reduce(DemoAction::Tick);
        assert_eq!(state.typed, "a");
        let again = state.clone().reduce(DemoAction::Tick);
        assert!(Rc::ptr_eq(&state, &again));
    }
}

use std::rc::Rc;

use yew::prelude::*;

use crate::config;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AccordionMode {
    /// Any number of items may be open at once.
    #[default]
    Multiple,
    /// Opening an item closes every other item.
    Exclusive,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccordionState {
    mode: AccordionMode,
    open: Vec<bool>,
}

impl AccordionState {
    pub fn new(items: usize, mode: AccordionMode) -> Self {
        Self { mode, open: vec![false; items] }
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open.get(index).copied().unwrap_or(false)
    }

    /// Flips one item. Returns whether it is now open.
    pub fn toggle(&mut self, index: usize) -> bool {
        let Some(current) = self.open.get(index).copied() else {
            return false;
        };
        let opening = !current;
        if opening && self.mode == AccordionMode::Exclusive {
            self.open.iter_mut().for_each(|open| *open = false);
        }
        self.open[index] = opening;
        opening
    }
}

pub struct Toggle(pub usize);

impl Reducible for AccordionState {
    type Action = Toggle;

    fn reduce(self: Rc<Self>, Toggle(index): Toggle) -> Rc<Self> {
        let mut next = (*self).clone();
        next.toggle(index);
        next.into()
    }
}

/// Scroll target for an item that just opened, if its top edge sits above
/// the fixed header plus a small margin.
pub fn reveal_offset(item_top: f64, scroll_y: f64, header_height: f64) -> Option<f64> {
    let target = item_top - header_height - config::ANCHOR_MARGIN;
    (scroll_y > target).then(|| target.max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn double_toggle_is_a_round_trip() {
        let mut state = AccordionState::new(3, AccordionMode::Multiple);
        let before = state.clone();
        assert!(state.toggle(1));
        assert!(!state.toggle(1));
        assert_eq!(state, before);
    }

    #[test]
    fn multiple_items_stay_open_by_default() {
        let mut state = AccordionState::new(3, AccordionMode::default());
        state.toggle(0);
        state.toggle(2);
        assert!(state.is_open(0));
        assert!(!state.is_open(1));
        assert!(state.is_open(2));
    }

    #[test]
    fn exclusive_mode_closes_siblings() {
        let mut state = AccordionState::new(3, AccordionMode::Exclusive);
        state.toggle(0);
        state.toggle(2);
        assert!(!state.is_open(0));
        assert!(state.is_open(2));

        state.toggle(2);
        assert!(!state.is_open(2));
    }

    #[test]
    fn out_of_range_toggle_is_ignored() {
        let mut state = AccordionState::new(1, AccordionMode::Multiple);
        assert!(!state.toggle(5));
        assert!(!state.is_open(5));
    }

    #[test]
    fn scrolls_only_when_top_is_hidden() {
        // Item fully below the header: leave the page where it is.
        assert_eq!(reveal_offset(900.0, 200.0, 80.0), None);
        // Exactly at the margin line.
        assert_eq!(reveal_offset(300.0, 200.0, 80.0), None);
        // Inside the 20px margin under the header.
        assert_eq!(reveal_offset(290.0, 200.0, 80.0), Some(190.0));
        // Item top tucked under the header.
        assert_eq!(reveal_offset(250.0, 200.0, 80.0), Some(150.0));
        assert_eq!(reveal_offset(40.0, 10.0, 80.0), Some(0.0));
    }
}

//! Keeps the catalogue session and the `/catalogue/:filters` route in step.
//!
//! The session is the writer while the page is mounted. Every filter state it
//! writes to the URL is remembered until the router hands it back, so a route
//! value that lags behind the session is recognised and ignored. Anything else
//! arriving through the route came from history navigation and is applied.

use std::collections::VecDeque;

use common::filter_state::FilterState;

const MAX_PENDING: usize = 64;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterUrlSync {
    pending: VecDeque<FilterState>,
    last_written: Option<FilterState>,
}

impl FilterUrlSync {
    /// Starts in step with the route the page was opened on.
    pub fn new(initial: FilterState) -> Self {
        Self { pending: VecDeque::new(), last_written: Some(initial) }
    }

    /// Returns the filters to write to the URL, or `None` if the URL already
    /// has (or is about to have) them.
    pub fn session_changed(&mut self, current: &FilterState) -> Option<FilterState> {
        if self.last_written.as_ref() == Some(current) {
            return None;
        }
        if self.pending.len() == MAX_PENDING {
            self.pending.pop_front();
        }
        self.pending.push_back(current.clone());
        self.last_written = Some(current.clone());
        Some(current.clone())
    }

    /// Returns the filters to apply to the session, or `None` when the route
    /// value is one of our own writes arriving late.
    pub fn route_changed(&mut self, route: &FilterState) -> Option<FilterState> {
        if let Some(position) = self.pending.iter().position(|written| written == route) {
            self.pending.drain(..=position);
            return None;
        }
        if self.last_written.as_ref() == Some(route) {
            return None;
        }
        self.pending.clear();
        self.last_written = Some(route.clone());
        Some(route.clone())
    }
}

//! Mobile drawer state machine.
//!
//! `Closed` on mount. The trigger toggles; a link inside the drawer or a
//! dismissal gesture (backdrop, Escape) closes it.

use tracing::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DrawerState {
    #[default]
    Closed,
    Open,
}

/// Sink for navigation requests issued from inside the drawer.
pub trait Navigate {
    fn navigate_to(&mut self, path: &str);
}

impl DrawerState {
    pub fn is_open(self) -> bool {
        self == DrawerState::Open
    }

    pub fn toggle(&mut self) {
        self.set_open(!self.is_open());
    }

    /// `onOpenChange` entry point for the sheet primitive.
    pub fn set_open(&mut self, open: bool) {
        let next = if open {
            DrawerState::Open
        } else {
            DrawerState::Closed
        };
        let current = *self;
        if current != next {
            debug!(from = ?current, to = ?next, "drawer transition");
        }
        *self = next;
    }

    pub fn dismiss(&mut self) {
        self.set_open(false);
    }

    /// Close the drawer, then issue exactly one navigation request.
    pub fn follow_link<N: Navigate + ?Sized>(&mut self, path: &str, navigator: &mut N) {
        self.dismiss();
        navigator.navigate_to(path);
    }
}

//! Screen state bound to the addressable history.
//!
//! The navigator is the only writer of the current screen. Programmatic
//! navigation and host-reported history changes go through the same
//! transition path, so subscribers cannot tell them apart.

use stacks_config::NavigationConfig;
use stacks_core::Screen;

use crate::history::History;

/// A completed screen transition. `from == to` means nothing changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenChange {
    pub from: Screen,
    pub to: Screen,
}

impl ScreenChange {
    #[must_use]
    pub fn is_change(self) -> bool {
        self.from != self.to
    }

    /// Detail back to results: the one transition that replays a snapshot.
    #[must_use]
    pub fn is_return_to_results(self) -> bool {
        self.from == Screen::Detail && self.to == Screen::Results
    }

    /// Results forward to detail: the one transition that captures a snapshot.
    #[must_use]
    pub fn is_results_to_detail(self) -> bool {
        self.from == Screen::Results && self.to == Screen::Detail
    }

    /// Arrival at a screen outside the results/detail pair.
    #[must_use]
    pub fn leaves_library_pair(self) -> bool {
        self.is_change() && !self.to.is_library_pair()
    }
}

type Listener = Box<dyn FnMut(ScreenChange) + Send>;

/// Owns the current [`Screen`] and keeps it in step with a [`History`].
pub struct Navigator<H> {
    history: H,
    current: Screen,
    canonicalize_unknown: bool,
    listeners: Vec<Listener>,
}

impl<H: History> Navigator<H> {
    pub fn new(history: H, config: &NavigationConfig) -> Self {
        Self {
            history,
            current: Screen::DEFAULT,
            canonicalize_unknown: config.canonicalize_unknown,
            listeners: Vec::new(),
        }
    }

    /// Map any fragment to a screen. Total: unknown input yields the default.
    #[must_use]
    pub fn resolve_screen(fragment: &str) -> Screen {
        Screen::resolve(fragment)
    }

    #[must_use]
    pub const fn current(&self) -> Screen {
        self.current
    }

    #[must_use]
    pub const fn history(&self) -> &H {
        &self.history
    }

    /// Host access for back/forward. Report the resulting fragment through
    /// [`Self::on_external_change`].
    pub fn history_mut(&mut self) -> &mut H {
        &mut self.history
    }

    /// Register a callback for every completed screen change.
    pub fn subscribe(&mut self, listener: impl FnMut(ScreenChange) + Send + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Adopt whatever the history holds at startup.
    ///
    /// With no fragment the default is written by replacement, so running
    /// this twice leaves a single history entry. An unrecognized or
    /// non-canonical fragment is rewritten the same way when
    /// `canonicalize_unknown` is set.
    pub fn initialize(&mut self) -> ScreenChange {
        let screen = match self.history.fragment() {
            None => {
                self.history.replace(Screen::DEFAULT.as_str());
                Screen::DEFAULT
            }
            Some(fragment) => {
                let screen = Self::resolve_screen(&fragment);
                if self.canonicalize_unknown && fragment != screen.as_str() {
                    tracing::debug!(%fragment, canonical = %screen, "canonicalizing initial fragment");
                    self.history.replace(screen.as_str());
                }
                screen
            }
        };
        self.transition(screen)
    }

    /// Move to `screen`, pushing its fragment unless the history already
    /// shows it.
    pub fn navigate(&mut self, screen: Screen) -> ScreenChange {
        if self.history.fragment().as_deref() != Some(screen.as_str()) {
            self.history.push(screen.as_str());
        }
        self.transition(screen)
    }

    /// Follow a history change the host made (back, forward, manual edit).
    /// Never writes to the history.
    pub fn on_external_change(&mut self, fragment: &str) -> ScreenChange {
        let screen = Self::resolve_screen(fragment);
        self.transition(screen)
    }

    fn transition(&mut self, to: Screen) -> ScreenChange {
        let change = ScreenChange {
            from: self.current,
            to,
        };
        self.current = to;
        if change.is_change() {
            tracing::debug!(from = %change.from, to = %change.to, "screen change");
            for listener in &mut self.listeners {
                listener(change);
            }
        }
        change
    }
}

impl<H: std::fmt::Debug> std::fmt::Debug for Navigator<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Navigator")
            .field("history", &self.history)
            .field("current", &self.current)
            .field("canonicalize_unknown", &self.canonicalize_unknown)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

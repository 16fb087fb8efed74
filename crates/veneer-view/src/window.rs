//! Windows, window levels and the window stack.
//!
//! Level queries operate on an explicit [`WindowStack`] owned by the caller
//! rather than on shared application state.

use std::sync::atomic::{AtomicU64, Ordering};

use veneer_core::geometry::Rect;

use crate::view::View;

/// Stacking level of a window; higher levels render in front.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct WindowLevel(pub f32);

impl WindowLevel {
    /// The default level for content windows.
    pub const NORMAL: Self = Self(0.0);

    /// The level of the status bar.
    pub const STATUS_BAR: Self = Self(1000.0);

    /// The level of alert windows.
    pub const ALERT: Self = Self(2000.0);

    /// Returns a level offset by the given amount.
    #[inline]
    pub fn offset(self, delta: f32) -> Self {
        Self(self.0 + delta)
    }
}

/// Unique identifier for windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowId(u64);

impl WindowId {
    fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw ID value.
    pub const fn raw(&self) -> u64 {
        self.0
    }
}

/// A top-level window: a root view at a stacking level.
#[derive(Debug, Clone, PartialEq)]
pub struct Window {
    id: WindowId,

    /// Stacking level.
    pub level: WindowLevel,

    /// Whether this is the key window receiving input.
    pub is_key: bool,

    /// The window's root view.
    pub root: View,
}

impl Window {
    /// Creates a window at the normal level with a root view of the given
    /// frame.
    pub fn new(frame: Rect) -> Self {
        Self {
            id: WindowId::new(),
            level: WindowLevel::NORMAL,
            is_key: false,
            root: View::new(frame),
        }
    }

    /// Creates a window at the given level.
    pub fn at_level(frame: Rect, level: WindowLevel) -> Self {
        let mut window = Self::new(frame);
        window.level = level;
        window
    }

    /// Returns the window's unique identifier.
    #[inline]
    pub const fn id(&self) -> WindowId {
        self.id
    }
}

/// The set of windows currently presented.
#[derive(Debug, Default)]
pub struct WindowStack {
    windows: Vec<Window>,
}

impl WindowStack {
    /// Creates an empty window stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a window to the stack.
    pub fn push(&mut self, window: Window) {
        self.windows.push(window);
    }

    /// Removes and returns the window with the given ID.
    pub fn remove(&mut self, id: WindowId) -> Option<Window> {
        let index = self.windows.iter().position(|w| w.id == id)?;
        Some(self.windows.remove(index))
    }

    /// Returns the presented windows in insertion order.
    pub fn windows(&self) -> &[Window] {
        &self.windows
    }

    /// Returns the key window, if one is marked.
    pub fn key_window(&self) -> Option<&Window> {
        self.windows.iter().find(|w| w.is_key)
    }

    /// Returns the first window at exactly the given level.
    pub fn window_at_level(&self, level: WindowLevel) -> Option<&Window> {
        self.windows.iter().find(|w| w.level == level)
    }

    /// Returns the maximal level among all presented windows.
    pub fn max_level_presented(&self) -> WindowLevel {
        self.max_level_below(WindowLevel(f32::MAX))
    }

    /// Returns the maximal presented level strictly below the probe, or the
    /// probe lowered by one when no window qualifies.
    pub fn max_level_below(&self, probe: WindowLevel) -> WindowLevel {
        self.windows
            .iter()
            .map(|w| w.level)
            .filter(|level| level.0 < probe.0)
            .fold(None, |best: Option<WindowLevel>, level| match best {
                Some(best) if best.0 >= level.0 => Some(best),
                _ => Some(level),
            })
            .unwrap_or(WindowLevel(probe.0 - 1.0))
    }

    /// Returns the minimal presented level strictly above the probe, or the
    /// probe itself when no window qualifies.
    pub fn min_level_above(&self, probe: WindowLevel) -> WindowLevel {
        self.windows
            .iter()
            .map(|w| w.level)
            .filter(|level| level.0 > probe.0)
            .fold(None, |best: Option<WindowLevel>, level| match best {
                Some(best) if best.0 <= level.0 => Some(best),
                _ => Some(level),
            })
            .unwrap_or(probe)
    }

    /// Returns the presented window closest above the given one, if any.
    pub fn closest_higher_window(&self, id: WindowId) -> Option<&Window> {
        let level = self.windows.iter().find(|w| w.id == id)?.level;
        let above = self.min_level_above(level);
        if above == level {
            return None;
        }
        self.window_at_level(above)
    }

    /// Returns the presented window closest below the given one, if any.
    pub fn closest_lower_window(&self, id: WindowId) -> Option<&Window> {
        let level = self.windows.iter().find(|w| w.id == id)?.level;
        let below = self.max_level_below(level);
        self.window_at_level(below)
    }
}

//! A retained view tree with layout, border, focus and animation state.
//!
//! Views are plain owned values: all state that a windowing toolkit would
//! hang off foreign objects (border sublayers, focus flags) lives directly
//! on the [`View`], and lookups such as the first responder are resolved
//! from an explicit root passed by the caller.

use std::sync::atomic::{AtomicU64, Ordering};

use bitflags::bitflags;
use smallvec::SmallVec;

use veneer_core::color::Color;
use veneer_core::geometry::{Point, Rect};

use crate::animation::Animation;

/// Unique identifier for views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewId(u64);

impl ViewId {
    /// Generates a new process-unique view ID.
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw ID value.
    pub const fn raw(&self) -> u64 {
        self.0
    }
}

impl Default for ViewId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ViewId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "View({})", self.0)
    }
}

bitflags! {
    /// Edges of a rectangle, combinable into a mask.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct EdgeMask: u8 {
        /// The left edge.
        const LEFT = 1 << 0;
        /// The right edge.
        const RIGHT = 1 << 1;
        /// The top edge.
        const TOP = 1 << 2;
        /// The bottom edge.
        const BOTTOM = 1 << 3;
        /// All four edges.
        const ALL = Self::LEFT.bits() | Self::RIGHT.bits() | Self::TOP.bits() | Self::BOTTOM.bits();
    }
}

/// Border state for a single edge, held by the owning view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeBorder {
    /// The border rect in the view's local coordinates.
    pub frame: Rect,
    /// The border fill color.
    pub color: Option<Color>,
}

/// Index order for per-edge border storage.
const EDGE_SLOTS: [EdgeMask; 4] = [
    EdgeMask::LEFT,
    EdgeMask::RIGHT,
    EdgeMask::TOP,
    EdgeMask::BOTTOM,
];

/// A view in a retained hierarchy.
///
/// # Examples
///
/// ```
/// use veneer_core::geometry::Rect;
/// use veneer_view::View;
///
/// let mut root = View::new(Rect::new(0.0, 0.0, 100.0, 100.0));
/// let mut child = View::new(Rect::new(10.0, 10.0, 50.0, 50.0));
/// child.tag = 7;
///
/// root.add_subview(child);
/// assert!(root.view_with_tag(7).is_some());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    id: ViewId,

    /// Position and size in the parent's coordinate space.
    pub frame: Rect,

    /// Background fill color.
    pub background: Option<Color>,

    /// Corner radius applied to the background and clipping.
    pub corner_radius: f32,

    /// Uniform border width drawn inside the bounds.
    pub border_width: f32,

    /// Uniform border color.
    pub border_color: Option<Color>,

    /// Free-form tag for lookups.
    pub tag: i64,

    /// Hidden views do not render and are skipped by screenshots.
    pub hidden: bool,

    /// Whether the view may become first responder.
    pub focusable: bool,

    /// Whether the view currently is first responder.
    focused: bool,

    /// Per-edge borders, in [`EdgeMask`] slot order.
    edge_borders: [Option<EdgeBorder>; 4],

    /// Child views, rendered in order after the receiver.
    pub subviews: Vec<View>,

    /// Animations currently attached to the view.
    pub animations: Vec<Animation>,
}

impl View {
    /// Creates a view with the given frame and no decoration.
    pub fn new(frame: Rect) -> Self {
        Self {
            id: ViewId::new(),
            frame,
            background: None,
            corner_radius: 0.0,
            border_width: 0.0,
            border_color: None,
            tag: 0,
            hidden: false,
            focusable: false,
            focused: false,
            edge_borders: [None; 4],
            subviews: Vec::new(),
            animations: Vec::new(),
        }
    }

    /// Returns the view's unique identifier.
    #[inline]
    pub const fn id(&self) -> ViewId {
        self.id
    }

    /// Returns the view's bounds: its size at a zero origin.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::from_size(self.frame.size)
    }

    /// Returns whether the point (in local coordinates) lies inside the
    /// bounds.
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        self.bounds().contains(point)
    }

    /// Converts a point from the parent's coordinate space to local
    /// coordinates.
    #[inline]
    pub fn convert_to_local(&self, point: Point) -> Point {
        point - self.frame.origin
    }

    // ========================================================================
    // Hierarchy
    // ========================================================================

    /// Appends a subview.
    pub fn add_subview(&mut self, view: View) {
        self.subviews.push(view);
    }

    /// Removes and returns the subview with the given ID, searching the
    /// whole subtree.
    pub fn remove_subview(&mut self, id: ViewId) -> Option<View> {
        if let Some(index) = self.subviews.iter().position(|v| v.id == id) {
            return Some(self.subviews.remove(index));
        }
        self.subviews
            .iter_mut()
            .find_map(|child| child.remove_subview(id))
    }

    /// Returns the first view in the subtree (including the receiver) with
    /// the given tag, in depth-first order.
    pub fn view_with_tag(&self, tag: i64) -> Option<&View> {
        // Explicit work stack; view trees are shallow in practice.
        let mut stack: SmallVec<[&View; 8]> = SmallVec::new();
        stack.push(self);

        while let Some(view) = stack.pop() {
            if view.tag == tag {
                return Some(view);
            }
            for child in view.subviews.iter().rev() {
                stack.push(child);
            }
        }
        None
    }

    /// Returns the view with the given ID in the subtree, if present.
    pub fn find(&self, id: ViewId) -> Option<&View> {
        if self.id == id {
            return Some(self);
        }
        self.subviews.iter().find_map(|child| child.find(id))
    }

    /// Returns the view with the given ID mutably, if present.
    pub fn find_mut(&mut self, id: ViewId) -> Option<&mut View> {
        if self.id == id {
            return Some(self);
        }
        self.subviews.iter_mut().find_map(|child| child.find_mut(id))
    }

    /// Visits every view in the subtree in depth-first order.
    pub fn for_each(&self, visit: &mut impl FnMut(&View)) {
        visit(self);
        for child in &self.subviews {
            child.for_each(visit);
        }
    }

    // ========================================================================
    // First responder
    // ========================================================================

    /// Returns whether the view currently is the first responder.
    #[inline]
    pub const fn is_first_responder(&self) -> bool {
        self.focused
    }

    /// Returns the current first responder in the subtree rooted at the
    /// receiver, in depth-first order.
    pub fn first_responder(&self) -> Option<&View> {
        if self.focused {
            return Some(self);
        }
        self.subviews.iter().find_map(View::first_responder)
    }

    /// Makes the view with the given ID the first responder.
    ///
    /// Any previous first responder resigns. Returns whether the target was
    /// found and focusable.
    pub fn become_first_responder(&mut self, id: ViewId) -> bool {
        if !matches!(self.find(id), Some(view) if view.focusable) {
            return false;
        }

        self.clear_focus();
        if let Some(view) = self.find_mut(id) {
            view.focused = true;
        }
        true
    }

    /// Clears the first responder, if any. Returns whether one resigned.
    pub fn resign_first_responder(&mut self) -> bool {
        let had_responder = self.first_responder().is_some();
        self.clear_focus();
        had_responder
    }

    fn clear_focus(&mut self) {
        self.focused = false;
        for child in &mut self.subviews {
            child.clear_focus();
        }
    }

    // ========================================================================
    // Borders
    // ========================================================================

    /// Sets a border along the given edges.
    ///
    /// Border rects are computed from the current bounds, one per edge,
    /// and stored on the view itself.
    pub fn set_border_on_edges(&mut self, edges: EdgeMask, width: f32, color: Option<Color>) {
        let bounds = self.bounds();

        let frames = [
            (EdgeMask::LEFT, Rect::new(0.0, 0.0, width, bounds.size.height)),
            (
                EdgeMask::RIGHT,
                Rect::new(bounds.size.width - width, 0.0, width, bounds.size.height),
            ),
            (EdgeMask::TOP, Rect::new(0.0, 0.0, bounds.size.width, width)),
            (
                EdgeMask::BOTTOM,
                Rect::new(0.0, bounds.size.height - width, bounds.size.width, width),
            ),
        ];

        for (slot, (edge, frame)) in frames.into_iter().enumerate() {
            if edges.contains(edge) {
                self.edge_borders[slot] = Some(EdgeBorder { frame, color });
            }
        }
    }

    /// Returns the border state for a single edge.
    pub fn edge_border(&self, edge: EdgeMask) -> Option<&EdgeBorder> {
        let slot = EDGE_SLOTS.iter().position(|e| *e == edge)?;
        self.edge_borders[slot].as_ref()
    }

    /// Returns the per-edge borders in slot order.
    pub(crate) fn edge_borders(&self) -> &[Option<EdgeBorder>; 4] {
        &self.edge_borders
    }

    // ========================================================================
    // Animations
    // ========================================================================

    /// Returns the longest animation duration in the subtree.
    pub fn longest_animation_duration(&self) -> f32 {
        let own = self
            .animations
            .iter()
            .map(|a| a.duration)
            .fold(0.0_f32, f32::max);

        self.subviews
            .iter()
            .map(View::longest_animation_duration)
            .fold(own, f32::max)
    }

    /// Removes all animations, optionally from the whole subtree.
    pub fn remove_animations(&mut self, include_subviews: bool) {
        self.animations.clear();
        if include_subviews {
            for child in &mut self.subviews {
                child.remove_animations(true);
            }
        }
    }
}

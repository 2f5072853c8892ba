use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScrollDirection {
    Up,
    Down,
    #[default]
    None,
}

impl ScrollDirection {
    pub fn between(prev: f64, next: f64) -> Self {
        if next > prev {
            Self::Down
        } else if next < prev {
            Self::Up
        } else {
            Self::None
        }
    }
}

/// One raw reading of the viewport and document dimensions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrollMetrics {
    pub offset: f64,
    pub viewport_height: f64,
    pub document_height: f64,
}

impl ScrollMetrics {
    pub fn new(offset: f64, viewport_height: f64, document_height: f64) -> Self {
        Self {
            offset: sanitize(offset),
            viewport_height: sanitize(viewport_height),
            document_height: sanitize(document_height),
        }
    }

    pub fn max_scroll(&self) -> f64 {
        self.document_height - self.viewport_height
    }

    pub fn progress(&self) -> f64 {
        let max = self.max_scroll();
        if max <= 0.0 {
            return 0.0;
        }
        (self.offset / max).clamp(0.0, 1.0)
    }
}

/// Document height as the largest of the body and root element readings.
pub fn document_height<I>(readings: I) -> f64
where
    I: IntoIterator<Item = i32>,
{
    readings.into_iter().max().map_or(0.0, |h| sanitize(h as f64))
}

// unreadable or nonsensical dimensions count as zero
fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrollState {
    pub absolute_offset: f64,
    pub progress: f64,
    pub direction: ScrollDirection,
}

/// Owns the page scroll state between events.
///
/// The browser hook feeds it samples from `scroll`/`resize` listeners, tests
/// feed it synthetic sequences. Every call to [`ScrollTracker::sample`]
/// produces a complete [`ScrollState`].
#[derive(Debug, Clone, Default)]
pub struct ScrollTracker {
    previous_offset: f64,
    state: ScrollState,
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sample(&mut self, metrics: ScrollMetrics) -> ScrollState {
        let direction = ScrollDirection::between(self.previous_offset, metrics.offset);
        self.state = ScrollState {
            absolute_offset: metrics.offset,
            progress: metrics.progress(),
            direction,
        };
        self.previous_offset = metrics.offset;
        self.state
    }

    pub fn state(&self) -> ScrollState {
        self.state
    }
}

/// Which edge of an element or of the viewport an offset refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Start,
    Center,
    End,
}

impl Edge {
    fn fraction(self) -> f64 {
        match self {
            Self::Start => 0.0,
            Self::Center => 0.5,
            Self::End => 1.0,
        }
    }
}

/// "Element edge meets viewport edge", e.g. `start end` is the moment the top
/// of the element reaches the bottom of the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Intersection {
    pub element: Edge,
    pub viewport: Edge,
}

impl Intersection {
    pub const fn new(element: Edge, viewport: Edge) -> Self {
        Self { element, viewport }
    }
}

/// Scroll interval over which an element's local progress runs from 0 to 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRange {
    pub from: Intersection,
    pub to: Intersection,
}

impl ScrollRange {
    /// From the element entering at the bottom to leaving at the top.
    pub const THROUGH_VIEWPORT: Self = Self {
        from: Intersection::new(Edge::Start, Edge::End),
        to: Intersection::new(Edge::End, Edge::Start),
    };
    /// From the element's top at the viewport top until its bottom passes the top.
    pub const LEAVING_TOP: Self = Self {
        from: Intersection::new(Edge::Start, Edge::Start),
        to: Intersection::new(Edge::End, Edge::Start),
    };
    /// While the element fully covers the viewport.
    pub const CONTAINED: Self = Self {
        from: Intersection::new(Edge::Start, Edge::Start),
        to: Intersection::new(Edge::End, Edge::End),
    };
}

/// Document-relative position and height of an element.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ElementBox {
    pub top: f64,
    pub height: f64,
}

impl ElementBox {
    /// Builds a box from a viewport-relative bounding rect top.
    pub fn from_viewport_rect(rect_top: f64, height: f64, scroll_offset: f64) -> Self {
        Self {
            top: rect_top + scroll_offset,
            height: height.max(0.0),
        }
    }

    fn scroll_at(&self, at: Intersection, viewport_height: f64) -> f64 {
        self.top + at.element.fraction() * self.height - at.viewport.fraction() * viewport_height
    }

    /// Local progress of this element for the given scroll offset, in `[0, 1]`.
    pub fn progress(&self, scroll_offset: f64, viewport_height: f64, range: ScrollRange) -> f64 {
        let start = self.scroll_at(range.from, viewport_height);
        let end = self.scroll_at(range.to, viewport_height);
        let span = end - start;
        if span <= 0.0 {
            return if scroll_offset >= end { 1.0 } else { 0.0 };
        }
        ((scroll_offset - start) / span).clamp(0.0, 1.0)
    }
}

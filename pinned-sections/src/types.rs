/// A view-type tag as declared by the data source.
pub type ViewType = u32;

/// List padding, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Padding {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl Padding {
    pub fn new(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn uniform(px: u32) -> Self {
        Self::new(px, px, px, px)
    }
}

/// Size and padding of the host list view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListGeometry {
    pub width: u32,
    pub height: u32,
    pub padding: Padding,
}

impl ListGeometry {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            padding: Padding::default(),
        }
    }

    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    /// Width available to a row once horizontal padding is removed.
    pub fn content_width(&self) -> u32 {
        self.width
            .saturating_sub(self.padding.left)
            .saturating_sub(self.padding.right)
    }

    /// Tallest a pinned row may be: the viewport minus vertical padding.
    pub fn max_row_height(&self) -> u32 {
        self.height
            .saturating_sub(self.padding.top)
            .saturating_sub(self.padding.bottom)
    }
}

/// The window reported by a scroll event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollWindow {
    pub first_visible: usize,
    pub visible_count: usize,
    pub total_count: usize,
}

impl ScrollWindow {
    pub fn new(first_visible: usize, visible_count: usize, total_count: usize) -> Self {
        Self {
            first_visible,
            visible_count,
            total_count,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.visible_count == 0
    }
}

/// A measurement constraint for one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Constraint {
    /// The view must be exactly this size.
    Exact(u32),
    /// The view may be any size up to this one.
    AtMost(u32),
    /// No preference. Pinned rows treat this as [`Constraint::Exact`].
    Unspecified(u32),
}

impl Constraint {
    pub fn size(self) -> u32 {
        match self {
            Self::Exact(px) | Self::AtMost(px) | Self::Unspecified(px) => px,
        }
    }

    pub(crate) fn clamp_to(self, max: u32) -> Self {
        match self {
            Self::Exact(px) => Self::Exact(px.min(max)),
            Self::AtMost(px) => Self::AtMost(px.min(max)),
            Self::Unspecified(px) => Self::Exact(px.min(max)),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

/// Where a pinned view is drawn, in list coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    pub left: i32,
    pub top: i32,
    pub width: u32,
    pub height: u32,
}

/// A clip rectangle with exclusive right/bottom edges.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClipRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl ClipRect {
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }
}

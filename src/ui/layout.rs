// SPDX-License-Identifier: MPL-2.0
//! Stage geometry: declarative constraints and the window fit policy.
//!
//! Actors on the stage are positioned by constraints relative to the stage,
//! re-resolved whenever the stage changes size. The fit policy turns the
//! natural size of an image into the size it is drawn at and the window
//! size that hosts it.

use crate::config::{VIEW_MAX_HEIGHT, VIEW_MAX_WIDTH, VIEW_MIN, VIEW_PADDING_X, VIEW_PADDING_Y};
use iced::{Point, Size};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    fn extent(self, size: Size) -> f32 {
        match self {
            Axis::X => size.width,
            Axis::Y => size.height,
        }
    }
}

/// Places an actor at `factor` of the space the stage leaves free along
/// `axis`: 0.0 is the leading edge, 0.5 centers, 1.0 is the trailing edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlignConstraint {
    pub axis: Axis,
    pub factor: f32,
}

impl AlignConstraint {
    #[must_use]
    pub fn x(factor: f32) -> Self {
        Self {
            axis: Axis::X,
            factor,
        }
    }

    #[must_use]
    pub fn y(factor: f32) -> Self {
        Self {
            axis: Axis::Y,
            factor,
        }
    }

    #[must_use]
    pub fn resolve(&self, stage: Size, actor: Size) -> f32 {
        (self.axis.extent(stage) - self.axis.extent(actor)) * self.factor
    }
}

/// Binds one coordinate of an actor to the stage origin plus an offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BindConstraint {
    pub coordinate: Axis,
    offset: f32,
}

impl BindConstraint {
    #[must_use]
    pub fn new(coordinate: Axis, offset: f32) -> Self {
        Self { coordinate, offset }
    }

    #[must_use]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn set_offset(&mut self, offset: f32) {
        self.offset = offset;
    }

    #[must_use]
    pub fn resolve(&self) -> f32 {
        self.offset
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Constraint {
    Align(AlignConstraint),
    Bind(BindConstraint),
}

impl Constraint {
    fn axis(&self) -> Axis {
        match self {
            Constraint::Align(c) => c.axis,
            Constraint::Bind(c) => c.coordinate,
        }
    }

    fn resolve(&self, stage: Size, actor: Size) -> f32 {
        match self {
            Constraint::Align(c) => c.resolve(stage, actor),
            Constraint::Bind(c) => c.resolve(),
        }
    }
}

/// Resolves an actor's position on the stage. Axes without a constraint
/// stay at the origin; when several constraints target one axis the last
/// one wins.
#[must_use]
pub fn resolve_position(constraints: &[Constraint], stage: Size, actor: Size) -> Point {
    constraints
        .iter()
        .fold(Point::ORIGIN, |mut position, constraint| {
            let value = constraint.resolve(stage, actor);
            match constraint.axis() {
                Axis::X => position.x = value,
                Axis::Y => position.y = value,
            }
            position
        })
}

/// Size bounds applied when fitting the window around an image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitBounds {
    pub min: f32,
    pub max_width: f32,
    pub max_height: f32,
    pub padding_x: f32,
    pub padding_y: f32,
}

impl Default for FitBounds {
    fn default() -> Self {
        Self {
            min: VIEW_MIN,
            max_width: VIEW_MAX_WIDTH,
            max_height: VIEW_MAX_HEIGHT,
            padding_x: VIEW_PADDING_X,
            padding_y: VIEW_PADDING_Y,
        }
    }
}

impl FitBounds {
    /// Window size used when there is no image to fit around.
    #[must_use]
    pub fn min_window(&self) -> Size {
        Size::new(self.min + self.padding_x, self.min + self.padding_y)
    }
}

/// Result of fitting an image into the window bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fit {
    /// Size the image is drawn at.
    pub image: Size,
    /// Window content size.
    pub window: Size,
}

/// Computes the drawn image size and the window size for an image of
/// `natural` size.
///
/// Images larger than the maximum box are scaled down uniformly by the
/// tighter of the two ratios, so both dimensions end up inside the box.
/// Smaller images keep their natural size. Each window dimension is the
/// image dimension plus padding, but never less than the minimum box plus
/// padding.
#[must_use]
pub fn fit_window(natural: Size, bounds: &FitBounds) -> Fit {
    let natural = Size::new(natural.width.max(1.0), natural.height.max(1.0));

    let image = if natural.width > bounds.max_width || natural.height > bounds.max_height {
        let scale = (bounds.max_width / natural.width).min(bounds.max_height / natural.height);
        Size::new(
            (natural.width * scale).round().clamp(1.0, bounds.max_width),
            (natural.height * scale).round().clamp(1.0, bounds.max_height),
        )
    } else {
        natural
    };

    let window = Size::new(
        image.width.max(bounds.min) + bounds.padding_x,
        image.height.max(bounds.min) + bounds.padding_y,
    );

    Fit { image, window }
}

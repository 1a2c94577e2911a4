//! Colored shapes and in-place recoloring.

use std::convert::Infallible;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use streamline_foundation::Result;
use streamline_pipeline::{for_each_mut, mutate_and_log, observe_all};

/// Shape colors.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    /// Red.
    Red,
    /// Blue.
    Blue,
    /// Green.
    Green,
    /// Yellow.
    Yellow,
    /// Black.
    Black,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Red => "RED",
            Self::Blue => "BLUE",
            Self::Green => "GREEN",
            Self::Yellow => "YELLOW",
            Self::Black => "BLACK",
        };
        f.write_str(name)
    }
}

/// A shape whose only attribute is its color.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Shape {
    color: Color,
}

impl Shape {
    /// Creates a shape.
    #[must_use]
    pub const fn new(color: Color) -> Self {
        Self { color }
    }

    /// Returns the color.
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Repaints the shape.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[a {} shape]", self.color)
    }
}

fn repaint(shape: &mut Shape, color: &Color) -> std::result::Result<(), Infallible> {
    shape.set_color(*color);
    Ok(())
}

/// Repaints every shape.
///
/// # Errors
/// Never fails in practice; the `Result` comes from the shared traversal.
pub fn color_all(shapes: &mut [Shape], new_color: Color) -> Result<()> {
    for_each_mut(shapes, &new_color, repaint)
}

/// Appends each shape's description to `out`, in order.
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn make_string_of_all_colors(shapes: &[Shape], out: &mut String) -> Result<()> {
    observe_all(shapes, Shape::to_string, out)
}

/// Repaints every shape, appending each shape's description from before
/// the repaint to `out`.
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn change_color_and_make_string_of_old_colors(
    shapes: &mut [Shape],
    new_color: Color,
    out: &mut String,
) -> Result<()> {
    mutate_and_log(shapes, &new_color, Shape::to_string, repaint, out)
}

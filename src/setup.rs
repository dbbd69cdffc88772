//! Page setup and job control commands.
//!
//! A typical program starts with [`Size`] and [`Gap`], clears the image
//! buffer with [`Cls`], draws, and ends with [`Print`].

use crate::{
    command::{at_least, non_negative, required, Command},
    error::ValidationError,
    wire::CommandWriter,
};

/// SIZE: label width and length.
///
/// Values are in inches unless [`Size::mm`] is set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Size {
    width: Option<f64>,
    height: Option<f64>,
    mm: bool,
}

impl Size {
    const NAME: &'static str = "SIZE";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(self, width: f64) -> Self {
        Size {
            width: Some(width),
            ..self
        }
    }

    pub fn height(self, height: f64) -> Self {
        Size {
            height: Some(height),
            ..self
        }
    }

    pub fn mm(self, mm: bool) -> Self {
        Size { mm, ..self }
    }
}

impl Command for Size {
    fn render(&self) -> Result<Vec<u8>, ValidationError> {
        let width = required(self.width, Self::NAME, "width")?;
        let height = required(self.height, Self::NAME, "height")?;
        positive(width, Self::NAME, "width")?;
        positive(height, Self::NAME, "height")?;

        Ok(CommandWriter::new(Self::NAME)
            .float(width, self.mm)
            .float(height, self.mm)
            .finish())
    }
}

/// GAP: distance between two labels and its offset.
///
/// A distance and offset of 0 selects continuous media.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Gap {
    distance: Option<f64>,
    offset: Option<f64>,
    mm: bool,
}

impl Gap {
    const NAME: &'static str = "GAP";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn distance(self, distance: f64) -> Self {
        Gap {
            distance: Some(distance),
            ..self
        }
    }

    pub fn offset(self, offset: f64) -> Self {
        Gap {
            offset: Some(offset),
            ..self
        }
    }

    pub fn mm(self, mm: bool) -> Self {
        Gap { mm, ..self }
    }
}

impl Command for Gap {
    fn render(&self) -> Result<Vec<u8>, ValidationError> {
        let distance = required(self.distance, Self::NAME, "distance")?;
        let offset = required(self.offset, Self::NAME, "offset")?;
        non_negative(distance, Self::NAME, "distance")?;
        non_negative(offset, Self::NAME, "offset")?;

        Ok(CommandWriter::new(Self::NAME)
            .float(distance, self.mm)
            .float(offset, self.mm)
            .finish())
    }
}

/// CLS: clear the image buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Cls;

impl Cls {
    pub fn new() -> Self {
        Cls
    }
}

impl Command for Cls {
    fn render(&self) -> Result<Vec<u8>, ValidationError> {
        Ok(CommandWriter::new("CLS").finish())
    }
}

/// PRINT: print the image buffer `sets` times, each set `copies` times.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Print {
    sets: Option<i32>,
    copies: Option<i32>,
}

impl Print {
    const NAME: &'static str = "PRINT";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn sets(self, sets: i32) -> Self {
        Print {
            sets: Some(sets),
            ..self
        }
    }

    pub fn copies(self, copies: i32) -> Self {
        Print {
            copies: Some(copies),
            ..self
        }
    }
}

impl Command for Print {
    fn render(&self) -> Result<Vec<u8>, ValidationError> {
        let sets = required(self.sets, Self::NAME, "sets")?;
        at_least(sets, 1, Self::NAME, "sets")?;

        let mut w = CommandWriter::new(Self::NAME).int(sets);
        if let Some(copies) = self.copies {
            at_least(copies, 1, Self::NAME, "copies")?;
            w = w.int(copies);
        }
        Ok(w.finish())
    }
}

/// BAR: draw a filled rectangle, in dots.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bar {
    x: Option<i32>,
    y: Option<i32>,
    width: Option<i32>,
    height: Option<i32>,
}

impl Bar {
    const NAME: &'static str = "BAR";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn x(self, x: i32) -> Self {
        Bar { x: Some(x), ..self }
    }

    pub fn y(self, y: i32) -> Self {
        Bar { y: Some(y), ..self }
    }

    pub fn width(self, dots: i32) -> Self {
        Bar {
            width: Some(dots),
            ..self
        }
    }

    pub fn height(self, dots: i32) -> Self {
        Bar {
            height: Some(dots),
            ..self
        }
    }
}

impl Command for Bar {
    fn render(&self) -> Result<Vec<u8>, ValidationError> {
        let x = required(self.x, Self::NAME, "x")?;
        let y = required(self.y, Self::NAME, "y")?;
        let width = required(self.width, Self::NAME, "width")?;
        let height = required(self.height, Self::NAME, "height")?;
        at_least(width, 1, Self::NAME, "width")?;
        at_least(height, 1, Self::NAME, "height")?;

        Ok(CommandWriter::new(Self::NAME)
            .int(x)
            .int(y)
            .int(width)
            .int(height)
            .finish())
    }
}

fn positive(
    value: f64,
    command: &'static str,
    field: &'static str,
) -> Result<f64, ValidationError> {
    if value > 0.0 && value.is_finite() {
        Ok(value)
    } else {
        Err(ValidationError::NotPositive { command, field })
    }
}

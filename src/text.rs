//! Text commands.

use crate::{
    command::{in_range, one_of, required, required_str, Command},
    error::ValidationError,
    wire::{CommandWriter, ROTATION_ANGLES},
};

/// Smallest character scale factor accepted by BLOCK and TEXT.
pub const MULTIPLIER_MIN: f64 = 1.0;
/// Largest character scale factor accepted by BLOCK and TEXT.
pub const MULTIPLIER_MAX: f64 = 10.0;

/// Horizontal alignment of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    /// Printer default, which depends on the font and the `DIRECTION` setting.
    Default = 0,
    Left = 1,
    Center = 2,
    Right = 3,
}

/// Whether BLOCK text shrinks to fit its box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockFit {
    NoShrink = 0,
    Shrink = 1,
}

/// BLOCK: print text wrapped inside a box.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Block {
    x: Option<i32>,
    y: Option<i32>,
    width: Option<i32>,
    height: Option<i32>,
    font_name: Option<String>,
    rotation: Option<i32>,
    x_multiplier: Option<f64>,
    y_multiplier: Option<f64>,
    space: Option<i32>,
    alignment: Option<Alignment>,
    fit: Option<BlockFit>,
    content: Option<String>,
    quote_content: bool,
}

impl Block {
    const NAME: &'static str = "BLOCK";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn x(self, x: i32) -> Self {
        Block { x: Some(x), ..self }
    }

    pub fn y(self, y: i32) -> Self {
        Block { y: Some(y), ..self }
    }

    pub fn width(self, dots: i32) -> Self {
        Block {
            width: Some(dots),
            ..self
        }
    }

    pub fn height(self, dots: i32) -> Self {
        Block {
            height: Some(dots),
            ..self
        }
    }

    /// Built in font number (`"1"` to `"8"`) or a downloaded font file name.
    pub fn font_name(self, name: impl Into<String>) -> Self {
        Block {
            font_name: Some(name.into()),
            ..self
        }
    }

    /// Clockwise rotation in degrees, one of 0, 90, 180 or 270.
    pub fn rotation(self, angle: i32) -> Self {
        Block {
            rotation: Some(angle),
            ..self
        }
    }

    pub fn x_multiplier(self, xm: f64) -> Self {
        Block {
            x_multiplier: Some(xm),
            ..self
        }
    }

    pub fn y_multiplier(self, ym: f64) -> Self {
        Block {
            y_multiplier: Some(ym),
            ..self
        }
    }

    /// Extra character spacing in dots.
    pub fn space(self, dots: i32) -> Self {
        Block {
            space: Some(dots),
            ..self
        }
    }

    pub fn alignment(self, alignment: Alignment) -> Self {
        Block {
            alignment: Some(alignment),
            ..self
        }
    }

    pub fn fit(self, fit: BlockFit) -> Self {
        Block {
            fit: Some(fit),
            ..self
        }
    }

    /// Text to print. With `quote` unset the content is written bare, which
    /// lets callers pass variable expressions such as `A$+"X"`.
    pub fn content(self, content: impl Into<String>, quote: bool) -> Self {
        Block {
            content: Some(content.into()),
            quote_content: quote,
            ..self
        }
    }
}

impl Command for Block {
    fn render(&self) -> Result<Vec<u8>, ValidationError> {
        let name = Self::NAME;
        let x = required(self.x, name, "x")?;
        let y = required(self.y, name, "y")?;
        let width = required(self.width, name, "width")?;
        let height = required(self.height, name, "height")?;
        let font_name = required(self.font_name.as_deref(), name, "font_name")?;
        let rotation = required(self.rotation, name, "rotation")?;
        let x_multiplier = required(self.x_multiplier, name, "x_multiplier")?;
        let y_multiplier = required(self.y_multiplier, name, "y_multiplier")?;
        let content = required(self.content.as_deref(), name, "content")?;

        one_of(rotation, ROTATION_ANGLES, name, "rotation")?;
        in_range(x_multiplier, MULTIPLIER_MIN, MULTIPLIER_MAX, name, "x_multiplier")?;
        in_range(y_multiplier, MULTIPLIER_MIN, MULTIPLIER_MAX, name, "y_multiplier")?;

        let mut w = CommandWriter::new(name)
            .int(x)
            .int(y)
            .int(width)
            .int(height)
            .quoted(font_name)
            .int(rotation)
            .float(x_multiplier, false)
            .float(y_multiplier, false);
        if let Some(space) = self.space {
            w = w.int(space);
        }
        if let Some(alignment) = self.alignment {
            w = w.int(alignment as i32);
        }
        if let Some(fit) = self.fit {
            w = w.int(fit as i32);
        }
        w = if self.quote_content {
            w.quoted(content)
        } else {
            w.token(content)
        };
        Ok(w.finish())
    }
}

/// TEXT: print a single line of text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Text {
    x: Option<i32>,
    y: Option<i32>,
    font_name: Option<String>,
    rotation: Option<i32>,
    x_multiplier: Option<f64>,
    y_multiplier: Option<f64>,
    alignment: Option<Alignment>,
    content: Option<String>,
}

impl Text {
    const NAME: &'static str = "TEXT";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn x(self, x: i32) -> Self {
        Text { x: Some(x), ..self }
    }

    pub fn y(self, y: i32) -> Self {
        Text { y: Some(y), ..self }
    }

    pub fn font_name(self, name: impl Into<String>) -> Self {
        Text {
            font_name: Some(name.into()),
            ..self
        }
    }

    pub fn rotation(self, angle: i32) -> Self {
        Text {
            rotation: Some(angle),
            ..self
        }
    }

    pub fn x_multiplier(self, xm: f64) -> Self {
        Text {
            x_multiplier: Some(xm),
            ..self
        }
    }

    pub fn y_multiplier(self, ym: f64) -> Self {
        Text {
            y_multiplier: Some(ym),
            ..self
        }
    }

    pub fn alignment(self, alignment: Alignment) -> Self {
        Text {
            alignment: Some(alignment),
            ..self
        }
    }

    pub fn content(self, content: impl Into<String>) -> Self {
        Text {
            content: Some(content.into()),
            ..self
        }
    }
}

impl Command for Text {
    fn render(&self) -> Result<Vec<u8>, ValidationError> {
        let name = Self::NAME;
        let x = required(self.x, name, "x")?;
        let y = required(self.y, name, "y")?;
        let font_name = required_str(self.font_name.as_deref(), name, "font_name")?;
        let rotation = required(self.rotation, name, "rotation")?;
        let x_multiplier = required(self.x_multiplier, name, "x_multiplier")?;
        let y_multiplier = required(self.y_multiplier, name, "y_multiplier")?;
        let content = required(self.content.as_deref(), name, "content")?;

        one_of(rotation, ROTATION_ANGLES, name, "rotation")?;
        in_range(x_multiplier, MULTIPLIER_MIN, MULTIPLIER_MAX, name, "x_multiplier")?;
        in_range(y_multiplier, MULTIPLIER_MIN, MULTIPLIER_MAX, name, "y_multiplier")?;

        let mut w = CommandWriter::new(name)
            .int(x)
            .int(y)
            .quoted(font_name)
            .int(rotation)
            .float(x_multiplier, false)
            .float(y_multiplier, false);
        if let Some(alignment) = self.alignment {
            w = w.int(alignment as i32);
        }
        Ok(w.quoted(content).finish())
    }
}

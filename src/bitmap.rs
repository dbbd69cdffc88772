//! Image commands.
//!
//! [`Bitmap`] carries its pixel data inline, while [`PutBmp`] and [`PutPcx`]
//! reference an image file previously stored on the printer, for example via
//! [`crate::Download`].

use crate::{
    command::{required, required_str, Command},
    error::ValidationError,
    wire::CommandWriter,
};

/// How bitmap pixels are combined with what is already on the label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitmapMode {
    Overwrite = 0,
    Or = 1,
    Xor = 2,
}

/// Colour depth of a BMP file drawn with [`PutBmp`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitsPerPixel {
    One = 1,
    Eight = 8,
}

/// BITMAP: draw raw 1-bit image data.
///
/// `width` is in bytes per row, `height` in dots. Data is row packed, most
/// significant bit first, where a `0` bit prints a dot.
///
/// ```
/// use tspl_label::{Bitmap, BitmapMode, Command};
///
/// let cmd = Bitmap::new()
///     .x(0)
///     .y(0)
///     .width(100)
///     .height(50)
///     .mode(BitmapMode::Overwrite)
///     .data(vec![0xFF]);
/// assert_eq!(cmd.render().unwrap(), b"BITMAP 0,0,100,50,0,\xFF\r\n".to_vec());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bitmap {
    x: Option<i32>,
    y: Option<i32>,
    width: Option<i32>,
    height: Option<i32>,
    mode: Option<BitmapMode>,
    data: Option<Vec<u8>>,
}

impl Bitmap {
    const NAME: &'static str = "BITMAP";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn x(self, x: i32) -> Self {
        Bitmap { x: Some(x), ..self }
    }

    pub fn y(self, y: i32) -> Self {
        Bitmap { y: Some(y), ..self }
    }

    /// Width of the image in bytes.
    pub fn width(self, bytes: i32) -> Self {
        Bitmap {
            width: Some(bytes),
            ..self
        }
    }

    /// Height of the image in dots.
    pub fn height(self, dots: i32) -> Self {
        Bitmap {
            height: Some(dots),
            ..self
        }
    }

    pub fn mode(self, mode: BitmapMode) -> Self {
        Bitmap {
            mode: Some(mode),
            ..self
        }
    }

    pub fn data(self, data: impl Into<Vec<u8>>) -> Self {
        Bitmap {
            data: Some(data.into()),
            ..self
        }
    }
}

impl Command for Bitmap {
    fn render(&self) -> Result<Vec<u8>, ValidationError> {
        let x = required(self.x, Self::NAME, "x")?;
        let y = required(self.y, Self::NAME, "y")?;
        let width = required(self.width, Self::NAME, "width")?;
        let height = required(self.height, Self::NAME, "height")?;
        let mode = required(self.mode, Self::NAME, "mode")?;
        let data = required(self.data.as_deref(), Self::NAME, "data")?;

        Ok(CommandWriter::new(Self::NAME)
            .int(x)
            .int(y)
            .int(width)
            .int(height)
            .int(mode as i32)
            .raw(data)
            .finish())
    }
}

/// PUTBMP: draw a BMP file stored on the printer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PutBmp {
    x: Option<i32>,
    y: Option<i32>,
    file_name: Option<String>,
    bpp: Option<BitsPerPixel>,
    contrast: Option<i32>,
}

impl PutBmp {
    const NAME: &'static str = "PUTBMP";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn x(self, x: i32) -> Self {
        PutBmp { x: Some(x), ..self }
    }

    pub fn y(self, y: i32) -> Self {
        PutBmp { y: Some(y), ..self }
    }

    pub fn file_name(self, file_name: impl Into<String>) -> Self {
        PutBmp {
            file_name: Some(file_name.into()),
            ..self
        }
    }

    pub fn bpp(self, bpp: BitsPerPixel) -> Self {
        PutBmp {
            bpp: Some(bpp),
            ..self
        }
    }

    /// Contrast adjustment for 8-bit images. Passed to the printer unchecked.
    pub fn contrast(self, contrast: i32) -> Self {
        PutBmp {
            contrast: Some(contrast),
            ..self
        }
    }
}

impl Command for PutBmp {
    fn render(&self) -> Result<Vec<u8>, ValidationError> {
        let x = required(self.x, Self::NAME, "x")?;
        let y = required(self.y, Self::NAME, "y")?;
        let file_name = required_str(self.file_name.as_deref(), Self::NAME, "file_name")?;

        let mut w = CommandWriter::new(Self::NAME).int(x).int(y).quoted(file_name);
        if let Some(bpp) = self.bpp {
            w = w.int(bpp as i32);
        }
        if let Some(contrast) = self.contrast {
            w = w.int(contrast);
        }
        Ok(w.finish())
    }
}

/// PUTPCX: draw a PCX file stored on the printer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PutPcx {
    x: Option<i32>,
    y: Option<i32>,
    file_name: Option<String>,
}

impl PutPcx {
    const NAME: &'static str = "PUTPCX";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn x(self, x: i32) -> Self {
        PutPcx { x: Some(x), ..self }
    }

    pub fn y(self, y: i32) -> Self {
        PutPcx { y: Some(y), ..self }
    }

    pub fn file_name(self, file_name: impl Into<String>) -> Self {
        PutPcx {
            file_name: Some(file_name.into()),
            ..self
        }
    }
}

impl Command for PutPcx {
    fn render(&self) -> Result<Vec<u8>, ValidationError> {
        let x = required(self.x, Self::NAME, "x")?;
        let y = required(self.y, Self::NAME, "y")?;
        let file_name = required_str(self.file_name.as_deref(), Self::NAME, "file_name")?;

        Ok(CommandWriter::new(Self::NAME)
            .int(x)
            .int(y)
            .quoted(file_name)
            .finish())
    }
}

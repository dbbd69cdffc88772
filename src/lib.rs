//! TSPL Command Encoder
//!
//! This crate encodes commands of TSPL, the line oriented command language of
//! TSC and compatible label printers, into the exact bytes the firmware
//! expects. Sending the bytes to a printer is left to the caller.
//!
//! # Example
//!
//! ```rust
//! use tspl_label::{Block, Cls, Gap, Label, Print, Size};
//!
//! let label = Label::new()
//!     .cmd(Size::new().width(50.0).height(30.0).mm(true))
//!     .cmd(Gap::new().distance(2.0).offset(0.0).mm(true))
//!     .cmd(Cls::new())
//!     .cmd(
//!         Block::new()
//!             .x(10)
//!             .y(10)
//!             .width(380)
//!             .height(100)
//!             .font_name("3")
//!             .rotation(0)
//!             .x_multiplier(1.0)
//!             .y_multiplier(1.0)
//!             .content("Hello", true),
//!     )
//!     .cmd(Print::new().sets(1));
//!
//! let bytes = label.render().unwrap();
//! assert!(bytes.starts_with(b"SIZE 50 mm,30 mm\r\n"));
//! ```

mod bitmap;
mod command;
mod download;
mod error;
mod label;
mod setup;
mod text;
pub mod wire;

pub use crate::{
    bitmap::{Bitmap, BitmapMode, BitsPerPixel, PutBmp, PutPcx},
    command::Command,
    download::{Download, DownloadStorage},
    error::{Error, ValidationError},
    label::Label,
    setup::{Bar, Cls, Gap, Print, Size},
    text::{Alignment, Block, BlockFit, Text, MULTIPLIER_MAX, MULTIPLIER_MIN},
};

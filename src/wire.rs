//! Wire level formatting of TSPL values.
//!
//! A TSPL command is a name, a space, a comma separated parameter list and a
//! CR LF terminator:
//!
//! ```text
//! BLOCK 10,20,300,80,"3",0,1,1,"HELLO"\r\n
//! ```
//!
//! Numbers are written in decimal, string parameters are wrapped in double
//! quotes without escaping, and binary payloads are written raw.

pub const NAME_SEPARATOR: &[u8] = b" ";
pub const VALUE_SEPARATOR: &[u8] = b",";
pub const DOUBLE_QUOTE: &[u8] = b"\"";
pub const LINE_ENDING: &[u8] = b"\r\n";

/// Rotation angles accepted by the text commands, in degrees clockwise.
pub const ROTATION_ANGLES: &[i32] = &[0, 90, 180, 270];

const MM_SUFFIX: &str = " mm";

/// Format a float the way the firmware's number parser accepts it.
///
/// The shortest decimal that round-trips is used, so `1.0` becomes `1` and
/// `2.5` stays `2.5`. With `mm` set the value is suffixed with ` mm`,
/// otherwise the printer reads it in inches. Negative zero is written as `0`.
pub fn format_float_with_units(value: f64, mm: bool) -> Vec<u8> {
    let value = if value == 0.0 { 0.0 } else { value };
    let mut s = value.to_string();
    if mm {
        s.push_str(MM_SUFFIX);
    }
    s.into_bytes()
}

/// Incremental encoder for a single command line.
///
/// The first parameter is preceded by a space, every following one by a
/// comma. [`CommandWriter::finish`] appends the line terminator.
#[derive(Debug)]
pub struct CommandWriter {
    buf: Vec<u8>,
    has_params: bool,
}

impl CommandWriter {
    /// Start a command line with its name, e.g. `BLOCK`.
    pub fn new(name: &str) -> Self {
        let mut buf = Vec::with_capacity(name.len() + 32);
        buf.extend_from_slice(name.as_bytes());
        CommandWriter {
            buf,
            has_params: false,
        }
    }

    fn separator(&mut self) {
        if self.has_params {
            self.buf.extend_from_slice(VALUE_SEPARATOR);
        } else {
            self.buf.extend_from_slice(NAME_SEPARATOR);
            self.has_params = true;
        }
    }

    /// Decimal integer parameter.
    pub fn int(mut self, value: i32) -> Self {
        self.separator();
        self.buf.extend_from_slice(value.to_string().as_bytes());
        self
    }

    /// Float parameter, see [`format_float_with_units`].
    pub fn float(mut self, value: f64, mm: bool) -> Self {
        self.separator();
        self.buf
            .extend_from_slice(&format_float_with_units(value, mm));
        self
    }

    /// String parameter wrapped in double quotes. Embedded quotes are passed
    /// through untouched; the firmware has no escape for them.
    pub fn quoted(mut self, value: &str) -> Self {
        self.separator();
        self.buf.extend_from_slice(DOUBLE_QUOTE);
        self.buf.extend_from_slice(value.as_bytes());
        self.buf.extend_from_slice(DOUBLE_QUOTE);
        self
    }

    /// Bare token such as a storage selector or unquoted content.
    pub fn token(mut self, value: &str) -> Self {
        self.separator();
        self.buf.extend_from_slice(value.as_bytes());
        self
    }

    /// Raw binary payload, written without quoting or a length prefix.
    pub fn raw(mut self, data: &[u8]) -> Self {
        self.separator();
        self.buf.extend_from_slice(data);
        self
    }

    /// Terminate the line and return the encoded command.
    pub fn finish(mut self) -> Vec<u8> {
        self.buf.extend_from_slice(LINE_ENDING);
        self.buf
    }
}

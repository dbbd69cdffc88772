use log::{debug, trace};
use std::{io::Write, sync::Arc};

use crate::{
    command::Command,
    error::{Error, ValidationError},
};

/// An ordered TSPL program.
///
/// Commands are rendered in the order they were added and concatenated into
/// one buffer. Cloning a label is cheap; the commands themselves are shared
/// and never modified after being added.
///
/// ```
/// use tspl_label::{Cls, Label, Print, Size};
///
/// let label = Label::new()
///     .cmd(Size::new().width(50.0).height(30.0).mm(true))
///     .cmd(Cls::new())
///     .cmd(Print::new().sets(1));
/// assert_eq!(
///     label.render().unwrap(),
///     b"SIZE 50 mm,30 mm\r\nCLS\r\nPRINT 1\r\n".to_vec()
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct Label {
    commands: Vec<Arc<dyn Command>>,
}

impl Label {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a command to the end of the program.
    pub fn cmd<C: Command + 'static>(mut self, command: C) -> Self {
        self.commands.push(Arc::new(command));
        self
    }

    /// Append a command if there is one, otherwise return the label as is.
    ///
    /// Handy when a command is only built under some condition:
    ///
    /// ```
    /// use tspl_label::{Bar, Label};
    ///
    /// let underline = false;
    /// let label = Label::new().maybe_cmd(if underline {
    ///     Some(Bar::new().x(0).y(40).width(200).height(2))
    /// } else {
    ///     None
    /// });
    /// assert!(label.is_empty());
    /// ```
    pub fn maybe_cmd<C: Command + 'static>(self, command: Option<C>) -> Self {
        match command {
            Some(command) => self.cmd(command),
            None => self,
        }
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Render every command in order.
    ///
    /// Stops at the first command that fails validation and returns its
    /// error; no partial program is returned.
    pub fn render(&self) -> Result<Vec<u8>, ValidationError> {
        let mut buf: Vec<u8> = Vec::new();
        for (i, command) in self.commands.iter().enumerate() {
            let mut msg = command.render().map_err(|err| {
                debug!("command #{} failed to render: {}", i, err);
                err
            })?;
            trace!("command #{}: {:?}", i, String::from_utf8_lossy(&msg));
            buf.append(&mut msg);
        }
        debug!(
            "rendered label: {} commands, {} bytes",
            self.commands.len(),
            buf.len()
        );
        Ok(buf)
    }

    /// Render the program and write it to `sink` in one go.
    ///
    /// Nothing is written when rendering fails. Returns the number of bytes
    /// written.
    pub fn write_to<W: Write>(&self, sink: &mut W) -> Result<usize, Error> {
        let buf = self.render()?;
        sink.write_all(&buf)?;
        sink.flush()?;
        debug!("wrote {} bytes", buf.len());
        Ok(buf.len())
    }
}

/// Labels nest: a label can be added to another label as a single command.
impl Command for Label {
    fn render(&self) -> Result<Vec<u8>, ValidationError> {
        Label::render(self)
    }
}

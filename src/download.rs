use crate::{
    command::{required, required_str, Command},
    error::ValidationError,
    wire::CommandWriter,
};

/// Where the printer stores downloaded data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadStorage {
    /// Volatile memory, lost on power off. This is the printer default.
    Dram,
    Flash,
    ExpansionModule,
}

impl DownloadStorage {
    /// Token written on the wire, `None` for DRAM since it is implied.
    fn token(self) -> Option<&'static str> {
        match self {
            Self::Dram => None,
            Self::Flash => Some("F"),
            Self::ExpansionModule => Some("E"),
        }
    }
}

/// DOWNLOAD a data file (image, font, pattern) to printer memory.
///
/// ```
/// use tspl_label::{Command, Download};
///
/// let cmd = Download::new().name("IMAGE1").data(vec![0x01, 0x02, 0x03]);
/// assert_eq!(
///     cmd.render().unwrap(),
///     b"DOWNLOAD \"IMAGE1\",3,\x01\x02\x03\r\n".to_vec()
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Download {
    storage: Option<DownloadStorage>,
    name: Option<String>,
    data: Option<Vec<u8>>,
}

impl Download {
    const NAME: &'static str = "DOWNLOAD";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn storage(self, storage: DownloadStorage) -> Self {
        Download {
            storage: Some(storage),
            ..self
        }
    }

    /// File name on the printer.
    pub fn name(self, name: impl Into<String>) -> Self {
        Download {
            name: Some(name.into()),
            ..self
        }
    }

    pub fn data(self, data: impl Into<Vec<u8>>) -> Self {
        Download {
            data: Some(data.into()),
            ..self
        }
    }
}

impl Command for Download {
    fn render(&self) -> Result<Vec<u8>, ValidationError> {
        let name = required_str(self.name.as_deref(), Self::NAME, "name")?;
        let data = required(self.data.as_deref(), Self::NAME, "data")?;

        let mut w = CommandWriter::new(Self::NAME);
        if let Some(token) = self.storage.and_then(DownloadStorage::token) {
            w = w.token(token);
        }
        Ok(w
            .quoted(name)
            .token(&data.len().to_string())
            .raw(data)
            .finish())
    }
}

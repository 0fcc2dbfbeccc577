//! Scoped temporary storage for uploaded documents.

use std::io::Write;
use std::path::Path;

use tempfile::{Builder, NamedTempFile};
use tracing::{debug, warn};

use sinv_core::{extract_fields, FieldRecord};

/// An uploaded PDF persisted to a temporary file.
///
/// The file is deleted when the value is consumed by [`TempUpload::extract`]
/// or dropped, whichever comes first, including during a panic unwind.
pub struct TempUpload {
    file: NamedTempFile,
}

impl TempUpload {
    /// Write the uploaded bytes to a new `.pdf` temp file in `dir`
    /// (the OS temp dir when `None`).
    pub fn write(dir: Option<&Path>, data: &[u8]) -> std::io::Result<Self> {
        let mut builder = Builder::new();
        builder.prefix("sinv-").suffix(".pdf");

        let mut file = match dir {
            Some(dir) => builder.tempfile_in(dir)?,
            None => builder.tempfile()?,
        };
        file.write_all(data)?;
        file.flush()?;

        debug!("Stored upload ({} bytes) at {}", data.len(), file.path().display());
        Ok(Self { file })
    }

    /// Path of the temporary file.
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Run extraction against the temp file, then delete it.
    pub fn extract(self) -> sinv_core::Result<FieldRecord> {
        let result = extract_fields(self.file.path());

        let path = self.file.path().to_path_buf();
        if let Err(e) = self.file.close() {
            warn!("Failed to delete temporary upload {}: {}", path.display(), e);
        }
        result
    }
}

/// Whether a filename names a PDF (case-insensitive ".pdf" suffix).
pub fn is_pdf_filename(name: &str) -> bool {
    name.to_lowercase().ends_with(".pdf")
}

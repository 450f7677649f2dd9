use angebot_core::{DomainError, DomainResult};

/// Upper bound for logo and signature images (2 MiB).
pub const MAX_UPLOAD_BYTES: usize = 2 * 1024 * 1024;

/// Which letterhead image is being uploaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    Logo,
    Signature,
}

impl UploadKind {
    /// Path segment under `/settings/me/`.
    pub fn endpoint(&self) -> &'static str {
        match self {
            UploadKind::Logo => "logo",
            UploadKind::Signature => "signature",
        }
    }
}

impl core::fmt::Display for UploadKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.endpoint())
    }
}

/// An image ready to upload. Construction enforces the size limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    kind: UploadKind,
    file_name: String,
    bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn new(kind: UploadKind, file_name: impl Into<String>, bytes: Vec<u8>) -> DomainResult<Self> {
        if bytes.is_empty() {
            return Err(DomainError::validation(format!("{kind} file is empty")));
        }
        if bytes.len() > MAX_UPLOAD_BYTES {
            return Err(DomainError::validation(format!(
                "{kind} file must be smaller than 2 MB ({} bytes given)",
                bytes.len()
            )));
        }
        Ok(Self {
            kind,
            file_name: file_name.into(),
            bytes,
        })
    }

    pub fn kind(&self) -> UploadKind {
        self.kind
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Best-effort MIME type from the file extension.
    pub fn mime_type(&self) -> &'static str {
        let ext = self
            .file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "png" => "image/png",
            "jpg" | "jpeg" => "image/jpeg",
            "gif" => "image/gif",
            "svg" => "image/svg+xml",
            "webp" => "image/webp",
            _ => "application/octet-stream",
        }
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

//! Company settings: the letterhead printed on every offer.
//!
//! Also home to [`SetupStatus`], which is always derived from backend reads
//! and never cached locally.

pub mod company;
pub mod setup;
pub mod upload;

pub use company::CompanySettings;
pub use setup::SetupStatus;
pub use upload::{ImageUpload, MAX_UPLOAD_BYTES, UploadKind};

//! Schema types for hostboard
//!
//! Plain data shared by the wizard, the backend and the configuration layer.

mod action;
mod config;
mod draft;

pub use action::{ActionKind, VerifyTarget};
pub use config::{ActionDelays, Config, OtpConfig};
pub use draft::{
    DocumentKind, Documents, Location, Policies, PropertyDraft, RoomEntry, UploadedImage, AMENITIES,
};

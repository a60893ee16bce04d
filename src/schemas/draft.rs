//! Draft schema - the property being onboarded

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Document slots on the documents step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Registration,
    Ownership,
    Pan,
    Gst,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 4] = [
        DocumentKind::Registration,
        DocumentKind::Ownership,
        DocumentKind::Pan,
        DocumentKind::Gst,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            DocumentKind::Registration => "Property Registration",
            DocumentKind::Ownership => "Proof of Ownership",
            DocumentKind::Pan => "PAN Card",
            DocumentKind::Gst => "GST Certificate",
        }
    }

    /// File name recorded once the simulated upload finishes
    pub fn file_name(&self) -> String {
        format!("{}_doc.pdf", self)
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentKind::Registration => write!(f, "registration"),
            DocumentKind::Ownership => write!(f, "ownership"),
            DocumentKind::Pan => write!(f, "pan"),
            DocumentKind::Gst => write!(f, "gst"),
        }
    }
}

/// Amenities offered as toggles on the property details step
pub const AMENITIES: &[&str] = &[
    "WiFi",
    "Parking",
    "Swimming Pool",
    "Restaurant",
    "Gym",
    "Spa",
    "Air Conditioning",
    "Room Service",
];

/// Where the property is
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    pub address: String,
}

/// House rules captured on the policies step
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policies {
    pub check_in: String,
    pub check_out: String,
    pub cancellation: String,
}

/// Uploaded documents and bank status
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Documents {
    /// Document kind to stored file name
    pub uploaded: BTreeMap<DocumentKind, String>,
    pub bank_verified: bool,
}

/// A room type saved from the add-room form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomEntry {
    pub name: String,
    pub adults: String,
    pub bed: String,
    pub size_sqm: String,
    pub base_price: String,
    pub inventory: String,
    pub meal_plan: String,
    pub created_at: DateTime<Utc>,
}

impl RoomEntry {
    /// One-line summary shown under the room name
    pub fn meta_line(&self) -> String {
        let parts: Vec<String> = [
            (self.adults.as_str(), "Adults"),
            (self.bed.as_str(), ""),
            (self.size_sqm.as_str(), "sqm"),
        ]
        .iter()
        .filter(|(value, _)| !value.trim().is_empty())
        .map(|(value, unit)| {
            if unit.is_empty() {
                value.trim().to_string()
            } else {
                format!("{} {}", value.trim(), unit)
            }
        })
        .collect();
        parts.join(" • ")
    }
}

/// An image added to the property gallery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedImage {
    pub source: String,
    pub added_at: DateTime<Utc>,
}

/// In-memory property draft accumulated across the wizard steps
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDraft {
    pub name: String,
    pub property_type: String,
    pub location: Location,
    pub amenities: BTreeSet<String>,
    pub rooms: Vec<RoomEntry>,
    pub policies: Policies,
    pub documents: Documents,
    pub images: Vec<UploadedImage>,
    /// Selected channel manager, when the property uses one
    pub channel_manager: Option<String>,
}

impl PropertyDraft {
    /// Toggle an amenity, returning whether it is now selected
    pub fn toggle_amenity(&mut self, amenity: &str) -> bool {
        if self.amenities.remove(amenity) {
            false
        } else {
            self.amenities.insert(amenity.to_string());
            true
        }
    }

    /// Whether a document of the given kind has been uploaded
    pub fn has_document(&self, kind: DocumentKind) -> bool {
        self.documents.uploaded.contains_key(&kind)
    }
}

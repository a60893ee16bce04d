//! Room-type and image lists built from captured form values

use chrono::Utc;
use serde::Serialize;

use crate::errors::{HostboardError, Result};
use crate::schemas::{PropertyDraft, RoomEntry, UploadedImage};

use super::fields::{FieldId, FormFields};

/// Inputs of the add-room form
pub const ROOM_FIELDS: [FieldId; 7] = [
    FieldId::RoomName,
    FieldId::RoomAdults,
    FieldId::RoomBed,
    FieldId::RoomSize,
    FieldId::RoomPrice,
    FieldId::RoomInventory,
    FieldId::RoomMealPlan,
];

/// Buttons on a saved room card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomCardAction {
    Edit,
    Delete,
}

impl std::fmt::Display for RoomCardAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoomCardAction::Edit => write!(f, "edit"),
            RoomCardAction::Delete => write!(f, "delete"),
        }
    }
}

/// Add-room form visibility. The "add room" button shows only while the
/// form is closed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoomForm {
    open: bool,
}

impl RoomForm {
    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn add_button_visible(&self) -> bool {
        !self.open
    }
}

/// Build a room entry from the add-room inputs
pub fn room_from_fields(fields: &FormFields) -> RoomEntry {
    let value = |field| fields.get(field).trim().to_string();
    RoomEntry {
        name: value(FieldId::RoomName),
        adults: value(FieldId::RoomAdults),
        bed: value(FieldId::RoomBed),
        size_sqm: value(FieldId::RoomSize),
        base_price: value(FieldId::RoomPrice),
        inventory: value(FieldId::RoomInventory),
        meal_plan: value(FieldId::RoomMealPlan),
        created_at: Utc::now(),
    }
}

/// Append a room to the draft, returning its index
pub fn append_room(draft: &mut PropertyDraft, room: RoomEntry) -> usize {
    draft.rooms.push(room);
    draft.rooms.len() - 1
}

/// Handle a room card button.
///
/// Saved rooms are immutable for now, so both actions are unbound.
pub fn room_card_action(draft: &PropertyDraft, index: usize, action: RoomCardAction) -> Result<()> {
    let room = draft.rooms.get(index).ok_or_else(|| {
        HostboardError::Validation(format!("No room type at position {}", index + 1))
    })?;
    Err(HostboardError::Unbound(format!(
        "{} for room type '{}'",
        action, room.name
    )))
}

/// Append an image to the gallery, returning the new image count
pub fn append_image(draft: &mut PropertyDraft, source: &str) -> usize {
    draft.images.push(UploadedImage {
        source: source.trim().to_string(),
        added_at: Utc::now(),
    });
    draft.images.len()
}

/// Gallery counter, e.g. "(3/10 minimum)"
pub fn image_count_label(count: usize, minimum: usize) -> String {
    format!("({}/{} minimum)", count, minimum)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_room_fields() -> FormFields {
        let mut fields = FormFields::default();
        fields.set(FieldId::RoomName, " Deluxe Suite ");
        fields.set(FieldId::RoomAdults, "3");
        fields.set(FieldId::RoomBed, "1 King Bed");
        fields.set(FieldId::RoomSize, "45");
        fields.set(FieldId::RoomPrice, "5000");
        fields
    }

    #[test]
    fn test_room_from_fields_uses_captured_values() {
        let room = room_from_fields(&filled_room_fields());
        assert_eq!(room.name, "Deluxe Suite");
        assert_eq!(room.meta_line(), "3 Adults • 1 King Bed • 45 sqm");
        assert_eq!(room.inventory, "");
    }

    #[test]
    fn test_rooms_append_in_order() {
        let mut draft = PropertyDraft::default();
        let mut fields = filled_room_fields();
        assert_eq!(append_room(&mut draft, room_from_fields(&fields)), 0);
        fields.set(FieldId::RoomName, "Standard");
        assert_eq!(append_room(&mut draft, room_from_fields(&fields)), 1);

        let names: Vec<_> = draft.rooms.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Deluxe Suite", "Standard"]);
    }

    #[test]
    fn test_room_card_actions_are_unbound() {
        let mut draft = PropertyDraft::default();
        append_room(&mut draft, room_from_fields(&filled_room_fields()));

        let err = room_card_action(&draft, 0, RoomCardAction::Edit).unwrap_err();
        assert_eq!(err.code(), "UNBOUND");
        let err = room_card_action(&draft, 0, RoomCardAction::Delete).unwrap_err();
        assert_eq!(err.code(), "UNBOUND");
        assert_eq!(draft.rooms.len(), 1);

        let err = room_card_action(&draft, 4, RoomCardAction::Edit).unwrap_err();
        assert_eq!(err.code(), "VALIDATION");
    }

    #[test]
    fn test_room_form_toggles_add_button() {
        let mut form = RoomForm::default();
        assert!(form.add_button_visible());
        form.open();
        assert!(!form.add_button_visible());
        form.close();
        assert!(form.add_button_visible());
    }

    #[test]
    fn test_images_and_count_label() {
        let mut draft = PropertyDraft::default();
        assert_eq!(append_image(&mut draft, "lobby.jpg"), 1);
        assert_eq!(append_image(&mut draft, "pool.jpg"), 2);
        assert_eq!(image_count_label(draft.images.len(), 10), "(2/10 minimum)");
        assert_eq!(draft.images[1].source, "pool.jpg");
    }
}

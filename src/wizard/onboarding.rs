//! Dashboard and the six onboarding steps

use crate::backend::{ActionOutcome, ActionRequest};
use crate::domain::{validate_property_search, validate_submission, Page};
use crate::schemas::{DocumentKind, PropertyDraft, VerifyTarget};

use super::app::Wizard;
use super::controls::ControlId;
use super::fields::{fields_on_step, FieldId, Toggle};
use super::lists::{
    append_image, append_room, room_card_action, room_from_fields, RoomCardAction, ROOM_FIELDS,
};
use super::modal::{ModalId, PropertyMatch};
use super::notify::Severity;

/// Controls whose state belongs to the property being onboarded
pub(super) fn property_controls() -> Vec<ControlId> {
    let mut controls = vec![
        ControlId::FindProperty,
        ControlId::PropertyMatch,
        ControlId::Verify(VerifyTarget::Email),
        ControlId::Verify(VerifyTarget::Phone),
        ControlId::VerifyBank,
        ControlId::SubmitProperty,
    ];
    controls.extend(DocumentKind::ALL.iter().map(|kind| ControlId::UploadDocument(*kind)));
    controls
}

impl Wizard {
    fn restart_steps(&mut self) {
        if let Err(e) = self.go_to_step(1) {
            tracing::warn!(error = %e, "could not return to the first step");
        }
    }

    pub(super) fn add_property(&mut self) {
        self.show(Page::Onboarding);
        self.restart_steps();
    }

    pub(super) fn confirm_leave(&mut self) {
        self.modals.hide(ModalId::Leave);
        tracing::info!(property = %self.draft.name, "leaving onboarding, draft kept");
        self.show(Page::Dashboard);
    }

    // Step 1

    pub(super) fn find_property(&mut self) {
        let name = self.fields.get(FieldId::PropertyName).trim().to_string();
        let city = self.fields.get(FieldId::City).trim().to_string();
        if let Some(reason) = validate_property_search(&name).reason {
            self.notify(reason, Severity::Error);
            return;
        }
        self.dispatch(ActionRequest::FindProperty { name, city });
    }

    pub(super) fn property_found(&mut self, outcome: ActionOutcome) {
        let ActionOutcome::PropertyMatch { name, location } = outcome else {
            tracing::warn!(?outcome, "search finished without a match");
            return;
        };
        self.property_match = Some(PropertyMatch { name, location });
        self.modals.show(ModalId::Property);
    }

    pub(super) fn confirm_property(&mut self) {
        if !self.modals.is_open(ModalId::Property) {
            return;
        }
        if self.dispatch(ActionRequest::ConfirmProperty) {
            self.modals.hide(ModalId::Property);
            self.notify("Property matched! Content will be pre-filled.", Severity::Success);
        }
    }

    pub(super) fn manual_entry(&mut self) {
        if !self.modals.is_open(ModalId::Property) {
            return;
        }
        if self.dispatch(ActionRequest::ManualEntry) {
            self.modals.hide(ModalId::Property);
            self.notify("Continuing with manual entry", Severity::Info);
        }
    }

    /// Pre-fill the draft from the matched listing and move on
    pub(super) fn property_confirmed(&mut self) {
        if let Some(found) = self.property_match.clone() {
            self.fields.set(FieldId::PropertyName, found.name.clone());
            self.draft.name = found.name;
            self.fields.set(FieldId::City, found.location.clone());
            self.draft.location.city = found.location;
        }
        self.advance_past_search();
    }

    pub(super) fn manual_entry_started(&mut self) {
        self.advance_past_search();
    }

    fn advance_past_search(&mut self) {
        if let Err(e) = self.go_to_step(2) {
            tracing::warn!(error = %e, "could not open property details");
        }
    }

    // Step 2

    pub(super) fn add_image(&mut self, source: &str) {
        if source.trim().is_empty() {
            self.notify("Please choose an image to upload", Severity::Error);
            return;
        }
        let count = append_image(&mut self.draft, source);
        self.fields.clear(&[FieldId::ImageSource]);
        tracing::debug!(count, "image added");
    }

    pub(super) fn verify_contact(&mut self, target: VerifyTarget) {
        self.dispatch(ActionRequest::Verify { target });
    }

    pub(super) fn contact_verified(&mut self, target: VerifyTarget) {
        self.controls.mark_verified(ControlId::Verify(target), None);
    }

    // Step 3

    pub(super) fn save_room(&mut self) {
        let room = room_from_fields(&self.fields);
        let index = append_room(&mut self.draft, room);
        tracing::debug!(index, "room type saved");
        self.fields.clear(&ROOM_FIELDS);
        self.room_form.close();
        self.notify("Room type added successfully!", Severity::Success);
    }

    pub(super) fn room_card(&mut self, index: usize, action: RoomCardAction) {
        if let Err(e) = room_card_action(&self.draft, index, action) {
            tracing::debug!(error = %e, "room card action");
            self.notify(e.to_string(), Severity::Info);
        }
    }

    // Step 5

    pub(super) fn verify_bank(&mut self) {
        let ifsc = self.fields.get(FieldId::IfscCode).trim().to_string();
        let account_number = self.fields.get(FieldId::AccountNumber).trim().to_string();
        self.dispatch(ActionRequest::VerifyBank { ifsc, account_number });
    }

    pub(super) fn bank_verified(&mut self) {
        self.controls.mark_verified(ControlId::VerifyBank, None);
        self.draft.documents.bank_verified = true;
        self.notify("Bank account verified successfully!", Severity::Success);
    }

    pub(super) fn upload_document(&mut self, kind: DocumentKind) {
        self.dispatch(ActionRequest::UploadDocument { kind });
    }

    pub(super) fn document_uploaded(&mut self, kind: DocumentKind, outcome: ActionOutcome) {
        let file_name = match outcome {
            ActionOutcome::DocumentStored { file_name } => file_name,
            _ => kind.file_name(),
        };
        self.controls
            .mark_verified(ControlId::UploadDocument(kind), Some(&file_name));
        self.draft.documents.uploaded.insert(kind, file_name);
    }

    // Step 6

    pub(super) fn submit_property(&mut self) {
        if let Some(reason) = validate_submission(self.fields.is_on(Toggle::FinalTerms)).reason {
            self.notify(reason, Severity::Error);
            return;
        }
        let property_name = self.draft.name.clone();
        self.dispatch(ActionRequest::SubmitProperty { property_name });
    }

    pub(super) fn submitted(&mut self) {
        tracing::info!(property = %self.draft.name, rooms = self.draft.rooms.len(), "property submitted");
        self.show(Page::Success);
    }

    /// Start over with an empty draft on step 1
    pub(super) fn add_another_property(&mut self) {
        self.draft = PropertyDraft::default();
        self.property_match = None;
        self.room_form.close();
        for step in 1..=self.steps.total() {
            self.fields.clear(fields_on_step(step));
        }
        self.fields.set_toggle(Toggle::ChannelManager, false);
        self.fields.set_toggle(Toggle::FinalTerms, false);
        self.forget_pending(&property_controls());

        self.show(Page::Onboarding);
        self.restart_steps();
    }
}

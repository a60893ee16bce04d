//! The wizard: single owner of every piece of UI state
//!
//! All mutation goes through [`Wizard::handle`], which returns the side
//! effects (backend calls, timers) the runtime must carry out. Completions
//! and timer expiries come back in as events, so nothing here ever blocks.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::backend::{ActionOutcome, ActionRequest, ActionTicket};
use crate::domain::{Form, Page, StepController, ViewRegistry};
use crate::errors::Result;
use crate::schemas::{Config, PropertyDraft};

use super::controls::{ControlId, ControlState, Controls};
use super::events::{Effect, WizardEvent};
use super::fields::{FieldId, FormFields, Toggle};
use super::lists::RoomForm;
use super::modal::{ModalController, ModalId, PropertyMatch};
use super::notify::{Notifier, Severity, Toast};
use super::onboarding::property_controls;
use super::otp::{OtpCountdown, OtpInput, TickOutcome};

/// Listing filter on the dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DashboardTab {
    #[default]
    All,
    Active,
    Drafts,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 3] = [DashboardTab::All, DashboardTab::Active, DashboardTab::Drafts];

    pub fn title(&self) -> &'static str {
        match self {
            DashboardTab::All => "All Properties",
            DashboardTab::Active => "Active",
            DashboardTab::Drafts => "Drafts",
        }
    }
}

/// Element that currently has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "target", rename_all = "snake_case")]
pub enum Focus {
    OtpCell(usize),
    Field(FieldId),
}

#[derive(Debug, Clone)]
pub struct Wizard {
    pub(super) config: Config,
    pub(super) views: ViewRegistry,
    pub(super) steps: StepController,
    pub(super) fields: FormFields,
    pub(super) otp: OtpInput,
    pub(super) countdown: OtpCountdown,
    pub(super) notifier: Notifier,
    pub(super) modals: ModalController,
    pub(super) controls: Controls,
    pub(super) room_form: RoomForm,
    pub(super) draft: PropertyDraft,
    pub(super) property_match: Option<PropertyMatch>,
    pub(super) dashboard_tab: DashboardTab,
    pub(super) focus: Option<Focus>,
    pub(super) logged_in_as: Option<String>,
    /// Ticket id of the request each busy control is waiting on
    in_flight: BTreeMap<ControlId, u64>,
    next_ticket: u64,
    effects: Vec<Effect>,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Wizard {
    pub fn new(config: Config) -> Self {
        let otp = OtpInput::new(config.otp.code_length);
        Self {
            config,
            views: ViewRegistry::default(),
            steps: StepController::default(),
            fields: FormFields::default(),
            otp,
            countdown: OtpCountdown::default(),
            notifier: Notifier::default(),
            modals: ModalController::default(),
            controls: Controls::default(),
            room_form: RoomForm::default(),
            draft: PropertyDraft::default(),
            property_match: None,
            dashboard_tab: DashboardTab::default(),
            focus: None,
            logged_in_as: None,
            in_flight: BTreeMap::new(),
            next_ticket: 1,
            effects: Vec::new(),
        }
    }

    /// Apply one event and return the effects it produced
    pub fn handle(&mut self, event: WizardEvent) -> Vec<Effect> {
        match event {
            WizardEvent::ShowPage(page) => self.show(page),
            WizardEvent::ShowForm(form) => self.show_form(form),
            WizardEvent::GoToStep(step) => {
                if let Err(e) = self.go_to_step(step) {
                    tracing::warn!(error = %e, "step change rejected");
                }
            }
            WizardEvent::NextStep => {
                if self.steps.next_step() {
                    self.views.request_scroll_reset();
                }
            }
            WizardEvent::PreviousStep => {
                if self.steps.previous_step() {
                    self.views.request_scroll_reset();
                }
            }

            WizardEvent::SetField { field, value } => self.set_field(field, value),
            WizardEvent::SetToggle { toggle, on } => self.set_toggle(toggle, on),
            WizardEvent::FieldBlurred(field) => self.field_blurred(field),

            WizardEvent::SendOtp => self.send_otp(),
            WizardEvent::Signup => self.signup(),
            WizardEvent::VerifyOtp => self.verify_otp(),
            WizardEvent::ResendOtp => self.resend_otp(),
            WizardEvent::OtpTyped { index, ch } => self.otp_typed(index, ch),
            WizardEvent::OtpBackspace { index } => self.otp_backspace(index),
            WizardEvent::OtpPasted(text) => self.otp_pasted(&text),
            WizardEvent::OtpFocused(index) => self.otp_focused(index),

            WizardEvent::SelectTab(tab) => self.dashboard_tab = tab,
            WizardEvent::AddProperty => self.add_property(),

            WizardEvent::BackToDashboard => {
                self.modals.show(ModalId::Leave);
            }
            WizardEvent::ConfirmLeave => self.confirm_leave(),
            WizardEvent::CancelLeave => {
                self.modals.hide(ModalId::Leave);
            }
            WizardEvent::SaveDraft => self.notify("Draft saved successfully!", Severity::Success),

            WizardEvent::FindProperty => self.find_property(),
            WizardEvent::ConfirmProperty => self.confirm_property(),
            WizardEvent::ManualEntry => self.manual_entry(),
            WizardEvent::DismissModal(id) => {
                self.modals.hide(id);
            }

            WizardEvent::ToggleAmenity(amenity) => {
                self.draft.toggle_amenity(&amenity);
            }
            WizardEvent::AddImage { source } => self.add_image(&source),
            WizardEvent::HeroImageClicked => {
                self.notify("Image upload functionality - Click handled", Severity::Info)
            }
            WizardEvent::Verify(target) => self.verify_contact(target),

            WizardEvent::OpenRoomForm => self.room_form.open(),
            WizardEvent::CloseRoomForm => self.room_form.close(),
            WizardEvent::SaveRoom => self.save_room(),
            WizardEvent::RoomCard { index, action } => self.room_card(index, action),

            WizardEvent::VerifyBank => self.verify_bank(),
            WizardEvent::UploadDocument(kind) => self.upload_document(kind),

            WizardEvent::SubmitProperty => self.submit_property(),
            WizardEvent::AddAnotherProperty => self.add_another_property(),
            WizardEvent::GoToDashboard => self.show(Page::Dashboard),

            WizardEvent::ActionCompleted { ticket, result } => self.complete(ticket, result),
            WizardEvent::CountdownTick { generation } => self.countdown_tick(generation),
            WizardEvent::ToastExpired { generation } => {
                self.notifier.expire(generation);
            }
        }
        self.take_effects()
    }

    /// Effects queued by calls made outside [`Wizard::handle`]
    pub fn take_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }

    // Navigation

    /// Show a page by name; unknown names change nothing
    pub fn show_page(&mut self, name: &str) -> Result<()> {
        let page: Page = name.parse()?;
        self.show(page);
        Ok(())
    }

    /// Switch the login form by name; unknown names change nothing
    pub fn show_form_named(&mut self, name: &str) -> Result<()> {
        let form: Form = name.parse()?;
        self.show_form(form);
        Ok(())
    }

    pub(super) fn show(&mut self, page: Page) {
        self.views.show(page);
        if page != Page::Onboarding {
            self.modals.hide(ModalId::Property);
            self.modals.hide(ModalId::Leave);
            self.supersede_pending(&property_controls());
        }
    }

    pub(super) fn show_form(&mut self, form: Form) {
        self.views.show_form(form);
        self.focus = match form {
            Form::Otp => Some(Focus::OtpCell(self.otp.focus())),
            _ => super::fields::fields_on_form(form).first().copied().map(Focus::Field),
        };
    }

    /// Move the onboarding wizard to step `n` (1-based) and scroll to top
    pub fn go_to_step(&mut self, n: usize) -> Result<()> {
        self.steps.go_to_step(n)?;
        tracing::debug!(step = n, "step change");
        self.views.request_scroll_reset();
        Ok(())
    }

    // Notifications

    /// Show a toast and schedule it to hide after the configured window
    pub fn notify(&mut self, message: impl Into<String>, severity: Severity) {
        let generation = self.notifier.notify(message, severity);
        self.effects.push(Effect::HideToastAfter {
            generation,
            after: self.config.toast_duration(),
        });
    }

    // Backend actions

    /// Queue a backend request unless its control is already waiting on one.
    ///
    /// Returns whether the request was dispatched.
    pub(super) fn dispatch(&mut self, request: ActionRequest) -> bool {
        let control = ControlId::for_request(&request);
        if self.in_flight.contains_key(&control) {
            tracing::debug!(%control, "ignoring trigger while request is pending");
            return false;
        }
        if self.controls.is_verified(control) {
            tracing::debug!(%control, "control already verified");
            return false;
        }

        let id = self.next_ticket;
        self.next_ticket += 1;
        tracing::info!(ticket = id, action = %request.kind(), "dispatching");

        self.in_flight.insert(control, id);
        self.controls.set_pending(control);
        self.effects.push(Effect::Dispatch(ActionTicket { id, request }));
        true
    }

    fn complete(&mut self, ticket: ActionTicket, result: std::result::Result<ActionOutcome, String>) {
        let control = ControlId::for_request(&ticket.request);
        if self.in_flight.get(&control) != Some(&ticket.id) {
            tracing::debug!(ticket = ticket.id, %control, "dropping stale completion");
            return;
        }
        self.in_flight.remove(&control);
        self.controls.restore(control);

        match result {
            Ok(outcome) => {
                tracing::info!(ticket = ticket.id, action = %ticket.request.kind(), "action completed");
                self.apply_outcome(ticket.request, outcome);
            }
            Err(message) => {
                tracing::warn!(ticket = ticket.id, action = %ticket.request.kind(), %message, "action failed");
                self.notify(message, Severity::Error);
            }
        }
    }

    fn apply_outcome(&mut self, request: ActionRequest, outcome: ActionOutcome) {
        match request {
            ActionRequest::SendOtp { email } | ActionRequest::Signup { email, .. } => {
                self.otp_sent(email)
            }
            ActionRequest::VerifyOtp { email, .. } => self.otp_verified(email),
            ActionRequest::FindProperty { .. } => self.property_found(outcome),
            ActionRequest::ConfirmProperty => self.property_confirmed(),
            ActionRequest::ManualEntry => self.manual_entry_started(),
            ActionRequest::Verify { target } => self.contact_verified(target),
            ActionRequest::VerifyBank { .. } => self.bank_verified(),
            ActionRequest::UploadDocument { kind } => self.document_uploaded(kind, outcome),
            ActionRequest::SubmitProperty { .. } => self.submitted(),
        }
    }

    pub fn is_pending(&self, control: ControlId) -> bool {
        self.in_flight.contains_key(&control)
    }

    pub fn pending_count(&self) -> usize {
        self.in_flight.len()
    }

    /// Drop pending requests of the given controls so their late
    /// completions are ignored
    pub(super) fn forget_pending(&mut self, controls: &[ControlId]) {
        for control in controls {
            self.in_flight.remove(control);
        }
        self.controls.reset(controls.iter().copied());
    }

    /// Abandon in-flight requests of `controls`; verified controls stay verified
    pub(super) fn supersede_pending(&mut self, controls: &[ControlId]) {
        for control in controls {
            if self.in_flight.remove(control).is_some() {
                tracing::debug!(%control, "superseding pending request");
                self.controls.restore(*control);
            }
        }
    }

    // OTP countdown

    pub(super) fn start_countdown(&mut self) {
        if let Some(previous) = self.countdown.is_running().then(|| self.countdown.generation()) {
            self.effects.push(Effect::StopCountdown { generation: previous });
        }
        let generation = self.countdown.start(self.config.otp.countdown_seconds);
        self.effects.push(Effect::StartCountdown { generation });
    }

    pub(super) fn stop_countdown(&mut self) {
        if self.countdown.is_running() {
            self.countdown.stop();
            self.effects.push(Effect::StopCountdown {
                generation: self.countdown.generation(),
            });
        }
    }

    fn countdown_tick(&mut self, generation: u64) {
        match self.countdown.tick(generation) {
            TickOutcome::Stale => tracing::trace!(generation, "stale countdown tick"),
            TickOutcome::Running(_) => {}
            TickOutcome::Finished => {
                tracing::debug!("otp countdown finished");
                self.effects.push(Effect::StopCountdown { generation });
            }
        }
    }

    // Inputs

    fn set_field(&mut self, field: FieldId, value: String) {
        self.sync_draft(field, &value);
        self.fields.set(field, value);
        self.focus = Some(Focus::Field(field));
    }

    fn set_toggle(&mut self, toggle: Toggle, on: bool) {
        self.fields.set_toggle(toggle, on);
        if toggle == Toggle::ChannelManager {
            self.draft.channel_manager = on.then(|| self.fields.get(FieldId::ChannelManagerName).to_string());
        }
    }

    /// Mirror property inputs into the draft
    fn sync_draft(&mut self, field: FieldId, value: &str) {
        let value = value.trim().to_string();
        match field {
            FieldId::PropertyName => self.draft.name = value,
            FieldId::City => self.draft.location.city = value,
            FieldId::Address => self.draft.location.address = value,
            FieldId::PropertyType => self.draft.property_type = value,
            FieldId::CheckIn => self.draft.policies.check_in = value,
            FieldId::CheckOut => self.draft.policies.check_out = value,
            FieldId::Cancellation => self.draft.policies.cancellation = value,
            FieldId::ChannelManagerName if self.fields.is_on(Toggle::ChannelManager) => {
                self.draft.channel_manager = Some(value)
            }
            _ => {}
        }
    }

    fn field_blurred(&mut self, field: FieldId) {
        if field != FieldId::IfscCode {
            return;
        }
        let code = self.fields.get(FieldId::IfscCode).to_string();
        if let Some(bank) = super::fields::bank_name_for_ifsc(&code) {
            tracing::debug!(ifsc = %code, bank, "bank name filled from IFSC");
            self.fields.set(FieldId::BankName, bank);
        }
    }

    // Read access

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn current_page(&self) -> Page {
        self.views.current_page()
    }

    pub fn current_form(&self) -> Form {
        self.views.current_form()
    }

    pub fn views(&self) -> &ViewRegistry {
        &self.views
    }

    pub fn steps(&self) -> &StepController {
        &self.steps
    }

    pub fn current_step(&self) -> usize {
        self.steps.current()
    }

    pub fn field(&self, field: FieldId) -> &str {
        self.fields.get(field)
    }

    pub fn is_toggled(&self, toggle: Toggle) -> bool {
        self.fields.is_on(toggle)
    }

    pub fn otp(&self) -> &OtpInput {
        &self.otp
    }

    pub fn countdown(&self) -> &OtpCountdown {
        &self.countdown
    }

    pub fn toast(&self) -> Option<&Toast> {
        self.notifier.current()
    }

    pub fn modals(&self) -> &ModalController {
        &self.modals
    }

    pub fn control(&self, id: ControlId) -> ControlState {
        self.controls.get(id)
    }

    pub fn room_form(&self) -> &RoomForm {
        &self.room_form
    }

    pub fn draft(&self) -> &PropertyDraft {
        &self.draft
    }

    pub fn property_match(&self) -> Option<&PropertyMatch> {
        self.property_match.as_ref()
    }

    pub fn dashboard_tab(&self) -> DashboardTab {
        self.dashboard_tab
    }

    pub fn focus(&self) -> Option<Focus> {
        self.focus
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in_as.is_some()
    }

    pub fn logged_in_as(&self) -> Option<&str> {
        self.logged_in_as.as_deref()
    }

    /// Whether the channel manager selector is shown
    pub fn channel_manager_visible(&self) -> bool {
        self.fields.is_on(Toggle::ChannelManager)
    }

    pub fn snapshot(&self) -> WizardSnapshot {
        WizardSnapshot {
            page: self.current_page(),
            form: self.current_form(),
            step: self.current_step(),
            total_steps: self.steps.total(),
            logged_in_as: self.logged_in_as.clone(),
            toast: self.toast().cloned(),
            otp_countdown: self.countdown.display(),
            open_modals: self.modals.open_modals(),
            scroll_locked: self.modals.scroll_locked(),
            controls: self
                .controls
                .changed()
                .map(|(id, state)| (id.to_string(), state.clone()))
                .collect(),
            draft: self.draft.clone(),
        }
    }
}

/// Serializable summary of the wizard, for `demo --json` and logs
#[derive(Debug, Clone, Serialize)]
pub struct WizardSnapshot {
    pub page: Page,
    pub form: Form,
    pub step: usize,
    pub total_steps: usize,
    pub logged_in_as: Option<String>,
    pub toast: Option<Toast>,
    pub otp_countdown: String,
    pub open_modals: Vec<ModalId>,
    pub scroll_locked: bool,
    pub controls: BTreeMap<String, ControlState>,
    pub draft: PropertyDraft,
}

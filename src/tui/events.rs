//! Terminal input mapped to wizard events
//!
//! Every screen is a flat list of [`Element`]s the cursor moves over. Keys
//! act on the selected element and turn into [`WizardEvent`]s.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::domain::{Form, Page};
use crate::schemas::{DocumentKind, VerifyTarget, AMENITIES};
use crate::wizard::{
    fields_on_form, fields_on_step, ControlId, DashboardTab, FieldId, ModalId, RoomCardAction,
    Toggle, Wizard, WizardEvent,
};

/// Selectable thing on screen
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Field(FieldId),
    Toggle(Toggle),
    /// The row of OTP cells, typed into as one element
    OtpCells,
    Button {
        label: String,
        event: WizardEvent,
        disabled: bool,
    },
}

impl Element {
    fn button(label: impl Into<String>, event: WizardEvent) -> Self {
        Element::Button {
            label: label.into(),
            event,
            disabled: false,
        }
    }

    /// Button whose label and enabled state follow a wizard control
    fn control(wizard: &Wizard, id: ControlId, event: WizardEvent) -> Self {
        let state = wizard.control(id);
        Element::Button {
            label: state.label,
            event,
            disabled: state.disabled,
        }
    }
}

/// Cursor movement after a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    Stay,
    Next,
    Previous,
}

/// What the runner should do after a key press
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Quit,
    ToggleLogs,
    /// Send `events` to the wizard in order, then move the cursor
    Act {
        events: Vec<WizardEvent>,
        cursor: Cursor,
    },
    Nothing,
}

impl Command {
    fn send(event: WizardEvent) -> Self {
        Command::Act {
            events: vec![event],
            cursor: Cursor::Stay,
        }
    }

    fn cursor(cursor: Cursor) -> Self {
        Command::Act {
            events: Vec::new(),
            cursor,
        }
    }
}

/// Elements of the current screen, in cursor order
pub fn elements(wizard: &Wizard) -> Vec<Element> {
    let modals = wizard.modals();
    if modals.is_open(ModalId::Leave) {
        return vec![
            Element::button("Yes, leave", WizardEvent::ConfirmLeave),
            Element::button("Stay", WizardEvent::CancelLeave),
        ];
    }
    if modals.is_open(ModalId::Property) {
        return vec![
            Element::control(wizard, ControlId::PropertyMatch, WizardEvent::ConfirmProperty),
            Element::button("No, enter details manually", WizardEvent::ManualEntry),
            Element::button("Close", WizardEvent::DismissModal(ModalId::Property)),
        ];
    }

    match wizard.current_page() {
        Page::Login => login_elements(wizard),
        Page::Dashboard => {
            let mut elements: Vec<Element> = DashboardTab::ALL
                .iter()
                .map(|tab| Element::button(tab.title(), WizardEvent::SelectTab(*tab)))
                .collect();
            elements.push(Element::button("+ Add Property", WizardEvent::AddProperty));
            elements
        }
        Page::Onboarding => onboarding_elements(wizard),
        Page::Success => vec![
            Element::button("Add Another Property", WizardEvent::AddAnotherProperty),
            Element::button("Go to Dashboard", WizardEvent::GoToDashboard),
        ],
    }
}

fn login_elements(wizard: &Wizard) -> Vec<Element> {
    let form = wizard.current_form();
    let mut elements: Vec<Element> = fields_on_form(form).iter().map(|f| Element::Field(*f)).collect();
    match form {
        Form::Login => {
            elements.push(Element::control(wizard, ControlId::SendOtp, WizardEvent::SendOtp));
            elements.push(Element::button(
                "Create an account",
                WizardEvent::ShowForm(Form::Signup),
            ));
        }
        Form::Signup => {
            elements.push(Element::Toggle(Toggle::AcceptTerms));
            elements.push(Element::control(wizard, ControlId::Signup, WizardEvent::Signup));
            elements.push(Element::button(
                "Already have an account? Log in",
                WizardEvent::ShowForm(Form::Login),
            ));
        }
        Form::Otp => {
            elements.push(Element::OtpCells);
            elements.push(Element::control(wizard, ControlId::VerifyOtp, WizardEvent::VerifyOtp));
            let countdown = wizard.countdown();
            elements.push(Element::Button {
                label: format!("Resend code {}", countdown.display()).trim_end().to_string(),
                event: WizardEvent::ResendOtp,
                disabled: !countdown.resend_enabled(),
            });
            elements.push(Element::button("Change email", WizardEvent::ShowForm(Form::Login)));
        }
    }
    elements
}

fn onboarding_elements(wizard: &Wizard) -> Vec<Element> {
    let step = wizard.current_step();
    let field = |id: FieldId| Element::Field(id);
    let mut elements = Vec::new();

    match step {
        1 => {
            elements.extend([field(FieldId::PropertyName), field(FieldId::City)]);
            elements.push(Element::control(wizard, ControlId::FindProperty, WizardEvent::FindProperty));
        }
        2 => {
            elements.extend([field(FieldId::PropertyType), field(FieldId::Address)]);
            elements.push(field(FieldId::ContactEmail));
            elements.push(Element::control(
                wizard,
                ControlId::Verify(VerifyTarget::Email),
                WizardEvent::Verify(VerifyTarget::Email),
            ));
            elements.push(field(FieldId::ContactPhone));
            elements.push(Element::control(
                wizard,
                ControlId::Verify(VerifyTarget::Phone),
                WizardEvent::Verify(VerifyTarget::Phone),
            ));
            for amenity in AMENITIES {
                let mark = if wizard.draft().amenities.contains(*amenity) { "x" } else { " " };
                elements.push(Element::button(
                    format!("[{}] {}", mark, amenity),
                    WizardEvent::ToggleAmenity(amenity.to_string()),
                ));
            }
            elements.push(Element::Toggle(Toggle::ChannelManager));
            if wizard.channel_manager_visible() {
                elements.push(field(FieldId::ChannelManagerName));
            }
            elements.push(Element::button("Upload hero image", WizardEvent::HeroImageClicked));
            elements.push(field(FieldId::ImageSource));
            elements.push(Element::button(
                "+ Add image",
                WizardEvent::AddImage {
                    source: wizard.field(FieldId::ImageSource).to_string(),
                },
            ));
        }
        3 => {
            for (index, room) in wizard.draft().rooms.iter().enumerate() {
                for action in [RoomCardAction::Edit, RoomCardAction::Delete] {
                    elements.push(Element::button(
                        format!("{} {}", action, room.name),
                        WizardEvent::RoomCard { index, action },
                    ));
                }
            }
            if wizard.room_form().is_open() {
                elements.extend(fields_on_step(3).iter().map(|f| field(*f)));
                elements.push(Element::button("Save Room Type", WizardEvent::SaveRoom));
                elements.push(Element::button("Cancel", WizardEvent::CloseRoomForm));
            } else {
                elements.push(Element::button("+ Add Room Type", WizardEvent::OpenRoomForm));
            }
        }
        4 => {
            elements.extend(fields_on_step(4).iter().map(|f| field(*f)));
        }
        5 => {
            elements.extend(fields_on_step(5).iter().map(|f| field(*f)));
            elements.push(Element::control(wizard, ControlId::VerifyBank, WizardEvent::VerifyBank));
            for kind in DocumentKind::ALL {
                let state = wizard.control(ControlId::UploadDocument(kind));
                elements.push(Element::Button {
                    label: format!("{}: {}", kind.title(), state.label),
                    event: WizardEvent::UploadDocument(kind),
                    disabled: state.disabled,
                });
            }
        }
        _ => {
            elements.push(Element::Toggle(Toggle::FinalTerms));
            elements.push(Element::control(
                wizard,
                ControlId::SubmitProperty,
                WizardEvent::SubmitProperty,
            ));
        }
    }

    if step > 1 {
        elements.push(Element::button("← Previous", WizardEvent::PreviousStep));
    }
    if step < wizard.steps().total() {
        elements.push(Element::button("Next →", WizardEvent::NextStep));
    }
    elements.push(Element::button("Save Draft", WizardEvent::SaveDraft));
    elements.push(Element::button("Back to Dashboard", WizardEvent::BackToDashboard));
    elements
}

/// Translate a key press on the selected element
pub fn map_key(key: KeyEvent, selected: Option<&Element>, wizard: &Wizard) -> Command {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Command::Quit;
    }
    match key.code {
        KeyCode::Tab | KeyCode::Down => return leave(selected, Cursor::Next),
        KeyCode::BackTab | KeyCode::Up => return leave(selected, Cursor::Previous),
        KeyCode::Esc => return escape(wizard),
        _ => {}
    }

    match selected {
        Some(Element::Field(field)) => edit_field(*field, key, wizard),
        Some(Element::OtpCells) => edit_otp(key, wizard),
        Some(Element::Toggle(toggle)) => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => Command::send(WizardEvent::SetToggle {
                toggle: *toggle,
                on: !wizard.is_toggled(*toggle),
            }),
            _ => shortcut(key),
        },
        Some(Element::Button { event, disabled, .. }) => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') if !*disabled => Command::send(event.clone()),
            KeyCode::Enter | KeyCode::Char(' ') => Command::Nothing,
            _ => shortcut(key),
        },
        None => shortcut(key),
    }
}

/// Text pasted into the terminal; only the OTP row accepts it
pub fn map_paste(text: &str, selected: Option<&Element>) -> Command {
    match selected {
        Some(Element::OtpCells) => Command::send(WizardEvent::OtpPasted(text.trim().to_string())),
        _ => Command::Nothing,
    }
}

/// Moving off a field counts as a blur
fn leave(selected: Option<&Element>, cursor: Cursor) -> Command {
    match selected {
        Some(Element::Field(field)) => Command::Act {
            events: vec![WizardEvent::FieldBlurred(*field)],
            cursor,
        },
        _ => Command::cursor(cursor),
    }
}

fn escape(wizard: &Wizard) -> Command {
    let modals = wizard.modals();
    if modals.is_open(ModalId::Leave) {
        Command::send(WizardEvent::CancelLeave)
    } else if modals.is_open(ModalId::Property) {
        Command::send(WizardEvent::DismissModal(ModalId::Property))
    } else {
        Command::Nothing
    }
}

fn shortcut(key: KeyEvent) -> Command {
    match key.code {
        KeyCode::Char('q') => Command::Quit,
        KeyCode::Char('l') => Command::ToggleLogs,
        _ => Command::Nothing,
    }
}

fn edit_field(field: FieldId, key: KeyEvent, wizard: &Wizard) -> Command {
    let mut value = wizard.field(field).to_string();
    match key.code {
        KeyCode::Char(ch) => value.push(ch),
        KeyCode::Backspace => {
            if value.pop().is_none() {
                return Command::Nothing;
            }
        }
        KeyCode::Enter => return leave(Some(&Element::Field(field)), Cursor::Next),
        _ => return Command::Nothing,
    }
    Command::send(WizardEvent::SetField { field, value })
}

fn edit_otp(key: KeyEvent, wizard: &Wizard) -> Command {
    let index = wizard.otp().focus();
    match key.code {
        KeyCode::Char(ch) if ch.is_ascii_digit() => Command::send(WizardEvent::OtpTyped { index, ch }),
        KeyCode::Backspace => Command::send(WizardEvent::OtpBackspace { index }),
        KeyCode::Left if index > 0 => Command::send(WizardEvent::OtpFocused(index - 1)),
        KeyCode::Right => Command::send(WizardEvent::OtpFocused(index + 1)),
        KeyCode::Enter => Command::send(WizardEvent::VerifyOtp),
        _ => shortcut(key),
    }
}

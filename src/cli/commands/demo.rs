//! Demo command - Scripted walk-through of the whole wizard

use crate::backend::SimulatedBackend;
use crate::config::load_config;
use crate::errors::{HostboardError, Result};
use crate::fs::resolve_cwd;
use crate::schemas::{DocumentKind, VerifyTarget};
use crate::wizard::{FieldId, Toggle, Wizard, WizardEvent, WizardRuntime};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

const POLL: Duration = Duration::from_millis(50);
const ACTION_TIMEOUT: Duration = Duration::from_secs(30);

/// Run the scripted session and print each transition
pub async fn run(cwd: Option<&Path>, json: bool) -> Result<()> {
    let root = resolve_cwd(cwd);
    let config = load_config(&root)?;
    let backend = Arc::new(SimulatedBackend::from_config(&config));
    let runtime = WizardRuntime::start(Wizard::new(config), backend);

    let mut lines = Vec::new();
    play(&runtime, &mut lines).await?;

    if json {
        let snapshot = runtime.snapshot().await.snapshot();
        let out = serde_json::to_string_pretty(&snapshot)
            .map_err(|e| HostboardError::wrap(e, "Failed to serialize snapshot"))?;
        println!("{}", out);
    } else {
        for line in lines {
            println!("{}", line);
        }
    }
    Ok(())
}

/// Drive `runtime` from the login form to the success page.
///
/// One line per scripted stage is appended to `lines`.
pub async fn play(runtime: &WizardRuntime, lines: &mut Vec<String>) -> Result<()> {
    let image_minimum = runtime.snapshot().await.config().image_minimum;
    let mut demo = Demo { runtime, lines };

    demo.stage(
        "send code",
        vec![set(FieldId::LoginEmail, "host@example.com"), WizardEvent::SendOtp],
    )
    .await?;
    demo.stage(
        "verify code",
        vec![WizardEvent::OtpPasted("123456".into()), WizardEvent::VerifyOtp],
    )
    .await?;

    demo.stage(
        "find property",
        vec![
            WizardEvent::AddProperty,
            set(FieldId::PropertyName, "Seaside Inn"),
            set(FieldId::City, "Goa"),
            WizardEvent::FindProperty,
        ],
    )
    .await?;
    demo.stage("confirm property", vec![WizardEvent::ConfirmProperty]).await?;

    let mut details = vec![
        set(FieldId::PropertyType, "Hotel"),
        set(FieldId::Address, "12 Beach Road"),
        set(FieldId::ContactEmail, "frontdesk@seaside.example"),
        set(FieldId::ContactPhone, "+91 98765 43210"),
        WizardEvent::Verify(VerifyTarget::Email),
        WizardEvent::Verify(VerifyTarget::Phone),
        WizardEvent::ToggleAmenity("WiFi".into()),
        WizardEvent::ToggleAmenity("Swimming Pool".into()),
    ];
    details.extend((1..=image_minimum).map(|n| WizardEvent::AddImage {
        source: format!("photo-{:02}.jpg", n),
    }));
    demo.stage("property details", details).await?;

    demo.stage(
        "rooms",
        vec![
            WizardEvent::NextStep,
            WizardEvent::OpenRoomForm,
            set(FieldId::RoomName, "Deluxe Sea View"),
            set(FieldId::RoomAdults, "2"),
            set(FieldId::RoomBed, "1 King Bed"),
            set(FieldId::RoomSize, "32"),
            set(FieldId::RoomPrice, "4500"),
            set(FieldId::RoomInventory, "8"),
            set(FieldId::RoomMealPlan, "Breakfast included"),
            WizardEvent::SaveRoom,
        ],
    )
    .await?;

    demo.stage(
        "policies",
        vec![
            WizardEvent::NextStep,
            set(FieldId::CheckIn, "14:00"),
            set(FieldId::CheckOut, "11:00"),
            set(FieldId::Cancellation, "Free cancellation up to 24 hours before check-in"),
        ],
    )
    .await?;

    let mut documents = vec![
        WizardEvent::NextStep,
        set(FieldId::IfscCode, "HDFC0001234"),
        WizardEvent::FieldBlurred(FieldId::IfscCode),
        set(FieldId::AccountNumber, "000123456789"),
        WizardEvent::VerifyBank,
    ];
    documents.extend(DocumentKind::ALL.into_iter().map(WizardEvent::UploadDocument));
    demo.stage("documents", documents).await?;

    demo.stage(
        "submit",
        vec![
            WizardEvent::NextStep,
            WizardEvent::SetToggle {
                toggle: Toggle::FinalTerms,
                on: true,
            },
            WizardEvent::SubmitProperty,
        ],
    )
    .await
}

fn set(field: FieldId, value: &str) -> WizardEvent {
    WizardEvent::SetField {
        field,
        value: value.to_string(),
    }
}

struct Demo<'a> {
    runtime: &'a WizardRuntime,
    lines: &'a mut Vec<String>,
}

impl Demo<'_> {
    /// Send `events`, wait for their actions to settle, then record where we are
    async fn stage(&mut self, name: &str, events: Vec<WizardEvent>) -> Result<()> {
        tracing::debug!(stage = name, events = events.len(), "demo stage");
        for event in events {
            self.runtime.send(event).await?;
        }
        tokio::time::timeout(ACTION_TIMEOUT, self.settle())
            .await
            .map_err(|e| HostboardError::wrap(e, format!("Demo stage '{}' did not settle", name)))?;

        let wizard = self.runtime.snapshot().await;
        let toast = wizard
            .toast()
            .map(|t| format!(" | {}", t.message))
            .unwrap_or_default();
        let line = match wizard.current_page() {
            crate::domain::Page::Onboarding => format!(
                "{:<18} onboarding step {}/{}{}",
                name,
                wizard.current_step(),
                wizard.steps().total(),
                toast
            ),
            crate::domain::Page::Login => {
                format!("{:<18} login ({}){}", name, wizard.current_form(), toast)
            }
            page => format!("{:<18} {}{}", name, page, toast),
        };
        self.lines.push(line);
        Ok(())
    }

    async fn settle(&self) {
        while self.runtime.snapshot().await.pending_count() > 0 {
            tokio::time::sleep(POLL).await;
        }
    }
}

//! Backend calls made by the wizard
//!
//! The wizard never talks to a backend directly: it emits an
//! [`ActionTicket`] and the runtime hands the request to a [`Backend`].
//! The only implementation is [`SimulatedBackend`], which waits a fixed
//! delay and answers without any network traffic.

mod request;
mod simulated;

pub use request::{ActionOutcome, ActionRequest, ActionTicket};
pub use simulated::SimulatedBackend;

use async_trait::async_trait;

use crate::errors::Result;

/// Performs one backend action
#[async_trait]
pub trait Backend: Send + Sync {
    async fn perform(&self, request: &ActionRequest) -> Result<ActionOutcome>;
}

//! End-to-end dispatch: contract → request → transport → output region.
//!
//! # Design
//! - Markup-agnostic: callers hand in a resolved [`Invocation`] and an [`OutputRegion`].
//! - The region shows `Loading` before the call starts, then exactly one final state.
//! - Overlapping calls on one region are not ordered; the last to finish wins.

use crate::core::config::AppConfig;
use crate::core::contract::{AttributeSource, TriggerContract};
use crate::core::fields::FieldSet;
use crate::core::render::{RegionState, ResultView};
use crate::core::request::{OutboundRequest, build_request};
use crate::core::transport::{Clock, Transport, TransportError, execute};

/// Destination for the states of one call.
pub trait OutputRegion {
    /// Replace whatever the region shows with `state`.
    fn render(&mut self, state: RegionState);
}

/// A resolved trigger: its contract plus the fields of its form, if any.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    /// Contract governing the request.
    pub contract: TriggerContract,
    /// Field values when the trigger belongs to a form.
    pub fields: Option<FieldSet>,
}

impl Invocation {
    /// Resolve the invocation for `trigger`, or `None` when it is inert.
    pub fn from_trigger<T, F>(trigger: &T, form: Option<(&F, FieldSet)>) -> Option<Self>
    where
        T: AttributeSource + ?Sized,
        F: AttributeSource + ?Sized,
    {
        let (form, fields) = match form {
            Some((form, fields)) => (Some(form), Some(fields)),
            None => (None, None),
        };
        let contract = TriggerContract::resolve(trigger, form)?;
        Some(Self { contract, fields })
    }

    /// Build the outbound request for this invocation.
    #[must_use]
    pub fn request(&self, config: &AppConfig) -> OutboundRequest {
        build_request(&self.contract, self.fields.clone(), config)
    }
}

/// Run one invocation to completion, rendering into `region`.
///
/// # Errors
/// Returns the [`TransportError`] after it has been rendered as a one-line message,
/// so callers can log it.
#[allow(clippy::future_not_send)]
pub async fn run<T, C, R>(
    invocation: &Invocation,
    config: &AppConfig,
    transport: &T,
    clock: &C,
    region: &mut R,
) -> Result<(), TransportError>
where
    T: Transport + ?Sized,
    C: Clock + ?Sized,
    R: OutputRegion + ?Sized,
{
    let request = invocation.request(config);
    region.render(RegionState::Loading);
    match execute(transport, clock, &request).await {
        Ok(result) => {
            region.render(RegionState::Ready(ResultView::from_result(&result)));
            Ok(())
        }
        Err(err) => {
            region.render(RegionState::Failed(error_line(&err)));
            Err(err)
        }
    }
}

/// One-line message shown for a transport failure.
#[must_use]
pub fn error_line(err: &TransportError) -> String {
    format!("Error: {err}")
}

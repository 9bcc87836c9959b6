//! The event-record visitor.

use nucascade_bridge::EngineHandles;
use nucascade_core::{EventRecord, GenerationMode, Registry};
use tracing::{debug, error, info, warn};

use crate::config::{EngineFactory, EngineFlags};
use crate::direct::cascade_projectile;
use crate::error::{ConfigError, TransportError};
use crate::orchestrator::transport_hadrons;
use crate::summary::TransportSummary;

/// Intranuclear-cascade hadron transport.
///
/// Owns the cascade engine and optional de-excitation model for its whole
/// lifetime. Events are dispatched on their generation mode:
///
/// | mode | strategy |
/// |---|---|
/// | hadron-nucleus, photon-nucleus | [`cascade_projectile`] |
/// | lepton-nucleus, nucleon decay, n-nbar oscillation | [`transport_hadrons`] |
///
/// # Examples
///
/// ```
/// use nucascade_transport::HadronTransport;
///
/// let mut transport = HadronTransport::uninitialized();
/// // Without an engine every event passes through untouched.
/// let summary = transport.process_event(None).unwrap();
/// assert_eq!(summary.hadrons(), 0);
/// ```
#[derive(Debug)]
pub struct HadronTransport {
    handles: Option<EngineHandles>,
}

impl HadronTransport {
    /// A transport with no engine; [`process_event`](Self::process_event)
    /// is then a no-op.
    pub fn uninitialized() -> Self {
        Self { handles: None }
    }

    /// A transport driving already-built handles.
    pub fn new(handles: EngineHandles) -> Self {
        if !handles.has_de_excitation() {
            warn_missing_de_excitation(handles.engine_name());
        }
        Self {
            handles: Some(handles),
        }
    }

    /// Read the engine flags from `registry` and let `factory` build the
    /// engine.
    pub fn configure<F>(registry: &Registry, factory: &F) -> Result<Self, ConfigError>
    where
        F: EngineFactory + ?Sized,
    {
        let flags = EngineFlags::from_registry(registry).inspect_err(|e| {
            error!(error = %e, "invalid cascade engine configuration");
        })?;
        info!(args = ?flags.args(), "cascade engine flags");

        let handles = factory.build(&flags).inspect_err(|e| {
            error!(error = %e, "cascade engine construction failed");
        })?;
        info!(
            engine = handles.engine_name(),
            de_excitation = handles.de_excitation_name().unwrap_or("none"),
            requested = flags.de_excitation_model(),
            "hadron transport configured"
        );
        Ok(Self::new(handles))
    }

    /// Whether an engine is attached.
    pub fn is_initialized(&self) -> bool {
        self.handles.is_some()
    }

    /// The attached collaborators, if any.
    pub fn handles(&self) -> Option<&EngineHandles> {
        self.handles.as_ref()
    }

    /// Transport the hadrons of one event.
    ///
    /// A missing record or a missing engine is logged and reported as an
    /// empty summary.
    pub fn process_event(
        &mut self,
        event: Option<&mut EventRecord>,
    ) -> Result<TransportSummary, TransportError> {
        let Some(record) = event else {
            error!("null event record passed to hadron transport");
            return Ok(TransportSummary::default());
        };
        let Some(handles) = self.handles.as_mut() else {
            debug!("hadron transport not initialized; event left untouched");
            return Ok(TransportSummary::default());
        };

        let mode = record.mode();
        let result = match mode {
            GenerationMode::HadronNucleus | GenerationMode::PhotonNucleus => {
                cascade_projectile(handles, record)
            }
            GenerationMode::LeptonNucleus
            | GenerationMode::NucleonDecay
            | GenerationMode::NeutronOscillation => transport_hadrons(handles, record),
        };

        match &result {
            Ok(s) => debug!(
                ?mode,
                extracted = s.extracted,
                transparent = s.transparent,
                buffered = s.buffered,
                exceptions = s.exceptions,
                emitted = s.emitted,
                "event transported"
            ),
            Err(e) => error!(?mode, error = %e, "hadron transport failed"),
        }
        result
    }
}

impl Default for HadronTransport {
    fn default() -> Self {
        Self::uninitialized()
    }
}

fn warn_missing_de_excitation(engine: &str) {
    warn!(
        engine,
        "running the cascade without any de-excitation model; \
         results will be incomplete and unphysical"
    );
}

use crate::config::ClientConfig;
use crate::error::{DispatchError, TransportError};
use crate::mode::AnalysisMode;
use crate::request::{AnalysisRequest, RequestBody};
use crate::response::{AnalysisResponse, AnalysisResult};

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs exactly one POST. Implemented over `gloo-net` in the browser.
#[allow(async_fn_in_trait)]
pub trait Transport {
    type File;

    async fn send(
        &self,
        url: &str,
        body: RequestBody<Self::File>,
    ) -> Result<RawResponse, TransportError>;
}

pub struct Dispatcher<T> {
    transport: T,
    config: ClientConfig,
}

impl<T: Transport> Dispatcher<T> {
    pub fn new(transport: T, config: ClientConfig) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Validates, sends once, and decodes. Nothing is sent when
    /// validation fails; nothing is retried.
    pub async fn dispatch(
        &self,
        request: AnalysisRequest<T::File>,
    ) -> Result<AnalysisResult, DispatchError> {
        let mode = request.mode();
        let payload = request.into_payload().map_err(|e| {
            log::warn!("Rejected {} request: {}", mode, e);
            e
        })?;

        let url = self.config.url(payload.endpoint);
        log::info!("Dispatching {} analysis to {}", mode, url);

        let raw = self.transport.send(&url, payload.body).await.map_err(|e| {
            log::error!("Transport failure for {}: {}", url, e);
            e
        })?;

        let result = interpret_response(mode, raw)?;
        log::info!(
            "Received verdict \"{}\" ({}%) for {} analysis",
            result.prediction,
            result.confidence,
            mode
        );
        Ok(result)
    }
}

/// Tracks the single outstanding request. Clearing or switching mode
/// supersedes it, and its outcome is then dropped on arrival.
#[derive(Debug, Default)]
pub struct InFlight {
    generation: u64,
    pending: bool,
}

impl InFlight {
    /// Starts a request and returns its ticket, or `None` while one is pending.
    pub fn begin(&mut self) -> Option<u64> {
        if self.pending {
            return None;
        }
        self.generation = self.generation.wrapping_add(1);
        self.pending = true;
        Some(self.generation)
    }

    /// Abandons the pending request, if any.
    pub fn supersede(&mut self) {
        if self.pending {
            self.generation = self.generation.wrapping_add(1);
            self.pending = false;
        }
    }

    /// True when `ticket` is still the current request; clears the pending flag.
    pub fn finish(&mut self, ticket: u64) -> bool {
        if !self.pending || ticket != self.generation {
            return false;
        }
        self.pending = false;
        true
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

/// Maps a raw exchange to a result or one of the failure kinds.
pub fn interpret_response(
    mode: AnalysisMode,
    raw: RawResponse,
) -> Result<AnalysisResult, DispatchError> {
    if !raw.ok() {
        log::error!("Server returned status {}: {}", raw.status, raw.body);
        return Err(TransportError::Status(raw.status).into());
    }

    let response = AnalysisResponse::parse(&raw.body).map_err(TransportError::from)?;

    if let Some(error) = response.error_message() {
        log::warn!("API reported an error: {}", error);
        return Err(DispatchError::Api(error.to_string()));
    }
    if response.is_invalid() {
        let message = response
            .message
            .clone()
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| "Invalid input.".to_string());
        log::warn!("API rejected input: {}", message);
        return Err(DispatchError::Api(message));
    }

    Ok(response.into_result(mode))
}

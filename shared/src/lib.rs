//! Client core for the content-verification UI: request validation and
//! dispatch, response decoding, and the verdict-to-card mapping.

pub mod config;
pub mod dispatch;
pub mod error;
pub mod mode;
pub mod present;
pub mod request;
pub mod response;
pub mod style;

pub use config::ClientConfig;
pub use dispatch::{Dispatcher, InFlight, RawResponse, Transport, interpret_response};
pub use error::{DispatchError, TransportError, ValidationError};
pub use mode::{AnalysisMode, ContentType, MediaKind};
pub use present::{RenderedView, present, present_error, present_outcome};
pub use request::{AnalysisRequest, Endpoint, MultipartForm, Payload, RequestBody};
pub use response::{AnalysisDetails, AnalysisResponse, AnalysisResult, DetailedReason};
pub use style::{PresentationStyle, Verdict};

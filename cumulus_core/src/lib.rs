mod client;
mod credentials;
mod envelope;
pub mod error;
mod pagination;
mod query;
mod request;
mod secret;
pub mod transport;

pub mod prelude {
    pub use crate::client::{Client, ClientBuilder, BASE_URL, PARALLEL_COUNT};
    pub use crate::credentials::Credentials;
    pub use crate::envelope::{Envelope, InvalidResponseCode, ResponseInfo, ResultInfo};
    pub use crate::error::Error;
    pub use crate::pagination::{PageDirection, PageParams};
    pub use crate::query::{append_parameter, append_parameters, QueryMap};
    pub use crate::request::PendingRequest;
    pub use crate::secret::SecretString;
    pub use crate::transport::{ReqwestTransport, Transport, TransportConfig};
}

pub use client::{Client, ClientBuilder, BASE_URL, PARALLEL_COUNT};
pub use credentials::Credentials;
pub use envelope::{Envelope, InvalidResponseCode, ResponseInfo, ResultInfo, MINIMUM_RESPONSE_CODE};
pub use error::Error;
pub use pagination::{PageDirection, PageParams};
pub use query::{append_parameter, append_parameters, QueryMap};
pub use request::PendingRequest;
pub use secret::SecretString;
pub use transport::{ReqwestTransport, Transport, TransportConfig};

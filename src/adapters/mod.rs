// Adapters layer: concrete implementations of the domain ports.

pub mod credentials;
pub mod http;

pub use credentials::FileCredentialSource;
pub use http::WhoisXmlClient;

pub mod search;

pub use crate::domain::model::{PreviewOutcome, SearchQuery, SearchResult};
pub use crate::domain::ports::{CredentialSource, LookupClient, SearchObserver};
pub use crate::utils::error::Result;

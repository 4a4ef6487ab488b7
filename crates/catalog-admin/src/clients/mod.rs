//! Typed wrappers around `ResourceClient`, handed to other actors as dependencies.

pub mod agreement_client;
pub mod conference_client;
pub mod series_client;

pub use agreement_client::AgreementClient;
pub use conference_client::ConferenceClient;
pub use series_client::SeriesClient;

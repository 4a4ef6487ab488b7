//! Administration surfaces composed from the generic `ResourceController`.

pub mod audiobook;
pub mod owner;

pub use audiobook::AudiobookController;
pub use owner::OwnerController;

//! Client side of the parc API: a transport, a generic data service on top
//! of it, and the typed attraction façade the components use.
pub mod attraction_service;
pub mod data_service;
pub mod transport;

pub use attraction_service::AttractionService;
pub use data_service::DataService;
pub use transport::{GlooTransport, HttpTransport};

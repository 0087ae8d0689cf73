pub mod link_service;
pub mod resolution_service;

pub use link_service::{CreateLinkRequest, LinkService};
pub use resolution_service::ResolutionService;

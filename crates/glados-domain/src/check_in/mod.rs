mod domain_service;
mod service;
mod value_objects;


pub use domain_service::CheckInDomainService;
pub use service::CheckInService;
pub use value_objects::{CheckInOutcome, StatusOutcome};

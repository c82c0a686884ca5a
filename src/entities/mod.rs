mod driver;
mod journey;
mod quote;
mod route;
mod surge;

pub use driver::DriverCandidate;
pub use journey::Journey;
pub use quote::Quote;
pub use route::{RouteSegment, RouteSummary};
pub use surge::SurgeContext;

pub mod dispatch_report;
pub mod route_report;

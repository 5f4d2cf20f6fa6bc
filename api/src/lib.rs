//! HTTP surface for MailProbe: the verification dispatch endpoint,
//! health and API documentation routes.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod telemetry;

pub use app::create_app;
pub use routes::verification::AppState;

pub mod auth;

pub mod fallback;

pub use auth::configure_auth_routes;
pub use fallback::configure_fallback_routes;

pub mod facebook_auth_service;
pub mod google_auth_service;
pub mod session_service;

pub use facebook_auth_service::FacebookAuthService;
pub use google_auth_service::GoogleAuthService;
pub use session_service::SessionService;

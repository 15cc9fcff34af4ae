pub mod session_inner;
pub mod session_middleware;

pub use session_middleware::SessionMiddleware;

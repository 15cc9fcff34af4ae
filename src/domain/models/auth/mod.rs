pub mod session_user;

pub use session_user::{OptionalSession, SessionUser};

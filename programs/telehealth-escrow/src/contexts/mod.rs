pub mod start_session;
pub use start_session::*;
pub mod complete_session;
pub use complete_session::*;
pub mod cancel_session;
pub use cancel_session::*;
pub mod close_session;
pub use close_session::*;

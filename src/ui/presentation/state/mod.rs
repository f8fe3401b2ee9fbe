pub mod query_state;
pub mod session_state;

pub use query_state::{QueryCache, QueryEntry, QueryKey};
pub use session_state::SessionState;

pub mod common;
pub mod detail_modal;
pub mod pagination;

pub use common::{Spinner, POKEBALL_ICON};
pub use detail_modal::DetailModal;
pub use pagination::Pagination;

//! View controllers: each owns the state behind one screen and talks to the
//! API through [`crate::CustomerApi`] only. Controllers never depend on each
//! other; routing and rendering are external collaborators.

pub mod create;
pub mod detail;
pub mod list;
pub mod stats;

pub use create::{AddCustomer, FieldErrorSet};
pub use detail::{CustomerDetail, Navigator};
pub use list::{CustomerList, Filter, PAGE_SIZES};
pub use stats::Statistics;

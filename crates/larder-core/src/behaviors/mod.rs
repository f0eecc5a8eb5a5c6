//! Small stateless page behaviors that sit beside the selection dialog.

pub mod confirm_delete;
pub mod list_search;
pub mod toggler;
pub mod worker;

pub use confirm_delete::{Confirm, DeleteGuard, Submission};
pub use list_search::{SearchItem, SearchList};
pub use toggler::Toggler;
pub use worker::{NoWorkers, Registration, WorkerRegistrar, register_update_worker};

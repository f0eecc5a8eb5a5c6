pub mod behaviors;
pub mod catalog;
pub mod config;
pub mod dialog;
pub mod error;
pub mod filter;
pub mod models;
pub mod page;
pub mod selection;

pub use config::{AppConfig, CatalogConfig, DialogConfig, WorkerConfig};
pub use error::{ExitCode, LarderError, Result};
pub use models::*;

pub use catalog::Catalog;
pub use dialog::{DialogEvent, DialogKey, DialogView, Direction, EventOutcome, OptionRow, SelectDialog};
pub use filter::{FilterPass, normalize_query};
pub use page::{ADD_CONSUMPTION_FORM, Elements, HostPage, PageElement};
pub use selection::{HostField, Selection, SelectionTarget};

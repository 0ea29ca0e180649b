pub mod dashboard;
pub mod query;
pub mod store;

pub use crate::domain::model::{LaunchRecord, Outcome, PayloadRange, Selection, SiteFilter};
pub use crate::domain::ports::{ConfigProvider, ProportionRenderer, ScatterRenderer};
pub use crate::utils::error::Result;

pub mod catalog;
pub mod config;
pub mod counter;
pub mod env;
pub mod error;
pub mod icon;
pub mod scroll;

pub use catalog::{CatalogEntry, CategoryGroup};
pub use config::{AppConfig, EasingType, ScrollConfig};
pub use counter::Counter;
pub use env::{Environment, Scheduler, Viewport};
pub use error::{Error, Result};
pub use icon::IconId;
pub use scroll::{ObserverHandle, ScrollObserver, ScrollState, ScrollToTop, SmoothScroller};

//! Scroll-to-top controller
//!
//! Observes the viewport's scroll offset, derives a throttled visibility
//! signal from a threshold, and animates the viewport back to the top.
//!
//! # Architecture
//!
//! ## L4 Atomic Layer
//! - `easing` - Pure easing functions (quad, cubic, quintic, exponential)
//! - `timing` - Time calculation utilities (progress, interpolation)
//! - `throttle` - Leading + trailing edge rate limiter
//!
//! ## L3 Molecular Layer
//! - `observer` - Scroll listener routed through a throttle
//! - `animation` - Smooth scroll animator combining atoms
//!
//! ## L2 Organism Layer
//! - `controller` - Observer and animator mounted together
//!
//! # Usage
//!
//! ```ignore
//! use scrolltop_core::{ScrollConfig, ScrollToTop};
//!
//! let button = ScrollToTop::mount(Some(&env), &ScrollConfig::default());
//!
//! // In the host loop: pump timers, scroll events and frames, then draw
//! if button.is_visible() {
//!     draw_button(button.label());
//! }
//!
//! // On activation
//! button.scroll_to_top();
//! ```

// L4 Atomic Layer
pub mod easing;
pub mod throttle;
pub mod timing;

// L3 Molecular Layer
pub mod animation;
pub mod observer;

// L2 Organism Layer
pub mod controller;

// Re-exports for convenient access
pub use animation::{AnimationRun, SmoothScroller};
pub use controller::ScrollToTop;
pub use easing::{EasingType, EasingTypeExt};
pub use observer::{ObserverHandle, ScrollObserver, ScrollState};
pub use throttle::Throttle;

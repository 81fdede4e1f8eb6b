pub mod home;
mod counter;
mod popup;
mod status_bar;
mod top_button;

pub use counter::CounterWidget;
pub use home::HomeWidget;
pub use popup::PopupWidget;
pub use status_bar::StatusBarWidget;
pub use top_button::TopButtonWidget;

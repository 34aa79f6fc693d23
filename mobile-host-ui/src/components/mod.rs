pub mod chrome;
pub mod connection_indicator;
pub mod control_bar;
pub mod host_menu;
pub mod meeting_info;
pub mod mirror;
pub mod self_view;
pub mod status_indicators;

pub use chrome::MobileHostChrome;
pub use self_view::SelfView;

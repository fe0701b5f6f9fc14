pub mod current_panel;
pub mod dashboard;
pub mod error_banner;
pub mod forecast_panel;
pub mod header;
pub mod help_bar;
pub mod search_bar;

pub use skycast_dispatch::Component;

pub use current_panel::{CurrentPanel, CurrentPanelProps};
pub use dashboard::{Dashboard, DashboardProps};
pub use error_banner::{ErrorBanner, ErrorBannerProps};
pub use forecast_panel::{ForecastPanel, ForecastPanelProps};
pub use header::{Header, HeaderProps};
pub use help_bar::{HelpBar, HelpBarProps};
pub use search_bar::{SearchBar, SearchBarProps};

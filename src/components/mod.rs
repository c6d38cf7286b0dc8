pub mod help_bar;
pub mod search_bar;
pub mod weather_card;
pub mod weather_panel;

// Re-export the core Component trait
pub use crate::dispatch::Component;

pub use help_bar::{HelpBar, HelpBarProps};
pub use search_bar::{SearchBar, SearchBarProps};
pub use weather_card::{WeatherCard, WeatherCardProps};
pub use weather_panel::{WeatherPanel, WeatherPanelProps, ERROR_ICON, LOCATION_ICON, SPINNERS};

mod nav_bar;
mod page_view;
mod quote_card;
mod status_bar;
mod ticker;

pub use nav_bar::NavBarWidget;
pub use page_view::PageViewWidget;
pub use quote_card::QuoteCardWidget;
pub use status_bar::StatusBarWidget;
pub use ticker::TickerWidget;

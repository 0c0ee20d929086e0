pub mod error_banner;
pub mod filter_bar;
pub mod header;
pub mod record_modal;
pub mod sales;

pub use error_banner::ErrorBanner;
pub use filter_bar::FilterBar;
pub use header::Header;
pub use record_modal::RecordModal;
pub use sales::SalesViewContainer;

//! Data and view logic of the sales dashboard.
//!
//! Nothing in this crate touches the DOM or the network, so it builds and
//! tests natively. The wasm frontend owns rendering and HTTP.

pub mod aggregate;
pub mod charts;
pub mod config;
pub mod dashboard;
pub mod filter;
pub mod form;
pub mod format;
pub mod gateway;
pub mod record;
pub mod table;

pub use aggregate::{aggregate, GroupTotal, MonthOrder, UNKNOWN_GROUP};
pub use charts::{ChartKind, ChartSpec, ChartStyle, Rgba};
pub use config::DashboardConfig;
pub use dashboard::{DashboardState, LoadStatus, LoadTicket, SubmitError};
pub use filter::apply_filters;
pub use form::{FormField, ModalState, RecordForm};
pub use gateway::{GatewayError, WriteAction, WriteRequest};
pub use record::{LoadedRecord, NumericCell, RecordId, SalesRecord};
pub use table::{TableBody, TableRow, TABLE_COLUMNS};

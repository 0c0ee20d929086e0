pub mod sales_chart;
pub mod sales_table;
pub mod sales_view_container;

pub use sales_chart::SalesChart;
pub use sales_table::SalesTable;
pub use sales_view_container::SalesViewContainer;

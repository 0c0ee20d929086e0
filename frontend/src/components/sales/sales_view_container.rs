use shared::{ChartSpec, RecordId, TableBody};
use yew::prelude::*;

use super::sales_chart::SalesChart;
use super::sales_table::SalesTable;

#[derive(Properties, PartialEq)]
pub struct SalesViewContainerProps {
    pub charts: Vec<ChartSpec>,
    pub table: TableBody,
    pub loading: bool,
    pub on_edit: Callback<RecordId>,
    pub on_delete: Callback<RecordId>,
}

/// Chart grid above the record table. Both follow the same visible records.
#[function_component(SalesViewContainer)]
pub fn sales_view_container(props: &SalesViewContainerProps) -> Html {
    crate::services::logging::Logger::debug_with_component(
        "SalesViewContainer",
        &format!("rendering {} rows", props.table.row_count()),
    );

    html! {
        <div class="sales-view-container">
            <section class="charts-grid">
                {for props.charts.iter().map(|spec| {
                    html! {
                        <SalesChart
                            key={spec.kind.canvas_id()}
                            spec={spec.clone()}
                            loading={props.loading}
                        />
                    }
                })}
            </section>

            <SalesTable
                body={props.table.clone()}
                loading={props.loading}
                on_edit={props.on_edit.clone()}
                on_delete={props.on_delete.clone()}
            />
        </div>
    }
}

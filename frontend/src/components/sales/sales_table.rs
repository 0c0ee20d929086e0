use shared::{RecordId, TableBody, TABLE_COLUMNS};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SalesTableProps {
    pub body: TableBody,
    pub loading: bool,
    pub on_edit: Callback<RecordId>,
    pub on_delete: Callback<RecordId>,
}

const LOADING_NOTICE: &str = "Loading data...";

/// A load in flight replaces the empty-data notice.
fn placeholder_notice(notice: &'static str, loading: bool) -> &'static str {
    if loading {
        LOADING_NOTICE
    } else {
        notice
    }
}

#[function_component(SalesTable)]
pub fn sales_table(props: &SalesTableProps) -> Html {
    let rows = match &props.body {
        TableBody::Placeholder { colspan, notice } => {
            let notice = placeholder_notice(*notice, props.loading);
            html! {
                <tr>
                    <td colspan={colspan.to_string()} class="no-data">{notice}</td>
                </tr>
            }
        }
        TableBody::Rows(rows) => html! {
            <>{for rows.iter().map(|row| {
                let on_edit = {
                    let on_edit = props.on_edit.clone();
                    let id = row.id;
                    Callback::from(move |_: MouseEvent| on_edit.emit(id))
                };
                let on_delete = {
                    let on_delete = props.on_delete.clone();
                    let id = row.id;
                    Callback::from(move |_: MouseEvent| on_delete.emit(id))
                };

                html! {
                    <tr key={row.id.to_string()} data-position={row.position.to_string()}>
                        {for row.cells.iter().map(|cell| html! { <td>{cell}</td> })}
                        <td class="actions">
                            <button class="btn-action btn-edit" onclick={on_edit}>{"Edit"}</button>
                            <button class="btn-action btn-delete" onclick={on_delete}>
                                {"Delete"}
                            </button>
                        </td>
                    </tr>
                }
            })}</>
        },
    };

    html! {
        <section class="table-section">
            <h2>{"Sales Records"}</h2>
            <div class="table-container">
                <table id="dataTable" class="data-table">
                    <thead>
                        <tr>
                            {for TABLE_COLUMNS.iter().map(|column| html! { <th>{*column}</th> })}
                        </tr>
                    </thead>
                    <tbody id="tableBody">
                        {rows}
                    </tbody>
                </table>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::table::NO_DATA_NOTICE;

    #[test]
    fn test_placeholder_shows_loading_while_fetching() {
        assert_eq!(placeholder_notice(NO_DATA_NOTICE, true), LOADING_NOTICE);
        assert_eq!(placeholder_notice(NO_DATA_NOTICE, false), "No data found");
    }
}

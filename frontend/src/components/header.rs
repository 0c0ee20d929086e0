use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub loading: bool,
    pub total_records: usize,
    pub visible_records: usize,
    pub on_refresh: Callback<()>,
    pub on_add: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let on_refresh = {
        let on_refresh = props.on_refresh.clone();
        Callback::from(move |_: MouseEvent| on_refresh.emit(()))
    };

    let on_add = {
        let on_add = props.on_add.clone();
        Callback::from(move |_: MouseEvent| on_add.emit(()))
    };

    html! {
        <header class="header">
            <div class="container">
                <h1>{"📊 Sales Dashboard"}</h1>
                <div class="header-right">
                    <span class="record-count">
                        {if props.visible_records == props.total_records {
                            format!("{} records", props.total_records)
                        } else {
                            format!("{} of {} records", props.visible_records, props.total_records)
                        }}
                    </span>
                    <button
                        id="refreshBtn"
                        class="btn btn-secondary"
                        onclick={on_refresh}
                        disabled={props.loading}
                    >
                        {if props.loading { "Loading..." } else { "🔄 Refresh" }}
                    </button>
                    <button id="addRecordBtn" class="btn btn-primary" onclick={on_add}>
                        {"➕ Add Record"}
                    </button>
                </div>
            </div>
        </header>
    }
}

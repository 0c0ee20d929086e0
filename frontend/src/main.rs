use shared::DashboardConfig;
use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::{ErrorBanner, FilterBar, Header, RecordModal, SalesViewContainer};
use hooks::use_dashboard;
use services::{ApiClient, Logger};

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| DashboardConfig::from_build_env());
    let api_client = use_memo((), {
        let config = config.clone();
        move |_| ApiClient::from_config(&config)
    });

    let dashboard = use_dashboard(&api_client, &config);
    let view = dashboard.view;
    let actions = dashboard.actions;

    html! {
        <div class="app">
            <Header
                loading={view.loading}
                total_records={view.total_records}
                visible_records={view.visible_records}
                on_refresh={actions.refresh.clone()}
                on_add={actions.open_add.clone()}
            />

            <main class="main">
                <div class="container">
                    <ErrorBanner message={view.banner.clone()} />

                    <FilterBar
                        search={view.search.clone()}
                        category={view.category.clone()}
                        category_options={view.category_options.clone()}
                        on_search={actions.on_search.clone()}
                        on_category={actions.on_category.clone()}
                    />

                    <SalesViewContainer
                        charts={view.charts.clone()}
                        table={view.table.clone()}
                        loading={view.loading}
                        on_edit={actions.open_edit.clone()}
                        on_delete={actions.delete.clone()}
                    />
                </div>
            </main>

            <RecordModal
                modal={view.modal}
                form={view.form.clone()}
                submitting={view.submitting}
                on_field={actions.on_field.clone()}
                on_submit={actions.submit.clone()}
                on_close={actions.close_modal.clone()}
            />
        </div>
    }
}

fn main() {
    Logger::init();
    Logger::info_with_component("App", "starting sales dashboard");
    yew::Renderer::<App>::new().render();
}

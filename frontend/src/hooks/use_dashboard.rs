use std::cell::RefCell;
use std::rc::Rc;

use gloo::dialogs::{alert, confirm};
use shared::dashboard::{DELETE_CONFIRM, DELETE_UNSUPPORTED};
use shared::{
    ChartSpec, DashboardConfig, DashboardState, FormField, ModalState, RecordForm, RecordId,
    SubmitError, TableBody,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::services::{ApiClient, Logger};

/// Dashboard state as seen by one render.
#[derive(Clone, PartialEq)]
pub struct DashboardView {
    pub table: TableBody,
    pub charts: Vec<ChartSpec>,
    pub loading: bool,
    pub banner: Option<String>,
    pub search: String,
    pub category: String,
    pub category_options: Vec<String>,
    pub total_records: usize,
    pub visible_records: usize,

    // Record modal
    pub modal: ModalState,
    pub form: RecordForm,
    pub submitting: bool,
}

pub struct UseDashboardResult {
    pub view: DashboardView,
    pub actions: UseDashboardActions,
}

#[derive(Clone, PartialEq)]
pub struct UseDashboardActions {
    pub refresh: Callback<()>,
    pub open_add: Callback<()>,
    pub open_edit: Callback<RecordId>,
    pub delete: Callback<RecordId>,
    pub close_modal: Callback<()>,
    pub submit: Callback<()>,
    pub on_search: Callback<InputEvent>,
    pub on_category: Callback<Event>,
    pub on_field: Callback<(FormField, String)>,
}

type SharedState = Rc<RefCell<DashboardState>>;

/// Runs one load against the gateway. Responses of superseded loads are
/// dropped by the state.
async fn load(api_client: &ApiClient, state: &SharedState, redraw: &UseForceUpdateHandle) {
    let ticket = state.borrow_mut().begin_load();
    redraw.force_update();

    let result = api_client.fetch_all().await;
    if let Err(e) = &result {
        Logger::error_with_component("Dashboard", &format!("Error loading data: {}", e));
    }

    let applied = state.borrow_mut().finish_load(ticket, result);
    if !applied {
        return;
    }
    redraw.force_update();

    let saved = state.borrow_mut().take_completed_save();
    if let Some(action) = saved {
        alert(&format!("Record {} successfully!", action.past_tense()));
    }
}

#[hook]
pub fn use_dashboard(api_client: &ApiClient, config: &DashboardConfig) -> UseDashboardResult {
    let state = {
        let config = config.clone();
        use_mut_ref(move || DashboardState::new(config))
    };
    let redraw = use_force_update();

    let refresh = {
        let api_client = api_client.clone();
        let state = state.clone();
        let redraw = redraw.clone();

        use_callback((), move |_, _| {
            let api_client = api_client.clone();
            let state = state.clone();
            let redraw = redraw.clone();

            spawn_local(async move {
                load(&api_client, &state, &redraw).await;
            });
        })
    };

    let open_add = {
        let state = state.clone();
        let redraw = redraw.clone();
        use_callback((), move |_, _| {
            state.borrow_mut().open_add();
            redraw.force_update();
        })
    };

    let open_edit = {
        let state = state.clone();
        let redraw = redraw.clone();
        use_callback((), move |id: RecordId, _| {
            let opened = state.borrow_mut().open_edit(id);
            if opened {
                redraw.force_update();
            } else {
                Logger::warn_with_component(
                    "Dashboard",
                    &format!("edit requested for unknown record {}", id),
                );
            }
        })
    };

    let delete = {
        let state = state.clone();
        use_callback((), move |id: RecordId, _| {
            let known = state.borrow().record(id).is_some();
            if known && confirm(DELETE_CONFIRM) {
                Logger::info_with_component(
                    "Dashboard",
                    &format!("delete requested for record {}", id),
                );
                alert(DELETE_UNSUPPORTED);
            }
        })
    };

    let close_modal = {
        let state = state.clone();
        let redraw = redraw.clone();
        use_callback((), move |_, _| {
            state.borrow_mut().close_modal();
            redraw.force_update();
        })
    };

    let submit = {
        let api_client = api_client.clone();
        let state = state.clone();
        let redraw = redraw.clone();

        use_callback((), move |_, _| {
            let request = state.borrow_mut().begin_submit();
            let request = match request {
                Ok(request) => request,
                Err(SubmitError::InFlight) => {
                    Logger::debug_with_component(
                        "RecordModal",
                        "submit ignored, one is already in flight",
                    );
                    return;
                }
                Err(e) => {
                    alert(&e.to_string());
                    return;
                }
            };
            redraw.force_update();

            let api_client = api_client.clone();
            let state = state.clone();
            let redraw = redraw.clone();

            spawn_local(async move {
                let action = request.action;
                let result = api_client.submit(&request).await;

                let reload = state.borrow_mut().finish_submit(&result);
                redraw.force_update();

                if let Err(e) = &result {
                    Logger::error_with_component(
                        "RecordModal",
                        &format!("Error saving record: {}", e),
                    );
                    alert(&format!("Error {} record: {}", action.progressive(), e));
                } else if reload {
                    load(&api_client, &state, &redraw).await;
                }
            });
        })
    };

    let on_search = {
        let state = state.clone();
        let redraw = redraw.clone();
        use_callback((), move |e: InputEvent, _| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.borrow_mut().set_search(input.value());
            redraw.force_update();
        })
    };

    let on_category = {
        let state = state.clone();
        let redraw = redraw.clone();
        use_callback((), move |e: Event, _| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            state.borrow_mut().set_category(select.value());
            redraw.force_update();
        })
    };

    let on_field = {
        let state = state.clone();
        let redraw = redraw.clone();
        use_callback((), move |(field, value): (FormField, String), _| {
            state.borrow_mut().set_field(field, value);
            redraw.force_update();
        })
    };

    // Initial load
    use_effect_with((), {
        let refresh = refresh.clone();
        move |_| {
            refresh.emit(());
            || ()
        }
    });

    let view = {
        let state = state.borrow();
        DashboardView {
            table: state.table(),
            charts: state.charts(),
            loading: state.is_loading(),
            banner: state.banner(),
            search: state.search().to_string(),
            category: state.category().to_string(),
            category_options: state.category_options(),
            total_records: state.records().len(),
            visible_records: state.visible().len(),
            modal: state.modal(),
            form: state.form().clone(),
            submitting: state.is_submitting(),
        }
    };

    let actions = UseDashboardActions {
        refresh,
        open_add,
        open_edit,
        delete,
        close_modal,
        submit,
        on_search,
        on_category,
        on_field,
    };

    UseDashboardResult { view, actions }
}

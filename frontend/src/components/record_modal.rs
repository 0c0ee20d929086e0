use shared::{FormField, ModalState, RecordForm};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RecordModalProps {
    pub modal: ModalState,
    pub form: RecordForm,
    pub submitting: bool,
    pub on_field: Callback<(FormField, String)>,
    pub on_submit: Callback<()>,
    pub on_close: Callback<()>,
}

fn input_type(field: FormField) -> &'static str {
    if field.is_numeric() {
        "number"
    } else {
        "text"
    }
}

#[function_component(RecordModal)]
pub fn record_modal(props: &RecordModalProps) -> Html {
    let on_submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            on_close.emit(());
        })
    };

    if !props.modal.is_open() {
        return html! {};
    }

    html! {
        <div id="recordModal" class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal" onclick={on_modal_click}>
                <div class="modal-content">
                    <h3 id="modalTitle" class="modal-title">{props.modal.title()}</h3>

                    <form id="recordForm" class="record-form" onsubmit={on_submit}>
                        {for FormField::ALL.iter().map(|field| {
                            let field = *field;
                            let oninput = {
                                let on_field = props.on_field.clone();
                                Callback::from(move |e: InputEvent| {
                                    let input: HtmlInputElement = e.target_unchecked_into();
                                    on_field.emit((field, input.value()));
                                })
                            };

                            html! {
                                <div class="form-group">
                                    <label for={field.input_id()}>{field.label()}</label>
                                    <input
                                        id={field.input_id()}
                                        type={input_type(field)}
                                        step={field.is_numeric().then_some("any")}
                                        class="form-input"
                                        value={props.form.get(field).to_string()}
                                        oninput={oninput}
                                        disabled={props.submitting}
                                    />
                                </div>
                            }
                        })}

                        <div class="modal-buttons">
                            <button
                                type="submit"
                                class="btn btn-primary"
                                disabled={props.submitting}
                            >
                                {if props.submitting { "Saving..." } else { "Save" }}
                            </button>
                            <button
                                type="button"
                                class="btn btn-secondary"
                                onclick={on_cancel}
                            >
                                {"Cancel"}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_fields_use_number_inputs() {
        assert_eq!(input_type(FormField::Items), "number");
        assert_eq!(input_type(FormField::Value), "number");
        assert_eq!(input_type(FormField::SalesRep), "text");
    }
}

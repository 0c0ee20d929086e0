use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FilterBarProps {
    pub search: String,
    pub category: String,
    pub category_options: Vec<String>,
    pub on_search: Callback<InputEvent>,
    pub on_category: Callback<Event>,
}

#[function_component(FilterBar)]
pub fn filter_bar(props: &FilterBarProps) -> Html {
    html! {
        <section class="filter-bar">
            <input
                id="searchInput"
                type="search"
                class="search-input"
                placeholder="Search records..."
                value={props.search.clone()}
                oninput={props.on_search.clone()}
            />
            <select id="filterSelect" class="filter-select" onchange={props.on_category.clone()}>
                <option value="" selected={props.category.is_empty()}>{"All Categories"}</option>
                {for props.category_options.iter().map(|option| {
                    html! {
                        <option value={option.clone()} selected={*option == props.category}>
                            {option}
                        </option>
                    }
                })}
            </select>
        </section>
    }
}

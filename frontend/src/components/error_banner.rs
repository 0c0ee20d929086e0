use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub message: Option<String>,
}

/// Inline banner shown after a failed load. Stays until a load succeeds.
#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    match &props.message {
        Some(message) => html! {
            <div id="errorMessage" class="error-message" role="alert">
                <p>{message}</p>
            </div>
        },
        None => html! {},
    }
}

use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[derive(Properties, PartialEq)]
pub struct ErrorCardProps {
    pub title: AttrValue,
    pub description: AttrValue,
}

/// Shared failure screen: quiz generation errors and invalid result
/// parameters both land here, with a way back to the start.
#[function_component(ErrorCard)]
pub fn error_card(props: &ErrorCardProps) -> Html {
    html! {
        <div class="error-card">
            <div class="error-card-icon">{"!"}</div>
            <h2 class="error-card-title">{&props.title}</h2>
            <p class="error-card-description">{&props.description}</p>
            <Link<Route> to={Route::Home} classes="error-card-home-button">
                {"Voltar ao Início"}
            </Link<Route>>
        </div>
    }
}

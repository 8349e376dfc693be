use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[derive(Properties, PartialEq)]
pub struct ResultsDisplayProps {
    pub score: f64,
    pub advice: AttrValue,
    pub correct: u32,
    pub total: u32,
}

#[function_component(ResultsDisplay)]
pub fn results_display(props: &ResultsDisplayProps) -> Html {
    let correct_pct = props.correct as f64 / props.total as f64 * 100.0;

    html! {
        <div class="results-card">
            <div class="results-award">{"🏆"}</div>
            <h2 class="results-title">{"Quiz Finalizado!"}</h2>
            <p class="results-subtitle">{"Veja seu desempenho abaixo."}</p>
            <p class="results-score-label">{"Sua pontuação final"}</p>
            <p class="results-score">{format!("{:.0}%", props.score)}</p>
            <p class="results-count">
                {format!("Você acertou {} de {} perguntas.", props.correct, props.total)}
            </p>
            <div class="results-bar">
                <div class="results-bar-correct" style={format!("width: {}%", correct_pct)}></div>
                <div class="results-bar-incorrect" style={format!("width: {}%", 100.0 - correct_pct)}></div>
            </div>
            <div class="results-advice">
                <h3>{"Conselho Personalizado"}</h3>
                <p>{&props.advice}</p>
            </div>
            <Link<Route> to={Route::Home} classes="results-retry-button">
                {"Tentar Novamente"}
            </Link<Route>>
        </div>
    }
}

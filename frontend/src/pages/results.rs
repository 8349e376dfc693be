use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::error_card::ErrorCard;
use crate::components::results_display::ResultsDisplay;
use crate::config;
use crate::quiz::scoring::{fallback_advice, percentage};

#[derive(Serialize)]
struct ScoreRequest {
    #[serde(rename = "correctAnswers")]
    correct_answers: u32,
    #[serde(rename = "totalQuestions")]
    total_questions: u32,
}

#[derive(Deserialize)]
struct ScoreResponse {
    score: f64,
    advice: String,
}

/// Query parameters of the results route. Both must parse as numbers
/// and the total must be non-zero, otherwise the parameters are
/// invalid and no score exists.
pub fn parse_results_query(query: &str) -> Option<(u32, u32)> {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut correct = None;
    let mut total = None;
    for pair in query.split('&') {
        match pair.split_once('=') {
            Some(("correct", value)) => correct = value.parse::<u32>().ok(),
            Some(("total", value)) => total = value.parse::<u32>().ok(),
            _ => {}
        }
    }
    match (correct, total) {
        (Some(correct), Some(total)) if total != 0 => Some((correct, total)),
        _ => None,
    }
}

/// Results page: reads the tally from the query string, asks the
/// advice endpoint for commentary and falls back to the canned bands
/// when the call fails.
#[function_component(ResultsPage)]
pub fn results_page() -> Html {
    let location = use_location().unwrap();
    let params = parse_results_query(location.query_str());
    let outcome = use_state(|| None::<(f64, String)>);

    {
        let outcome = outcome.clone();
        use_effect_with_deps(
            move |params: &Option<(u32, u32)>| {
                if let Some((correct, total)) = *params {
                    wasm_bindgen_futures::spawn_local(async move {
                        let body = ScoreRequest {
                            correct_answers: correct,
                            total_questions: total,
                        };
                        let response = Request::post(&format!(
                            "{}/api/quiz/score",
                            config::get_backend_url()
                        ))
                        .json(&body)
                        .unwrap()
                        .send()
                        .await;

                        match response {
                            Ok(response) if response.ok() => {
                                match response.json::<ScoreResponse>().await {
                                    Ok(parsed) => outcome.set(Some((parsed.score, parsed.advice))),
                                    Err(_) => outcome.set(Some(local_fallback(correct, total))),
                                }
                            }
                            _ => outcome.set(Some(local_fallback(correct, total))),
                        }
                    });
                }
                || ()
            },
            params,
        );
    }

    let Some((correct, total)) = params else {
        return html! {
            <main class="results-page">
                <ErrorCard
                    title="Parâmetros Inválidos"
                    description="Os resultados não puderam ser calculados. Por favor, comece o quiz novamente."
                />
            </main>
        };
    };

    html! {
        <main class="results-page">
            {
                match &*outcome {
                    Some((score, advice)) => html! {
                        <ResultsDisplay
                            score={*score}
                            advice={advice.clone()}
                            correct={correct}
                            total={total}
                        />
                    },
                    None => html! {
                        <div class="results-loading">
                            <div class="results-loading-spinner"></div>
                            <p>{"Calculando o seu resultado..."}</p>
                        </div>
                    },
                }
            }
        </main>
    }
}

fn local_fallback(correct: u32, total: u32) -> (f64, String) {
    // params are pre-validated, so total is non-zero here
    let score = percentage(correct, total).unwrap_or(0.0);
    (score, fallback_advice(score).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_query_parses() {
        assert_eq!(parse_results_query("?correct=8&total=10"), Some((8, 10)));
        assert_eq!(parse_results_query("correct=0&total=3"), Some((0, 3)));
    }

    #[test]
    fn zero_total_is_rejected() {
        assert_eq!(parse_results_query("?correct=0&total=0"), None);
    }

    #[test]
    fn missing_or_garbage_params_are_rejected() {
        assert_eq!(parse_results_query(""), None);
        assert_eq!(parse_results_query("?correct=8"), None);
        assert_eq!(parse_results_query("?total=10"), None);
        assert_eq!(parse_results_query("?correct=abc&total=10"), None);
        assert_eq!(parse_results_query("?correct=8&total=ten"), None);
        assert_eq!(parse_results_query("?correct=-1&total=10"), None);
    }

    #[test]
    fn unrelated_params_are_ignored() {
        assert_eq!(
            parse_results_query("?utm_source=ad&correct=4&total=10"),
            Some((4, 10))
        );
    }

    #[test]
    fn fallback_uses_the_deterministic_bands() {
        let (score, advice) = local_fallback(8, 10);
        assert_eq!(score, 80.0);
        assert!(advice.starts_with("Parabéns"));
    }
}

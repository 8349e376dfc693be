use gloo_net::http::Request;
use serde::Serialize;
use yew::prelude::*;

use crate::components::error_card::ErrorCard;
use crate::components::quiz_display::QuizDisplay;
use crate::config;
use crate::quiz::funnel::{build_funnel, GeneratedQuiz, QUIZ_QUESTION_COUNT, QUIZ_TOPIC};

#[derive(Serialize)]
struct GenerateQuizRequest {
    topic: String,
    #[serde(rename = "numberOfQuestions")]
    number_of_questions: u32,
}

enum QuizState {
    Loading,
    Ready(GeneratedQuiz),
    Failed,
}

/// Quiz page: asks the backend for the knowledge questions once on
/// mount, then hands the assembled funnel to the sequencer. A failed
/// generation degrades to the error card; there is no retry.
#[function_component(QuizPage)]
pub fn quiz_page() -> Html {
    let state = use_state(|| QuizState::Loading);

    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                wasm_bindgen_futures::spawn_local(async move {
                    let body = GenerateQuizRequest {
                        topic: QUIZ_TOPIC.to_string(),
                        number_of_questions: QUIZ_QUESTION_COUNT,
                    };
                    let result = Request::post(&format!(
                        "{}/api/quiz/generate",
                        config::get_backend_url()
                    ))
                    .json(&body)
                    .unwrap()
                    .send()
                    .await;

                    match result {
                        Ok(response) if response.ok() => {
                            match response.json::<GeneratedQuiz>().await {
                                Ok(quiz) if !quiz.quiz.is_empty() => {
                                    state.set(QuizState::Ready(quiz));
                                }
                                Ok(_) => {
                                    gloo_console::error!("Quiz generation returned no questions");
                                    state.set(QuizState::Failed);
                                }
                                Err(e) => {
                                    gloo_console::error!(format!(
                                        "Failed to parse generated quiz: {}",
                                        e
                                    ));
                                    state.set(QuizState::Failed);
                                }
                            }
                        }
                        Ok(response) => {
                            gloo_console::error!(format!(
                                "Quiz generation failed with status {}",
                                response.status()
                            ));
                            state.set(QuizState::Failed);
                        }
                        Err(e) => {
                            gloo_console::error!(format!("Quiz generation request failed: {}", e));
                            state.set(QuizState::Failed);
                        }
                    }
                });
                || ()
            },
            (),
        );
    }

    html! {
        <main class="quiz-page">
            {
                match &*state {
                    QuizState::Loading => html! {
                        <div class="quiz-loading">
                            <div class="quiz-loading-spinner"></div>
                            <p>{"Preparando as suas perguntas..."}</p>
                        </div>
                    },
                    QuizState::Ready(quiz) => html! {
                        <QuizDisplay steps={build_funnel(quiz)} />
                    },
                    QuizState::Failed => html! {
                        <ErrorCard
                            title="Erro ao Gerar o Quiz"
                            description="Não foi possível carregar as perguntas. Por favor, tente novamente mais tarde."
                        />
                    },
                }
            }
        </main>
    }
}

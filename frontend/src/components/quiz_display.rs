use serde::Serialize;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::bmi_calculator::BmiCalculator;
use crate::quiz::bmi::{bmi, format_bmi, BmiBand};
use crate::quiz::session::QuizSession;
use crate::quiz::steps::{AnswerOption, OptionLayout, Step};
use crate::Route;

#[derive(Serialize)]
struct ResultsQuery {
    correct: usize,
    total: usize,
}

#[derive(Properties, PartialEq)]
pub struct QuizDisplayProps {
    pub steps: Vec<Step>,
}

/// The funnel sequencer: owns the session for one walk through the
/// steps, renders the active screen and drives navigation. Finishing
/// hands the tally to the results route via query parameters; nothing
/// is persisted.
#[function_component(QuizDisplay)]
pub fn quiz_display(props: &QuizDisplayProps) -> Html {
    let navigator = use_navigator().unwrap();
    let session = use_state(|| QuizSession::new(props.steps.clone()));

    let current = session.current_index();
    let progress = current as f64 / session.len() as f64 * 100.0;

    let on_select = {
        let session = session.clone();
        Callback::from(move |label: String| {
            let mut next = (*session).clone();
            next.select(next.current_index(), label);
            session.set(next);
        })
    };

    let on_back = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*session).clone();
            next.retreat();
            session.set(next);
        })
    };

    let on_next = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*session).clone();
            next.advance();
            session.set(next);
        })
    };

    let on_finish = {
        let session = session.clone();
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            let tally = session.finish();
            let _ = navigator.push_with_query(
                &Route::Results,
                &ResultsQuery { correct: tally.correct, total: tally.total },
            );
        })
    };

    let on_height = {
        let session = session.clone();
        Callback::from(move |cm: f64| {
            let mut next = (*session).clone();
            next.set_height(cm);
            session.set(next);
        })
    };

    let on_weight = {
        let session = session.clone();
        Callback::from(move |kg: f64| {
            let mut next = (*session).clone();
            next.set_weight(kg);
            session.set(next);
        })
    };

    let on_video_ended = {
        let session = session.clone();
        Callback::from(move |_: Event| {
            let mut next = (*session).clone();
            next.mark_video_completed();
            session.set(next);
        })
    };

    let step_body = render_step(&session, &on_select, &on_height, &on_weight, &on_video_ended);

    let next_label = match session.current_step() {
        Step::Info(info) => info.continue_label.clone(),
        _ => "Próxima".to_string(),
    };
    let finish_label = match session.current_step() {
        Step::Offer(offer) => offer.cta_label.clone(),
        _ => "Finalizar".to_string(),
    };

    html! {
        <div class="quiz-container">
            <div class="quiz-progress">
                <div class="quiz-progress-bar">
                    <div class="quiz-progress-fill" style={format!("width: {}%", progress)}></div>
                </div>
                <p class="quiz-progress-count">{format!("{} / {}", current + 1, session.len())}</p>
            </div>
            <div class="quiz-card">
                {step_body}
                <div class="quiz-card-footer">
                    <button
                        class="quiz-back-button"
                        onclick={on_back}
                        disabled={current == 0}
                    >
                        {"Anterior"}
                    </button>
                    {
                        if session.is_last() {
                            html! {
                                <button
                                    class="quiz-finish-button"
                                    onclick={on_finish}
                                    disabled={!session.can_advance()}
                                >
                                    {finish_label}
                                </button>
                            }
                        } else {
                            html! {
                                <button
                                    class="quiz-next-button"
                                    onclick={on_next}
                                    disabled={!session.can_advance()}
                                >
                                    {next_label}
                                </button>
                            }
                        }
                    }
                </div>
            </div>
        </div>
    }
}

fn render_step(
    session: &QuizSession,
    on_select: &Callback<String>,
    on_height: &Callback<f64>,
    on_weight: &Callback<f64>,
    on_video_ended: &Callback<Event>,
) -> Html {
    match session.current_step() {
        Step::Question(question) => {
            let selected = session.answer(session.current_index()).to_string();
            let layout_class = match question.layout {
                OptionLayout::List => "quiz-options-list",
                OptionLayout::Grid => "quiz-options-grid",
            };
            html! {
                <>
                    <h2 class="quiz-question">{&question.question}</h2>
                    {
                        if let Some(description) = &question.description {
                            html! { <p class="quiz-question-description">{description}</p> }
                        } else {
                            html! {}
                        }
                    }
                    <div class={layout_class}>
                        {
                            question.options.iter().map(|option| {
                                let label = option.label().to_string();
                                let is_selected = label == selected;
                                let onclick = {
                                    let on_select = on_select.clone();
                                    let label = label.clone();
                                    Callback::from(move |_: MouseEvent| on_select.emit(label.clone()))
                                };
                                html! {
                                    <button
                                        class={classes!("quiz-option", is_selected.then(|| "selected"))}
                                        {onclick}
                                    >
                                        {render_option(option)}
                                    </button>
                                }
                            }).collect::<Html>()
                        }
                    </div>
                </>
            }
        }
        Step::Info(info) => html! {
            <>
                <h2 class="quiz-info-title">{&info.title}</h2>
                {
                    if let Some(image_url) = &info.image_url {
                        html! { <img class="quiz-info-image" src={image_url.clone()} alt={info.title.clone()} /> }
                    } else {
                        html! {}
                    }
                }
                <p class="quiz-info-body">{&info.body}</p>
            </>
        },
        Step::BmiCalculator(calculator) => html! {
            <>
                <h2 class="quiz-bmi-title">{&calculator.title}</h2>
                <p class="quiz-bmi-description">{&calculator.description}</p>
                <BmiCalculator
                    height_cm={session.height_cm()}
                    weight_kg={session.weight_kg()}
                    on_height={on_height.clone()}
                    on_weight={on_weight.clone()}
                />
            </>
        },
        Step::BmiResult(result) => {
            let value = bmi(session.height_cm(), session.weight_kg());
            let band = BmiBand::classify(value);
            html! {
                <>
                    <h2 class="quiz-bmi-title">{&result.title}</h2>
                    <p class="quiz-bmi-value">{format!("IMC: {}", format_bmi(value))}</p>
                    <p class="quiz-bmi-band">{band.label()}</p>
                    <p class="quiz-bmi-message">{band.message()}</p>
                </>
            }
        }
        Step::VideoGate(gate) => html! {
            <>
                <h2 class="quiz-video-title">{&gate.title}</h2>
                <video
                    class="quiz-video"
                    src={gate.video_url.clone()}
                    controls={true}
                    onended={on_video_ended.clone()}
                />
                {
                    if session.video_completed() {
                        html! {}
                    } else {
                        html! { <p class="quiz-video-locked">{&gate.locked_label}</p> }
                    }
                }
            </>
        },
        Step::Offer(offer) => html! {
            <>
                <h2 class="quiz-offer-headline">{&offer.headline}</h2>
                <p class="quiz-offer-body">{&offer.body}</p>
                <a class="quiz-offer-checkout" href={offer.checkout_url.clone()}>
                    {"Quero a receita completa"}
                </a>
                <p class="quiz-offer-hint">{format!("Ou clique em \"{}\" abaixo para ver o seu desempenho.", offer.cta_label)}</p>
            </>
        },
    }
}

fn render_option(option: &AnswerOption) -> Html {
    match option {
        AnswerOption::Plain(label) => html! { <span class="quiz-option-label">{label}</span> },
        AnswerOption::Illustrated { label, image_url } => html! {
            <>
                <img class="quiz-option-image" src={image_url.clone()} alt={label.clone()} />
                <span class="quiz-option-label">{label}</span>
            </>
        },
        AnswerOption::Detailed { label, description } => html! {
            <>
                <span class="quiz-option-label">{label}</span>
                <span class="quiz-option-description">{description}</span>
            </>
        },
    }
}

use serde::{Deserialize, Serialize};

use super::steps::{
    AnswerOption, BmiCalculatorStep, BmiResultStep, InfoStep, OfferStep, OptionLayout,
    QuestionStep, Step, VideoGateStep,
};

/// Wire shape of the quiz-generation endpoint.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GeneratedQuiz {
    pub quiz: Vec<GeneratedQuestion>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GeneratedQuestion {
    pub question: String,
    pub options: Vec<String>,
    #[serde(rename = "correctAnswer")]
    pub correct_answer: String,
}

pub const QUIZ_TOPIC: &str = "Mounjaro de Pobre";
pub const QUIZ_QUESTION_COUNT: u32 = 10;

/// Assembles the full funnel: intro preference question, the generated
/// knowledge questions, then the BMI screens, testimonial, video gate
/// and the offer page.
pub fn build_funnel(generated: &GeneratedQuiz) -> Vec<Step> {
    let mut steps = vec![intro_question(), body_type_question(), routine_question()];
    for question in &generated.quiz {
        steps.push(Step::Question(QuestionStep {
            question: question.question.clone(),
            description: None,
            options: question
                .options
                .iter()
                .cloned()
                .map(AnswerOption::Plain)
                .collect(),
            correct_answer: Some(question.correct_answer.clone()),
            layout: OptionLayout::List,
            intro: false,
        }));
    }
    steps.push(Step::BmiCalculator(BmiCalculatorStep {
        title: "Vamos calcular o seu IMC".to_string(),
        description: "Ajuste a sua altura e o seu peso atuais. Usamos esses dados para personalizar o protocolo.".to_string(),
    }));
    steps.push(Step::BmiResult(BmiResultStep {
        title: "Seu resultado".to_string(),
    }));
    steps.push(testimonial_step());
    steps.push(Step::VideoGate(VideoGateStep {
        title: "Assista até o final para liberar a sua receita".to_string(),
        video_url: "https://videos.mounjarodepobre.com/apresentacao.mp4".to_string(),
        locked_label: "O botão libera quando o vídeo terminar".to_string(),
    }));
    steps.push(Step::Offer(OfferStep {
        headline: "Protocolo Mounjaro de Pobre".to_string(),
        body: "Receita completa da bebida natural, cronograma de 21 dias e acompanhamento. Oferta válida apenas para esta consulta.".to_string(),
        checkout_url: "https://pay.mounjarodepobre.com/checkout".to_string(),
        cta_label: "Ver meu resultado".to_string(),
    }));
    steps
}

fn intro_question() -> Step {
    Step::Question(QuestionStep {
        question: "Quantos quilos você deseja perder?".to_string(),
        description: Some(
            "O Protocolo Mounjaro dos Pobres te ajuda a eliminar gordura de forma acelerada."
                .to_string(),
        ),
        options: vec![
            AnswerOption::Plain("Até 5 kg".to_string()),
            AnswerOption::Plain("De 6 a 10 kg".to_string()),
            AnswerOption::Plain("De 11 a 15 kg".to_string()),
            AnswerOption::Plain("De 16 a 20 kg".to_string()),
            AnswerOption::Plain("Mais de 20 kg".to_string()),
        ],
        correct_answer: None,
        layout: OptionLayout::List,
        intro: true,
    })
}

fn body_type_question() -> Step {
    Step::Question(QuestionStep {
        question: "Como você descreveria o seu corpo hoje?".to_string(),
        description: None,
        options: vec![
            AnswerOption::Illustrated {
                label: "Barriga saliente".to_string(),
                image_url: "https://i.postimg.cc/bodytype-belly.png".to_string(),
            },
            AnswerOption::Illustrated {
                label: "Peso distribuído".to_string(),
                image_url: "https://i.postimg.cc/bodytype-even.png".to_string(),
            },
            AnswerOption::Illustrated {
                label: "Acima do peso em todo o corpo".to_string(),
                image_url: "https://i.postimg.cc/bodytype-full.png".to_string(),
            },
            AnswerOption::Illustrated {
                label: "Quase no peso ideal".to_string(),
                image_url: "https://i.postimg.cc/bodytype-near.png".to_string(),
            },
        ],
        correct_answer: None,
        layout: OptionLayout::Grid,
        intro: true,
    })
}

fn routine_question() -> Step {
    Step::Question(QuestionStep {
        question: "Como é a sua rotina de exercícios?".to_string(),
        description: None,
        options: vec![
            AnswerOption::Detailed {
                label: "Sedentária".to_string(),
                description: "Quase nenhuma atividade física durante a semana".to_string(),
            },
            AnswerOption::Detailed {
                label: "Leve".to_string(),
                description: "Caminhadas ou atividades ocasionais".to_string(),
            },
            AnswerOption::Detailed {
                label: "Ativa".to_string(),
                description: "Exercícios pelo menos três vezes por semana".to_string(),
            },
        ],
        correct_answer: None,
        layout: OptionLayout::List,
        intro: true,
    })
}

fn testimonial_step() -> Step {
    Step::Info(InfoStep {
        title: "Quem seguiu o protocolo".to_string(),
        body: "\"Perdi 14 kg em dois meses sem passar fome e sem academia. A bebida virou parte da minha rotina.\" — Mariana S., 34 anos".to_string(),
        image_url: Some("https://i.postimg.cc/3xYYXWFJ/Screenshot-1.png".to_string()),
        continue_label: "Continuar".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generated(count: usize) -> GeneratedQuiz {
        GeneratedQuiz {
            quiz: (0..count)
                .map(|i| GeneratedQuestion {
                    question: format!("q{}", i),
                    options: vec!["a".into(), "b".into()],
                    correct_answer: "a".into(),
                })
                .collect(),
        }
    }

    #[test]
    fn funnel_scores_exactly_the_generated_questions() {
        let steps = build_funnel(&generated(10));
        let scorable = steps.iter().filter(|s| s.scoring_answer().is_some()).count();
        assert_eq!(scorable, 10);
    }

    #[test]
    fn funnel_opens_with_the_intro_question_and_ends_with_the_offer() {
        let steps = build_funnel(&generated(3));
        assert!(matches!(steps.first(), Some(Step::Question(q)) if q.intro));
        assert!(matches!(steps.last(), Some(Step::Offer(_))));
    }

    #[test]
    fn generated_question_parses_the_wire_shape() {
        let raw = r#"{"quiz":[{"question":"O que é?","options":["x","y"],"correctAnswer":"x"}]}"#;
        let parsed: GeneratedQuiz = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.quiz[0].correct_answer, "x");
    }
}

use openai_api_rs::v1::{api::OpenAIClient, chat_completion, types};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;

// Function to create OpenAI client
pub fn create_openai_client() -> Result<OpenAIClient, Box<dyn std::error::Error>> {
    let api_key = env::var("OPENROUTER_API_KEY")?;

    OpenAIClient::builder()
        .with_endpoint("https://openrouter.ai/api/v1")
        .with_api_key(api_key)
        .build()
        .map_err(|e| e.into())
}

const MODEL: &str = "openai/gpt-4o-mini";

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

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ScoreAdvice {
    pub advice: String,
}

/// Parses and checks the arguments of a `generate_quiz` tool call.
/// Anything structurally off (no questions, empty option lists, a
/// correct answer that is not among the options) counts as a schema
/// violation and is rejected.
pub fn parse_generated_quiz(arguments: &str) -> Result<GeneratedQuiz, String> {
    let quiz: GeneratedQuiz =
        serde_json::from_str(arguments).map_err(|e| format!("malformed quiz output: {}", e))?;
    if quiz.quiz.is_empty() {
        return Err("quiz output contained no questions".to_string());
    }
    for question in &quiz.quiz {
        if question.options.len() < 2 {
            return Err(format!(
                "question '{}' has fewer than two options",
                question.question
            ));
        }
        if !question.options.contains(&question.correct_answer) {
            return Err(format!(
                "correct answer of '{}' is not among its options",
                question.question
            ));
        }
    }
    Ok(quiz)
}

pub fn parse_score_advice(arguments: &str) -> Result<ScoreAdvice, String> {
    let advice: ScoreAdvice =
        serde_json::from_str(arguments).map_err(|e| format!("malformed advice output: {}", e))?;
    if advice.advice.trim().is_empty() {
        return Err("advice output was empty".to_string());
    }
    Ok(advice)
}

/// Generates the multiple-choice knowledge questions for the funnel.
pub async fn generate_quiz(
    topic: &str,
    number_of_questions: u32,
) -> Result<GeneratedQuiz, Box<dyn std::error::Error>> {
    let client = create_openai_client()?;

    let messages = vec![
        chat_completion::ChatCompletionMessage {
            role: chat_completion::MessageRole::system,
            content: chat_completion::Content::Text(
                "You are an expert in creating quizzes in Brazilian Portuguese. Produce multiple-choice questions with exactly one correct answer each. The correct answer must be repeated verbatim among the options.".to_string(),
            ),
            name: None,
            tool_calls: None,
            tool_call_id: None,
        },
        chat_completion::ChatCompletionMessage {
            role: chat_completion::MessageRole::user,
            content: chat_completion::Content::Text(format!(
                "Create a multiple-choice quiz about {} with {} questions. Each question needs 4 answer options.",
                topic, number_of_questions
            )),
            name: None,
            tool_calls: None,
            tool_call_id: None,
        },
    ];

    let mut question_properties = HashMap::new();
    question_properties.insert(
        "question".to_string(),
        Box::new(types::JSONSchemaDefine {
            schema_type: Some(types::JSONSchemaType::String),
            description: Some("The quiz question.".to_string()),
            ..Default::default()
        }),
    );
    question_properties.insert(
        "options".to_string(),
        Box::new(types::JSONSchemaDefine {
            schema_type: Some(types::JSONSchemaType::Array),
            description: Some("The possible answers to the question.".to_string()),
            items: Some(Box::new(types::JSONSchemaDefine {
                schema_type: Some(types::JSONSchemaType::String),
                ..Default::default()
            })),
            ..Default::default()
        }),
    );
    question_properties.insert(
        "correctAnswer".to_string(),
        Box::new(types::JSONSchemaDefine {
            schema_type: Some(types::JSONSchemaType::String),
            description: Some("The correct answer, verbatim from the options.".to_string()),
            ..Default::default()
        }),
    );

    let mut properties = HashMap::new();
    properties.insert(
        "quiz".to_string(),
        Box::new(types::JSONSchemaDefine {
            schema_type: Some(types::JSONSchemaType::Array),
            description: Some("The generated quiz questions and answers.".to_string()),
            items: Some(Box::new(types::JSONSchemaDefine {
                schema_type: Some(types::JSONSchemaType::Object),
                properties: Some(question_properties),
                required: Some(vec![
                    String::from("question"),
                    String::from("options"),
                    String::from("correctAnswer"),
                ]),
                ..Default::default()
            })),
            ..Default::default()
        }),
    );

    let tools = vec![chat_completion::Tool {
        r#type: chat_completion::ToolType::Function,
        function: types::Function {
            name: String::from("generate_quiz"),
            description: Some(String::from(
                "Returns the generated multiple-choice quiz questions",
            )),
            parameters: types::FunctionParameters {
                schema_type: types::JSONSchemaType::Object,
                properties: Some(properties),
                required: Some(vec![String::from("quiz")]),
            },
        },
    }];

    let request = chat_completion::ChatCompletionRequest::new(MODEL.to_string(), messages)
        .tools(tools)
        .tool_choice(chat_completion::ToolChoiceType::Required)
        .max_tokens(2000);

    let result = client.chat_completion(request).await.map_err(|e| {
        tracing::error!("Quiz generation call failed: {}", e);
        e
    })?;

    let arguments = extract_tool_arguments(&result)
        .ok_or("no tool call arguments in quiz generation response")?;
    parse_generated_quiz(&arguments).map_err(|e| {
        tracing::error!("Quiz generation returned invalid output: {}", e);
        e.into()
    })
}

/// Asks for tailored advice for a given quiz performance. The score
/// itself is computed by the caller; the model only writes the text.
pub async fn score_advice(
    correct_answers: u32,
    total_questions: u32,
    score: f64,
) -> Result<ScoreAdvice, Box<dyn std::error::Error>> {
    let client = create_openai_client()?;

    let messages = vec![
        chat_completion::ChatCompletionMessage {
            role: chat_completion::MessageRole::system,
            content: chat_completion::Content::Text(
                "You are an expert in evaluating quiz scores and providing helpful advice about Mounjaro de Pobre, in Brazilian Portuguese. If the score is high, congratulate the user and offer advanced tips about the drink. If the score is low, encourage them to study more and provide basic information.".to_string(),
            ),
            name: None,
            tool_calls: None,
            tool_call_id: None,
        },
        chat_completion::ChatCompletionMessage {
            role: chat_completion::MessageRole::user,
            content: chat_completion::Content::Text(format!(
                "Correct Answers: {}\nTotal Questions: {}\nScore: {:.0}%",
                correct_answers, total_questions, score
            )),
            name: None,
            tool_calls: None,
            tool_call_id: None,
        },
    ];

    let mut properties = HashMap::new();
    properties.insert(
        "advice".to_string(),
        Box::new(types::JSONSchemaDefine {
            schema_type: Some(types::JSONSchemaType::String),
            description: Some("Tailored advice based on the user's score.".to_string()),
            ..Default::default()
        }),
    );

    let tools = vec![chat_completion::Tool {
        r#type: chat_completion::ToolType::Function,
        function: types::Function {
            name: String::from("score_advice"),
            description: Some(String::from("Returns tailored advice for the quiz result")),
            parameters: types::FunctionParameters {
                schema_type: types::JSONSchemaType::Object,
                properties: Some(properties),
                required: Some(vec![String::from("advice")]),
            },
        },
    }];

    let request = chat_completion::ChatCompletionRequest::new(MODEL.to_string(), messages)
        .tools(tools)
        .tool_choice(chat_completion::ToolChoiceType::Required)
        .max_tokens(300);

    let result = client.chat_completion(request).await.map_err(|e| {
        tracing::error!("Advice call failed: {}", e);
        e
    })?;

    let arguments =
        extract_tool_arguments(&result).ok_or("no tool call arguments in advice response")?;
    parse_score_advice(&arguments).map_err(|e| {
        tracing::error!("Advice call returned invalid output: {}", e);
        e.into()
    })
}

fn extract_tool_arguments(
    result: &chat_completion::ChatCompletionResponse,
) -> Option<String> {
    result
        .choices
        .first()?
        .message
        .tool_calls
        .as_ref()?
        .first()?
        .function
        .arguments
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_quiz_arguments_parse() {
        let raw = r#"{"quiz":[{"question":"O que é?","options":["a","b","c","d"],"correctAnswer":"b"}]}"#;
        let quiz = parse_generated_quiz(raw).unwrap();
        assert_eq!(quiz.quiz.len(), 1);
        assert_eq!(quiz.quiz[0].correct_answer, "b");
    }

    #[test]
    fn quiz_with_no_questions_is_rejected() {
        assert!(parse_generated_quiz(r#"{"quiz":[]}"#).is_err());
    }

    #[test]
    fn quiz_with_stray_correct_answer_is_rejected() {
        let raw = r#"{"quiz":[{"question":"q","options":["a","b"],"correctAnswer":"z"}]}"#;
        assert!(parse_generated_quiz(raw).is_err());
    }

    #[test]
    fn quiz_with_a_single_option_is_rejected() {
        let raw = r#"{"quiz":[{"question":"q","options":["a"],"correctAnswer":"a"}]}"#;
        assert!(parse_generated_quiz(raw).is_err());
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(parse_generated_quiz("not json").is_err());
        assert!(parse_score_advice("not json").is_err());
    }

    #[test]
    fn advice_arguments_parse() {
        let advice = parse_score_advice(r#"{"advice":"Continue assim!"}"#).unwrap();
        assert_eq!(advice.advice, "Continue assim!");
    }

    #[test]
    fn blank_advice_is_rejected() {
        assert!(parse_score_advice(r#"{"advice":"   "}"#).is_err());
    }
}

use axum::{http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::utils::openai_utils;

pub const MAX_QUESTIONS: u32 = 20;

#[derive(Debug, Deserialize)]
pub struct GenerateQuizRequest {
    pub topic: String,
    #[serde(rename = "numberOfQuestions")]
    pub number_of_questions: u32,
}

impl GenerateQuizRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.topic.trim().is_empty() {
            return Err("Topic cannot be empty".to_string());
        }
        if self.number_of_questions == 0 || self.number_of_questions > MAX_QUESTIONS {
            return Err(format!(
                "Number of questions must be between 1 and {}",
                MAX_QUESTIONS
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    #[serde(rename = "correctAnswers")]
    pub correct_answers: u32,
    #[serde(rename = "totalQuestions")]
    pub total_questions: u32,
}

impl ScoreRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.total_questions == 0 {
            return Err("Total questions must be non-zero".to_string());
        }
        if self.correct_answers > self.total_questions {
            return Err("Correct answers cannot exceed total questions".to_string());
        }
        Ok(())
    }

    pub fn score(&self) -> f64 {
        self.correct_answers as f64 / self.total_questions as f64 * 100.0
    }
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub score: f64,
    pub advice: String,
}

pub async fn generate_quiz(
    Json(req): Json<GenerateQuizRequest>,
) -> Result<Json<openai_utils::GeneratedQuiz>, (StatusCode, Json<serde_json::Value>)> {
    if let Err(reason) = req.validate() {
        return Err((StatusCode::BAD_REQUEST, Json(json!({"error": reason}))));
    }

    tracing::info!(
        "Generating quiz: topic='{}', questions={}",
        req.topic,
        req.number_of_questions
    );

    match openai_utils::generate_quiz(&req.topic, req.number_of_questions).await {
        Ok(quiz) => Ok(Json(quiz)),
        Err(e) => {
            tracing::error!("Quiz generation failed: {}", e);
            Err((
                StatusCode::BAD_GATEWAY,
                Json(json!({"error": "Failed to generate quiz"})),
            ))
        }
    }
}

pub async fn score_quiz(
    Json(req): Json<ScoreRequest>,
) -> Result<Json<ScoreResponse>, (StatusCode, Json<serde_json::Value>)> {
    if let Err(reason) = req.validate() {
        return Err((StatusCode::BAD_REQUEST, Json(json!({"error": reason}))));
    }

    let score = req.score();

    match openai_utils::score_advice(req.correct_answers, req.total_questions, score).await {
        Ok(result) => Ok(Json(ScoreResponse { score, advice: result.advice })),
        Err(e) => {
            tracing::error!("Advice generation failed: {}", e);
            Err((
                StatusCode::BAD_GATEWAY,
                Json(json!({"error": "Failed to generate advice"})),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_request_rejects_blank_topic() {
        let req = GenerateQuizRequest { topic: "  ".into(), number_of_questions: 5 };
        assert!(req.validate().is_err());
    }

    #[test]
    fn generate_request_bounds_question_count() {
        let zero = GenerateQuizRequest { topic: "t".into(), number_of_questions: 0 };
        let too_many = GenerateQuizRequest { topic: "t".into(), number_of_questions: 21 };
        let ok = GenerateQuizRequest { topic: "t".into(), number_of_questions: 10 };
        assert!(zero.validate().is_err());
        assert!(too_many.validate().is_err());
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn score_request_rejects_zero_total() {
        let req = ScoreRequest { correct_answers: 0, total_questions: 0 };
        assert!(req.validate().is_err());
    }

    #[test]
    fn score_request_rejects_more_correct_than_total() {
        let req = ScoreRequest { correct_answers: 11, total_questions: 10 };
        assert!(req.validate().is_err());
    }

    #[test]
    fn score_is_a_percentage() {
        let req = ScoreRequest { correct_answers: 8, total_questions: 10 };
        assert!(req.validate().is_ok());
        assert_eq!(req.score(), 80.0);
    }

    #[test]
    fn request_bodies_use_the_documented_field_names() {
        let generate: GenerateQuizRequest =
            serde_json::from_str(r#"{"topic":"x","numberOfQuestions":3}"#).unwrap();
        assert_eq!(generate.number_of_questions, 3);
        let score: ScoreRequest =
            serde_json::from_str(r#"{"correctAnswers":4,"totalQuestions":10}"#).unwrap();
        assert_eq!(score.score(), 40.0);
    }
}

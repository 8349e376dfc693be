use serde::{Deserialize, Serialize};

/// One selectable answer on a question step. Most options are a bare
/// label; landing-style questions sometimes pair the label with an
/// image or a short explanation underneath.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum AnswerOption {
    Plain(String),
    Illustrated { label: String, image_url: String },
    Detailed { label: String, description: String },
}

impl AnswerOption {
    pub fn label(&self) -> &str {
        match self {
            AnswerOption::Plain(label) => label,
            AnswerOption::Illustrated { label, .. } => label,
            AnswerOption::Detailed { label, .. } => label,
        }
    }
}

/// Rendering hint for a question's option list.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum OptionLayout {
    List,
    Grid,
}

#[derive(Clone, Debug, PartialEq)]
pub struct QuestionStep {
    pub question: String,
    pub description: Option<String>,
    pub options: Vec<AnswerOption>,
    /// Present only on knowledge questions that count toward the score.
    pub correct_answer: Option<String>,
    pub layout: OptionLayout,
    /// Intro questions collect a preference (e.g. weight-loss goal) and
    /// are never scored, even if a correct answer slips in.
    pub intro: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InfoStep {
    pub title: String,
    pub body: String,
    pub image_url: Option<String>,
    pub continue_label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BmiCalculatorStep {
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BmiResultStep {
    pub title: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct VideoGateStep {
    pub title: String,
    pub video_url: String,
    pub locked_label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct OfferStep {
    pub headline: String,
    pub body: String,
    pub checkout_url: String,
    pub cta_label: String,
}

/// One screen of the funnel. Closed set: rendering and gating match on
/// this exhaustively, so a new screen kind is a compile-checked change
/// rather than another boolean flag on a question.
#[derive(Clone, Debug, PartialEq)]
pub enum Step {
    Question(QuestionStep),
    Info(InfoStep),
    BmiCalculator(BmiCalculatorStep),
    BmiResult(BmiResultStep),
    VideoGate(VideoGateStep),
    Offer(OfferStep),
}

impl Step {
    /// The single scoring predicate: a step counts toward the final
    /// percentage iff it is a plain knowledge question (not an intro
    /// preference question) with a designated correct answer. Every
    /// call site goes through here.
    pub fn scoring_answer(&self) -> Option<&str> {
        match self {
            Step::Question(q) if !q.intro => q.correct_answer.as_deref(),
            Step::Question(_) => None,
            Step::Info(_) => None,
            Step::BmiCalculator(_) => None,
            Step::BmiResult(_) => None,
            Step::VideoGate(_) => None,
            Step::Offer(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_question(correct: Option<&str>, intro: bool) -> Step {
        Step::Question(QuestionStep {
            question: "q".into(),
            description: None,
            options: vec![AnswerOption::Plain("a".into())],
            correct_answer: correct.map(|s| s.to_string()),
            layout: OptionLayout::List,
            intro,
        })
    }

    #[test]
    fn scored_question_exposes_its_answer() {
        assert_eq!(plain_question(Some("a"), false).scoring_answer(), Some("a"));
    }

    #[test]
    fn intro_question_is_never_scored() {
        assert_eq!(plain_question(Some("a"), true).scoring_answer(), None);
    }

    #[test]
    fn answerless_question_is_not_scored() {
        assert_eq!(plain_question(None, false).scoring_answer(), None);
    }

    #[test]
    fn non_question_steps_are_not_scored() {
        let steps = [
            Step::Info(InfoStep {
                title: "t".into(),
                body: "b".into(),
                image_url: None,
                continue_label: "ok".into(),
            }),
            Step::BmiCalculator(BmiCalculatorStep {
                title: "t".into(),
                description: "d".into(),
            }),
            Step::BmiResult(BmiResultStep { title: "t".into() }),
            Step::VideoGate(VideoGateStep {
                title: "t".into(),
                video_url: "u".into(),
                locked_label: "l".into(),
            }),
            Step::Offer(OfferStep {
                headline: "h".into(),
                body: "b".into(),
                checkout_url: "u".into(),
                cta_label: "c".into(),
            }),
        ];
        for step in steps {
            assert_eq!(step.scoring_answer(), None);
        }
    }

    #[test]
    fn option_label_is_uniform_across_variants() {
        assert_eq!(AnswerOption::Plain("x".into()).label(), "x");
        assert_eq!(
            AnswerOption::Illustrated { label: "y".into(), image_url: "img".into() }.label(),
            "y"
        );
        assert_eq!(
            AnswerOption::Detailed { label: "z".into(), description: "d".into() }.label(),
            "z"
        );
    }
}

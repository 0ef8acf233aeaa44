//! Domain models: the inbound quiz request and the flashcard record.

use serde::{Deserialize, Serialize};

/// Inbound POST body: `{ "quiz": "<topic>" }`.
#[derive(Clone, Debug, Deserialize)]
pub struct QuizRequest {
  pub quiz: QuizTopic,
}

/// Browsers sometimes send a bare number for the topic; it is kept as its decimal text
/// so the numeric-only check still catches it.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum QuizTopic {
  Text(String),
  Number(serde_json::Number),
}

impl QuizRequest {
  pub fn topic(&self) -> String {
    match &self.quiz {
      QuizTopic::Text(s) => s.clone(),
      QuizTopic::Number(n) => n.to_string(),
    }
  }
}

/// A single study card. The model is asked to produce these; its output is
/// only checked for being an array, never decoded into this type.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Flashcard {
  pub id: u32,
  pub question: String,
  pub answer: String,
}

impl Flashcard {
  /// Sample record embedded in the prompt to show the model the expected shape.
  pub fn example() -> Self {
    Self {
      id: 1,
      question: "What is the question?".into(),
      answer: "The answer".into(),
    }
  }
}

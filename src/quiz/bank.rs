use std::collections::HashSet;

use serde::Deserialize;

use crate::error::QuizError;

pub const OPTIONS_PER_QUESTION: usize = 4;

const BUILTIN_QUESTIONS: &str = include_str!("../data/questions.json");

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QuestionRecord {
    pub id: u32,
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_index: usize,
    pub explanation: String,
}

impl QuestionRecord {
    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct_index
    }
}

/// Ordered, validated set of quiz questions. Built once at startup and only
/// ever shared read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionBank {
    questions: Vec<QuestionRecord>,
}

impl QuestionBank {
    pub fn new(questions: Vec<QuestionRecord>) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::EmptyBank);
        }

        let mut seen = HashSet::new();
        for question in &questions {
            if !seen.insert(question.id) {
                return Err(QuizError::DuplicateId(question.id));
            }
            if question.options.len() != OPTIONS_PER_QUESTION {
                return Err(QuizError::OptionCount {
                    id: question.id,
                    found: question.options.len(),
                    expected: OPTIONS_PER_QUESTION,
                });
            }
            if question.correct_index >= question.options.len() {
                return Err(QuizError::CorrectIndexOutOfRange {
                    id: question.id,
                    index: question.correct_index,
                    len: question.options.len(),
                });
            }
        }

        Ok(Self { questions })
    }

    pub fn from_json(json: &str) -> Result<Self, QuizError> {
        let questions: Vec<QuestionRecord> = serde_json::from_str(json)?;
        Self::new(questions)
    }

    /// The communication-skills bank shipped with the site.
    pub fn builtin() -> Result<Self, QuizError> {
        Self::from_json(BUILTIN_QUESTIONS)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn get(&self, index: usize) -> Option<&QuestionRecord> {
        self.questions.get(index)
    }

    pub fn questions(&self) -> &[QuestionRecord] {
        &self.questions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u32, options: usize, correct_index: usize) -> QuestionRecord {
        QuestionRecord {
            id,
            prompt: format!("Question {}", id),
            options: (0..options).map(|i| format!("Option {}", i)).collect(),
            correct_index,
            explanation: "Because.".to_string(),
        }
    }

    #[test]
    fn test_builtin_bank_loads() {
        let bank = QuestionBank::builtin().unwrap();
        assert_eq!(bank.len(), 10);

        let ids: Vec<u32> = bank.questions().iter().map(|q| q.id).collect();
        assert_eq!(ids, (1..=10).collect::<Vec<u32>>());
    }

    #[test]
    fn test_builtin_first_question_is_body_language() {
        let bank = QuestionBank::builtin().unwrap();
        let first = bank.get(0).unwrap();
        assert!(first.prompt.contains("body language"));
        assert_eq!(first.correct_index, 2);
        assert_eq!(first.options[first.correct_index], "55%");
        assert!(first.is_correct(2));
        assert!(!first.is_correct(0));
    }

    #[test]
    fn test_empty_bank_rejected() {
        let err = QuestionBank::new(Vec::new()).unwrap_err();
        assert!(matches!(err, QuizError::EmptyBank));
    }

    #[test]
    fn test_correct_index_out_of_range_rejected() {
        let err = QuestionBank::new(vec![record(1, 4, 0), record(2, 4, 4)]).unwrap_err();
        match err {
            QuizError::CorrectIndexOutOfRange { id, index, len } => {
                assert_eq!((id, index, len), (2, 4, 4));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_wrong_option_count_rejected() {
        let err = QuestionBank::new(vec![record(7, 3, 0)]).unwrap_err();
        assert!(matches!(
            err,
            QuizError::OptionCount { id: 7, found: 3, expected: 4 }
        ));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let err = QuestionBank::new(vec![record(3, 4, 1), record(3, 4, 2)]).unwrap_err();
        assert!(matches!(err, QuizError::DuplicateId(3)));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = QuestionBank::from_json("[{\"id\": 1}]").unwrap_err();
        assert!(matches!(err, QuizError::Decode(_)));

        let err = QuestionBank::from_json(
            r#"[{"id": 1, "prompt": "p", "options": ["a","b","c","d"], "correct_index": 0, "explanation": "e", "extra": true}]"#,
        )
        .unwrap_err();
        assert!(matches!(err, QuizError::Decode(_)));
    }

    #[test]
    fn test_from_json_accepts_valid_document() {
        let bank = QuestionBank::from_json(
            r#"[{"id": 42, "prompt": "p", "options": ["a","b","c","d"], "correct_index": 3, "explanation": "e"}]"#,
        )
        .unwrap();
        assert_eq!(bank.len(), 1);
        assert_eq!(bank.get(0).unwrap().id, 42);
        assert!(bank.get(1).is_none());
    }
}

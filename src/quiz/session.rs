use std::rc::Rc;

use log::debug;

use super::bank::{QuestionBank, QuestionRecord};
use super::score::{self, ScoreColor, ScoreTier};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    InProgress {
        current_index: usize,
        feedback_visible: bool,
    },
    Completed,
}

/// How a single option should be drawn for the current question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionMark {
    Idle,
    Selected,
    Correct,
    Wrong,
}

/// One run through the question bank. Every action is a no-op when the
/// session is not in a state that allows it; callers get `false` back.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizSession {
    bank: Rc<QuestionBank>,
    current_index: usize,
    score: usize,
    answer_history: Vec<usize>,
    selected_answer: Option<usize>,
    feedback_visible: bool,
    completed: bool,
}

impl QuizSession {
    pub fn new(bank: Rc<QuestionBank>) -> Self {
        Self {
            bank,
            current_index: 0,
            score: 0,
            answer_history: Vec::new(),
            selected_answer: None,
            feedback_visible: false,
            completed: false,
        }
    }

    pub fn state(&self) -> SessionState {
        if self.completed {
            SessionState::Completed
        } else {
            SessionState::InProgress {
                current_index: self.current_index,
                feedback_visible: self.feedback_visible,
            }
        }
    }

    pub fn select_answer(&mut self, option: usize) -> bool {
        if self.completed || self.feedback_visible {
            return false;
        }
        let Some(question) = self.bank.get(self.current_index) else {
            return false;
        };
        if option >= question.options.len() {
            return false;
        }

        let correct = question.is_correct(option);
        self.selected_answer = Some(option);
        self.answer_history.push(option);
        if correct {
            self.score += 1;
        }
        self.feedback_visible = true;
        debug!(
            "Question {} answered with option {} ({})",
            question.id,
            option,
            if correct { "correct" } else { "incorrect" }
        );
        true
    }

    pub fn advance(&mut self) -> bool {
        if self.completed || !self.feedback_visible {
            return false;
        }
        if self.is_last_question() {
            self.completed = true;
            debug!("Quiz completed with {}/{}", self.score, self.question_count());
        } else {
            self.current_index += 1;
            self.selected_answer = None;
            self.feedback_visible = false;
        }
        true
    }

    pub fn reset(&mut self) {
        *self = Self::new(Rc::clone(&self.bank));
    }

    pub fn current_question(&self) -> &QuestionRecord {
        // current_index never leaves 0..len and the bank is never empty
        &self.bank.questions()[self.current_index]
    }

    pub fn question_count(&self) -> usize {
        self.bank.len()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 >= self.question_count()
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn answer_history(&self) -> &[usize] {
        &self.answer_history
    }

    pub fn selected_answer(&self) -> Option<usize> {
        self.selected_answer
    }

    pub fn feedback_visible(&self) -> bool {
        self.feedback_visible
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Score shown while the quiz is running: the unanswered current question
    /// is not counted.
    pub fn running_score(&self) -> (usize, usize) {
        let answered = self.current_index + usize::from(self.feedback_visible);
        (self.score(), answered)
    }

    pub fn final_score(&self) -> (usize, usize) {
        (self.score(), self.question_count())
    }

    /// Answered questions paired with the option picked and whether it was right.
    pub fn review(&self) -> impl Iterator<Item = (&QuestionRecord, usize, bool)> + '_ {
        self.bank
            .questions()
            .iter()
            .zip(self.answer_history().iter().copied())
            .map(|(question, option)| (question, option, question.is_correct(option)))
    }

    pub fn answered_correctly(&self) -> Option<bool> {
        self.selected_answer()
            .map(|option| self.current_question().is_correct(option))
    }

    pub fn option_mark(&self, option: usize) -> OptionMark {
        let selected = self.selected_answer() == Some(option);
        let correct = self.current_question().is_correct(option);
        match (self.feedback_visible, selected, correct) {
            (true, _, true) => OptionMark::Correct,
            (true, true, false) => OptionMark::Wrong,
            (_, true, _) => OptionMark::Selected,
            _ => OptionMark::Idle,
        }
    }

    pub fn percentage(&self) -> u32 {
        score::percentage(self.score, self.question_count())
    }

    pub fn tier(&self) -> ScoreTier {
        ScoreTier::for_percentage(self.percentage())
    }

    pub fn color(&self) -> ScoreColor {
        ScoreColor::for_percentage(self.percentage())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builtin_session() -> QuizSession {
        QuizSession::new(Rc::new(QuestionBank::builtin().unwrap()))
    }

    fn answer_all(session: &mut QuizSession, correct: usize) {
        for i in 0..session.question_count() {
            let question = session.current_question().clone();
            let option = if i < correct {
                question.correct_index
            } else {
                (question.correct_index + 1) % question.options.len()
            };
            assert!(session.select_answer(option));
            assert!(session.advance());
        }
    }

    fn assert_initial(session: &QuizSession) {
        assert_eq!(
            session.state(),
            SessionState::InProgress {
                current_index: 0,
                feedback_visible: false
            }
        );
        assert_eq!(session.score(), 0);
        assert!(session.answer_history().is_empty());
        assert_eq!(session.selected_answer(), None);
        assert!(!session.is_completed());
    }

    #[test]
    fn test_new_session_starts_at_first_question() {
        let session = builtin_session();
        assert_initial(&session);
        assert_eq!(session.running_score(), (0, 0));
        assert_eq!(session.current_question().id, 1);
    }

    #[test]
    fn test_correct_answer_on_first_question() {
        let mut session = builtin_session();
        assert!(session.select_answer(2));
        assert_eq!(session.score(), 1);
        assert!(session.feedback_visible());
        assert_eq!(session.answered_correctly(), Some(true));
        assert_eq!(session.running_score(), (1, 1));
    }

    #[test]
    fn test_wrong_answer_on_first_question() {
        let mut session = builtin_session();
        assert!(session.select_answer(0));
        assert_eq!(session.score(), 0);
        assert!(session.feedback_visible());
        assert_eq!(session.answered_correctly(), Some(false));
        assert_eq!(session.answer_history(), &[0]);
    }

    #[test]
    fn test_second_selection_is_ignored() {
        let mut session = builtin_session();
        assert!(session.select_answer(0));
        assert!(!session.select_answer(2));
        assert_eq!(session.score(), 0);
        assert_eq!(session.selected_answer(), Some(0));
        assert_eq!(session.answer_history().len(), 1);
    }

    #[test]
    fn test_out_of_range_option_is_ignored() {
        let mut session = builtin_session();
        assert!(!session.select_answer(4));
        assert!(!session.feedback_visible());
        assert!(session.answer_history().is_empty());
    }

    #[test]
    fn test_advance_requires_an_answer() {
        let mut session = builtin_session();
        assert!(!session.advance());
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn test_advance_moves_to_next_question_and_clears_selection() {
        let mut session = builtin_session();
        session.select_answer(2);
        assert!(session.advance());
        assert_eq!(
            session.state(),
            SessionState::InProgress {
                current_index: 1,
                feedback_visible: false
            }
        );
        assert_eq!(session.selected_answer(), None);
        assert_eq!(session.running_score(), (1, 1));
        assert_eq!(session.current_question().id, 2);
    }

    #[test]
    fn test_advance_from_last_question_completes() {
        let mut session = builtin_session();
        answer_all(&mut session, 0);
        assert_eq!(session.state(), SessionState::Completed);
        assert_eq!(session.current_index(), session.question_count() - 1);
        assert_eq!(session.final_score(), (0, 10));

        assert!(!session.select_answer(0));
        assert!(!session.advance());
        assert_eq!(session.answer_history().len(), 10);
    }

    #[test]
    fn test_score_bounds_and_monotonic() {
        let mut session = builtin_session();
        let mut last_score = 0;
        for _ in 0..session.question_count() {
            let option = session.current_question().correct_index;
            session.select_answer(option);
            assert!(session.score() >= last_score);
            assert!(session.score() <= session.current_index() + 1);
            last_score = session.score();
            session.advance();
            assert!(session.score() >= last_score);
            assert!(session.score() <= session.question_count());
        }
        assert_eq!(session.score(), 10);
        assert_eq!(session.percentage(), 100);
        assert_eq!(session.tier(), ScoreTier::Outstanding);
    }

    #[test]
    fn test_history_length_tracks_answered_questions() {
        let mut session = builtin_session();
        for answered in 1..=3 {
            session.select_answer(1);
            assert_eq!(session.answer_history().len(), answered);
            session.advance();
            assert_eq!(session.answer_history().len(), answered);
        }
        assert_eq!(session.answer_history(), &[1, 1, 1]);
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut session = builtin_session();
        session.select_answer(2);
        session.reset();
        assert_initial(&session);
        assert_eq!(session, builtin_session());

        answer_all(&mut session, 4);
        assert!(session.is_completed());
        session.reset();
        assert_initial(&session);
    }

    #[test]
    fn test_seven_of_ten_is_good_warning() {
        let mut session = builtin_session();
        answer_all(&mut session, 7);
        assert_eq!(session.score(), 7);
        assert_eq!(session.percentage(), 70);
        let review: Vec<bool> = session.review().map(|(_, _, correct)| correct).collect();
        assert_eq!(review.len(), 10);
        assert_eq!(review.iter().filter(|c| **c).count(), 7);
        assert!(review[..7].iter().all(|c| *c));
        assert_eq!(session.tier(), ScoreTier::Good);
        assert!(session.tier().message().starts_with("Good job! Keep learning!"));
        assert_eq!(session.color(), ScoreColor::Warning);
    }

    #[test]
    fn test_option_marks_follow_feedback() {
        let mut session = builtin_session();
        assert_eq!(session.option_mark(2), OptionMark::Idle);

        session.select_answer(0);
        assert_eq!(session.option_mark(0), OptionMark::Wrong);
        assert_eq!(session.option_mark(2), OptionMark::Correct);
        assert_eq!(session.option_mark(1), OptionMark::Idle);

        session.advance();
        session.select_answer(2);
        assert_eq!(session.option_mark(2), OptionMark::Correct);
        assert_eq!(session.option_mark(0), OptionMark::Idle);
    }
}

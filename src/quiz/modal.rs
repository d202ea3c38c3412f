use std::rc::Rc;

use log::info;
use yew::prelude::*;

use super::bank::QuestionBank;
use super::session::{OptionMark, QuizSession, SessionState};
use crate::icons::{Icon, IconGlyph};

#[derive(Properties, PartialEq)]
pub struct QuizModalProps {
    pub bank: Rc<QuestionBank>,
    pub on_close: Callback<()>,
}

pub enum QuizMsg {
    Select(usize),
    Advance,
    Reset,
    Close,
}

/// Quiz dialog. Each mount owns a fresh session; unmounting drops it.
pub struct QuizModal {
    session: QuizSession,
}

impl Component for QuizModal {
    type Message = QuizMsg;
    type Properties = QuizModalProps;

    fn create(ctx: &Context<Self>) -> Self {
        info!("Quiz opened with {} questions", ctx.props().bank.len());
        Self {
            session: QuizSession::new(Rc::clone(&ctx.props().bank)),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            QuizMsg::Select(option) => self.session.select_answer(option),
            QuizMsg::Advance => {
                let changed = self.session.advance();
                if changed && self.session.is_completed() {
                    let (score, total) = self.session.final_score();
                    info!("Quiz completed: {}/{} ({}%)", score, total, self.session.percentage());
                }
                changed
            }
            QuizMsg::Reset => {
                self.session.reset();
                true
            }
            QuizMsg::Close => {
                info!("Quiz closed");
                ctx.props().on_close.emit(());
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let close = ctx.link().callback(|_: MouseEvent| QuizMsg::Close);
        let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

        html! {
            <div class="quiz-overlay" onclick={close}>
                <div class="quiz-dialog" onclick={keep_open}>
                    {
                        match self.session.state() {
                            SessionState::Completed => self.render_summary(ctx),
                            SessionState::InProgress { .. } => self.render_question(ctx),
                        }
                    }
                </div>
                <style>{QUIZ_STYLE}</style>
            </div>
        }
    }
}

impl QuizModal {
    fn render_question(&self, ctx: &Context<Self>) -> Html {
        let session = &self.session;
        let question = session.current_question();
        let (score, answered) = session.running_score();
        let close = ctx.link().callback(|_: MouseEvent| QuizMsg::Close);
        let advance = ctx.link().callback(|_: MouseEvent| QuizMsg::Advance);

        html! {
            <div class="quiz-body">
                <div class="quiz-header">
                    <div class="quiz-progress">
                        <span class="quiz-counter">
                            {format!("Question {}/{}", session.current_index() + 1, session.question_count())}
                        </span>
                        <span class="quiz-running-score">{format!("Score: {}/{}", score, answered)}</span>
                    </div>
                    <button class="quiz-close" onclick={close}>
                        <IconGlyph icon={Icon::Close} />
                    </button>
                </div>

                <div key={question.id} class="quiz-question">
                    <h3>{&question.prompt}</h3>
                    <div class="quiz-options">
                        { for question.options.iter().enumerate().map(|(index, option)| {
                            self.render_option(ctx, index, option)
                        }) }
                    </div>

                    if session.feedback_visible() {
                        <>
                        <div class="quiz-feedback">
                            <IconGlyph icon={Icon::Alert} class="feedback-icon" />
                            <div>
                                <h4>
                                    { if session.answered_correctly() == Some(true) { "✅ Correct!" } else { "❌ Incorrect" } }
                                </h4>
                                <p>{&question.explanation}</p>
                            </div>
                        </div>
                        <button class="primary-button wide" onclick={advance}>
                            { if session.is_last_question() { "Show Results" } else { "Next Question" } }
                        </button>
                        </>
                    }
                </div>
            </div>
        }
    }

    fn render_option(&self, ctx: &Context<Self>, index: usize, option: &str) -> Html {
        let mark = self.session.option_mark(index);
        let (state_class, badge) = match mark {
            OptionMark::Correct => ("correct", html! { <IconGlyph icon={Icon::Check} /> }),
            OptionMark::Wrong => ("wrong", html! { <IconGlyph icon={Icon::Close} /> }),
            OptionMark::Selected => ("selected", html! { <>{option_letter(index)}</> }),
            OptionMark::Idle => ("", html! { <>{option_letter(index)}</> }),
        };
        let onclick = ctx.link().callback(move |_: MouseEvent| QuizMsg::Select(index));

        html! {
            <button
                key={index}
                class={classes!("quiz-option", state_class)}
                {onclick}
                disabled={self.session.feedback_visible()}
            >
                <span class="option-badge">{badge}</span>
                <span class="option-text">{option.to_string()}</span>
            </button>
        }
    }

    fn render_summary(&self, ctx: &Context<Self>) -> Html {
        let session = &self.session;
        let (score, total) = session.final_score();
        let percentage = session.percentage();
        let reset = ctx.link().callback(|_: MouseEvent| QuizMsg::Reset);
        let close = ctx.link().callback(|_: MouseEvent| QuizMsg::Close);

        html! {
            <div class="quiz-summary">
                <div class="award-badge">
                    <IconGlyph icon={Icon::Award} />
                </div>
                <h2>{"Quiz Completed!"}</h2>
                <p class="tier-message">{session.tier().message()}</p>

                <div class="summary-card">
                    <div class={classes!("final-score", session.color().css_class())}>
                        {format!("{}/{}", score, total)}
                    </div>
                    <div class="final-percentage">{format!("{}% Correct", percentage)}</div>
                    <div class="score-bar">
                        <div class="score-bar-fill" style={format!("width: {}%;", percentage)}></div>
                    </div>
                    <div class="answer-review">
                        { for session.review().map(|(question, option, correct)| html! {
                            <span
                                key={question.id}
                                class={classes!("review-mark", if correct { "correct" } else { "wrong" })}
                                title={format!("{} Your answer: {}", question.prompt, question.options[option])}
                            >
                                { if correct { "✓" } else { "✗" } }
                            </span>
                        }) }
                    </div>
                </div>

                <div class="summary-actions">
                    <button class="primary-button" onclick={reset}>
                        <IconGlyph icon={Icon::Retry} />
                        {"Try Again"}
                    </button>
                    <button class="secondary-button" onclick={close}>
                        {"Close"}
                    </button>
                </div>
            </div>
        }
    }
}

/// A, B, C, D...
fn option_letter(index: usize) -> String {
    char::from_u32('A' as u32 + index as u32)
        .map(String::from)
        .unwrap_or_default()
}

const QUIZ_STYLE: &str = r#"
.quiz-overlay {
    position: fixed;
    inset: 0;
    background: rgba(0, 0, 0, 0.6);
    backdrop-filter: blur(4px);
    z-index: 50;
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 1rem;
}
.quiz-dialog {
    background: #fff;
    border-radius: 1rem;
    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
    max-width: 42rem;
    width: 100%;
    max-height: 90vh;
    overflow-y: auto;
}
.quiz-body, .quiz-summary {
    padding: 2rem;
}
.quiz-header {
    display: flex;
    justify-content: space-between;
    align-items: center;
    margin-bottom: 1.5rem;
}
.quiz-progress {
    display: flex;
    align-items: center;
    gap: 1rem;
}
.quiz-counter {
    background: linear-gradient(to right, #3b82f6, #9333ea);
    color: #fff;
    padding: 0.5rem 1rem;
    border-radius: 9999px;
    font-weight: bold;
}
.quiz-running-score {
    color: #4b5563;
}
.quiz-close {
    background: none;
    border: none;
    font-size: 1.25rem;
    color: #6b7280;
    cursor: pointer;
    padding: 0.5rem;
    border-radius: 9999px;
}
.quiz-close:hover {
    background: #f3f4f6;
}
.quiz-question h3 {
    font-size: 1.5rem;
    color: #1f2937;
    margin-bottom: 1.5rem;
}
.quiz-options {
    display: flex;
    flex-direction: column;
    gap: 0.75rem;
    margin-bottom: 1.5rem;
}
.quiz-option {
    display: flex;
    align-items: center;
    gap: 0.75rem;
    text-align: left;
    padding: 1rem;
    border-radius: 0.75rem;
    border: 2px solid #e5e7eb;
    background: #f9fafb;
    cursor: pointer;
    transition: all 0.3s;
}
.quiz-option:hover:not(:disabled) {
    border-color: #93c5fd;
    background: #eff6ff;
}
.quiz-option:disabled {
    cursor: default;
}
.quiz-option.selected {
    border-color: #3b82f6;
    background: #eff6ff;
    color: #1e40af;
}
.quiz-option.correct {
    border-color: #22c55e;
    background: #f0fdf4;
    color: #166534;
}
.quiz-option.wrong {
    border-color: #ef4444;
    background: #fef2f2;
    color: #991b1b;
}
.option-badge {
    width: 1.5rem;
    height: 1.5rem;
    border-radius: 9999px;
    border: 2px solid #d1d5db;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 0.75rem;
    font-weight: bold;
    flex-shrink: 0;
}
.quiz-option.correct .option-badge {
    background: #22c55e;
    border-color: #22c55e;
    color: #fff;
}
.quiz-option.wrong .option-badge {
    background: #ef4444;
    border-color: #ef4444;
    color: #fff;
}
.quiz-feedback {
    display: flex;
    gap: 0.75rem;
    background: linear-gradient(to right, #eff6ff, #faf5ff);
    border: 1px solid #bfdbfe;
    border-radius: 0.75rem;
    padding: 1rem;
    margin-bottom: 1.5rem;
    color: #1d4ed8;
}
.quiz-feedback h4 {
    margin: 0 0 0.5rem;
    color: #1e40af;
}
.quiz-summary {
    text-align: center;
}
.award-badge {
    width: 4rem;
    height: 4rem;
    margin: 0 auto 1rem;
    border-radius: 1rem;
    background: linear-gradient(to bottom right, #3b82f6, #9333ea);
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 2rem;
}
.tier-message {
    color: #4b5563;
    font-size: 1.125rem;
}
.summary-card {
    background: linear-gradient(to right, #eff6ff, #faf5ff);
    border-radius: 1rem;
    padding: 1.5rem;
    margin: 1.5rem 0;
}
.final-score {
    font-size: 2.25rem;
    font-weight: bold;
    margin-bottom: 0.5rem;
}
.score-success { color: #16a34a; }
.score-warning { color: #ca8a04; }
.score-failure { color: #dc2626; }
.final-percentage {
    color: #4b5563;
    margin-bottom: 1rem;
}
.score-bar {
    width: 100%;
    height: 0.75rem;
    background: #e5e7eb;
    border-radius: 9999px;
}
.score-bar-fill {
    height: 100%;
    border-radius: 9999px;
    background: linear-gradient(to right, #3b82f6, #9333ea);
    transition: width 1.5s ease-out;
}
.answer-review {
    display: flex;
    justify-content: center;
    gap: 0.375rem;
    margin-top: 1rem;
}
.review-mark {
    width: 1.5rem;
    height: 1.5rem;
    border-radius: 9999px;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 0.75rem;
    color: #fff;
    cursor: help;
}
.review-mark.correct { background: #22c55e; }
.review-mark.wrong { background: #ef4444; }
.summary-actions {
    display: flex;
    gap: 1rem;
}
.summary-actions button {
    flex: 1;
}
.secondary-button {
    background: linear-gradient(to right, #6b7280, #4b5563);
    color: #fff;
    border: none;
    padding: 0.75rem 1.5rem;
    border-radius: 0.75rem;
    font-weight: bold;
    cursor: pointer;
}
"#;

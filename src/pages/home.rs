use std::rc::Rc;

use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::components::{
    contact_form::ContactCard, fade_in::FadeInSection, skill_card::SkillCard,
    timeline_item::TimelineItem, video_section::VideoSection,
};
use crate::content::{self, AUTHORS, CHANNELS, CONFLICT_STEPS, LISTENING_SKILLS, NEXT_STEPS, PILLARS};
use crate::icons::{Icon, IconGlyph};
use crate::quiz::{bank::QuestionBank, modal::QuizModal};

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub bank: Option<Rc<QuestionBank>>,
}

#[derive(Properties, PartialEq)]
struct SectionHeadingProps {
    title: AttrValue,
    subtitle: AttrValue,
}

#[function_component(SectionHeading)]
fn section_heading(props: &SectionHeadingProps) -> Html {
    html! {
        <FadeInSection>
            <div class="section-heading">
                <h2>{&props.title}</h2>
                <p>{&props.subtitle}</p>
            </div>
        </FadeInSection>
    }
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let show_quiz = use_state(|| false);

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let open_quiz = {
        let show_quiz = show_quiz.clone();
        Callback::from(move |_: MouseEvent| show_quiz.set(true))
    };
    let close_quiz = {
        let show_quiz = show_quiz.clone();
        Callback::from(move |_: ()| show_quiz.set(false))
    };

    let quiz = match (&props.bank, *show_quiz) {
        (Some(bank), true) => html! {
            <QuizModal bank={Rc::clone(bank)} on_close={close_quiz} />
        },
        _ => html! {},
    };

    let quiz_launcher = if props.bank.is_some() {
        html! {
            <button class="quiz-launch primary-button" onclick={open_quiz}>
                {"Take a Quiz "}
                <IconGlyph icon={Icon::ArrowRight} />
            </button>
        }
    } else {
        html! {
            <p class="quiz-unavailable">{"The quiz is unavailable right now."}</p>
        }
    };

    html! {
        <div class="home-page">
            <section id="home" class="hero">
                <div class="hero-content">
                    <h1>
                        {"The Art of"}
                        <span class="gradient-text">{" Communication"}</span>
                    </h1>
                    <p>
                        {"Master the essential skills that connect hearts, minds, and opportunities. Transform your personal and professional relationships through the power of effective communication."}
                    </p>
                </div>
            </section>

            <section id="about" class="content-section">
                <SectionHeading
                    title="What is Communication?"
                    subtitle="Communication is the bridge between confusion and clarity, the pathway from isolation to connection."
                />
                <div class="two-column">
                    <FadeInSection delay={0.2}>
                        <div class="panel">
                            <h3>{"The Foundation of Human Connection"}</h3>
                            { for content::FOUNDATION_PARAGRAPHS.iter().map(|text| html! { <p>{*text}</p> }) }
                        </div>
                    </FadeInSection>
                    <FadeInSection delay={0.4}>
                        <div class="pillar-grid">
                            { for PILLARS.iter().map(|pillar| html! {
                                <div class={classes!("pillar", pillar.tone)}>
                                    <IconGlyph icon={pillar.icon} class="pillar-icon" />
                                    <h4>{pillar.title}</h4>
                                    <p>{pillar.text}</p>
                                </div>
                            }) }
                        </div>
                    </FadeInSection>
                </div>
            </section>

            <section id="skills" class="content-section white">
                <SectionHeading
                    title="Verbal vs Non-verbal Communication"
                    subtitle="Understanding the full spectrum of human expression"
                />
                <div class="two-column">
                    { for CHANNELS.iter().enumerate().map(|(i, channel)| html! {
                        <FadeInSection delay={0.2 * (i + 1) as f64}>
                            <div class={classes!("channel", channel.tone)}>
                                <div class="channel-heading">
                                    <IconGlyph icon={channel.icon} class="channel-icon" />
                                    <h3>{channel.title}</h3>
                                </div>
                                <p>{channel.summary}</p>
                                <div class="channel-points">
                                    { for channel.points.iter().map(|point| html! {
                                        <div class="channel-point">
                                            <IconGlyph icon={Icon::CheckCircle} class="point-icon" />
                                            <div>
                                                <h4>{point.title}</h4>
                                                <p>{point.text}</p>
                                            </div>
                                        </div>
                                    }) }
                                </div>
                            </div>
                        </FadeInSection>
                    }) }
                </div>
            </section>

            <section class="content-section">
                <SectionHeading
                    title="The Art of Active Listening"
                    subtitle="True listening is a gift we give to others and ourselves"
                />
                <div class="skill-grid">
                    { for LISTENING_SKILLS.iter().map(|skill| html! {
                        <SkillCard
                            icon={skill.icon}
                            title={skill.title}
                            description={skill.description}
                            delay={skill.delay}
                        />
                    }) }
                </div>
            </section>

            <section class="content-section">
                <SectionHeading
                    title="Conflict Resolution"
                    subtitle="Turning disagreements into opportunities for deeper understanding"
                />
                <div class="timeline">
                    <div class="timeline-line"></div>
                    { for CONFLICT_STEPS.iter().map(|step| html! {
                        <TimelineItem
                            icon={step.icon}
                            title={step.title}
                            description={step.description}
                            is_left={step.is_left}
                            delay={step.delay}
                        />
                    }) }
                </div>
            </section>

            <div class="content-section white">
                <VideoSection />
            </div>

            <section class="quote-section">
                <FadeInSection>
                    <IconGlyph icon={Icon::Quote} class="quote-icon" />
                    <blockquote>{format!("\"{}\"", content::QUOTE)}</blockquote>
                    <cite>{content::QUOTE_ATTRIBUTION}</cite>
                </FadeInSection>
            </section>

            <section id="contact" class="content-section">
                <SectionHeading
                    title="Continue Your Journey"
                    subtitle="We'd love to hear about your communication experiences and help you on your journey to better connections"
                />
                <div class="two-column">
                    <FadeInSection delay={0.2}>
                        <ContactCard />
                    </FadeInSection>
                    <FadeInSection delay={0.4}>
                        <div class="contact-side">
                            <div class="panel blue">
                                <h3>{"Connect With Us"}</h3>
                                <div class="contact-line">
                                    <IconGlyph icon={Icon::Mail} />
                                    <div>
                                        <div class="contact-label">{"Email"}</div>
                                        <div>{content::CONTACT_EMAIL}</div>
                                    </div>
                                </div>
                                <div class="contact-line">
                                    <IconGlyph icon={Icon::Phone} />
                                    <div>
                                        <div class="contact-label">{"Phone"}</div>
                                        <div>{content::CONTACT_PHONE}</div>
                                    </div>
                                </div>
                            </div>
                            <div class="panel purple">
                                <h3>{"Next Steps"}</h3>
                                <ul class="next-steps">
                                    { for NEXT_STEPS.iter().map(|step| html! {
                                        <li>
                                            <IconGlyph icon={Icon::CheckCircle} class="point-icon" />
                                            <span>{*step}</span>
                                        </li>
                                    }) }
                                </ul>
                            </div>
                        </div>
                    </FadeInSection>
                </div>
            </section>

            {quiz_launcher}
            {quiz}

            <footer class="site-footer">
                <div class="footer-brand">
                    <IconGlyph icon={Icon::MessageCircle} />
                    <span>{content::SITE_TITLE}</span>
                </div>
                <p class="footer-authors">
                    { for AUTHORS.iter().map(|name| html! { <>{*name}<br /></> }) }
                </p>
                <div class="footer-legal">
                    <p>
                        {format!(
                            "© {} {}. All rights reserved. | Made with ❤️ for better communication",
                            Local::now().year(),
                            content::SITE_TITLE
                        )}
                    </p>
                </div>
            </footer>

            <style>{HOME_STYLE}</style>
        </div>
    }
}

const HOME_STYLE: &str = r#"
.home-page {
    min-height: 100vh;
    background: linear-gradient(to bottom right, #f8fafc, #eff6ff, #faf5ff);
    color: #1f2937;
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
}
.gradient-text {
    background: linear-gradient(to right, #2563eb, #9333ea);
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
}
.hero {
    height: 100vh;
    display: flex;
    align-items: center;
    justify-content: center;
    text-align: center;
    padding: 6rem 1rem 5rem;
}
.hero h1 {
    font-size: 4.5rem;
    margin-bottom: 1.5rem;
}
.hero p {
    font-size: 1.25rem;
    color: #4b5563;
    max-width: 48rem;
    margin: 0 auto;
    line-height: 1.7;
}
.content-section {
    padding: 5rem 1rem;
    max-width: 80rem;
    margin: 0 auto;
}
.content-section.white {
    background: #fff;
    max-width: none;
}
.section-heading {
    text-align: center;
    margin-bottom: 4rem;
}
.section-heading h2 {
    font-size: 2.25rem;
    margin-bottom: 1.5rem;
}
.section-heading p {
    font-size: 1.25rem;
    color: #4b5563;
    max-width: 48rem;
    margin: 0 auto;
}
.two-column {
    display: grid;
    grid-template-columns: repeat(2, 1fr);
    gap: 3rem;
    align-items: center;
    max-width: 80rem;
    margin: 0 auto;
}
.panel {
    background: #fff;
    padding: 2rem;
    border-radius: 1.5rem;
    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
}
.panel p {
    color: #4b5563;
    line-height: 1.7;
}
.panel.blue { background: linear-gradient(to bottom right, #eff6ff, #dbeafe); }
.panel.purple { background: linear-gradient(to bottom right, #faf5ff, #f3e8ff); }
.pillar-grid {
    display: grid;
    grid-template-columns: repeat(2, 1fr);
    gap: 1.5rem;
}
.pillar {
    padding: 1.5rem;
    border-radius: 1rem;
    color: #fff;
}
.pillar p { font-size: 0.875rem; opacity: 0.9; }
.pillar-icon { font-size: 2.5rem; }
.pillar.blue, .icon-badge { background: linear-gradient(to bottom right, #3b82f6, #2563eb); }
.pillar.purple { background: linear-gradient(to bottom right, #a855f7, #9333ea); }
.pillar.green { background: linear-gradient(to bottom right, #22c55e, #16a34a); }
.pillar.orange { background: linear-gradient(to bottom right, #f97316, #ea580c); }
.channel {
    padding: 2rem;
    border-radius: 1.5rem;
}
.channel.blue { background: linear-gradient(to bottom right, #eff6ff, #dbeafe); }
.channel.purple { background: linear-gradient(to bottom right, #faf5ff, #f3e8ff); }
.channel-heading, .channel-point, .contact-line, .next-steps li {
    display: flex;
    align-items: flex-start;
    gap: 0.75rem;
}
.channel-icon { font-size: 2.5rem; }
.channel-point h4 { margin: 0; }
.channel-point p { margin: 0.25rem 0 1rem; font-size: 0.875rem; color: #4b5563; }
.skill-grid {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 2rem;
}
.skill-card {
    background: #fff;
    padding: 2rem;
    border-radius: 1rem;
    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
    transition: transform 0.3s, box-shadow 0.3s;
}
.skill-card:hover {
    transform: scale(1.05) translateY(-5px);
    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.15);
}
.icon-badge {
    width: 3rem;
    height: 3rem;
    border-radius: 0.75rem;
    display: flex;
    align-items: center;
    justify-content: center;
    color: #fff;
    font-size: 1.5rem;
    flex-shrink: 0;
}
.icon-badge.large {
    width: 4rem;
    height: 4rem;
    margin-bottom: 1.5rem;
}
.timeline {
    position: relative;
}
.timeline-line {
    position: absolute;
    left: 50%;
    top: 0;
    bottom: 0;
    width: 4px;
    transform: translateX(-50%);
    background: linear-gradient(to bottom, #93c5fd, #d8b4fe);
    z-index: 0;
}
.timeline-item {
    display: flex;
    align-items: center;
    margin-bottom: 3rem;
    position: relative;
    z-index: 1;
}
.timeline-item.left { flex-direction: row-reverse; }
.timeline-body { flex: 1; }
.timeline-card {
    background: #fff;
    padding: 1.5rem;
    border-radius: 1rem;
    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
}
.timeline-item.right .timeline-card { margin-left: 2rem; }
.timeline-item.left .timeline-card { margin-right: 2rem; }
.timeline-heading {
    display: flex;
    align-items: center;
    gap: 1rem;
    margin-bottom: 1rem;
}
.timeline-dot {
    width: 1rem;
    height: 1rem;
    border-radius: 9999px;
    background: linear-gradient(to bottom right, #3b82f6, #9333ea);
    flex-shrink: 0;
}
.video-section .section-heading h2 { font-size: 3rem; }
.video-grid {
    display: grid;
    grid-template-columns: repeat(2, 1fr);
    gap: 2rem;
    max-width: 80rem;
    margin: 0 auto;
}
.video-card {
    background: #fff;
    border-radius: 1rem;
    border: 1px solid #f3f4f6;
    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
    padding: 2rem;
}
.video-meta {
    display: flex;
    justify-content: space-between;
    align-items: center;
    margin-bottom: 1rem;
}
.video-facts {
    display: flex;
    gap: 1rem;
    font-size: 0.875rem;
    color: #6b7280;
}
.video-frame, .video-placeholder {
    aspect-ratio: 16 / 9;
    border-radius: 0.5rem;
    overflow: hidden;
    margin-bottom: 1rem;
}
.video-frame { background: #000; }
.video-placeholder {
    background: linear-gradient(to bottom right, #eff6ff, #faf5ff);
    border: 1px solid #e5e7eb;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    cursor: pointer;
}
.play-circle {
    width: 4rem;
    height: 4rem;
    border-radius: 9999px;
    background: linear-gradient(to bottom right, #3b82f6, #9333ea);
    color: #fff;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 1.5rem;
}
.video-button, .primary-button {
    width: 100%;
    background: linear-gradient(to right, #3b82f6, #9333ea);
    color: #fff;
    border: none;
    padding: 0.75rem 1.5rem;
    border-radius: 0.75rem;
    font-weight: 600;
    cursor: pointer;
    display: flex;
    align-items: center;
    justify-content: center;
    gap: 0.5rem;
    transition: transform 0.3s;
}
.video-button.close { background: linear-gradient(to right, #6b7280, #4b5563); }
.video-button:hover, .primary-button:hover { transform: scale(1.02); }
.quote-section {
    padding: 5rem 1rem;
    text-align: center;
    color: #fff;
    background: linear-gradient(to right, #2563eb, #9333ea);
}
.quote-icon { font-size: 4rem; opacity: 0.5; }
.quote-section blockquote {
    font-size: 2rem;
    font-weight: 300;
    line-height: 1.6;
    max-width: 56rem;
    margin: 2rem auto;
}
.quote-section cite { font-size: 1.25rem; opacity: 0.75; }
.contact-card {
    background: #fff;
    padding: 2rem;
    border-radius: 1.5rem;
    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
}
.contact-form {
    display: flex;
    flex-direction: column;
    gap: 1.5rem;
}
.contact-form label {
    display: block;
    font-size: 0.875rem;
    font-weight: 600;
    color: #374151;
    margin-bottom: 0.5rem;
}
.contact-form input, .contact-form textarea {
    width: 100%;
    box-sizing: border-box;
    padding: 0.75rem 1rem;
    border-radius: 0.75rem;
    border: 1px solid #d1d5db;
    resize: none;
}
.contact-thanks {
    text-align: center;
    padding: 2rem 0;
}
.thanks-icon { font-size: 4rem; color: #22c55e; }
.error-message {
    color: #b91c1c;
    background: #fef2f2;
    border-radius: 0.5rem;
    padding: 0.75rem 1rem;
}
.contact-side {
    display: flex;
    flex-direction: column;
    gap: 2rem;
}
.contact-label { font-weight: 600; }
.next-steps {
    list-style: none;
    padding: 0;
    color: #4b5563;
}
.next-steps li { margin-bottom: 0.75rem; }
.quiz-launch {
    width: auto;
    margin: 2rem auto;
    padding: 1rem 2rem;
    font-size: 1.125rem;
    border-radius: 1rem;
}
.quiz-unavailable {
    text-align: center;
    color: #6b7280;
    margin: 2rem auto;
}
.site-footer {
    background: #1f2937;
    color: #fff;
    padding: 3rem 1rem;
    text-align: center;
}
.footer-brand {
    display: flex;
    align-items: center;
    justify-content: center;
    gap: 0.5rem;
    font-size: 1.5rem;
    font-weight: bold;
    margin-bottom: 1.5rem;
}
.footer-authors { color: #9ca3af; }
.footer-legal {
    border-top: 1px solid #374151;
    padding-top: 1.5rem;
    color: #6b7280;
}
@media (max-width: 900px) {
    .hero h1 { font-size: 3rem; }
    .two-column, .video-grid, .skill-grid { grid-template-columns: 1fr; }
    .timeline-line { display: none; }
    .timeline-item.left { flex-direction: row; }
    .timeline-item .timeline-card { margin: 0 1rem 0 0; }
}
"#;

use yew::prelude::*;

use crate::components::fade_in::FadeInSection;
use crate::icons::{Icon, IconGlyph};

#[derive(Properties, PartialEq)]
pub struct SkillCardProps {
    pub icon: Icon,
    pub title: AttrValue,
    pub description: AttrValue,
    #[prop_or(0.0)]
    pub delay: f64,
}

#[function_component(SkillCard)]
pub fn skill_card(props: &SkillCardProps) -> Html {
    html! {
        <FadeInSection delay={props.delay}>
            <div class="skill-card">
                <div class="icon-badge large">
                    <IconGlyph icon={props.icon} />
                </div>
                <h3>{&props.title}</h3>
                <p>{&props.description}</p>
            </div>
        </FadeInSection>
    }
}

use yew::prelude::*;

use crate::components::fade_in::FadeInSection;
use crate::icons::{Icon, IconGlyph};

#[derive(Properties, PartialEq)]
pub struct TimelineItemProps {
    pub icon: Icon,
    pub title: AttrValue,
    pub description: AttrValue,
    #[prop_or(false)]
    pub is_left: bool,
    #[prop_or(0.0)]
    pub delay: f64,
}

#[function_component(TimelineItem)]
pub fn timeline_item(props: &TimelineItemProps) -> Html {
    let side = if props.is_left { "left" } else { "right" };

    html! {
        <FadeInSection delay={props.delay}>
            <div class={classes!("timeline-item", side)}>
                <div class="timeline-body">
                    <div class="timeline-card">
                        <div class="timeline-heading">
                            <div class="icon-badge">
                                <IconGlyph icon={props.icon} />
                            </div>
                            <h3>{&props.title}</h3>
                        </div>
                        <p>{&props.description}</p>
                    </div>
                </div>
                <div class="timeline-dot"></div>
            </div>
        </FadeInSection>
    }
}

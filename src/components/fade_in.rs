use yew::prelude::*;
use web_sys::Element;

use crate::reveal::{reveal_style, Reveal, ViewportObserver};

#[derive(Properties, PartialEq)]
pub struct FadeInProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or(0.0)]
    pub delay: f64,
    #[prop_or_default]
    pub class: Classes,
}

/// Wraps a block that slides up into place the first time it scrolls into
/// view, then stays put.
#[function_component(FadeInSection)]
pub fn fade_in_section(props: &FadeInProps) -> Html {
    let node = use_node_ref();
    let revealed = use_state(|| false);

    {
        let node = node.clone();
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |_| {
                let attached = node.cast::<Element>().map(|element| {
                    let observer = ViewportObserver::new(element);
                    let reveal = Reveal::attach(&observer, move || revealed.set(true));
                    (observer, reveal)
                });
                move || {
                    if let Some((_observer, reveal)) = attached {
                        if !reveal.is_revealed() {
                            reveal.detach();
                        }
                    }
                }
            },
            (),
        );
    }

    html! {
        <div
            ref={node}
            class={classes!("fade-in", props.class.clone())}
            style={reveal_style(*revealed, props.delay)}
        >
            { for props.children.iter() }
        </div>
    }
}

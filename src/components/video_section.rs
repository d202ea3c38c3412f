use yew::prelude::*;

use crate::content::{Video, VIDEOS};
use crate::icons::{Icon, IconGlyph};

pub fn embed_url(embed_id: &str) -> String {
    format!(
        "https://www.youtube.com/embed/{}?autoplay=1&rel=0&modestbranding=1",
        embed_id
    )
}

/// Which panel, if any, should show its player after `clicked` is toggled.
pub fn toggle_active(active: Option<&'static str>, clicked: &'static str) -> Option<&'static str> {
    if active == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[derive(Properties, PartialEq)]
struct VideoCardProps {
    video: &'static Video,
    active: bool,
    on_toggle: Callback<&'static str>,
}

#[function_component(VideoCard)]
fn video_card(props: &VideoCardProps) -> Html {
    let video = props.video;
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(video.id);
        })
    };

    html! {
        <div class="video-card">
            <div class="video-meta">
                <div class="icon-badge">
                    <IconGlyph icon={Icon::Play} />
                </div>
                <div class="video-facts">
                    <span><IconGlyph icon={Icon::Clock} />{video.duration}</span>
                    <span>{video.year}</span>
                </div>
            </div>
            <h3>{video.title}</h3>
            <p>{video.description}</p>

            if props.active {
                <>
                <div class="video-frame">
                    <iframe
                        width="100%"
                        height="100%"
                        src={embed_url(video.embed_id)}
                        title={video.title}
                        allow="autoplay; encrypted-media"
                        allowfullscreen=true
                    />
                </div>
                <button class="video-button close" onclick={toggle}>
                    <IconGlyph icon={Icon::Close} />
                    {"Close Video"}
                </button>
                </>
            } else {
                <>
                <div class="video-placeholder" onclick={toggle.clone()}>
                    <div class="play-circle">
                        <IconGlyph icon={Icon::Play} />
                    </div>
                    <p>{"Click to Play Video"}</p>
                </div>
                <button class="video-button" onclick={toggle}>
                    <IconGlyph icon={Icon::Play} />
                    {"Watch Video"}
                </button>
                </>
            }
        </div>
    }
}

#[function_component(VideoSection)]
pub fn video_section() -> Html {
    let active_video = use_state(|| None::<&'static str>);

    let on_toggle = {
        let active_video = active_video.clone();
        Callback::from(move |id: &'static str| {
            let next = toggle_active(*active_video, id);
            log::debug!("Video panel {:?} -> {:?}", *active_video, next);
            active_video.set(next);
        })
    };

    html! {
        <section class="video-section">
            <div class="section-heading">
                <h2 class="gradient-text">{"Historic Moments"}</h2>
                <p>
                    {"Explore pivotal moments in history that shaped our world. From technological breakthroughs to social movements, these speeches continue to inspire generations."}
                </p>
            </div>
            <div class="video-grid">
                { for VIDEOS.iter().map(|video| html! {
                    <VideoCard
                        key={video.id}
                        video={video}
                        active={*active_video == Some(video.id)}
                        on_toggle={on_toggle.clone()}
                    />
                }) }
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embed_url_uses_embed_id() {
        assert_eq!(
            embed_url("vP4iY1TtS3s"),
            "https://www.youtube.com/embed/vP4iY1TtS3s?autoplay=1&rel=0&modestbranding=1"
        );
    }

    #[test]
    fn test_only_one_panel_is_active() {
        let active = toggle_active(None, "jobs");
        assert_eq!(active, Some("jobs"));

        let active = toggle_active(active, "mlk");
        assert_eq!(active, Some("mlk"));

        assert_eq!(toggle_active(active, "mlk"), None);
    }
}

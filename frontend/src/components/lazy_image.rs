use log::debug;
use web_sys::Event;
use yew::prelude::*;

use crate::config;
use crate::observer::{use_viewport, ObserveMode};

#[derive(Properties, PartialEq)]
pub struct LazyImageProps {
    /// Small blurred placeholder shown until the image nears the viewport.
    pub placeholder: AttrValue,
    pub src: AttrValue,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(LazyImage)]
pub fn lazy_image(props: &LazyImageProps) -> Html {
    let node = use_node_ref();
    let near = use_viewport(node.clone(), config::lazy_image_options(), ObserveMode::Once)
        .unwrap_or(false);
    let loaded = use_state_eq(|| false);

    // The placeholder fires `load` too; only the full image may clear the blur.
    let on_load = {
        let loaded = loaded.clone();
        let src = props.src.clone();
        Callback::from(move |_: Event| {
            if near {
                debug!("lazy image loaded: {}", src);
                loaded.set(true);
            }
        })
    };

    let current_src = if near { props.src.clone() } else { props.placeholder.clone() };

    html! {
        <img
            ref={node}
            src={current_src}
            data-src={props.src.clone()}
            alt={props.alt.clone()}
            class={classes!(props.class.clone(), (!*loaded).then_some("lazy-img"))}
            onload={on_load}
        />
    }
}

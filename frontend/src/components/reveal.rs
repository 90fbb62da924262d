use yew::prelude::*;

use crate::config;
use crate::observer::{use_viewport, ObserveMode};

#[derive(Properties, PartialEq)]
pub struct RevealSectionProps {
    pub id: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// A page section that slides in the first time it scrolls into view.
#[function_component(RevealSection)]
pub fn reveal_section(props: &RevealSectionProps) -> Html {
    let node = use_node_ref();
    let revealed = use_viewport(node.clone(), config::section_reveal_options(), ObserveMode::Once)
        .unwrap_or(false);

    html! {
        <section
            ref={node}
            id={props.id.clone()}
            class={classes!(
                "section",
                props.class.clone(),
                (!revealed).then_some("section--hidden"),
            )}
        >
            { for props.children.iter() }
        </section>
    }
}

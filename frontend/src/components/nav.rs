use log::warn;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config::{NAV_FADE_OPACITY, NAV_REST_OPACITY};
use crate::dom::{delegate_target, is_section_anchor, scroll_to};

const LINKS: [(&str, &str); 3] = [
    ("#section--1", "Features"),
    ("#section--2", "Operations"),
    ("#section--3", "Testimonials"),
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavFade {
    pub hovered: Option<usize>,
    pub opacity: f64,
}

impl Default for NavFade {
    fn default() -> Self {
        Self {
            hovered: None,
            opacity: NAV_REST_OPACITY,
        }
    }
}

impl NavFade {
    pub fn logo_opacity(&self) -> f64 {
        if self.hovered.is_some() {
            self.opacity
        } else {
            NAV_REST_OPACITY
        }
    }
}

/// Opacity of every link in the sibling set when `hovered` is under the
/// pointer: the hovered link stays solid, the others take `opacity`.
pub fn sibling_opacities(count: usize, hovered: Option<usize>, opacity: f64) -> Vec<f64> {
    (0..count)
        .map(|i| match hovered {
            Some(h) if h != i => opacity,
            _ => NAV_REST_OPACITY,
        })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub sticky: bool,
    pub nav_ref: NodeRef,
    pub on_open_account: Callback<MouseEvent>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps {
        sticky,
        nav_ref,
        on_open_account,
    } = props;
    let fade = use_state(NavFade::default);

    // Every link, the "Open account" button included, is part of the sibling set.
    let link_count = LINKS.len() + 1;

    let handle_hover = |opacity: f64| {
        let fade = fade.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(link) = delegate_target(&e, ".nav__link") else {
                return;
            };
            let hovered = link
                .get_attribute("data-link")
                .and_then(|raw| raw.parse::<usize>().ok());
            fade.set(NavFade { hovered, opacity });
        })
    };

    let on_links_click = Callback::from(|e: MouseEvent| {
        let Some(link) = delegate_target(&e, ".nav__link") else {
            return;
        };
        let href = link.get_attribute("href").unwrap_or_default();
        if !is_section_anchor(&href) {
            return;
        }
        e.prevent_default();
        if let Err(err) = scroll_to(&href) {
            warn!("could not scroll to {}: {}", href, err);
        }
    });

    let opacities = sibling_opacities(link_count, fade.hovered, fade.opacity);
    let open_account_index = LINKS.len();

    html! {
        <nav
            ref={nav_ref.clone()}
            class={classes!("nav", sticky.then_some("sticky"))}
            onmouseover={handle_hover(NAV_FADE_OPACITY)}
            onmouseout={handle_hover(NAV_REST_OPACITY)}
        >
            <img
                src="/assets/logo.png"
                alt="Bankist logo"
                class="nav__logo"
                style={format!("opacity: {}", fade.logo_opacity())}
            />
            <ul class="nav__links" onclick={on_links_click}>
                { for LINKS.iter().enumerate().map(|(i, (href, label))| html! {
                    <li class="nav__item">
                        <a
                            class="nav__link"
                            href={*href}
                            data-link={i.to_string()}
                            style={format!("opacity: {}", opacities[i])}
                        >
                            { *label }
                        </a>
                    </li>
                }) }
                <li class="nav__item">
                    <a
                        class="nav__link nav__link--btn btn--show-modal"
                        href="#"
                        data-link={open_account_index.to_string()}
                        style={format!("opacity: {}", opacities[open_account_index])}
                        onclick={on_open_account.clone()}
                    >
                        {"Open account"}
                    </a>
                </li>
            </ul>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hovering_dims_every_other_link() {
        assert_eq!(sibling_opacities(4, Some(1), 0.5), vec![0.5, 1.0, 0.5, 0.5]);
    }

    #[test]
    fn hover_out_restores_siblings() {
        assert_eq!(sibling_opacities(3, Some(2), 1.0), vec![1.0; 3]);
        assert_eq!(sibling_opacities(3, None, 0.5), vec![1.0; 3]);
    }

    #[test]
    fn logo_follows_hover() {
        let hovered = NavFade {
            hovered: Some(0),
            opacity: 0.5,
        };
        assert_eq!(hovered.logo_opacity(), 0.5);
        assert_eq!(NavFade::default().logo_opacity(), 1.0);
    }
}

use log::info;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::dom::delegate_target;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tab {
    pub key: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
    pub heading: &'static str,
    pub body: &'static str,
}

pub const TABS: [Tab; 3] = [
    Tab {
        key: "1",
        title: "Instant Transfers",
        icon: "⇪",
        heading: "Transfer money to anyone, instantly! No fees, no BS.",
        body: "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis nostrud exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat.",
    },
    Tab {
        key: "2",
        title: "Instant Loans",
        icon: "⌂",
        heading: "Buy a home or make your dreams come true, with instant loans.",
        body: "Duis aute irure dolor in reprehenderit in voluptate velit esse cillum dolore eu fugiat nulla pariatur. Excepteur sint occaecat cupidatat non proident, sunt in culpa qui officia deserunt mollit anim id est laborum.",
    },
    Tab {
        key: "3",
        title: "Instant Closing",
        icon: "✕",
        heading: "No longer need your account? No problem! Close it instantly.",
        body: "Excepteur sint occaecat cupidatat non proident, sunt in culpa qui officia deserunt mollit anim id est laborum. Ut enim ad minim veniam, quis nostrud exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat.",
    },
];

/// Maps a clicked `data-tab` value back to a known tab key.
pub fn resolve_tab(raw: &str) -> Option<&'static str> {
    TABS.iter().map(|tab| tab.key).find(|key| *key == raw)
}

#[function_component(Operations)]
pub fn operations() -> Html {
    let active = use_state(|| TABS[0].key);

    let on_tab_click = {
        let active = active.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(tab) = delegate_target(&e, ".operations__tab") else {
                return;
            };
            if let Some(key) = tab.get_attribute("data-tab").as_deref().and_then(resolve_tab) {
                info!("Switching to operations tab {}", key);
                active.set(key);
            }
        })
    };

    html! {
        <div class="operations">
            <div class="operations__tab-container" onclick={on_tab_click}>
                { for TABS.iter().map(|tab| html! {
                    <button
                        class={classes!(
                            "btn",
                            "operations__tab",
                            format!("operations__tab--{}", tab.key),
                            (tab.key == *active).then_some("operations__tab--active"),
                        )}
                        data-tab={tab.key}
                    >
                        <span>{ format!("0{}", tab.key) }</span>{ tab.title }
                    </button>
                }) }
            </div>
            { for TABS.iter().map(|tab| html! {
                <div class={classes!(
                    "operations__content",
                    format!("operations__content--{}", tab.key),
                    (tab.key == *active).then_some("operations__content--active"),
                )}>
                    <div class={classes!("operations__icon", format!("operations__icon--{}", tab.key))}>
                        { tab.icon }
                    </div>
                    <h5 class="operations__header">{ tab.heading }</h5>
                    <p>{ tab.body }</p>
                </div>
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_keys_resolve() {
        assert_eq!(resolve_tab("1"), Some("1"));
        assert_eq!(resolve_tab("3"), Some("3"));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        assert_eq!(resolve_tab("4"), None);
        assert_eq!(resolve_tab(""), None);
    }

    #[test]
    fn tab_keys_are_unique() {
        for (i, tab) in TABS.iter().enumerate() {
            assert!(TABS[i + 1..].iter().all(|other| other.key != tab.key));
        }
    }
}

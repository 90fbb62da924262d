use web_sys::{KeyboardEvent, MouseEvent, SubmitEvent};
use yew::prelude::*;
use yew_hooks::use_event_with_window;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
}

/// Escape only closes a dialog that is actually showing.
pub fn closes_on_key(key: &str, open: bool) -> bool {
    open && key == "Escape"
}

#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let ModalProps { open, on_close } = props;

    {
        let on_close = on_close.clone();
        let open = *open;
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if closes_on_key(&e.key(), open) {
                on_close.emit(());
            }
        });
    }

    let close = {
        let on_close = on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    // Nothing to submit to; keep the page from reloading.
    let on_submit = Callback::from(|e: SubmitEvent| e.prevent_default());

    let hidden = (!*open).then_some("hidden");

    html! {
        <>
            <div class={classes!("modal", hidden)}>
                <button class="btn--close-modal" onclick={close.clone()}>{"×"}</button>
                <h2 class="modal__header">
                    {"Open your bank account "}<br />
                    {"in just "}<span class="highlight">{"5 minutes"}</span>
                </h2>
                <form class="modal__form" onsubmit={on_submit}>
                    <label>{"First Name"}</label>
                    <input type="text" />
                    <label>{"Last Name"}</label>
                    <input type="text" />
                    <label>{"Email Address"}</label>
                    <input type="email" />
                    <button class="btn">{"Next step →"}</button>
                </form>
            </div>
            <div class={classes!("overlay", hidden)} onclick={close}></div>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_closes_only_open_modal() {
        assert!(closes_on_key("Escape", true));
        assert!(!closes_on_key("Escape", false));
        assert!(!closes_on_key("Enter", true));
    }
}

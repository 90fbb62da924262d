use log::info;
use web_sys::MouseEvent;
use yew::prelude::*;

#[function_component(CookieNotice)]
pub fn cookie_notice() -> Html {
    let dismissed = use_state(|| false);

    let dismiss = {
        let dismissed = dismissed.clone();
        Callback::from(move |_: MouseEvent| {
            info!("Cookie notice dismissed");
            dismissed.set(true);
        })
    };

    if *dismissed {
        return html! {};
    }

    html! {
        <div class="cookie-message">
            {"We use cookies for improved functionality and analytics. "}
            <button class="btn btn--close-cookie" onclick={dismiss}>{"Got it!"}</button>
        </div>
    }
}

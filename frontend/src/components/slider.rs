use log::warn;
use stylist::yew::styled_component;
use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::dom::delegate_target;
use crate::slider::{key_action, parse_dot_index, SlideAction, SliderState};

#[derive(Properties, PartialEq)]
pub struct SliderProps {
    /// Each child becomes one slide, in order.
    pub children: Children,
}

#[styled_component(Slider)]
pub fn slider(props: &SliderProps) -> Html {
    let slides = props.children.len();
    let state = use_reducer(|| SliderState::new(slides));

    // Arrow keys work no matter what has focus.
    {
        let dispatcher = state.dispatcher();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if let Some(action) = key_action(&e.key()) {
                dispatcher.dispatch(action);
            }
        });
    }

    let on_previous = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(SlideAction::Previous))
    };

    let on_next = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(SlideAction::Next))
    };

    let on_dots_click = {
        let state = state.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(dot) = delegate_target(&e, ".dots__dot") else {
                return;
            };
            let raw = dot.get_attribute("data-slide").unwrap_or_default();
            match parse_dot_index(&raw, state.len()) {
                Ok(index) => state.dispatch(SlideAction::GoTo(index)),
                Err(e) => warn!("ignoring dot click: {}", e),
            }
        })
    };

    let positioned = props.children.iter().zip(state.offsets());

    html! {
        <div class={classes!("slider", css!(r#"
            max-width: 100rem;
            height: 50rem;
            margin: 0 auto;
            position: relative;
            overflow: hidden;

            .slide {
                position: absolute;
                top: 0;
                width: 100%;
                height: 50rem;
                display: flex;
                align-items: center;
                justify-content: center;
                transition: transform 1s;
            }

            .slider__btn {
                position: absolute;
                top: 50%;
                z-index: 10;
                border: none;
                background: rgba(255, 255, 255, 0.7);
                font-family: inherit;
                color: #333;
                border-radius: 50%;
                height: 5.5rem;
                width: 5.5rem;
                font-size: 3.25rem;
                cursor: pointer;
            }

            .slider__btn--left {
                left: 6%;
                transform: translate(-50%, -50%);
            }

            .slider__btn--right {
                right: 6%;
                transform: translate(50%, -50%);
            }

            .dots {
                position: absolute;
                bottom: 5%;
                left: 50%;
                transform: translateX(-50%);
                display: flex;
            }

            .dots__dot {
                border: none;
                background-color: #b9b9b9;
                opacity: 0.7;
                height: 1rem;
                width: 1rem;
                border-radius: 50%;
                margin-right: 1.75rem;
                cursor: pointer;
                transition: all 0.5s;
            }

            .dots__dot:last-child {
                margin: 0;
            }

            .dots__dot--active {
                background-color: #888;
                opacity: 1;
            }
        "#))}>
            { for positioned.enumerate().map(|(position, (child, offset))| html! {
                <div
                    class={classes!("slide", format!("slide--{}", position + 1))}
                    style={format!("transform: translateX({}%)", offset)}
                >
                    { child }
                </div>
            }) }
            <button class="slider__btn slider__btn--left" onclick={on_previous}>{"←"}</button>
            <button class="slider__btn slider__btn--right" onclick={on_next}>{"→"}</button>
            <div class="dots" onclick={on_dots_click}>
                { for state.dots().iter().enumerate().map(|(position, active)| html! {
                    <button
                        class={classes!("dots__dot", active.then_some("dots__dot--active"))}
                        data-slide={position.to_string()}
                    ></button>
                }) }
            </div>
        </div>
    }
}

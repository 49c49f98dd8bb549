use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config;
use crate::scroll::effects;

#[function_component(BackToTop)]
pub fn back_to_top() -> Html {
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let watched = window.clone();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = watched.scroll_y().unwrap_or(0.0);
                    visible.set(scroll_top > config::BACK_TO_TOP_AFTER_PX);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let onclick = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        effects::scroll_to_y(0.0);
    });

    html! {
        <>
            <style>
                {r#"
                    .back-to-top {
                        position: fixed;
                        bottom: 2rem;
                        right: 2rem;
                        width: 44px;
                        height: 44px;
                        border: none;
                        border-radius: 50%;
                        background: #7A9E7E;
                        color: #fff;
                        font-size: 1.2rem;
                        cursor: pointer;
                        opacity: 0;
                        pointer-events: none;
                        transition: opacity 0.3s ease;
                        z-index: 900;
                    }
                    .back-to-top.show {
                        opacity: 1;
                        pointer-events: auto;
                    }
                "#}
            </style>
            <button
                class={classes!("back-to-top", (*visible).then(|| "show"))}
                title="Back to Top"
                onclick={onclick}
            >
                {"↑"}
            </button>
        </>
    }
}

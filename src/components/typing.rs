use gloo_timers::callback::Timeout;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TypingTextProps {
    pub text: String,
    #[prop_or(50)]
    pub speed_ms: u32,
}

/// Reveals its text one character per tick, like a cursor typing it out.
#[function_component(TypingText)]
pub fn typing_text(props: &TypingTextProps) -> Html {
    let shown = use_state(|| 0usize);

    {
        let shown = shown.clone();
        let total = props.text.chars().count();
        let speed_ms = props.speed_ms;
        use_effect(move || {
            if *shown < total {
                let next = *shown + 1;
                let setter = shown.setter();
                Timeout::new(speed_ms, move || setter.set(next)).forget();
            }
            || ()
        });
    }

    let done = *shown >= props.text.chars().count();
    let visible: String = props.text.chars().take(*shown).collect();

    html! {
        <span class={classes!("typing-effect", done.then(|| "typing-done"))}>{visible}</span>
    }
}

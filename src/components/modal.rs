use web_sys::KeyboardEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub on_close: Callback<()>,
}

fn closes_from_backdrop(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    // Escape closes from anywhere while the modal is mounted
    {
        let on_close = props.on_close.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                on_close.emit(());
            }
        });
    }

    let close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let backdrop_key = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: KeyboardEvent| {
            if closes_from_backdrop(&e.key()) {
                e.prevent_default();
                on_close.emit(());
            }
        })
    };

    html! {
        <div class="modal">
            <div
                role="button"
                tabindex="0"
                aria-label="Close"
                class="modal-backdrop"
                onclick={close_click.clone()}
                onkeydown={backdrop_key}
            ></div>
            <div class="modal-panel">
                <button class="modal-close" onclick={close_click}>{"×"}</button>
                <h3>{"Concept reel"}</h3>
                <p>{"Replace with Vimeo/YouTube embed when available."}</p>
            </div>
        </div>
    }
}

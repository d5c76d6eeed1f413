use yew::prelude::*;

use crate::scroll::{scroll_to, Anchor};

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub on_book: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let book_call = {
        let on_book = props.on_book.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_book.emit(());
        })
    };

    html! {
        <header class="site-header">
            <div class="brand">
                <div class="brand-badge">
                    <span class="sr-only">{"Orca"}</span>
                </div>
                <div class="brand-name">{"The Orca Studios"}</div>
            </div>

            <nav class="site-nav">
                {
                    Anchor::NAV.iter().map(|anchor| {
                        let anchor = *anchor;
                        html! {
                            <button key={anchor.id()} class="nav-button" onclick={Callback::from(move |_| {
                                scroll_to(anchor);
                            })}>
                                {anchor.label()}
                            </button>
                        }
                    }).collect::<Html>()
                }
            </nav>

            <button class="book-button" onclick={book_call}>
                {"Book a call"}
            </button>
        </header>
    }
}

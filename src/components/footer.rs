use chrono::Datelike;
use yew::prelude::*;

use crate::scroll::{scroll_to, Anchor};

pub fn copyright_line(year: i32) -> String {
    format!("© {} The Orca Studios. All rights reserved.", year)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();
    let back_to_top = Callback::from(|_: MouseEvent| {
        scroll_to(Anchor::Top);
    });

    html! {
        <footer class="site-footer">
            <p>{copyright_line(year)}</p>
            <button class="back-to-top" onclick={back_to_top}>
                {format!("{} ↑", Anchor::Top.label())}
            </button>
        </footer>
    }
}

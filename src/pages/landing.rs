use yew::prelude::*;

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::modal::Modal;
use crate::config;
use crate::reveal::hook::use_reveal;
use crate::scroll::Anchor;

fn background(image: &str, position: &str) -> String {
    format!(
        "background-image: url({}); background-size: cover; background-position: {};",
        config::asset_url(image),
        position
    )
}

fn reveal_class(extra: &str) -> Classes {
    classes!(config::REVEAL_CLASS, extra.to_string())
}

#[function_component(Wordmark)]
fn wordmark() -> Html {
    html! {
        <div class="orca-wordmark">
            <p class="line">{"THE"}</p>
            <p class="line">{"ORCA"}</p>
            <p class="line">{"STUDIOS"}</p>
        </div>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let show_modal = use_state(|| false);

    let hero_copy = use_node_ref();
    let hero_mark = use_node_ref();
    let poster = use_node_ref();
    let white_strip = use_node_ref();
    let fabric_marks = use_node_ref();
    let fabric_copy = use_node_ref();
    let stage_card = use_node_ref();

    use_reveal(vec![
        hero_copy.clone(),
        hero_mark.clone(),
        poster.clone(),
        white_strip.clone(),
        fabric_marks.clone(),
        fabric_copy.clone(),
        stage_card.clone(),
    ]);

    let open_modal = {
        let show_modal = show_modal.clone();
        Callback::from(move |_| show_modal.set(true))
    };

    let close_modal = {
        let show_modal = show_modal.clone();
        Callback::from(move |_| show_modal.set(false))
    };

    html! {
        <div class="landing" id={Anchor::Top.id()}>
            <style>{LANDING_CSS}</style>

            <Header on_book={open_modal} />

            <main>
                <section
                    id={Anchor::Hero.id()}
                    aria-label="Hero"
                    class="hero"
                    style={background("paper.jpg", "center right")}
                >
                    <div class="hero-inner">
                        <div ref={hero_copy} class={reveal_class("")}>
                            <Wordmark />
                            <p class="hero-blurb">
                                {"The Orca studios. We are a media content agency that builds cinematic visuals, motion design and short-form assets that convert and delight audiences."}
                            </p>
                        </div>

                        <div ref={hero_mark} class={reveal_class("hero-mark-column")}>
                            <div class="hero-logo-card">
                                <div class="fake-mark hero-mark" aria-hidden="true"></div>
                            </div>
                        </div>
                    </div>
                </section>

                <section
                    id={Anchor::Strip.id()}
                    class="strip"
                    style={background("blackstrip.jpg", "center")}
                >
                    <div class="strip-row">
                        <div class="badge badge-light badge-lg">
                            <div class="fake-mark" aria-hidden="true"></div>
                        </div>
                        <div class="strip-title">{"RCA"}</div>
                    </div>
                </section>

                <section id={Anchor::Brick.id()} class="brick">
                    <div
                        ref={poster}
                        class={reveal_class("poster")}
                        style={background("brick.jpg", "center")}
                    >
                        <div class="poster-card">
                            <Wordmark />
                            <p>
                                {"Visual storytelling, launch visuals, motion graphics and content systems for brands that want to feel cinematic yet bold."}
                            </p>
                        </div>
                    </div>
                </section>

                <section class="white-strip">
                    <div ref={white_strip} class={reveal_class("strip-row")}>
                        <div class="badge badge-dark badge-md">
                            <div class="fake-mark" aria-hidden="true"></div>
                        </div>
                        <div class="strip-title strip-title-dark">{"RCA"}</div>
                    </div>
                </section>

                <section
                    id={Anchor::Fabric.id()}
                    class="fabric"
                    style={background("fabric.jpg", "center")}
                >
                    <div class="fabric-grid">
                        <div ref={fabric_marks} class={reveal_class("fabric-marks")}>
                            <div class="badge badge-light badge-xl fabric-mark-top">
                                <div class="fake-mark" aria-hidden="true"></div>
                            </div>
                            <div class="badge badge-dark badge-xl fabric-mark-bottom">
                                <div class="fake-mark" aria-hidden="true"></div>
                            </div>
                        </div>

                        <div ref={fabric_copy} class={reveal_class("fabric-copy")}>
                            <p class="eyebrow">{"Brand playground"}</p>
                            <p>
                                {"Fabric-inspired lighting gives Orca a cinematic stage. The white and black logo variations glide over the orange cloth, mirroring your brand mockups."}
                            </p>
                        </div>
                    </div>
                </section>

                <section
                    id={Anchor::Stage.id()}
                    class="stage"
                    style={background("stage.jpg", "center")}
                >
                    <div ref={stage_card} class={reveal_class("stage-wrap")}>
                        <div class="stage-card">
                            <div class="stage-brand">
                                <div class="badge badge-dark badge-sm">
                                    <div class="fake-mark" aria-hidden="true"></div>
                                </div>
                                <div class="eyebrow">{"The Orca Studios"}</div>
                            </div>
                            <div class="stage-copy">
                                <p class="coming-soon">{"COMING SOON"}</p>
                                <p>{"Website launch experience for your media content agency."}</p>
                            </div>
                        </div>
                    </div>
                </section>
            </main>

            <Footer />

            {
                if *show_modal {
                    html! { <Modal on_close={close_modal} /> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

const LANDING_CSS: &str = r#"
    :root {
        --header-h: 84px;
        --accent-1: #f6936f;
        --accent-2: #f05820;
    }

    .landing {
        min-height: 100vh;
        background: #000;
        color: #fff;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    }

    .sr-only {
        position: absolute;
        width: 1px;
        height: 1px;
        overflow: hidden;
        clip: rect(0, 0, 0, 0);
    }

    /* header */
    .site-header {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        z-index: 50;
        height: var(--header-h);
        min-height: var(--header-h);
        display: flex;
        align-items: center;
        justify-content: space-between;
        padding: 0 7vw;
        background: rgba(0, 0, 0, 0.88);
        backdrop-filter: blur(8px);
        border-bottom: 1px solid rgba(240, 88, 32, 0.2);
    }

    .brand {
        display: flex;
        align-items: center;
        gap: 0.75rem;
    }

    .brand-badge {
        width: 40px;
        height: 40px;
        border-radius: 999px;
        background: linear-gradient(to top right, var(--accent-1), var(--accent-2));
    }

    .brand-name, .eyebrow {
        text-transform: uppercase;
        letter-spacing: 0.12em;
        font-size: 0.75rem;
        font-weight: 700;
    }

    .site-nav {
        display: flex;
        gap: 1.5rem;
    }

    .nav-button, .back-to-top {
        background: none;
        border: none;
        cursor: pointer;
        text-transform: uppercase;
        letter-spacing: 0.12em;
        font-size: 0.75rem;
        color: rgba(255, 255, 255, 0.9);
    }

    .nav-button:hover {
        color: var(--accent-1);
    }

    .book-button {
        border: none;
        cursor: pointer;
        border-radius: 999px;
        padding: 0.375rem 1rem;
        font-size: 0.75rem;
        font-weight: 600;
        color: #000;
        background: linear-gradient(to top right, var(--accent-1), var(--accent-2));
    }

    main {
        padding-top: calc(var(--header-h) + 8px);
    }

    section {
        position: relative;
        background-repeat: no-repeat;
    }

    /* hero */
    .hero {
        min-height: 72vh;
        display: flex;
        align-items: center;
        padding: 3rem 7vw;
        overflow: visible;
    }

    .hero-inner {
        display: grid;
        grid-template-columns: 1fr minmax(200px, 420px);
        align-items: center;
        gap: 28px;
        width: 100%;
        max-width: 72rem;
        margin: 0 auto;
    }

    .hero-blurb {
        max-width: 32rem;
        margin-top: 1.5rem;
        font-size: 0.875rem;
        color: #222;
    }

    .hero-mark-column {
        display: flex;
        justify-content: center;
        align-items: center;
    }

    .hero-logo-card {
        display: inline-flex;
        align-items: center;
        justify-content: center;
        width: min(220px, 30vw);
        max-width: 320px;
        z-index: 40;
    }

    .orca-wordmark {
        position: relative;
        z-index: 30;
        color: #000;
        font-weight: 900;
        line-height: 0.92;
        font-size: clamp(28px, 5.4vw, 64px);
        letter-spacing: -0.02em;
    }

    .orca-wordmark .line {
        margin: 0;
    }

    .fake-mark {
        width: 88px;
        height: 88px;
        border-radius: 999px;
        box-shadow: 0 20px 40px rgba(0, 0, 0, 0.35);
        background: radial-gradient(circle at 35% 35%, #fff 0%, #f3f3f3 50%);
    }

    .hero-mark {
        width: min(220px, 30vw);
        height: min(220px, 30vw);
    }

    /* round badges holding a mark */
    .badge {
        border-radius: 999px;
        display: flex;
        align-items: center;
        justify-content: center;
    }

    .badge-light { background: #fff; box-shadow: 0 10px 25px rgba(0, 0, 0, 0.3); }
    .badge-dark { background: #000; }
    .badge-sm { width: 56px; height: 56px; }
    .badge-md { width: 80px; height: 80px; }
    .badge-lg { width: 96px; height: 96px; }
    .badge-xl { width: 176px; height: 176px; position: absolute; }

    /* strips */
    .strip {
        padding: 2.5rem 0;
        background-size: cover;
    }

    .strip-row {
        max-width: 72rem;
        margin: 0 auto;
        padding: 0 1.5rem;
        display: flex;
        align-items: center;
        gap: 2.5rem;
    }

    .strip-title {
        text-transform: uppercase;
        font-weight: 900;
        font-size: 3.75rem;
        letter-spacing: 0.12em;
        color: #fff;
        text-shadow: 0 10px 15px rgba(0, 0, 0, 0.4);
    }

    .strip-title-dark {
        color: #000;
        font-size: 3rem;
        text-shadow: none;
    }

    .white-strip {
        background: #fff;
        color: #000;
        padding: 2.5rem 0;
    }

    /* brick poster */
    .brick {
        padding: 4rem 0;
    }

    .poster {
        max-width: 960px;
        margin: 0 auto;
        border-radius: 12px;
        padding: 6rem 2rem;
    }

    .poster-card {
        margin: 0 auto;
        width: min(460px, 100%);
        background: rgba(244, 239, 233, 0.98);
        border-radius: 18px;
        box-shadow: 0 25px 60px rgba(0, 0, 0, 0.6);
        padding: 2rem;
        text-align: center;
    }

    .poster-card .orca-wordmark {
        display: inline-block;
        text-align: left;
    }

    .poster-card p {
        margin-top: 1.5rem;
        font-size: 0.875rem;
        color: #444;
    }

    /* fabric */
    .fabric {
        padding: 5rem 0;
    }

    .fabric-grid {
        max-width: 72rem;
        margin: 0 auto;
        padding: 0 1.5rem;
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 1.5rem;
        align-items: center;
    }

    .fabric-marks {
        position: relative;
        height: 18rem;
    }

    .fabric-mark-top { left: 2rem; top: 2rem; }
    .fabric-mark-bottom { right: 2rem; bottom: 2rem; }

    .fabric-copy {
        max-width: 28rem;
        font-size: 0.875rem;
    }

    /* stage */
    .stage {
        min-height: 64vh;
        display: flex;
        align-items: center;
        justify-content: center;
        padding: 4rem 0;
    }

    .stage-wrap {
        max-width: 64rem;
        width: 100%;
        padding: 0 1.5rem;
    }

    .stage-card {
        background: rgba(255, 255, 255, 0.95);
        color: #000;
        border-radius: 14px;
        padding: 2rem 1.5rem;
        box-shadow: 0 32px 80px rgba(0, 0, 0, 0.9);
        display: flex;
        align-items: center;
        justify-content: space-between;
    }

    .stage-brand {
        display: flex;
        align-items: center;
        gap: 1rem;
    }

    .stage-copy {
        text-align: right;
        font-size: 0.875rem;
        color: #444;
    }

    .coming-soon {
        text-transform: uppercase;
        letter-spacing: 0.26em;
        font-size: 0.75rem;
        color: #000;
    }

    /* reveal animation */
    .reveal {
        opacity: 0;
        transform: translateY(14px);
        transition: opacity 600ms ease, transform 600ms ease;
    }

    .reveal.visible {
        opacity: 1;
        transform: translateY(0);
    }

    /* footer */
    .site-footer {
        position: relative;
        z-index: 10;
        border-top: 1px solid rgba(240, 88, 32, 0.4);
        background: #000;
        padding: 1rem 7vw;
        display: flex;
        align-items: center;
        justify-content: space-between;
        font-size: 0.75rem;
        color: #e5e5e5;
    }

    .back-to-top {
        color: var(--accent-1);
        font-size: 0.7rem;
    }

    /* modal */
    .modal {
        position: fixed;
        inset: 0;
        z-index: 60;
    }

    .modal-backdrop {
        position: absolute;
        inset: 0;
        background: rgba(0, 0, 0, 0.7);
    }

    .modal-panel {
        position: absolute;
        left: 50%;
        top: 50%;
        transform: translate(-50%, -50%);
        width: 90%;
        max-width: 42rem;
        background: #050505;
        border: 1px solid rgba(240, 88, 32, 0.6);
        border-radius: 1rem;
        padding: 1.5rem;
    }

    .modal-panel h3 {
        text-transform: uppercase;
        letter-spacing: 0.16em;
        font-size: 0.85rem;
        color: var(--accent-1);
        margin-bottom: 0.5rem;
    }

    .modal-panel p {
        font-size: 0.875rem;
        color: #f0f0f0;
    }

    .modal-close {
        position: absolute;
        right: 1rem;
        top: 0.5rem;
        background: none;
        border: none;
        color: #fff;
        font-size: 1.25rem;
        cursor: pointer;
    }

    @media (min-width: 1024px) {
        .orca-wordmark { font-size: 56px; }
    }

    @media (max-width: 768px) {
        :root { --header-h: 68px; }
        .site-header { padding: 0 1.5rem; }
        .site-nav { display: none; }
        .hero { padding: 3rem 1.5rem; }
        .hero-inner { grid-template-columns: 1fr; gap: 16px; }
        .orca-wordmark { font-size: clamp(22px, 7vw, 40px); }
        .hero-logo-card { width: 140px; }
        .fabric-grid { grid-template-columns: 1fr; }
        .site-footer { padding: 1rem 1.5rem; }
    }
"#;

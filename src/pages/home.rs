use yew::prelude::*;

use crate::components::gallery::{Gallery, GalleryImage};
use crate::components::typing::TypingText;
use crate::config;
use crate::forms::newsletter::NewsletterForm;
use crate::scroll::{effects, observe};

const GALLERY_IMAGES: [GalleryImage; 4] = [
    GalleryImage { src: "/assets/gallery/morning-flow.jpg", title: "Morning flow" },
    GalleryImage { src: "/assets/gallery/studio-hall.jpg", title: "The main hall" },
    GalleryImage { src: "/assets/gallery/outdoor-session.jpg", title: "Lakeside session" },
    GalleryImage { src: "/assets/gallery/workshop.jpg", title: "Alignment workshop" },
];

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    // Collect every animation target from the rendered markup once, then
    // hand them to the visibility triggers. The handles tear everything
    // down when the page unmounts.
    use_effect_with_deps(
        move |_| {
            let mut watches: Vec<observe::WatchHandle> = Vec::new();
            let mut scroll_effects: Option<effects::ScrollEffects> = None;

            if let Some(document) = web_sys::window().and_then(|window| window.document()) {
                watches.push(observe::watch(
                    observe::reveal_targets(&document),
                    config::REVEAL_THRESHOLD,
                    config::REVEAL_MARGIN_PX,
                ));
                watches.push(observe::watch(
                    observe::counter_targets(&document),
                    config::COUNTER_THRESHOLD,
                    0,
                ));
                watches.push(observe::watch(
                    observe::progress_targets(&document),
                    config::PROGRESS_THRESHOLD,
                    0,
                ));
                watches.push(observe::watch(observe::lazy_image_targets(&document), 0.0, 0));
                scroll_effects = effects::attach(&document);
            }

            move || {
                drop(watches);
                drop(scroll_effects);
            }
        },
        (),
    );

    let scroll_to_classes = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        effects::scroll_to_section("classes");
    });
    let scroll_to_newsletter = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        effects::scroll_to_section("newsletter");
    });

    html! {
        <div class="home-page">
            <style>
                {r#"
                    .scroll-progress {
                        position: fixed;
                        top: 0;
                        left: 0;
                        height: 3px;
                        width: 0%;
                        background: #7A9E7E;
                        z-index: 1100;
                    }
                    .hero-section {
                        min-height: 90vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                        background-image: url('/assets/hero.jpg');
                        background-size: cover;
                        background-position: center 0px;
                        color: #fff;
                        padding: 2rem;
                    }
                    .hero-section h1 {
                        font-size: 3rem;
                        margin-bottom: 1rem;
                    }
                    .typing-effect {
                        border-right: 2px solid rgba(255, 255, 255, 0.8);
                        padding-right: 4px;
                    }
                    .typing-effect.typing-done {
                        border-right: none;
                    }
                    .hero-buttons .btn-primary {
                        margin: 0 0.5rem;
                    }
                    .fade-in-up, .fade-in-left, .fade-in-right, .fade-in-down,
                    .zoom-in, .rotate-in {
                        opacity: 0;
                        transition: opacity 0.6s ease, transform 0.6s ease;
                    }
                    .fade-in-up { transform: translateY(40px); }
                    .fade-in-down { transform: translateY(-40px); }
                    .fade-in-left { transform: translateX(-40px); }
                    .fade-in-right { transform: translateX(40px); }
                    .zoom-in { transform: scale(0.85); }
                    .rotate-in { transform: rotate(-6deg) scale(0.95); }
                    .fade-in-up.animated, .fade-in-left.animated,
                    .fade-in-right.animated, .fade-in-down.animated {
                        opacity: 1;
                        transform: translate(0, 0);
                    }
                    .zoom-in.animated { opacity: 1; transform: scale(1); }
                    .rotate-in.animated { opacity: 1; transform: rotate(0) scale(1); }
                    .stats-section {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: space-around;
                        padding: 4rem 2rem;
                        background: #F4F1EA;
                        text-align: center;
                    }
                    .stats-section .counter {
                        font-size: 2.5rem;
                        font-weight: 700;
                        color: #4A6B4E;
                        display: block;
                    }
                    .classes-section, .intensity-section, .gallery-section,
                    .newsletter-section {
                        padding: 4rem 2rem;
                        max-width: 1100px;
                        margin: 0 auto;
                    }
                    .class-cards {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                        gap: 1.5rem;
                    }
                    .class-card {
                        background: #fff;
                        border-radius: 12px;
                        padding: 1.5rem;
                        box-shadow: 0 8px 24px rgba(0, 0, 0, 0.08);
                    }
                    .progress-track {
                        background: #E4E0D5;
                        border-radius: 6px;
                        overflow: hidden;
                        margin-bottom: 1.25rem;
                    }
                    .progress-bar {
                        height: 10px;
                        width: 0%;
                        background: #7A9E7E;
                        border-radius: 6px;
                    }
                "#}
            </style>

            <div class="scroll-progress"></div>

            <section class="hero-section">
                <h1><TypingText text={"Breathe. Move. Be still."} /></h1>
                <p data-parallax="0.3">{"Daily yoga classes for every body, in the heart of the city."}</p>
                <div class="hero-buttons">
                    <button class="btn-primary" onclick={scroll_to_classes}>{"Explore classes"}</button>
                    <button class="btn-primary" onclick={scroll_to_newsletter}>{"Stay in touch"}</button>
                </div>
            </section>

            <section class="stats-section">
                <div class="stat fade-in-up">
                    <span class="counter" data-count="1200" data-suffix="+">{"0"}</span>
                    <span>{"Active members"}</span>
                </div>
                <div class="stat fade-in-up">
                    <span class="counter" data-count="85">{"0"}</span>
                    <span>{"Classes every week"}</span>
                </div>
                <div class="stat fade-in-up">
                    <span class="counter" data-count="12">{"0"}</span>
                    <span>{"Years of practice"}</span>
                </div>
                <div class="stat fade-in-up">
                    <span class="counter" data-count="1499" data-prefix="₹" data-duration="1500">{"0"}</span>
                    <span>{"Unlimited monthly pass"}</span>
                </div>
            </section>

            <section id="classes" class="classes-section">
                <h2 class="fade-in-down">{"Find your practice"}</h2>
                <div class="class-cards">
                    <div class="class-card fade-in-left">
                        <h3>{"Hatha Foundations"}</h3>
                        <p>{"Slow, precise postures for new practitioners. Build strength and learn to breathe with intention."}</p>
                    </div>
                    <div class="class-card fade-in-up">
                        <h3>{"Vinyasa Flow"}</h3>
                        <p>{"Movement linked to breath. A dynamic sequence that keeps the heart rate up and the mind quiet."}</p>
                    </div>
                    <div class="class-card fade-in-right">
                        <h3>{"Yin & Restore"}</h3>
                        <p>{"Long, supported holds to release deep tissue. The class everyone needs and nobody schedules."}</p>
                    </div>
                    <div class="class-card zoom-in">
                        <h3>{"Power Yoga"}</h3>
                        <p>{"Strength-focused standing series for experienced students. Expect to work."}</p>
                    </div>
                </div>
            </section>

            <section class="intensity-section">
                <h2 class="fade-in-down">{"How hard do they push?"}</h2>
                <div class="intensity">
                    <label>{"Hatha Foundations"}</label>
                    <div class="progress-track"><div class="progress-bar" data-width="35"></div></div>
                    <label>{"Vinyasa Flow"}</label>
                    <div class="progress-track"><div class="progress-bar" data-width="65"></div></div>
                    <label>{"Yin & Restore"}</label>
                    <div class="progress-track"><div class="progress-bar" data-width="20"></div></div>
                    <label>{"Power Yoga"}</label>
                    <div class="progress-track"><div class="progress-bar" data-width="90"></div></div>
                </div>
            </section>

            <section class="gallery-section">
                <h2 class="fade-in-down">{"Inside the studio"}</h2>
                <Gallery images={GALLERY_IMAGES.to_vec()} />
            </section>

            <section id="newsletter" class="newsletter-section rotate-in">
                <h2>{"A short letter, once a month"}</h2>
                <p>{"Schedule changes, workshops and the occasional recipe. No noise."}</p>
                <NewsletterForm />
            </section>
        </div>
    }
}

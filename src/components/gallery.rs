use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub struct GalleryImage {
    pub src: &'static str,
    pub title: &'static str,
}

#[derive(Properties, PartialEq)]
pub struct GalleryProps {
    pub images: Vec<GalleryImage>,
}

/// Image grid with a lightbox overlay. The overlay markup exists only while
/// an image is open and is owned by this component's state; opening the same
/// image twice is a plain state write, not a second overlay.
#[function_component(Gallery)]
pub fn gallery(props: &GalleryProps) -> Html {
    let open = use_state(|| None::<usize>);

    let close = {
        let open = open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            open.set(None);
        })
    };

    html! {
        <>
            <style>
                {r#"
                    .gallery-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
                        gap: 1rem;
                    }
                    .gallery-grid img {
                        width: 100%;
                        border-radius: 8px;
                        cursor: pointer;
                        display: block;
                    }
                    .lightbox-overlay {
                        position: fixed;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.85);
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        z-index: 1000;
                    }
                    .lightbox-overlay img {
                        max-width: 90vw;
                        max-height: 80vh;
                        border-radius: 8px;
                    }
                    .lightbox-title {
                        color: #fff;
                        margin-top: 1rem;
                    }
                    .lightbox-close {
                        position: absolute;
                        top: 1.5rem;
                        right: 2rem;
                        background: none;
                        border: none;
                        color: #fff;
                        font-size: 2rem;
                        cursor: pointer;
                    }
                "#}
            </style>
            <div class="gallery-grid">
                {
                    props.images.iter().enumerate().map(|(i, image)| {
                        let open = open.clone();
                        let onclick = Callback::from(move |_: MouseEvent| open.set(Some(i)));
                        // Real sources load lazily once the grid scrolls into view.
                        html! {
                            <img
                                data-src={image.src}
                                alt={image.title}
                                onclick={onclick}
                            />
                        }
                    }).collect::<Html>()
                }
            </div>
            {
                if let Some(image) = (*open).and_then(|i| props.images.get(i)) {
                    html! {
                        <div class="lightbox-overlay" onclick={close.clone()}>
                            <button class="lightbox-close" onclick={close.clone()}>{"×"}</button>
                            <img src={image.src} alt={image.title} />
                            <div class="lightbox-title">{image.title}</div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </>
    }
}

use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod anim {
    pub mod tween;
}
mod scroll {
    pub mod effects;
    pub mod observe;
}
mod forms {
    pub mod common;
    pub mod contact;
    pub mod newsletter;
    pub mod registration;
    pub mod rules;
}
mod components {
    pub mod back_to_top;
    pub mod gallery;
    pub mod typing;
}
mod pages {
    pub mod contact;
    pub mod home;
    pub mod schedule;
}

use components::back_to_top::BackToTop;
use pages::{contact::Contact, home::Home, schedule::Schedule};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/schedule")]
    Schedule,
    #[at("/contact")]
    Contact,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Schedule => {
            info!("Rendering Schedule page");
            html! { <Schedule /> }
        }
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);
    let route = use_route::<Route>();

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let watched = window.clone();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = watched.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(scroll_top > config::NAV_SCROLLED_AFTER_PX);
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

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let link_class = |target: Route| {
        classes!("nav-link", (route == Some(target)).then(|| "active"))
    };

    let menu_class = if *menu_open { "nav-right mobile-menu-open" } else { "nav-right" };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"Asana Studio"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Home} classes={link_class(Route::Home)}>
                            {"Home"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Schedule} classes={link_class(Route::Schedule)}>
                            {"Schedule"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Contact} classes={link_class(Route::Contact)}>
                            {"Contact"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    let year = web_sys::js_sys::Date::new_0().get_full_year();

    html! {
        <footer class="site-footer">
            <p>
                {"© "}
                <span class="copyright-year">{year}</span>
                {" Asana Studio. All rights reserved."}
            </p>
        </footer>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
            <BackToTop />
            <Footer />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

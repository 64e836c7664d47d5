use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod checkout;
mod config;
mod services;
mod components {
    pub mod footer;
    pub mod free_trial;
    pub mod payment_modal;
    pub mod purchase_modal;
}
mod pages {
    pub mod contato;
    pub mod home;
    pub mod servicos;
    pub mod sobre;
}

use components::footer::Footer;
use pages::{contato::Contato, home::Home, servicos::Servicos, sobre::Sobre};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/servicos")]
    Servicos,
    #[at("/sobre")]
    Sobre,
    #[at("/contato")]
    Contato,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Servicos => {
            info!("Rendering Servicos page");
            html! { <Servicos /> }
        }
        Route::Sobre => {
            info!("Rendering Sobre page");
            html! { <Sobre /> }
        }
        Route::Contato => {
            info!("Rendering Contato page");
            html! { <Contato /> }
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();

            let scroll_callback = Closure::wrap(Box::new(move || {
                let scroll_top = document.document_element().unwrap().scroll_top();
                is_scrolled.set(scroll_top > 20);
            }) as Box<dyn FnMut()>);

            window
                .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                .unwrap();

            move || {
                window
                    .remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();
            }
        }, ());
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

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <span class="logo-mark">{"A"}</span>
                    <span class="logo-text">{"Adquira"}<span class="logo-accent">{"Seguidor"}</span></span>
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Home} classes="nav-link">{"Home"}</Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Servicos} classes="nav-link">{"Serviços"}</Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Sobre} classes="nav-link">{"Sobre"}</Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Contato} classes="nav-link">{"Contato"}</Link<Route>>
                    </div>
                    <div onclick={close_menu}>
                        <Link<Route> to={Route::Servicos} classes="nav-cta">{"Ver Serviços"}</Link<Route>>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 100;
                        transition: all 0.3s ease;
                        background: transparent;
                    }

                    .top-nav.scrolled {
                        background: rgba(15, 15, 15, 0.95);
                        backdrop-filter: blur(8px);
                        border-bottom: 1px solid rgba(255, 255, 255, 0.08);
                        box-shadow: 0 4px 20px rgba(0, 0, 0, 0.3);
                    }

                    .nav-content {
                        max-width: 1100px;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        height: 4.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }

                    .nav-logo {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        text-decoration: none;
                    }

                    .logo-mark {
                        width: 2.5rem;
                        height: 2.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        border-radius: 10px;
                        background: linear-gradient(135deg, #f2b705, #e0a800);
                        color: #1a1a1a;
                        font-weight: 800;
                        font-size: 1.25rem;
                    }

                    .logo-text {
                        color: #fff;
                        font-weight: 700;
                        font-size: 1.15rem;
                    }

                    .logo-accent {
                        color: #f2b705;
                    }

                    .nav-right {
                        display: flex;
                        align-items: center;
                        gap: 2rem;
                    }

                    .nav-link {
                        color: #ccc;
                        font-weight: 600;
                        text-decoration: none;
                        transition: color 0.2s ease;
                    }

                    .nav-link:hover {
                        color: #f2b705;
                    }

                    .nav-cta {
                        background: linear-gradient(45deg, #f2b705, #e0a800);
                        color: #1a1a1a;
                        font-weight: 700;
                        padding: 0.6rem 1.25rem;
                        border-radius: 10px;
                        text-decoration: none;
                        transition: all 0.3s ease;
                    }

                    .nav-cta:hover {
                        transform: translateY(-2px);
                        box-shadow: 0 4px 16px rgba(242, 183, 5, 0.3);
                    }

                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 0.3rem;
                        background: none;
                        border: none;
                        cursor: pointer;
                        padding: 0.5rem;
                    }

                    .burger-menu span {
                        width: 1.5rem;
                        height: 2px;
                        background: #fff;
                        border-radius: 2px;
                    }

                    @media (max-width: 768px) {
                        .burger-menu {
                            display: flex;
                        }

                        .nav-right {
                            position: absolute;
                            top: 4.5rem;
                            left: 0;
                            right: 0;
                            flex-direction: column;
                            gap: 1rem;
                            background: rgba(15, 15, 15, 0.98);
                            border-bottom: 1px solid rgba(255, 255, 255, 0.08);
                            padding: 1.5rem;
                            display: none;
                        }

                        .nav-right.mobile-menu-open {
                            display: flex;
                        }
                    }
                "#}
            </style>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
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

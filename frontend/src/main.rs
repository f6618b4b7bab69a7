use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod contact;
mod content;
mod motion;
mod scroll;
mod pages {
    pub mod home;
    pub mod not_found;
    pub mod pricing;
    pub mod work;
}

use contact::{ContactModal, ContactOpener};
use pages::{
    home::Home,
    not_found::NotFound,
    pricing::Pricing,
    work::{ProjectDetail, Work},
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/work")]
    Work,
    #[at("/work/:slug")]
    Project { slug: String },
    #[at("/pricing")]
    Pricing,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Work => {
            info!("Rendering Work page");
            html! { <Work /> }
        },
        Route::Project { slug } => {
            info!("Rendering Project page for {}", slug);
            html! { <ProjectDetail {slug} /> }
        },
        Route::Pricing => {
            info!("Rendering Pricing page");
            html! { <Pricing /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub on_contact: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let talk = {
        let on_contact = props.on_contact.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            on_contact.emit(());
        })
    };

    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"aelio"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={classes!("nav-right", (*menu_open).then(|| "mobile-menu-open"))}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Work} classes="nav-link">{"Work"}</Link<Route>>
                    </div>
                    <div onclick={close_menu}>
                        <Link<Route> to={Route::Pricing} classes="nav-link">{"Pricing"}</Link<Route>>
                    </div>
                    <button class="nav-cta" onclick={talk}>{"Let's talk"}</button>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    let contact_open = use_state(|| false);

    let open_contact = {
        let contact_open = contact_open.clone();
        Callback::from(move |_: ()| contact_open.set(true))
    };
    let close_contact = {
        let contact_open = contact_open.clone();
        Callback::from(move |_: ()| contact_open.set(false))
    };

    html! {
        <BrowserRouter>
            <ContextProvider<ContactOpener> context={ContactOpener(open_contact.clone())}>
                <Nav on_contact={open_contact} />
                <Switch<Route> render={switch} />
                <ContactModal is_open={*contact_open} on_close={close_contact} />
            </ContextProvider<ContactOpener>>
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(Level::Info) {
        web_sys::console::error_1(&format!("error initializing log: {}", e).into());
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

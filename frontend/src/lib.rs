pub mod components;
pub mod config;
pub mod hooks;
pub mod pages;
pub mod styles;

use yew::prelude::*;
use yew_router::prelude::*;
use crate::pages::{admin::Admin, home::Home};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
   #[at("/")] Home,
   #[at("/admin")] Admin,
   #[not_found]
   #[at("/404")] NotFound,
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <div class="min-h-screen w-full">
                <div class="mx-auto">
                    <Switch<Route> render={switch} />
                </div>
            </div>
        </BrowserRouter>
    }
}

pub fn switch(route: Route) -> Html {
   match route {
       Route::Home => html! { <Home /> },
       Route::Admin => html! { <Admin /> },
       Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
   }
}

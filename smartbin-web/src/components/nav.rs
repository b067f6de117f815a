use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct NavBarProps {
    pub active: Route,
}

/// Top navigation; the entry for `active` is highlighted and marked as the current page.
#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    let items = Route::NAV.iter().map(|&route| {
        let current = route == props.active;
        let classes = classes!("nav-link", current.then_some("active"));
        html! {
            <li key={route.label()}>
                <Link<Route> to={route} classes={classes}>
                    { route.label() }
                </Link<Route>>
            </li>
        }
    });
    html! {
        <nav class="navbar" aria-label="Main">
            <span class="brand">{ "Smart Bin" }</span>
            <ul class="nav-links">
                { for items }
            </ul>
        </nav>
    }
}

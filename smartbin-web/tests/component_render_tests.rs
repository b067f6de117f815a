use futures::executor::block_on;
use smartbin_web::components::nav::{NavBar, NavBarProps};
use smartbin_web::components::rare_popup::{RarePopup, RarePopupProps};
use smartbin_web::router::Route;
use yew::prelude::*;
use yew::LocalServerRenderer;
use yew_router::history::{AnyHistory, History, MemoryHistory};
use yew_router::Router;

#[derive(Properties, PartialEq)]
struct RoutedNavProps {
    active: Route,
}

#[function_component(RoutedNav)]
fn routed_nav(props: &RoutedNavProps) -> Html {
    let history = AnyHistory::from(MemoryHistory::new());
    history.push("/");
    html! {
        <Router history={history}>
            <NavBar active={props.active} />
        </Router>
    }
}

#[test]
fn nav_highlights_only_active_route() {
    let html = block_on(
        LocalServerRenderer::<RoutedNav>::with_props(RoutedNavProps {
            active: Route::Logs,
        })
        .render(),
    );
    for route in Route::NAV {
        assert!(html.contains(route.label()), "missing {}", route.label());
    }
    assert!(html.contains("href=\"/logs\""));
    assert_eq!(html.matches("nav-link active").count(), 1);
}

#[test]
fn not_found_highlights_nothing() {
    let html = block_on(
        LocalServerRenderer::<RoutedNav>::with_props(RoutedNavProps {
            active: Route::NotFound,
        })
        .render(),
    );
    assert!(!html.contains("nav-link active"));
}

#[test]
fn rare_popup_renders_only_with_item() {
    let hidden = block_on(
        LocalServerRenderer::<RarePopup>::with_props(RarePopupProps { item: None }).render(),
    );
    assert!(!hidden.contains("You unlocked"));

    let shown = block_on(
        LocalServerRenderer::<RarePopup>::with_props(RarePopupProps {
            item: Some(AttrValue::from("Eco Crystal")),
        })
        .render(),
    );
    assert!(shown.contains("You unlocked a "));
    assert!(shown.contains("<b>Eco Crystal</b>"));
}

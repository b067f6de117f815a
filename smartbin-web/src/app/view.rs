use super::handlers::AppHandlers;
use super::state::AppState;
use crate::components::nav::NavBar;
use crate::components::rare_popup::RarePopup;
use crate::pages::{
    calibration::CalibrationPage, home::HomePage, logs::LogsPage, maintenance::MaintenancePage,
    not_found::NotFound, rewards::RewardsPage, status::StatusPage, throw::ThrowPage,
};
use crate::router::Route;
use smartbin_core::constants::RECENT_LOG_WINDOW;
use yew::prelude::*;
use yew_router::prelude::Navigator;

pub fn render_app(state: &AppState, route: Route, navigator: Option<Navigator>) -> Html {
    let handlers = AppHandlers::new(state, navigator);
    let record = &*state.record;

    let page = match route {
        Route::Home => html! {
            <HomePage
                username={AttrValue::from(record.username.clone())}
                points={record.points}
                balance={record.balance}
            />
        },
        Route::Throw => html! {
            <ThrowPage
                lines={(*state.throw_lines).clone()}
                error={(*state.throw_error).clone()}
                on_detect={handlers.detect.clone()}
            />
        },
        Route::Status => html! { <StatusPage status={record.status()} /> },
        Route::Calibration => html! {
            <CalibrationPage
                report={(*state.calibration).clone()}
                on_calibrate={handlers.calibrate.clone()}
            />
        },
        Route::Maintenance => html! {
            <MaintenancePage
                report={(*state.maintenance).clone()}
                on_diagnose={handlers.diagnose.clone()}
            />
        },
        Route::Logs => {
            let lines = record
                .recent_logs(RECENT_LOG_WINDOW)
                .into_iter()
                .map(|entry| entry.display_line())
                .collect::<Vec<_>>();
            html! {
                <LogsPage
                    lines={lines}
                    on_refresh={handlers.refresh_logs.clone()}
                    on_clear={handlers.clear_logs.clone()}
                />
            }
        }
        Route::Rewards => html! {
            <RewardsPage
                balance={record.balance}
                items={state.bin.borrow().catalog().items.clone()}
                message={(*state.shop_message).clone()}
                on_buy={handlers.buy.clone()}
            />
        },
        Route::NotFound => html! { <NotFound on_go_home={handlers.go_home.clone()} /> },
    };

    html! {
        <>
            <header role="banner">
                <NavBar active={route} />
            </header>
            <main id="main" role="main">
                { page }
            </main>
            <RarePopup item={(*state.rare_popup).clone()} />
            <footer class="footer">
                <p>{ "Smart Bin demo. Detections are simulated." }</p>
            </footer>
        </>
    }
}

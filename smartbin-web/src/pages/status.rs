use smartbin_core::StatusSummary;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StatusPageProps {
    pub status: StatusSummary,
}

#[function_component(StatusPage)]
pub fn status_page(props: &StatusPageProps) -> Html {
    let s = &props.status;
    let rows = [
        ("Username", s.username.clone()),
        ("Points", s.points.to_string()),
        ("Balance", s.balance.to_string()),
        ("Logs stored", s.logs_stored.to_string()),
        ("Purchases", s.purchases.clone()),
    ];
    html! {
        <section class="panel status">
            <h1>{ "Bin Status" }</h1>
            <dl class="status-list">
                { for rows.into_iter().map(|(label, value)| html! {
                    <>
                        <dt>{ label }</dt>
                        <dd>{ value }</dd>
                    </>
                }) }
            </dl>
        </section>
    }
}

use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct LogsPageProps {
    /// Rendered log lines, newest first.
    pub lines: Vec<String>,
    pub on_refresh: Callback<()>,
    pub on_clear: Callback<()>,
}

#[function_component(LogsPage)]
pub fn logs_page(props: &LogsPageProps) -> Html {
    let refresh = {
        let cb = props.on_refresh.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let clear = {
        let cb = props.on_clear.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let body = if props.lines.is_empty() {
        html! { <p class="empty">{ "No logs yet." }</p> }
    } else {
        html! {
            <ol class="log-lines">
                { for props.lines.iter().map(|line| html! { <li>{ line.clone() }</li> }) }
            </ol>
        }
    };
    html! {
        <section class="panel logs">
            <h1>{ "Detection Logs" }</h1>
            <div class="actions">
                <button type="button" onclick={refresh}>{ "Refresh" }</button>
                <button type="button" onclick={clear}>{ "Clear Logs" }</button>
            </div>
            { body }
        </section>
    }
}

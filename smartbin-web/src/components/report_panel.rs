use yew::prelude::*;

/// Progress of a cosmetic sensor report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ReportState {
    #[default]
    Idle,
    Running,
    Ready(Vec<String>),
}

impl ReportState {
    #[must_use]
    pub const fn is_running(&self) -> bool {
        matches!(self, Self::Running)
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct ReportPanelProps {
    pub title: AttrValue,
    pub button_label: AttrValue,
    pub busy_text: AttrValue,
    pub report: ReportState,
    pub on_run: Callback<()>,
}

/// Button plus output area shared by the calibration and maintenance pages.
#[function_component(ReportPanel)]
pub fn report_panel(props: &ReportPanelProps) -> Html {
    let on_click = {
        let cb = props.on_run.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let body = match &props.report {
        ReportState::Idle => Html::default(),
        ReportState::Running => html! { <p class="busy">{ props.busy_text.clone() }</p> },
        ReportState::Ready(lines) => html! {
            <ul class="report-lines">
                { for lines.iter().map(|line| html! { <li>{ line.clone() }</li> }) }
            </ul>
        },
    };
    html! {
        <section class="panel report">
            <h1>{ props.title.clone() }</h1>
            <button type="button" onclick={on_click} disabled={props.report.is_running()}>
                { props.button_label.clone() }
            </button>
            <div class="report-output" aria-live="polite">{ body }</div>
        </section>
    }
}

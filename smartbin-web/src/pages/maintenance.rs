use crate::components::report_panel::{ReportPanel, ReportState};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct MaintenancePageProps {
    pub report: ReportState,
    pub on_diagnose: Callback<()>,
}

#[function_component(MaintenancePage)]
pub fn maintenance_page(props: &MaintenancePageProps) -> Html {
    html! {
        <ReportPanel
            title="Maintenance"
            button_label="Run Diagnostics"
            busy_text="Running diagnostics..."
            report={props.report.clone()}
            on_run={props.on_diagnose.clone()}
        />
    }
}

use crate::components::report_panel::{ReportPanel, ReportState};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CalibrationPageProps {
    pub report: ReportState,
    pub on_calibrate: Callback<()>,
}

#[function_component(CalibrationPage)]
pub fn calibration_page(props: &CalibrationPageProps) -> Html {
    html! {
        <ReportPanel
            title="Sensor Calibration"
            button_label="Calibrate Sensors"
            busy_text="Recalibrating sensors..."
            report={props.report.clone()}
            on_run={props.on_calibrate.clone()}
        />
    }
}

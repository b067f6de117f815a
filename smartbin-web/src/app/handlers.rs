use super::state::AppState;
use crate::components::report_panel::ReportState;
use crate::dom::{js_error_message, sleep_ms};
use crate::router::Route;
use chrono::Utc;
use smartbin_core::CategoryError;
use smartbin_core::constants::{DIAGNOSTIC_DELAY_MS, RARE_POPUP_MS};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::Navigator;

#[derive(Clone)]
pub struct AppHandlers {
    pub detect: Callback<String>,
    pub buy: Callback<String>,
    pub calibrate: Callback<()>,
    pub diagnose: Callback<()>,
    pub refresh_logs: Callback<()>,
    pub clear_logs: Callback<()>,
    pub go_home: Callback<()>,
}

impl AppHandlers {
    #[must_use]
    pub fn new(state: &AppState, navigator: Option<Navigator>) -> Self {
        Self {
            detect: build_detect(state),
            buy: build_buy(state),
            calibrate: build_calibrate(state),
            diagnose: build_diagnose(state),
            refresh_logs: build_refresh_logs(state),
            clear_logs: build_clear_logs(state),
            go_home: build_go_home(navigator),
        }
    }
}

fn selection_message(err: &CategoryError) -> AttrValue {
    match err {
        CategoryError::Missing => AttrValue::from("Please select a waste type!"),
        CategoryError::Unknown(_) => AttrValue::from(err.to_string()),
    }
}

pub fn build_detect(state: &AppState) -> Callback<String> {
    let bin = state.bin.clone();
    let record = state.record.clone();
    let lines = state.throw_lines.clone();
    let error = state.throw_error.clone();
    Callback::from(move |selection: String| {
        let outcome = bin.borrow_mut().throw(&selection, Utc::now());
        match outcome {
            Ok(outcome) => {
                error.set(None);
                lines.set(outcome.summary_lines());
                record.set(outcome.receipt.record);
            }
            Err(err) => {
                log::debug!("rejected selection {selection:?}: {err}");
                lines.set(Vec::new());
                error.set(Some(selection_message(&err)));
            }
        }
    })
}

pub fn build_buy(state: &AppState) -> Callback<String> {
    let bin = state.bin.clone();
    let record = state.record.clone();
    let message = state.shop_message.clone();
    let popup = state.rare_popup.clone();
    let timer = state.popup_timer.clone();
    Callback::from(move |item_id: String| {
        let outcome = bin.borrow().buy(&item_id);
        match outcome {
            Ok(outcome) => {
                message.set(Some(AttrValue::from(outcome.message())));
                record.set(bin.borrow().snapshot());
                if let Some(item) = outcome.rare_unlock() {
                    popup.set(Some(AttrValue::from(item.to_string())));
                    let token = timer.borrow_mut().arm();
                    let popup = popup.clone();
                    let timer = timer.clone();
                    spawn_local(async move {
                        if let Err(err) = sleep_ms(RARE_POPUP_MS).await {
                            log::warn!("popup timer failed: {}", js_error_message(&err));
                        }
                        if timer.borrow().is_current(token) {
                            popup.set(None);
                        }
                    });
                }
            }
            Err(err) => {
                log::warn!("purchase rejected: {err}");
                message.set(Some(AttrValue::from(err.to_string())));
            }
        }
    })
}

/// Compute the report now and reveal it after the cosmetic delay.
fn reveal_after_delay(report: &UseStateHandle<ReportState>, lines: Vec<String>) {
    report.set(ReportState::Running);
    let report = report.clone();
    spawn_local(async move {
        if let Err(err) = sleep_ms(DIAGNOSTIC_DELAY_MS).await {
            log::warn!("report timer failed: {}", js_error_message(&err));
        }
        report.set(ReportState::Ready(lines));
    });
}

pub fn build_calibrate(state: &AppState) -> Callback<()> {
    let bin = state.bin.clone();
    let report = state.calibration.clone();
    Callback::from(move |()| {
        if report.is_running() {
            return;
        }
        let lines = bin
            .borrow_mut()
            .calibrate()
            .iter()
            .map(ToString::to_string)
            .collect();
        reveal_after_delay(&report, lines);
    })
}

pub fn build_diagnose(state: &AppState) -> Callback<()> {
    let bin = state.bin.clone();
    let report = state.maintenance.clone();
    Callback::from(move |()| {
        if report.is_running() {
            return;
        }
        let lines = bin
            .borrow_mut()
            .diagnose()
            .iter()
            .map(ToString::to_string)
            .collect();
        reveal_after_delay(&report, lines);
    })
}

pub fn build_refresh_logs(state: &AppState) -> Callback<()> {
    let bin = state.bin.clone();
    let record = state.record.clone();
    Callback::from(move |()| record.set(bin.borrow().snapshot()))
}

pub fn build_clear_logs(state: &AppState) -> Callback<()> {
    let bin = state.bin.clone();
    let record = state.record.clone();
    Callback::from(move |()| {
        log::info!("clearing detection logs");
        record.set(bin.borrow().clear_logs());
    })
}

pub fn build_go_home(navigator: Option<Navigator>) -> Callback<()> {
    Callback::from(move |()| {
        if let Some(nav) = navigator.as_ref() {
            nav.push(&Route::Home);
        }
    })
}

use futures::executor::block_on;
use smartbin_core::{EconomyConfig, RewardCatalog, UserRecord};
use smartbin_web::components::report_panel::ReportState;
use smartbin_web::pages::{
    calibration::{CalibrationPage, CalibrationPageProps},
    home::{HomePage, HomePageProps},
    logs::{LogsPage, LogsPageProps},
    maintenance::{MaintenancePage, MaintenancePageProps},
    not_found::{NotFound, Props as NotFoundProps},
    rewards::{RewardsPage, RewardsPageProps},
    status::{StatusPage, StatusPageProps},
    throw::{ThrowPage, ThrowPageProps},
};
use yew::{AttrValue, Callback, LocalServerRenderer};

fn record() -> UserRecord {
    let mut record = UserRecord::with_defaults(&EconomyConfig::default());
    record.points = 17;
    record.balance = 137;
    record.purchases = vec!["Seed Pack".into(), "Eco Bottle".into()];
    record
}

#[test]
fn home_page_greets_user_with_balance() {
    let props = HomePageProps {
        username: "Sushanth".into(),
        points: 17,
        balance: 137,
    };
    let html = block_on(LocalServerRenderer::<HomePage>::with_props(props).render());
    assert!(html.contains("Welcome, Sushanth!"));
    assert!(html.contains("Balance: 137 coins"));
    assert!(html.contains("/static/img/smartbin.svg"));
}

#[test]
fn throw_page_lists_categories_and_results() {
    let props = ThrowPageProps {
        lines: vec![
            "Detected chemical: CO2".into(),
            "Confidence: 90%".into(),
            "Correct disposal! You earned 9 points.".into(),
        ],
        error: None,
        on_detect: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<ThrowPage>::with_props(props).render());
    for label in ["-- Select --", "Organic", "Plastic", "Metal", "Glass"] {
        assert!(html.contains(label), "missing option {label}");
    }
    assert!(html.contains("value=\"glass\""));
    assert!(html.contains("Detect"));
    assert!(html.contains("You earned 9 points."));
    assert!(!html.contains("role=\"alert\""));
}

#[test]
fn throw_page_shows_selection_error() {
    let props = ThrowPageProps {
        lines: Vec::new(),
        error: Some(AttrValue::from("Please select a waste type!")),
        on_detect: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<ThrowPage>::with_props(props).render());
    assert!(html.contains("role=\"alert\""));
    assert!(html.contains("Please select a waste type!"));
}

#[test]
fn status_page_lists_summary_fields() {
    let props = StatusPageProps {
        status: record().status(),
    };
    let html = block_on(LocalServerRenderer::<StatusPage>::with_props(props).render());
    assert!(html.contains("Sushanth"));
    assert!(html.contains("137"));
    assert!(html.contains("Logs stored"));
    assert!(html.contains("Seed Pack, Eco Bottle"));

    let empty = StatusPageProps {
        status: UserRecord::with_defaults(&EconomyConfig::default()).status(),
    };
    let html = block_on(LocalServerRenderer::<StatusPage>::with_props(empty).render());
    assert!(html.contains("None"));
}

#[test]
fn report_pages_cover_idle_running_and_ready() {
    let running = CalibrationPageProps {
        report: ReportState::Running,
        on_calibrate: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<CalibrationPage>::with_props(running).render());
    assert!(html.contains("Recalibrating sensors..."));
    assert!(html.contains("disabled"));

    let ready = MaintenancePageProps {
        report: ReportState::Ready(vec![
            "ORGANIC: Health 97% | Temp 24.5°C → OK".into(),
            "GLASS: Health 86% | Temp 29.1°C → Needs Cleaning".into(),
        ]),
        on_diagnose: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<MaintenancePage>::with_props(ready).render());
    assert!(html.contains("Run Diagnostics"));
    assert!(html.contains("Needs Cleaning"));
    assert!(!html.contains("Running diagnostics..."));

    let idle = MaintenancePageProps {
        report: ReportState::Idle,
        on_diagnose: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<MaintenancePage>::with_props(idle).render());
    assert!(!html.contains("<li>"));
}

#[test]
fn logs_page_handles_empty_and_filled() {
    let empty = LogsPageProps {
        lines: Vec::new(),
        on_refresh: Callback::noop(),
        on_clear: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<LogsPage>::with_props(empty).render());
    assert!(html.contains("No logs yet."));
    assert!(html.contains("Refresh"));
    assert!(html.contains("Clear Logs"));

    let filled = LogsPageProps {
        lines: vec!["2024-01-01T00:00:00.000Z | METAL | Fe | Conf:91% | ✔".into()],
        on_refresh: Callback::noop(),
        on_clear: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<LogsPage>::with_props(filled).render());
    assert!(html.contains("METAL | Fe | Conf:91%"));
    assert!(!html.contains("No logs yet."));
}

#[test]
fn rewards_page_renders_catalog_and_message() {
    let catalog = RewardCatalog::builtin();
    let props = RewardsPageProps {
        balance: 200,
        items: catalog.items.clone(),
        message: Some(AttrValue::from("Not enough coins to buy Eco Crystal.")),
        on_buy: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<RewardsPage>::with_props(props).render());
    assert!(html.contains("Balance: 200 coins"));
    for item in &catalog.items {
        assert!(html.contains(&item.name), "missing card for {}", item.name);
    }
    assert!(html.contains("reward-card rare"));
    assert!(html.contains("Not enough coins to buy Eco Crystal."));
}

#[test]
fn not_found_page_offers_way_home() {
    let props = NotFoundProps {
        on_go_home: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<NotFound>::with_props(props).render());
    assert!(html.contains("Page not found"));
    assert!(html.contains("Back to Home"));
}

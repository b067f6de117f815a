use crate::components::rare_popup::PopupTimer;
use crate::components::report_panel::ReportState;
use crate::storage::BrowserStorage;
use smartbin_core::{ChaChaNoise, EconomyConfig, SmartBin, UserRecord};
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

/// The bin as wired in the browser.
pub type WebBin = SmartBin<BrowserStorage, ChaChaNoise>;

#[must_use]
pub fn create_web_bin() -> WebBin {
    SmartBin::new(
        BrowserStorage,
        EconomyConfig::default(),
        ChaChaNoise::from_entropy(),
    )
}

#[derive(Clone)]
pub struct AppState {
    pub bin: Rc<RefCell<WebBin>>,
    pub record: UseStateHandle<UserRecord>,
    pub throw_lines: UseStateHandle<Vec<String>>,
    pub throw_error: UseStateHandle<Option<AttrValue>>,
    pub calibration: UseStateHandle<ReportState>,
    pub maintenance: UseStateHandle<ReportState>,
    pub shop_message: UseStateHandle<Option<AttrValue>>,
    pub rare_popup: UseStateHandle<Option<AttrValue>>,
    pub popup_timer: Rc<RefCell<PopupTimer>>,
}

#[hook]
pub fn use_app_state() -> AppState {
    let bin = use_mut_ref(create_web_bin);
    let record = {
        let bin = bin.clone();
        use_state(move || bin.borrow().snapshot())
    };
    AppState {
        bin,
        record,
        throw_lines: use_state(Vec::<String>::new),
        throw_error: use_state(|| None::<AttrValue>),
        calibration: use_state(ReportState::default),
        maintenance: use_state(ReportState::default),
        shop_message: use_state(|| None::<AttrValue>),
        rare_popup: use_state(|| None::<AttrValue>),
        popup_timer: use_mut_ref(PopupTimer::default),
    }
}

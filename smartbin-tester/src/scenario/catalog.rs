use anyhow::Result;

use super::Scenario;
use crate::logic::session::Session;

pub fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            key: "detections",
            name: "Detection Rewards",
            description: "Throws only; verdicts, rewards and log cap",
            step: detections,
        },
        Scenario {
            key: "shopping",
            name: "Earn Then Shop",
            description: "Throws for the first half, catalog purchases after",
            step: shopping,
        },
        Scenario {
            key: "mixed",
            name: "Mixed Usage",
            description: "Random throws, purchases, empty submits, clears and reloads",
            step: mixed,
        },
        Scenario {
            key: "corruption",
            name: "Corrupt Storage Recovery",
            description: "Damaged persisted records are repaired on load",
            step: corruption,
        },
        Scenario {
            key: "persistence",
            name: "Persistence Round Trip",
            description: "Every action is re-read through a fresh store on the same storage",
            step: persistence,
        },
    ]
}

fn detections(session: &mut Session, _index: usize, _total: usize) -> Result<()> {
    if session.chance(0.1) {
        session.throw_empty()
    } else {
        session.throw_random()
    }
}

fn shopping(session: &mut Session, index: usize, total: usize) -> Result<()> {
    if index < total / 2 {
        session.throw_random()
    } else {
        session.buy_random()
    }
}

fn mixed(session: &mut Session, _index: usize, _total: usize) -> Result<()> {
    match session.roll(20) {
        0..=11 => session.throw_random(),
        12..=16 => session.buy_random(),
        17 => session.throw_empty(),
        18 => session.clear_logs(),
        _ => session.reopen(),
    }
}

fn corruption(session: &mut Session, _index: usize, _total: usize) -> Result<()> {
    if session.chance(0.5) {
        session.corrupt()
    } else {
        session.throw_random()
    }
}

fn persistence(session: &mut Session, _index: usize, _total: usize) -> Result<()> {
    if session.chance(0.7) {
        session.throw_random()?;
    } else {
        session.buy_random()?;
    }
    session.reopen()
}

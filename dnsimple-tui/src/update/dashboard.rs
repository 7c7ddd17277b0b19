//! Domain dashboard: sections, actions and the confirmation gate.
//!
//! Every state-changing call goes through [`ConfirmModal`](crate::model::state::ConfirmModal):
//! the modal opens, the user types `confirm`, and only then is a
//! `Mutate` task issued. A failed mutation leaves the modal open with the
//! error so the user can retry or cancel.

use crossterm::event::KeyEvent;

use super::Outcome;
use crate::event::DefaultKeymap;
use crate::message::{DashboardMessage, DashboardRequest, DetailPayload, DetailTarget, Task};
use crate::model::state::{
    distribution_lines, ActionId, DashboardSnapshot, DashboardState, DetailPane, MutationKind, Section,
};

#[derive(Debug, PartialEq, Eq)]
pub enum DashboardSignal {
    /// Back to the domain list, nothing changed
    Exit,
    /// The domain itself was deleted
    Deleted(String),
}

pub fn init(dash: &mut DashboardState) -> Vec<Task> {
    refresh(dash)
}

fn refresh(dash: &mut DashboardState) -> Vec<Task> {
    dash.loading = true;
    dash.error = None;
    dash.status = None;
    vec![request(dash, DashboardRequest::Refresh)]
}

fn request(dash: &DashboardState, request: DashboardRequest) -> Task {
    Task::Dashboard {
        domain: dash.domain_name.clone(),
        request,
    }
}

fn inspect(dash: &mut DashboardState, target: DetailTarget) -> Vec<Task> {
    dash.section = Section::Diagnostics;
    dash.error = None;
    dash.status = None;
    vec![request(dash, DashboardRequest::Inspect(target))]
}

pub fn handle_key(dash: &mut DashboardState, key: &KeyEvent) -> Outcome<DashboardSignal> {
    if dash.confirm.visible {
        return handle_confirm_key(dash, key).into();
    }

    if dash.loading {
        if DefaultKeymap::BACK.matches(key) {
            return Outcome::signal(DashboardSignal::Exit);
        }
        return Outcome::none();
    }

    if let Some(section) = Section::from_key(key) {
        dash.section = section;
        return Outcome::none();
    }

    if DefaultKeymap::DASHBOARD_REFRESH.matches(key) {
        return refresh(dash).into();
    }
    if DefaultKeymap::ZONE_FILE.matches(key) {
        let target = DetailTarget::ZoneFile(dash.domain_name.clone());
        return inspect(dash, target).into();
    }
    if DefaultKeymap::DISTRIBUTION.matches(key) {
        return distribution(dash).into();
    }
    if DefaultKeymap::DELETE_RECORD.matches(key) {
        if dash.section == Section::Records && dash.selected_record().is_some() {
            dash.open_confirm(MutationKind::DeleteRecord);
        }
        return Outcome::none();
    }
    if DefaultKeymap::BACK.matches(key) {
        return Outcome::signal(DashboardSignal::Exit);
    }
    if DefaultKeymap::UP.matches(key) {
        dash.move_selection(true);
    } else if DefaultKeymap::DOWN.matches(key) {
        dash.move_selection(false);
    } else if DefaultKeymap::CONFIRM.matches(key) {
        return handle_enter(dash).into();
    }
    Outcome::none()
}

/// `x`: the selected record's distribution from the Records section, the
/// zone's from anywhere else.
fn distribution(dash: &mut DashboardState) -> Vec<Task> {
    if dash.section != Section::Records {
        let target = DetailTarget::ZoneDistribution(dash.domain_name.clone());
        return inspect(dash, target);
    }
    let Some(record_id) = dash.selected_record().map(|r| r.id) else {
        return Vec::new();
    };
    let target = DetailTarget::RecordDistribution {
        zone: dash.domain_name.clone(),
        record_id,
    };
    inspect(dash, target)
}

fn handle_enter(dash: &mut DashboardState) -> Vec<Task> {
    match dash.section {
        Section::Records => {
            let Some(record_id) = dash.selected_record().map(|r| r.id) else {
                return Vec::new();
            };
            vec![request(dash, DashboardRequest::RecordDetail(record_id))]
        }
        Section::Actions => {
            let Some(action) = ActionId::ALL.get(dash.selected_action).copied() else {
                return Vec::new();
            };
            run_action(dash, action)
        }
        _ => Vec::new(),
    }
}

fn run_action(dash: &mut DashboardState, action: ActionId) -> Vec<Task> {
    if let Err(reason) = dash.action_enabled(action) {
        dash.error = Some(reason.to_string());
        return Vec::new();
    }
    let domain = dash.domain_name.clone();
    match action {
        ActionId::Refresh => refresh(dash),
        ActionId::ZoneFile => inspect(dash, DetailTarget::ZoneFile(domain)),
        ActionId::ZoneDistribution => inspect(dash, DetailTarget::ZoneDistribution(domain)),
        ActionId::ZoneActivate => confirm(dash, MutationKind::ActivateZone),
        ActionId::ZoneDeactivate => confirm(dash, MutationKind::DeactivateZone),
        ActionId::DeleteRecord => confirm(dash, MutationKind::DeleteRecord),
        ActionId::DeleteDomain => confirm(dash, MutationKind::DeleteDomain),
    }
}

fn confirm(dash: &mut DashboardState, kind: MutationKind) -> Vec<Task> {
    dash.open_confirm(kind);
    Vec::new()
}

fn handle_confirm_key(dash: &mut DashboardState, key: &KeyEvent) -> Vec<Task> {
    if dash.confirm.busy {
        return Vec::new();
    }
    if DefaultKeymap::CANCEL.matches(key) {
        dash.confirm.close();
        return Vec::new();
    }
    if DefaultKeymap::CONFIRM.matches(key) {
        if !dash.confirm.accepted() {
            dash.confirm.error = Some("Type confirm to proceed".to_string());
            return Vec::new();
        }
        let Some(kind) = dash.confirm.kind else {
            dash.confirm.close();
            return Vec::new();
        };
        dash.confirm.busy = true;
        dash.confirm.error = None;
        log::info!("Requesting {} for {}", kind.verb(), dash.domain_name);
        return vec![request(
            dash,
            DashboardRequest::Mutate {
                kind,
                record_id: dash.confirm.record_id,
            },
        )];
    }
    dash.confirm.input.handle_key(key);
    Vec::new()
}

pub fn handle_paste(dash: &mut DashboardState, text: &str) {
    if dash.confirm.visible && !dash.confirm.busy {
        dash.confirm.input.paste(text);
    }
}

pub fn handle_result(dash: &mut DashboardState, msg: DashboardMessage) -> Outcome<DashboardSignal> {
    match msg {
        DashboardMessage::Loaded { result, .. } => {
            dash.loading = false;
            match result {
                Ok(snapshot) => {
                    dash.error = None;
                    dash.apply_snapshot(snapshot);
                }
                Err(e) => {
                    dash.error = Some(e);
                    dash.apply_snapshot(DashboardSnapshot::default());
                    dash.record_detail = None;
                }
            }
        }

        DashboardMessage::RecordDetail { record_id, result, .. } => {
            if dash.selected_record().map(|r| r.id) != Some(record_id) {
                log::debug!("Dropping detail for record {record_id}, selection moved");
                return Outcome::none();
            }
            match result {
                Ok(record) => {
                    dash.error = None;
                    dash.record_detail = Some(record);
                }
                Err(e) => dash.error = Some(e),
            }
        }

        DashboardMessage::Diagnostic { result, .. } => match result {
            Ok(payload) => {
                dash.error = None;
                dash.diagnostics = Some(diagnostic_pane(&payload));
            }
            Err(e) => dash.error = Some(e),
        },

        DashboardMessage::Mutated {
            domain,
            kind,
            record_id,
            result,
        } => {
            if let Err(e) = result {
                log::warn!("{e}");
                dash.confirm.busy = false;
                dash.confirm.error = Some(e);
                return Outcome::none();
            }
            dash.confirm.close();
            let status = match kind {
                MutationKind::DeleteDomain => {
                    return Outcome::signal(DashboardSignal::Deleted(domain));
                }
                MutationKind::ActivateZone => "Zone DNS activated.".to_string(),
                MutationKind::DeactivateZone => "Zone DNS deactivated.".to_string(),
                MutationKind::DeleteRecord => {
                    dash.record_detail = None;
                    format!("Record {} deleted.", record_id.unwrap_or_default())
                }
            };
            let tasks = refresh(dash);
            dash.status = Some(status);
            return tasks.into();
        }
    }
    Outcome::none()
}

fn diagnostic_pane(payload: &DetailPayload) -> DetailPane {
    match payload {
        DetailPayload::ZoneFile { text, .. } => {
            DetailPane::new("Zone File", text.lines().map(str::to_string).collect())
        }
        DetailPayload::ZoneDistribution { distributed, .. } => {
            DetailPane::new("Zone Distribution", distribution_lines(*distributed))
        }
        DetailPayload::RecordDistribution {
            record_id,
            distributed,
            ..
        } => DetailPane::new(
            format!("Record {record_id} Distribution"),
            distribution_lines(*distributed),
        ),
        other => DetailPane::from_payload(other),
    }
}

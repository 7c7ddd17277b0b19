use crossterm::event::KeyEvent;
use dnsimple_provider::{Domain, Zone, ZoneRecord};

use super::detail::DetailPane;
use super::input::TextInput;
use crate::event::DefaultKeymap;

/// Dashboard sections, each bound to a letter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Section {
    #[default]
    Overview,
    Records,
    Zone,
    Diagnostics,
    Actions,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Overview,
        Section::Records,
        Section::Zone,
        Section::Diagnostics,
        Section::Actions,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Records => "Records",
            Self::Zone => "Zone",
            Self::Diagnostics => "Diagnostics",
            Self::Actions => "Actions",
        }
    }

    /// Mnemonic shown in the section bar. `c` for reCords since `r` is taken.
    pub fn mnemonic(self) -> char {
        match self {
            Self::Overview => 'o',
            Self::Records => 'c',
            Self::Zone => 'z',
            Self::Diagnostics => 'g',
            Self::Actions => 'a',
        }
    }

    pub fn from_key(key: &KeyEvent) -> Option<Self> {
        let section = if DefaultKeymap::SECTION_OVERVIEW.matches(key) {
            Self::Overview
        } else if DefaultKeymap::SECTION_RECORDS.matches(key) {
            Self::Records
        } else if DefaultKeymap::SECTION_ZONE.matches(key) {
            Self::Zone
        } else if DefaultKeymap::SECTION_DIAGNOSTICS.matches(key) {
            Self::Diagnostics
        } else if DefaultKeymap::SECTION_ACTIONS.matches(key) {
            Self::Actions
        } else {
            return None;
        };
        Some(section)
    }
}

/// Entries of the Actions section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionId {
    Refresh,
    ZoneFile,
    ZoneDistribution,
    ZoneActivate,
    ZoneDeactivate,
    DeleteRecord,
    DeleteDomain,
}

impl ActionId {
    pub const ALL: [ActionId; 7] = [
        ActionId::Refresh,
        ActionId::ZoneFile,
        ActionId::ZoneDistribution,
        ActionId::ZoneActivate,
        ActionId::ZoneDeactivate,
        ActionId::DeleteRecord,
        ActionId::DeleteDomain,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Refresh => "Refresh dashboard",
            Self::ZoneFile => "Fetch zone file",
            Self::ZoneDistribution => "Check zone distribution",
            Self::ZoneActivate => "Activate DNS for zone",
            Self::ZoneDeactivate => "Deactivate DNS for zone",
            Self::DeleteRecord => "Delete selected record",
            Self::DeleteDomain => "Delete domain",
        }
    }

    pub fn hint(self) -> &'static str {
        match self {
            Self::Refresh => "Reload domain, zone, and records",
            Self::ZoneFile | Self::ZoneDistribution => "Read-only",
            _ => "Mutation (confirm required)",
        }
    }
}

/// State-changing operations gated by the confirmation modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    ActivateZone,
    DeactivateZone,
    DeleteRecord,
    DeleteDomain,
}

impl MutationKind {
    pub fn title(self) -> &'static str {
        match self {
            Self::ActivateZone => "Activate Zone DNS",
            Self::DeactivateZone => "Deactivate Zone DNS",
            Self::DeleteRecord => "Delete Record",
            Self::DeleteDomain => "Delete Domain",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::ActivateZone => "This will activate DNS services for this zone.",
            Self::DeactivateZone => "This will deactivate DNS services for this zone.",
            Self::DeleteRecord => "This will permanently delete the selected record from the zone.",
            Self::DeleteDomain => "This will permanently delete the domain from your account.",
        }
    }

    /// Used in `failed to <verb>: ...`.
    pub fn verb(self) -> &'static str {
        match self {
            Self::ActivateZone => "activate zone",
            Self::DeactivateZone => "deactivate zone",
            Self::DeleteRecord => "delete record",
            Self::DeleteDomain => "delete domain",
        }
    }
}

/// Result of one dashboard refresh.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardSnapshot {
    pub domain: Option<Domain>,
    pub zone: Option<Zone>,
    pub records: Vec<ZoneRecord>,
    pub warnings: Vec<String>,
}

/// The literal the user has to type.
pub const CONFIRM_WORD: &str = "confirm";

#[derive(Debug, Default)]
pub struct ConfirmModal {
    pub visible: bool,
    /// Mutation in flight; keys are ignored
    pub busy: bool,
    pub kind: Option<MutationKind>,
    pub record_id: Option<u64>,
    pub summary: Vec<String>,
    pub input: TextInput,
    pub error: Option<String>,
}

impl ConfirmModal {
    pub fn accepted(&self) -> bool {
        self.input.value().trim() == CONFIRM_WORD
    }

    pub fn close(&mut self) {
        self.visible = false;
        self.busy = false;
        self.error = None;
        self.input.clear();
    }
}

/// Full-screen view of one domain.
#[derive(Debug, Default)]
pub struct DashboardState {
    pub domain_name: String,
    pub section: Section,
    pub data: DashboardSnapshot,
    pub selected_record: usize,
    pub record_detail: Option<ZoneRecord>,
    pub diagnostics: Option<DetailPane>,
    pub selected_action: usize,
    pub status: Option<String>,
    pub error: Option<String>,
    pub loading: bool,
    pub confirm: ConfirmModal,
}

impl DashboardState {
    pub fn new(domain_name: impl Into<String>) -> Self {
        Self {
            domain_name: domain_name.into(),
            confirm: ConfirmModal {
                input: TextInput::new(64),
                ..ConfirmModal::default()
            },
            ..Self::default()
        }
    }

    pub fn selected_record(&self) -> Option<&ZoneRecord> {
        self.data.records.get(self.selected_record)
    }

    pub fn zone_available(&self) -> bool {
        self.data.zone.is_some()
    }

    /// `Ok` when the action can run, otherwise the reason it cannot.
    pub fn action_enabled(&self, action: ActionId) -> Result<(), &'static str> {
        match action {
            ActionId::Refresh | ActionId::DeleteDomain => Ok(()),
            ActionId::ZoneFile
            | ActionId::ZoneDistribution
            | ActionId::ZoneActivate
            | ActionId::ZoneDeactivate => {
                if self.zone_available() {
                    Ok(())
                } else {
                    Err("Zone unavailable")
                }
            }
            ActionId::DeleteRecord => {
                if self.selected_record().is_some() {
                    Ok(())
                } else {
                    Err("Select a record first")
                }
            }
        }
    }

    pub fn move_selection(&mut self, up: bool) {
        let (index, len) = match self.section {
            Section::Records => (&mut self.selected_record, self.data.records.len()),
            Section::Actions => (&mut self.selected_action, ActionId::ALL.len()),
            _ => return,
        };
        if len == 0 {
            return;
        }
        *index = if up {
            index.saturating_sub(1)
        } else {
            (*index + 1).min(len - 1)
        };
    }

    /// Replace the snapshot after a refresh.
    pub fn apply_snapshot(&mut self, snapshot: DashboardSnapshot) {
        self.data = snapshot;
        self.selected_record = self
            .selected_record
            .min(self.data.records.len().saturating_sub(1));
    }

    /// Open the confirmation modal with a summary of what will change.
    pub fn open_confirm(&mut self, kind: MutationKind) {
        let record = self.selected_record().cloned();
        let summary = match kind {
            MutationKind::ActivateZone | MutationKind::DeactivateZone => {
                vec!["Target zone:".to_string(), format!("  {}", self.domain_name)]
            }
            MutationKind::DeleteDomain => {
                vec!["Target domain:".to_string(), format!("  {}", self.domain_name)]
            }
            MutationKind::DeleteRecord => match &record {
                Some(r) => vec![
                    "Target record:".to_string(),
                    format!("  {} {}.{}", r.record_type, r.display_name(), self.domain_name),
                    format!("  ID: {}", r.id),
                ],
                None => vec!["Target record: (none selected)".to_string()],
            },
        };

        self.confirm.visible = true;
        self.confirm.busy = false;
        self.confirm.kind = Some(kind);
        self.confirm.record_id = record.map(|r| r.id);
        self.confirm.summary = summary;
        self.confirm.error = None;
        self.confirm.input.clear();
    }

    /// While the modal is up it receives every key.
    pub fn blocks_global_keys(&self) -> bool {
        self.confirm.visible
    }

    /// Keys the dashboard handles itself even though the shell binds them.
    pub fn captures_key(&self, key: &KeyEvent) -> bool {
        Section::from_key(key).is_some()
            || DefaultKeymap::DASHBOARD_REFRESH.matches(key)
            || DefaultKeymap::ZONE_FILE.matches(key)
            || DefaultKeymap::DISTRIBUTION.matches(key)
            || DefaultKeymap::DELETE_RECORD.matches(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn record(id: u64) -> ZoneRecord {
        ZoneRecord {
            id,
            record_type: "A".into(),
            ..ZoneRecord::default()
        }
    }

    #[test]
    fn actions_require_zone_or_record() {
        let mut dash = DashboardState::new("acme.dev");
        assert_eq!(dash.action_enabled(ActionId::ZoneFile), Err("Zone unavailable"));
        assert_eq!(
            dash.action_enabled(ActionId::DeleteRecord),
            Err("Select a record first")
        );
        assert_eq!(dash.action_enabled(ActionId::DeleteDomain), Ok(()));

        dash.apply_snapshot(DashboardSnapshot {
            zone: Some(Zone::default()),
            records: vec![record(1)],
            ..DashboardSnapshot::default()
        });
        assert_eq!(dash.action_enabled(ActionId::ZoneActivate), Ok(()));
        assert_eq!(dash.action_enabled(ActionId::DeleteRecord), Ok(()));
    }

    #[test]
    fn record_summary_names_zone_and_id() {
        let mut dash = DashboardState::new("acme.dev");
        dash.apply_snapshot(DashboardSnapshot {
            records: vec![record(1), record(2)],
            ..DashboardSnapshot::default()
        });
        dash.section = Section::Records;
        dash.move_selection(false);
        dash.open_confirm(MutationKind::DeleteRecord);

        assert!(dash.blocks_global_keys());
        assert_eq!(dash.confirm.record_id, Some(2));
        assert_eq!(
            dash.confirm.summary,
            vec!["Target record:", "  A @.acme.dev", "  ID: 2"]
        );
    }

    #[test]
    fn only_trimmed_confirm_is_accepted() {
        let mut modal = ConfirmModal::default();
        for (text, ok) in [("confirm", true), ("  confirm ", true), ("Confirm", false), ("", false)] {
            modal.input.set_value(text);
            assert_eq!(modal.accepted(), ok, "{text:?}");
        }
    }

    #[test]
    fn selection_is_clamped_when_records_shrink() {
        let mut dash = DashboardState::new("acme.dev");
        dash.apply_snapshot(DashboardSnapshot {
            records: vec![record(1), record(2), record(3)],
            ..DashboardSnapshot::default()
        });
        dash.selected_record = 2;
        dash.apply_snapshot(DashboardSnapshot {
            records: vec![record(1)],
            ..DashboardSnapshot::default()
        });
        assert_eq!(dash.selected_record, 0);
    }

    #[test]
    fn captures_section_letters() {
        let dash = DashboardState::new("acme.dev");
        let key = |c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE);
        assert!(dash.captures_key(&key('z')));
        assert!(dash.captures_key(&key('R')));
        assert!(!dash.captures_key(&key('d')));
        assert!(!dash.captures_key(&key('q')));
    }
}

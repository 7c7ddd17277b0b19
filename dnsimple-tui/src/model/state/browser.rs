use crossterm::event::KeyEvent;
use dnsimple_provider::{Domain, Zone, ZoneRecord};

use super::dashboard::DashboardState;
use super::detail::{date, DetailPane};
use super::search::SearchState;
use crate::util::text::truncate;

/// Resource kind a browser lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Domains,
    Zones,
    Records,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Domains, Category::Zones, Category::Records];

    pub fn label(self) -> &'static str {
        match self {
            Self::Domains => "Domains",
            Self::Zones => "Zones",
            Self::Records => "Records",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Domains => "Registered and hosted domains",
            Self::Zones => "DNS zones, zone files and distribution",
            Self::Records => "Records per zone",
        }
    }
}

/// One row of a browser list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserItem {
    /// Name used for backend calls (domain or zone name, record id)
    pub key: String,
    pub title: String,
    pub subtitle: String,
    pub id: u64,
}

impl BrowserItem {
    pub fn from_domain(d: &Domain) -> Self {
        let mut meta = format!("state: {}", d.state);
        if let Some(expires) = date(d.expires_at) {
            meta.push_str(&format!(" | expires: {expires}"));
        }
        if d.auto_renew {
            meta.push_str(" | auto-renew");
        }
        Self {
            key: d.name.clone(),
            title: d.name.clone(),
            subtitle: meta,
            id: d.id,
        }
    }

    pub fn from_zone(z: &Zone) -> Self {
        let mut flags = vec![if z.active { "active" } else { "inactive" }];
        if z.reverse {
            flags.push("reverse");
        }
        if z.secondary {
            flags.push("secondary");
        }
        Self::zone_item(z, &flags)
    }

    /// Zone as listed in the records picker.
    pub fn from_picker_zone(z: &Zone) -> Self {
        let mut flags = Vec::new();
        if z.active {
            flags.push("active");
        }
        if z.reverse {
            flags.push("reverse");
        }
        if z.secondary {
            flags.push("secondary");
        }
        if flags.is_empty() {
            flags.push("standard");
        }
        Self::zone_item(z, &flags)
    }

    fn zone_item(z: &Zone, flags: &[&str]) -> Self {
        Self {
            key: z.name.clone(),
            title: z.name.clone(),
            subtitle: flags.join(" | "),
            id: z.id,
        }
    }

    pub fn from_record(r: &ZoneRecord) -> Self {
        let mut meta = format!("ttl {} | {}", r.ttl, truncate(&r.content, 72));
        if let Some(priority) = r.effective_priority() {
            meta.push_str(&format!(" | pri {priority}"));
        }
        if r.system_record {
            meta.push_str(" | system");
        }
        Self {
            key: r.id.to_string(),
            title: format!("{:<6} {}", r.record_type, r.display_name()),
            subtitle: meta,
            id: r.id,
        }
    }
}

/// Discriminant of [`BrowserScreen`], carried by tasks so stale results can
/// be recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenKind {
    DomainList,
    DomainDashboard,
    ZoneList,
    RecordZones,
    RecordList,
}

#[derive(Debug)]
pub enum BrowserScreen {
    DomainList,
    DomainDashboard(Box<DashboardState>),
    ZoneList,
    RecordZones,
    RecordList { zone: String },
}

impl BrowserScreen {
    pub fn kind(&self) -> ScreenKind {
        match self {
            Self::DomainList => ScreenKind::DomainList,
            Self::DomainDashboard(_) => ScreenKind::DomainDashboard,
            Self::ZoneList => ScreenKind::ZoneList,
            Self::RecordZones => ScreenKind::RecordZones,
            Self::RecordList { .. } => ScreenKind::RecordList,
        }
    }
}

/// Zone picker contents kept while a record list is open.
#[derive(Debug, Clone)]
pub struct ListSnapshot {
    pub items: Vec<BrowserItem>,
    pub header: String,
    pub selected: usize,
    pub status: Option<String>,
}

/// List explorer for one category.
#[derive(Debug)]
pub struct BrowserState {
    pub category: Category,
    pub screen: BrowserScreen,
    pub items: Vec<BrowserItem>,
    pub header: String,
    pub selected: usize,
    pub loading: bool,
    pub error: Option<String>,
    pub status: Option<String>,
    pub detail: Option<DetailPane>,
    pub search: SearchState,
    pub picker: Option<ListSnapshot>,
    /// Terminal size as (width, height)
    pub viewport: (u16, u16),
}

impl BrowserState {
    pub fn new(category: Category) -> Self {
        let screen = match category {
            Category::Domains => BrowserScreen::DomainList,
            Category::Zones => BrowserScreen::ZoneList,
            Category::Records => BrowserScreen::RecordZones,
        };
        let mut state = Self {
            category,
            screen,
            items: Vec::new(),
            header: String::new(),
            selected: 0,
            loading: false,
            error: None,
            status: None,
            detail: None,
            search: SearchState::default(),
            picker: None,
            viewport: (0, 0),
        };
        state.header = state.default_header();
        state
    }

    pub fn zone(&self) -> Option<&str> {
        match &self.screen {
            BrowserScreen::RecordList { zone } => Some(zone),
            _ => None,
        }
    }

    pub fn dashboard(&self) -> Option<&DashboardState> {
        match &self.screen {
            BrowserScreen::DomainDashboard(dash) => Some(dash),
            _ => None,
        }
    }

    pub fn dashboard_mut(&mut self) -> Option<&mut DashboardState> {
        match &mut self.screen {
            BrowserScreen::DomainDashboard(dash) => Some(dash),
            _ => None,
        }
    }

    /// Header used before a list has loaded or after it failed.
    pub fn default_header(&self) -> String {
        match &self.screen {
            BrowserScreen::RecordList { zone } => format!("Records / {zone}"),
            BrowserScreen::RecordZones => "Records / Zones".to_string(),
            _ => self.category.label().to_string(),
        }
    }

    /// One-line usage hint under the list.
    pub fn hint(&self) -> &'static str {
        match self.screen.kind() {
            ScreenKind::DomainList | ScreenKind::DomainDashboard => "Use Enter to inspect a domain.",
            ScreenKind::ZoneList => "Use Enter to inspect a zone.",
            ScreenKind::RecordZones => "Choose a zone, then press Enter to list its records.",
            ScreenKind::RecordList => "Use Enter to inspect a record. Esc returns to zones.",
        }
    }

    pub fn current_item(&self) -> Option<&BrowserItem> {
        self.items.get(self.selected)
    }

    /// Owned so the search modal can be updated while they are held.
    pub fn titles(&self) -> Vec<String> {
        self.items.iter().map(|i| i.title.clone()).collect()
    }

    // ========== Selection ==========

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.items.len() {
            self.selected += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.items.len().saturating_sub(1);
    }

    pub fn page_up(&mut self) {
        self.selected = self.selected.saturating_sub(self.page_size());
    }

    pub fn page_down(&mut self) {
        self.selected = (self.selected + self.page_size()).min(self.items.len().saturating_sub(1));
    }

    /// Keep `selected` inside the list.
    pub fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.items.len().saturating_sub(1));
    }

    /// Visible rows of the list panel.
    pub fn page_size(&self) -> usize {
        let height = usize::from(self.viewport.1);
        if height == 0 {
            return 10;
        }
        (height.saturating_sub(18) / 2).max(5)
    }

    // ========== Key routing ==========

    pub fn blocks_global_keys(&self) -> bool {
        self.search.visible || self.dashboard().is_some_and(DashboardState::blocks_global_keys)
    }

    pub fn captures_key(&self, key: &KeyEvent) -> bool {
        self.dashboard().is_some_and(|d| d.captures_key(key))
    }

    // ========== Records picker ==========

    /// Remember the zone picker before descending into a zone.
    pub fn save_picker(&mut self) {
        self.picker = Some(ListSnapshot {
            items: std::mem::take(&mut self.items),
            header: std::mem::take(&mut self.header),
            selected: self.selected,
            status: self.status.take(),
        });
    }

    /// Put the zone picker back. Returns `false` when nothing was saved.
    pub fn restore_picker(&mut self) -> bool {
        let Some(snapshot) = self.picker.take() else {
            return false;
        };
        self.screen = BrowserScreen::RecordZones;
        self.items = snapshot.items;
        self.header = snapshot.header;
        self.selected = snapshot.selected;
        self.status = snapshot.status;
        self.detail = None;
        self.error = None;
        self.loading = false;
        self.clamp_selection();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(n: usize) -> BrowserItem {
        BrowserItem {
            key: format!("k{n}"),
            title: format!("t{n}"),
            subtitle: String::new(),
            id: n as u64,
        }
    }

    #[test]
    fn navigation_stays_in_range() {
        let mut state = BrowserState::new(Category::Zones);
        state.select_next();
        state.select_last();
        assert_eq!(state.selected, 0);

        state.items = (0..30).map(item).collect();
        state.viewport = (100, 40);
        assert_eq!(state.page_size(), 11);
        state.page_down();
        assert_eq!(state.selected, 11);
        state.select_last();
        state.page_down();
        assert_eq!(state.selected, 29);
        state.page_up();
        assert_eq!(state.selected, 18);
        state.select_first();
        state.select_previous();
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn picker_round_trip_restores_selection() {
        let mut state = BrowserState::new(Category::Records);
        state.items = (0..4).map(item).collect();
        state.header = "Records / Zones (4)".into();
        state.selected = 2;

        state.save_picker();
        state.screen = BrowserScreen::RecordList { zone: "k2".into() };
        state.items = vec![item(9)];
        state.selected = 0;

        assert!(state.restore_picker());
        assert_eq!(state.screen.kind(), ScreenKind::RecordZones);
        assert_eq!(state.items.len(), 4);
        assert_eq!(state.selected, 2);
        assert_eq!(state.header, "Records / Zones (4)");
        assert!(!state.restore_picker());
    }

    #[test]
    fn item_formats() {
        let record = ZoneRecord {
            id: 5,
            record_type: "MX".into(),
            content: "mail.acme.dev".into(),
            ttl: 3600,
            priority: Some(10),
            system_record: true,
            ..ZoneRecord::default()
        };
        let row = BrowserItem::from_record(&record);
        assert_eq!(row.title, "MX     @");
        assert_eq!(row.subtitle, "ttl 3600 | mail.acme.dev | pri 10 | system");

        let zone = Zone {
            name: "acme.dev".into(),
            ..Zone::default()
        };
        assert_eq!(BrowserItem::from_zone(&zone).subtitle, "inactive");
        assert_eq!(BrowserItem::from_picker_zone(&zone).subtitle, "standard");

        let domain = Domain {
            name: "acme.dev".into(),
            state: "hosted".into(),
            auto_renew: true,
            ..Domain::default()
        };
        assert_eq!(
            BrowserItem::from_domain(&domain).subtitle,
            "state: hosted | auto-renew"
        );
    }

    #[test]
    fn default_headers() {
        let mut state = BrowserState::new(Category::Records);
        assert_eq!(state.header, "Records / Zones");
        state.screen = BrowserScreen::RecordList { zone: "acme.dev".into() };
        assert_eq!(state.default_header(), "Records / acme.dev");
        assert_eq!(BrowserState::new(Category::Domains).header, "Domains");
    }
}

use chrono::{DateTime, SecondsFormat, Utc};
use dnsimple_provider::{Domain, Zone, ZoneRecord};

use crate::message::DetailPayload;
use crate::util::text::wrap_label_value;

/// Column width for wrapped record content.
const CONTENT_WIDTH: usize = 80;

/// Titled block of text shown under a list or in the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailPane {
    pub title: String,
    pub body: Vec<String>,
}

pub fn timestamp(t: Option<DateTime<Utc>>) -> String {
    t.map_or_else(|| "-".to_string(), |t| t.to_rfc3339_opts(SecondsFormat::Secs, true))
}

pub fn date(t: Option<DateTime<Utc>>) -> Option<String> {
    t.map(|t| t.format("%Y-%m-%d").to_string())
}

pub fn distribution_lines(distributed: bool) -> Vec<String> {
    let status = if distributed {
        "Fully distributed"
    } else {
        "Not distributed yet"
    };
    vec![format!("Distributed: {distributed}"), format!("Status: {status}")]
}

/// Domain fields, shared with the dashboard overview.
pub fn domain_lines(d: &Domain, id_label: &str) -> Vec<String> {
    let mut lines = vec![format!("{id_label}: {}", d.id), format!("Name: {}", d.name)];
    if let Some(unicode) = d.unicode_name.as_deref().filter(|u| *u != d.name) {
        lines.push(format!("Unicode: {unicode}"));
    }
    lines.push(format!("State: {}", d.state));
    lines.push(format!("Auto-Renew: {}", d.auto_renew));
    lines.push(format!("Private WHOIS: {}", d.private_whois));
    if d.expires_at.is_some() {
        lines.push(format!("Expires: {}", timestamp(d.expires_at)));
    }
    lines.push(format!("Created: {}", timestamp(d.created_at)));
    lines.push(format!("Updated: {}", timestamp(d.updated_at)));
    lines
}

pub fn zone_lines(z: &Zone) -> Vec<String> {
    vec![
        format!("ID: {}", z.id),
        format!("Name: {}", z.name),
        format!("Active: {}", z.active),
        format!("Reverse: {}", z.reverse),
        format!("Secondary: {}", z.secondary),
        format!("Created: {}", timestamp(z.created_at)),
        format!("Updated: {}", timestamp(z.updated_at)),
    ]
}

/// Record fields up to the priority line.
pub fn record_summary_lines(r: &ZoneRecord) -> Vec<String> {
    let mut lines = vec![
        format!("ID: {}", r.id),
        format!("Type: {}", r.record_type),
        format!("Name: {}", r.display_name()),
    ];
    lines.extend(wrap_label_value("Content: ", &r.content, CONTENT_WIDTH));
    lines.push(format!("TTL: {}", r.ttl));
    if let Some(priority) = r.effective_priority() {
        lines.push(format!("Priority: {priority}"));
    }
    lines
}

impl DetailPane {
    pub fn new(title: impl Into<String>, body: Vec<String>) -> Self {
        Self {
            title: title.into(),
            body,
        }
    }

    pub fn record(r: &ZoneRecord, zone: &str) -> Self {
        let mut body = vec![
            format!("ID: {}", r.id),
            format!("Type: {}", r.record_type),
            format!("Name: {}", r.display_name()),
            format!("Zone: {zone}"),
        ];
        body.extend(wrap_label_value("Content: ", &r.content, CONTENT_WIDTH));
        body.push(format!("TTL: {}", r.ttl));
        if let Some(priority) = r.effective_priority() {
            body.push(format!("Priority: {priority}"));
        }
        if !r.regions.is_empty() {
            body.push(format!("Regions: {}", r.regions.join(", ")));
        }
        body.push(format!("System: {}", r.system_record));
        body.push(format!("Created: {}", timestamp(r.created_at)));
        body.push(format!("Updated: {}", timestamp(r.updated_at)));
        Self::new(
            format!("{} {}.{zone}", r.record_type, r.display_name()),
            body,
        )
    }

    /// Browser pane for a loaded detail.
    pub fn from_payload(payload: &DetailPayload) -> Self {
        match payload {
            DetailPayload::Domain(d) => Self::new(d.name.clone(), domain_lines(d, "ID")),
            DetailPayload::Zone(z) => Self::new(z.name.clone(), zone_lines(z)),
            DetailPayload::Record(r) => Self::record(r, &r.zone_id),
            DetailPayload::ZoneFile { zone, text } => {
                Self::new(format!("Zone file: {zone}"), text.lines().map(str::to_string).collect())
            }
            DetailPayload::ZoneDistribution { zone, distributed } => Self::new(
                format!("Zone distribution: {zone}"),
                distribution_lines(*distributed),
            ),
            DetailPayload::RecordDistribution {
                zone,
                record_id,
                distributed,
            } => Self::new(
                format!("Record distribution: {record_id} ({zone})"),
                distribution_lines(*distributed),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn record_detail_shows_priority_and_regions() {
        let record = ZoneRecord {
            id: 8_800_013,
            zone_id: "acme.dev".into(),
            record_type: "MX".into(),
            content: "mail.acme.dev".into(),
            ttl: 3600,
            priority: Some(10),
            regions: vec!["global".into()],
            ..ZoneRecord::default()
        };
        let pane = DetailPane::record(&record, "acme.dev");
        assert_eq!(pane.title, "MX @.acme.dev");
        assert!(pane.body.contains(&"Priority: 10".to_string()));
        assert!(pane.body.contains(&"Regions: global".to_string()));
        assert!(pane.body.contains(&"System: false".to_string()));
    }

    #[test]
    fn zero_priority_is_hidden() {
        let record = ZoneRecord {
            priority: Some(0),
            ..ZoneRecord::default()
        };
        assert!(!record_summary_lines(&record)
            .iter()
            .any(|l| l.starts_with("Priority")));
    }

    #[test]
    fn distribution_text() {
        assert_eq!(
            distribution_lines(false),
            vec!["Distributed: false", "Status: Not distributed yet"]
        );
        let pane = DetailPane::from_payload(&DetailPayload::RecordDistribution {
            zone: "acme.dev".into(),
            record_id: 7,
            distributed: true,
        });
        assert_eq!(pane.title, "Record distribution: 7 (acme.dev)");
        assert_eq!(pane.body[1], "Status: Fully distributed");
    }

    #[test]
    fn timestamps_are_rfc3339() {
        let t = Utc.with_ymd_and_hms(2027, 12, 31, 0, 0, 0).single();
        assert_eq!(timestamp(t), "2027-12-31T00:00:00Z");
        assert_eq!(date(t).as_deref(), Some("2027-12-31"));
        assert_eq!(timestamp(None), "-");
    }
}

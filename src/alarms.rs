//! Alarm data model
//!
//! Mirrors the wire format of the alarm server's `alarms` resource: a
//! snapshot of active and acknowledged alarm records, replaced wholesale on
//! every refresh.

use ratatui::prelude::{Color, Modifier, Style};
use serde::Deserialize;
use std::fmt::Display;

/// Alarm urgency classification, including acknowledged variants.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Deserialize, strum::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Ok,
    Minor,
    Major,
    Invalid,
    Undefined,
    MinorAck,
    MajorAck,
    InvalidAck,
    UndefinedAck,
}

impl Severity {
    /// Marker glyph shown in the leading table column.
    ///
    /// OK has no marker at all. INVALID and UNDEFINED share a glyph, and each
    /// acknowledged variant shares its base glyph; acknowledgement shows up
    /// through the dimmed style instead.
    pub fn marker(&self) -> Option<&'static str> {
        match self {
            Severity::Ok => None,
            Severity::Minor | Severity::MinorAck => Some("⚠"),
            Severity::Major | Severity::MajorAck => Some("❌"),
            Severity::Invalid
            | Severity::Undefined
            | Severity::InvalidAck
            | Severity::UndefinedAck => Some("❓"),
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Severity::Ok => Color::Green,
            Severity::Minor | Severity::MinorAck => Color::Yellow,
            Severity::Major | Severity::MajorAck => Color::Red,
            Severity::Invalid
            | Severity::Undefined
            | Severity::InvalidAck
            | Severity::UndefinedAck => Color::Magenta,
        }
    }

    pub fn is_acknowledged(&self) -> bool {
        matches!(
            self,
            Severity::MinorAck
                | Severity::MajorAck
                | Severity::InvalidAck
                | Severity::UndefinedAck
        )
    }

    /// Cell style for a severity-tagged column.
    pub fn style(&self) -> Style {
        let style = Style::default().fg(self.color());
        if self.is_acknowledged() {
            style.add_modifier(Modifier::DIM)
        } else {
            style
        }
    }
}

/// One monitored point in the alarm snapshot.
///
/// `severity`/`message` are the latched alarm state; `current_severity`/
/// `current_message` reflect the live value. `time` arrives preformatted
/// from the server.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AlarmRecord {
    pub name: String,
    pub description: String,
    pub severity: Severity,
    pub message: String,
    pub time: String,
    #[serde(default)]
    pub value: String,
    pub current_severity: Severity,
    pub current_message: String,
}

/// Full response of one refresh request. Groups are independent; a missing
/// group is an empty one.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Snapshot {
    #[serde(default)]
    pub active: Vec<AlarmRecord>,
    #[serde(default)]
    pub acknowledged: Vec<AlarmRecord>,
}

/// The two alarm tables on the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AlarmGroup {
    Active,
    Acknowledged,
}

impl Display for AlarmGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlarmGroup::Active => write!(f, "active"),
            AlarmGroup::Acknowledged => write!(f, "acknowledged"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_SEVERITIES: [Severity; 9] = [
        Severity::Ok,
        Severity::Minor,
        Severity::Major,
        Severity::Invalid,
        Severity::Undefined,
        Severity::MinorAck,
        Severity::MajorAck,
        Severity::InvalidAck,
        Severity::UndefinedAck,
    ];

    #[test]
    /// OK has no marker; every other severity maps to exactly one fixed glyph.
    fn test_marker_map() {
        assert_eq!(Severity::Ok.marker(), None);
        assert_eq!(Severity::Minor.marker(), Some("⚠"));
        assert_eq!(Severity::MinorAck.marker(), Some("⚠"));
        assert_eq!(Severity::Major.marker(), Some("❌"));
        assert_eq!(Severity::MajorAck.marker(), Some("❌"));
        // INVALID and UNDEFINED share a glyph, as do their ack variants.
        for severity in [
            Severity::Invalid,
            Severity::Undefined,
            Severity::InvalidAck,
            Severity::UndefinedAck,
        ] {
            assert_eq!(severity.marker(), Some("❓"));
        }
    }

    #[test]
    fn test_severity_wire_names() {
        let parsed: Severity = serde_json::from_str("\"MINOR_ACK\"").unwrap();
        assert_eq!(parsed, Severity::MinorAck);
        assert_eq!(parsed.to_string(), "MINOR_ACK");

        let parsed: Severity = serde_json::from_str("\"OK\"").unwrap();
        assert_eq!(parsed, Severity::Ok);
        assert_eq!(parsed.to_string(), "OK");
    }

    #[test]
    /// A severity string outside the fixed set is a malformed payload.
    fn test_unknown_severity_rejected() {
        let result: Result<Severity, _> = serde_json::from_str("\"CRITICAL\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_acknowledged_variants() {
        let acked: Vec<Severity> = ALL_SEVERITIES
            .iter()
            .copied()
            .filter(Severity::is_acknowledged)
            .collect();
        assert_eq!(
            acked,
            vec![
                Severity::MinorAck,
                Severity::MajorAck,
                Severity::InvalidAck,
                Severity::UndefinedAck
            ]
        );
    }

    #[test]
    /// Decode the wire format produced by the alarm server.
    fn test_snapshot_decode() {
        let json = r#"{
            "active": [
                {
                    "path": "/Accelerator/Vacuum/PV1",
                    "name": "PV1",
                    "description": "Vacuum pressure",
                    "severity": "MAJOR",
                    "message": "HIHI_ALARM",
                    "current_severity": "MINOR",
                    "current_message": "HIGH_ALARM",
                    "value": "12.5",
                    "time": "2024-03-05 09:07:13.201"
                }
            ],
            "acknowledged": []
        }"#;
        let snapshot: Snapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.active.len(), 1);
        assert!(snapshot.acknowledged.is_empty());

        let record = &snapshot.active[0];
        assert_eq!(record.name, "PV1");
        assert_eq!(record.severity, Severity::Major);
        assert_eq!(record.current_severity, Severity::Minor);
        assert_eq!(record.time, "2024-03-05 09:07:13.201");
    }

    #[test]
    /// A group missing from the payload is treated as empty.
    fn test_snapshot_missing_group_defaults_empty() {
        let snapshot: Snapshot = serde_json::from_str(r#"{"active": []}"#).unwrap();
        assert!(snapshot.active.is_empty());
        assert!(snapshot.acknowledged.is_empty());
    }

    #[test]
    fn test_group_display() {
        assert_eq!(AlarmGroup::Active.to_string(), "active");
        assert_eq!(AlarmGroup::Acknowledged.to_string(), "acknowledged");
    }
}

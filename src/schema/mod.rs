//! Record schemas for the three drone-operations datasets.
//!
//! Each dataset is described by a declarative field table instead of a
//! hand-written per-entity transform function. The shared interpreter in
//! [`crate::transform`] walks the table to normalize a raw row, so adding
//! or reordering a field is a data change, not a code change.

/// How a raw string field is normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Trimmed string. Absent column becomes `""`.
    Text,
    /// Comma-separated list: split, trim each piece, drop empty pieces.
    List,
    /// Base-10 integer. Empty or absent becomes `0`; non-numeric text
    /// is a conversion error.
    Integer,
}

/// One column of a dataset: output field name plus normalization kind.
///
/// The output field name is also the input column header.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

/// A complete dataset description, in output field order.
#[derive(Debug, Clone, Copy)]
pub struct RecordSchema {
    /// Singular entity name, used in diagnostics ("pilot").
    pub name: &'static str,
    /// Plural entity name, used in summaries ("pilots").
    pub plural: &'static str,
    /// Ordered field table.
    pub fields: &'static [FieldSpec],
}

impl RecordSchema {
    /// Names of all output fields, in order.
    pub fn field_names(&self) -> Vec<&'static str> {
        self.fields.iter().map(|f| f.name).collect()
    }
}

const fn field(name: &'static str, kind: FieldKind) -> FieldSpec {
    FieldSpec { name, kind }
}

/// Pilot roster: `pilot_roster.csv`.
pub const PILOT: RecordSchema = RecordSchema {
    name: "pilot",
    plural: "pilots",
    fields: &[
        field("pilot_id", FieldKind::Text),
        field("name", FieldKind::Text),
        field("skills", FieldKind::List),
        field("certifications", FieldKind::List),
        field("location", FieldKind::Text),
        field("status", FieldKind::Text),
        field("current_assignment", FieldKind::Text),
        field("available_from", FieldKind::Text),
        field("daily_rate_inr", FieldKind::Integer),
    ],
};

/// Drone fleet: `drone_fleet.csv`.
pub const DRONE: RecordSchema = RecordSchema {
    name: "drone",
    plural: "drones",
    fields: &[
        field("drone_id", FieldKind::Text),
        field("model", FieldKind::Text),
        field("capabilities", FieldKind::List),
        field("status", FieldKind::Text),
        field("location", FieldKind::Text),
        field("current_assignment", FieldKind::Text),
        field("maintenance_due", FieldKind::Text),
        field("weather_resistance", FieldKind::Text),
    ],
};

/// Missions: `missions.csv`.
pub const MISSION: RecordSchema = RecordSchema {
    name: "mission",
    plural: "missions",
    fields: &[
        field("project_id", FieldKind::Text),
        field("client", FieldKind::Text),
        field("location", FieldKind::Text),
        field("required_skills", FieldKind::List),
        field("required_certs", FieldKind::List),
        field("start_date", FieldKind::Text),
        field("end_date", FieldKind::Text),
        field("priority", FieldKind::Text),
        field("mission_budget_inr", FieldKind::Integer),
        field("weather_forecast", FieldKind::Text),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pilot_schema_fields() {
        assert_eq!(
            PILOT.field_names(),
            vec![
                "pilot_id",
                "name",
                "skills",
                "certifications",
                "location",
                "status",
                "current_assignment",
                "available_from",
                "daily_rate_inr",
            ]
        );
        assert_eq!(PILOT.fields[2].kind, FieldKind::List);
        assert_eq!(PILOT.fields[8].kind, FieldKind::Integer);
    }

    #[test]
    fn test_drone_schema_fields() {
        assert_eq!(DRONE.fields.len(), 8);
        assert_eq!(DRONE.fields[2].name, "capabilities");
        assert_eq!(DRONE.fields[2].kind, FieldKind::List);
        // No numeric columns in the fleet file
        assert!(DRONE.fields.iter().all(|f| f.kind != FieldKind::Integer));
    }

    #[test]
    fn test_mission_schema_fields() {
        assert_eq!(MISSION.fields.len(), 10);
        assert_eq!(MISSION.fields[8].name, "mission_budget_inr");
        assert_eq!(MISSION.fields[8].kind, FieldKind::Integer);
        assert_eq!(MISSION.fields[3].kind, FieldKind::List);
        assert_eq!(MISSION.fields[4].kind, FieldKind::List);
    }
}

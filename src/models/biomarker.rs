use serde::{Deserialize, Serialize};

/// Interval of values considered normal for a test.
///
/// Always a closed numeric interval. A "greater-than" threshold observation
/// is represented with `max == config::UNBOUNDED_UPPER` rather than a true
/// infinity. `min <= max` is not enforced by construction: a report stating
/// its bounds backwards is carried through as-is (known edge case).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferenceRange {
    pub min: f64,
    pub max: f64,
}

/// One extracted lab measurement.
///
/// `value` is absent when the line stated only a threshold, without an
/// accompanying point measurement. `unit` may be empty but is never null.
/// Records are append-only: the assembler never mutates or removes earlier
/// records, and positional order is the only identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BiomarkerRecord {
    pub name: String,
    pub value: Option<f64>,
    pub unit: String,
    pub reference_range: ReferenceRange,
    pub category: String,
}

/// Flattened positional view for tabular consumers:
/// `(name, value, unit, ref_low, ref_high, category)`.
pub type RecordRow = (String, Option<f64>, String, f64, f64, String);

/// Map-shaped view keyed for JSON consumers.
///
/// `id` is currently always identical to `name` — it is the slot a future
/// external canonicalization step writes its vocabulary key into.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordView {
    pub id: String,
    pub name: String,
    pub value: Option<f64>,
    pub unit: String,
    pub reference_range: ReferenceRange,
    pub category: String,
}

impl BiomarkerRecord {
    pub fn row(&self) -> RecordRow {
        (
            self.name.clone(),
            self.value,
            self.unit.clone(),
            self.reference_range.min,
            self.reference_range.max,
            self.category.clone(),
        )
    }

    pub fn view(&self) -> RecordView {
        RecordView {
            id: self.name.clone(),
            name: self.name.clone(),
            value: self.value,
            unit: self.unit.clone(),
            reference_range: self.reference_range,
            category: self.category.clone(),
        }
    }
}

/// Project a record collection into its positional-tuple form.
pub fn rows(records: &[BiomarkerRecord]) -> Vec<RecordRow> {
    records.iter().map(BiomarkerRecord::row).collect()
}

/// Project a record collection into its map-shaped form.
pub fn views(records: &[BiomarkerRecord]) -> Vec<RecordView> {
    records.iter().map(BiomarkerRecord::view).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RECORD_CATEGORY;

    fn sample() -> BiomarkerRecord {
        BiomarkerRecord {
            name: "Glucose".into(),
            value: Some(95.0),
            unit: "mg/dL".into(),
            reference_range: ReferenceRange { min: 70.0, max: 100.0 },
            category: RECORD_CATEGORY.into(),
        }
    }

    #[test]
    fn row_and_view_carry_identical_values() {
        let record = sample();
        let row = record.row();
        let view = record.view();

        assert_eq!(row.0, view.name);
        assert_eq!(row.1, view.value);
        assert_eq!(row.2, view.unit);
        assert_eq!(row.3, view.reference_range.min);
        assert_eq!(row.4, view.reference_range.max);
        assert_eq!(row.5, view.category);
    }

    #[test]
    fn view_id_mirrors_name() {
        let view = sample().view();
        assert_eq!(view.id, view.name);
    }

    #[test]
    fn view_serializes_camel_case_reference_range() {
        let json = serde_json::to_value(sample().view()).unwrap();
        assert_eq!(json["referenceRange"]["min"], 70.0);
        assert_eq!(json["referenceRange"]["max"], 100.0);
        assert_eq!(json["id"], "Glucose");
        assert_eq!(json["category"], "Biomarkers");
    }

    #[test]
    fn absent_value_serializes_as_null() {
        let mut record = sample();
        record.value = None;
        let json = serde_json::to_value(&record).unwrap();
        assert!(json["value"].is_null());
    }

    #[test]
    fn projections_preserve_order() {
        let mut second = sample();
        second.name = "Ferritin".into();
        let records = vec![sample(), second];

        let rows = rows(&records);
        let views = views(&records);
        assert_eq!(rows[0].0, "Glucose");
        assert_eq!(rows[1].0, "Ferritin");
        assert_eq!(views[0].name, "Glucose");
        assert_eq!(views[1].name, "Ferritin");
    }
}

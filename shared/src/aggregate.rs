use chrono::Month;
use std::cmp::Ordering;
use std::collections::HashMap;

use crate::record::SalesRecord;

/// Label used for records whose grouping cell is blank.
pub const UNKNOWN_GROUP: &str = "Unknown";

/// One aggregated group: label and summed value.
pub type GroupTotal = (String, f64);

/// How month labels are ordered on the month chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MonthOrder {
    /// Order in which months first appear in the data.
    #[default]
    Encounter,
    /// January first. Labels that are not month names follow, in encounter order.
    Calendar,
}

/// Groups `records` by `key` and sums `value` per group.
///
/// Groups come out in first-encounter order; a blank key is grouped under
/// [`UNKNOWN_GROUP`].
pub fn aggregate<'a, I, K, V>(records: I, key: K, value: V) -> Vec<GroupTotal>
where
    I: IntoIterator<Item = &'a SalesRecord>,
    K: Fn(&SalesRecord) -> &str,
    V: Fn(&SalesRecord) -> f64,
{
    let mut totals: Vec<GroupTotal> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for record in records {
        let label = group_label(key(record));
        let amount = value(record);
        match positions.get(&label) {
            Some(&pos) => totals[pos].1 += amount,
            None => {
                positions.insert(label.clone(), totals.len());
                totals.push((label, amount));
            }
        }
    }

    totals
}

fn group_label(raw: &str) -> String {
    if raw.is_empty() {
        UNKNOWN_GROUP.to_string()
    } else {
        raw.to_string()
    }
}

pub fn by_area<'a>(records: impl IntoIterator<Item = &'a SalesRecord>) -> Vec<GroupTotal> {
    aggregate(records, |r| r.area.as_str(), |r| r.value.value())
}

pub fn by_month<'a>(
    records: impl IntoIterator<Item = &'a SalesRecord>,
    order: MonthOrder,
) -> Vec<GroupTotal> {
    let totals = aggregate(records, |r| r.month.as_str(), |r| r.value.value());
    match order {
        MonthOrder::Encounter => totals,
        MonthOrder::Calendar => calendar_order(totals),
    }
}

pub fn by_category<'a>(records: impl IntoIterator<Item = &'a SalesRecord>) -> Vec<GroupTotal> {
    aggregate(records, |r| r.category.as_str(), |r| r.value.value())
}

/// Sales reps by summed value, highest first, at most `limit` of them.
/// Equal totals keep their encounter order; `-0.0` and `0.0` are equal.
pub fn top_sales_reps<'a>(
    records: impl IntoIterator<Item = &'a SalesRecord>,
    limit: usize,
) -> Vec<GroupTotal> {
    let mut totals = aggregate(records, |r| r.sales_rep.as_str(), |r| r.value.value());
    totals.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    totals.truncate(limit);
    totals
}

fn calendar_order(mut totals: Vec<GroupTotal>) -> Vec<GroupTotal> {
    totals.sort_by_key(|(label, _)| month_number(label).unwrap_or(u32::MAX));
    totals
}

/// Month number (1-12) for labels like `Jan` or `january`.
pub fn month_number(label: &str) -> Option<u32> {
    label
        .trim()
        .parse::<Month>()
        .ok()
        .map(|month| month.number_from_month())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::NumericCell;

    fn sale(month: &str, rep: &str, value: NumericCell) -> SalesRecord {
        SalesRecord {
            month: month.to_string(),
            sales_rep: rep.to_string(),
            value,
            ..Default::default()
        }
    }

    #[test]
    fn test_month_totals_keep_first_encounter_order() {
        let records = vec![
            sale("Jan", "", 100.0.into()),
            sale("Jan", "", 50.0.into()),
            sale("Feb", "", 20.0.into()),
        ];
        assert_eq!(
            by_month(&records, MonthOrder::Encounter),
            vec![("Jan".to_string(), 150.0), ("Feb".to_string(), 20.0)]
        );
    }

    #[test]
    fn test_unparsable_value_counts_as_zero() {
        let records = vec![SalesRecord {
            area: "North".to_string(),
            value: "abc".into(),
            ..Default::default()
        }];
        assert_eq!(by_area(&records), vec![("North".to_string(), 0.0)]);
    }

    #[test]
    fn test_blank_keys_group_as_unknown() {
        let records = vec![SalesRecord::default(), SalesRecord::default()];
        let totals = by_category(&records);
        assert_eq!(totals.len(), 1);
        assert_eq!(totals[0].0, UNKNOWN_GROUP);
    }

    #[test]
    fn test_group_totals_sum_to_input_total() {
        let records: Vec<SalesRecord> = (0..40)
            .map(|i| {
                let value = if i % 7 == 0 {
                    NumericCell::Text("n/a".to_string())
                } else {
                    NumericCell::Number(i as f64 * 1.25)
                };
                sale(["Jan", "Feb", "Mar"][i % 3], &format!("rep{}", i % 5), value)
            })
            .collect();
        let expected: f64 = records.iter().map(|r| r.value.value()).sum();

        for totals in [
            by_area(&records),
            by_month(&records, MonthOrder::Encounter),
            by_category(&records),
            aggregate(&records, |r| r.sales_rep.as_str(), |r| r.value.value()),
        ] {
            let sum: f64 = totals.iter().map(|(_, total)| total).sum();
            assert!((sum - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_top_sales_reps_is_capped_and_sorted() {
        let records: Vec<SalesRecord> = (0..15)
            .map(|i| sale("Jan", &format!("rep{}", i), NumericCell::Number((i * 10) as f64)))
            .collect();
        let top = top_sales_reps(&records, 10);

        assert_eq!(top.len(), 10);
        assert_eq!(top[0], ("rep14".to_string(), 140.0));
        assert!(top.windows(2).all(|pair| pair[0].1 >= pair[1].1));
    }

    #[test]
    fn test_top_sales_reps_ties_keep_encounter_order() {
        let records = vec![
            sale("", "Bea", 50.0.into()),
            sale("", "Al", 80.0.into()),
            sale("", "Cy", 50.0.into()),
            sale("", "", 50.0.into()),
        ];
        let labels: Vec<String> = top_sales_reps(&records, 10)
            .into_iter()
            .map(|(l, _)| l)
            .collect();
        assert_eq!(labels, vec!["Al", "Bea", "Cy", UNKNOWN_GROUP]);
    }

    #[test]
    fn test_top_sales_reps_negative_zero_ties_with_zero() {
        let records = vec![
            sale("", "NegZero", "-0".into()),
            sale("", "Zero", "abc".into()),
        ];
        let top = top_sales_reps(&records, 10);
        let labels: Vec<&str> = top.iter().map(|(l, _)| l.as_str()).collect();
        assert_eq!(labels, vec!["NegZero", "Zero"]);
    }

    #[test]
    fn test_calendar_month_order() {
        let records = vec![
            sale("Mar", "", 1.0.into()),
            sale("Q4", "", 1.0.into()),
            sale("january", "", 1.0.into()),
            sale("Feb", "", 1.0.into()),
            sale("", "", 1.0.into()),
        ];
        let labels: Vec<String> = by_month(&records, MonthOrder::Calendar)
            .into_iter()
            .map(|(l, _)| l)
            .collect();
        assert_eq!(labels, vec!["january", "Feb", "Mar", "Q4", UNKNOWN_GROUP]);
    }
}

use crate::format::{format_currency, format_items};
use crate::record::{LoadedRecord, RecordId};

/// Column headers of the sales table, the trailing one holding row actions.
pub const TABLE_COLUMNS: [&str; 11] = [
    "Area",
    "Class",
    "Sales Rep",
    "Client",
    "SKU/Sales",
    "Items",
    "OTC/HW",
    "Month",
    "Clients",
    "Value",
    "Actions",
];

pub const NO_DATA_NOTICE: &str = "No data found";

/// What the table body shows for a visible sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum TableBody {
    /// A single row spanning every column.
    Placeholder { colspan: usize, notice: &'static str },
    Rows(Vec<TableRow>),
}

impl TableBody {
    /// Number of `<tr>` elements the body renders.
    pub fn row_count(&self) -> usize {
        match self {
            TableBody::Placeholder { .. } => 1,
            TableBody::Rows(rows) => rows.len(),
        }
    }
}

/// One display row: text cells in column order plus what the row actions need.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub id: RecordId,
    /// Position within the rendered sequence.
    pub position: usize,
    pub cells: [String; 10],
}

/// Projects the visible records into table rows, in order.
pub fn table_body(visible: &[LoadedRecord]) -> TableBody {
    if visible.is_empty() {
        return TableBody::Placeholder {
            colspan: TABLE_COLUMNS.len(),
            notice: NO_DATA_NOTICE,
        };
    }

    let rows = visible
        .iter()
        .enumerate()
        .map(|(position, loaded)| {
            let r = &loaded.record;
            TableRow {
                id: loaded.id,
                position,
                cells: [
                    r.area.clone(),
                    r.class.clone(),
                    r.sales_rep.clone(),
                    r.client.clone(),
                    r.sku_sales.clone(),
                    format_items(r.items.value()),
                    r.category.clone(),
                    r.month.clone(),
                    r.clients.clone(),
                    format_currency(r.value.value()),
                ],
            }
        })
        .collect();

    TableBody::Rows(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{NumericCell, SalesRecord};

    #[test]
    fn test_empty_sequence_renders_one_placeholder_row() {
        let body = table_body(&[]);
        assert_eq!(body.row_count(), 1);
        assert_eq!(
            body,
            TableBody::Placeholder {
                colspan: 11,
                notice: NO_DATA_NOTICE
            }
        );
    }

    #[test]
    fn test_one_row_per_record_in_order() {
        let visible = LoadedRecord::from_response(
            (0..5)
                .map(|i| SalesRecord {
                    client: format!("client{}", i),
                    ..Default::default()
                })
                .collect(),
        );
        let body = table_body(&visible);
        assert_eq!(body.row_count(), 5);

        let TableBody::Rows(rows) = body else {
            panic!("expected rows");
        };
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row.position, i);
            assert_eq!(row.id, visible[i].id);
            assert_eq!(row.cells[3], format!("client{}", i));
        }
    }

    #[test]
    fn test_numeric_cells_are_formatted() {
        let visible = LoadedRecord::from_response(vec![SalesRecord {
            area: "<b>North</b>".to_string(),
            items: NumericCell::Number(1234.0),
            value: NumericCell::Text("2500.5".to_string()),
            ..Default::default()
        }]);
        let TableBody::Rows(rows) = table_body(&visible) else {
            panic!("expected rows");
        };
        // markup stays raw text here; the view inserts it as a text node
        assert_eq!(rows[0].cells[0], "<b>North</b>");
        assert_eq!(rows[0].cells[5], "1,234");
        assert_eq!(rows[0].cells[9], "$2,500.50");
    }
}

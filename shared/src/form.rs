use crate::record::{parse_leading_float, parse_leading_int, NumericCell, RecordId, SalesRecord};

/// Which form the record modal shows, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Add,
    Edit(RecordId),
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        !matches!(self, ModalState::Closed)
    }

    pub fn title(&self) -> &'static str {
        match self {
            ModalState::Edit(_) => "Edit Record",
            _ => "Add New Record",
        }
    }
}

/// Inputs of the record form, in the order they are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Area,
    Class,
    SalesRep,
    Client,
    Sku,
    Items,
    Category,
    Month,
    Clients,
    Value,
}

impl FormField {
    pub const ALL: [FormField; 10] = [
        FormField::Area,
        FormField::Class,
        FormField::SalesRep,
        FormField::Client,
        FormField::Sku,
        FormField::Items,
        FormField::Category,
        FormField::Month,
        FormField::Clients,
        FormField::Value,
    ];

    /// Element id of the input.
    pub fn input_id(&self) -> &'static str {
        match self {
            FormField::Area => "area",
            FormField::Class => "class",
            FormField::SalesRep => "salesRep",
            FormField::Client => "client",
            FormField::Sku => "sku",
            FormField::Items => "items",
            FormField::Category => "category",
            FormField::Month => "month",
            FormField::Clients => "clients",
            FormField::Value => "value",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Area => "Area",
            FormField::Class => "Class",
            FormField::SalesRep => "Sales Rep",
            FormField::Client => "Client",
            FormField::Sku => "SKU/Sales",
            FormField::Items => "Items",
            FormField::Category => "OTC/HW",
            FormField::Month => "Month",
            FormField::Clients => "Clients",
            FormField::Value => "Value",
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, FormField::Items | FormField::Value)
    }
}

/// Raw text of every form input.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecordForm {
    pub area: String,
    pub class: String,
    pub sales_rep: String,
    pub client: String,
    pub sku: String,
    pub items: String,
    pub category: String,
    pub month: String,
    pub clients: String,
    pub value: String,
}

impl RecordForm {
    pub fn from_record(record: &SalesRecord) -> Self {
        Self {
            area: record.area.clone(),
            class: record.class.clone(),
            sales_rep: record.sales_rep.clone(),
            client: record.client.clone(),
            sku: record.sku_sales.clone(),
            items: record.items.form_text(),
            category: record.category.clone(),
            month: record.month.clone(),
            clients: record.clients.clone(),
            value: record.value.form_text(),
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Area => &self.area,
            FormField::Class => &self.class,
            FormField::SalesRep => &self.sales_rep,
            FormField::Client => &self.client,
            FormField::Sku => &self.sku,
            FormField::Items => &self.items,
            FormField::Category => &self.category,
            FormField::Month => &self.month,
            FormField::Clients => &self.clients,
            FormField::Value => &self.value,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::Area => &mut self.area,
            FormField::Class => &mut self.class,
            FormField::SalesRep => &mut self.sales_rep,
            FormField::Client => &mut self.client,
            FormField::Sku => &mut self.sku,
            FormField::Items => &mut self.items,
            FormField::Category => &mut self.category,
            FormField::Month => &mut self.month,
            FormField::Clients => &mut self.clients,
            FormField::Value => &mut self.value,
        };
        *slot = value;
    }

    /// Gathers the inputs into a record. Items is read as a leading integer,
    /// value as a leading decimal, both 0 when unparsable.
    pub fn to_record(&self) -> SalesRecord {
        SalesRecord {
            area: self.area.clone(),
            class: self.class.clone(),
            sales_rep: self.sales_rep.clone(),
            client: self.client.clone(),
            sku_sales: self.sku.clone(),
            items: NumericCell::from(parse_leading_int(&self.items).unwrap_or(0)),
            category: self.category.clone(),
            month: self.month.clone(),
            clients: self.clients.clone(),
            value: NumericCell::from(
                parse_leading_float(&self.value)
                    .filter(|v| v.is_finite())
                    .unwrap_or(0.0),
            ),
            ..Default::default()
        }
    }
}

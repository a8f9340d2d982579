//! The dashboard's list screens and their column declarations.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{TableError, schema::TableSchema};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    Projects,
    Employees,
    Equipment,
    Revenue,
    Partners,
    Shifts,
    Diesel,
    Maintenance,
    Material,
    Expenses,
}

impl Screen {
    pub fn all() -> &'static [Screen] {
        use Screen::*;
        &[
            Projects,
            Employees,
            Equipment,
            Revenue,
            Partners,
            Shifts,
            Diesel,
            Maintenance,
            Material,
            Expenses,
        ]
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Screen::Projects => "projects",
            Screen::Employees => "employees",
            Screen::Equipment => "equipment",
            Screen::Revenue => "revenue",
            Screen::Partners => "partners",
            Screen::Shifts => "shifts",
            Screen::Diesel => "diesel",
            Screen::Maintenance => "maintenance",
            Screen::Material => "material",
            Screen::Expenses => "expenses",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Screen::Projects => "Projects",
            Screen::Employees => "Employees",
            Screen::Equipment => "Equipment",
            Screen::Revenue => "Revenue",
            Screen::Partners => "Partners",
            Screen::Shifts => "Shifts",
            Screen::Diesel => "Diesel Transactions",
            Screen::Maintenance => "Maintenance Transactions",
            Screen::Material => "Material Transactions",
            Screen::Expenses => "Expenses",
        }
    }

    pub fn schema(&self) -> TableSchema {
        let builder = TableSchema::builder();
        match self {
            Screen::Projects => builder
                .text("project_name", "Project")
                .text("customer.partner_name", "Customer")
                .text("location", "Location")
                .date("start_date", "Start Date")
                .date("end_date", "End Date")
                .number("budget", "Budget")
                .boolean("is_active", "Active")
                .search("project_name")
                .search("customer.partner_name")
                .search("location"),
            Screen::Employees => builder
                .text("name", "Name")
                .text("designation", "Designation")
                .text("phone_number", "Phone")
                .date("joining_date", "Joining Date")
                .number("salary", "Salary")
                .boolean("is_active", "Active")
                .search("name")
                .search("designation")
                .search("phone_number"),
            Screen::Equipment => builder
                .text("equipment_name", "Equipment")
                .text("equipment_type", "Type")
                .text("registration_number", "Registration")
                .date("purchase_date", "Purchased")
                .number("hourly_rate", "Hourly Rate")
                .boolean("is_available", "Available")
                .search("equipment_name")
                .search("equipment_type")
                .search("registration_number"),
            Screen::Revenue => builder
                .text("invoice_number", "Invoice")
                .text("project.project_name", "Project")
                .number("amount", "Amount")
                .date("received_date", "Received")
                .boolean("is_paid", "Paid")
                .search("invoice_number")
                .search("project.project_name"),
            Screen::Partners => builder
                .text("partner_name", "Partner")
                .text("contact_person", "Contact")
                .text("email", "Email")
                .text("phone_number", "Phone")
                .boolean("is_customer", "Customer")
                .boolean("is_vendor", "Vendor")
                .search("partner_name")
                .search("contact_person")
                .search("email"),
            Screen::Shifts => builder
                .text("shift_name", "Shift")
                .time("start_time", "Start")
                .time("end_time", "End")
                .number("break_minutes", "Break (min)")
                .boolean("is_night_shift", "Night")
                .search("shift_name"),
            Screen::Diesel => builder
                .text("equipment.equipment_name", "Equipment")
                .date("transaction_date", "Date")
                .number("quantity_litres", "Litres")
                .number("rate", "Rate")
                .number("amount", "Amount")
                .text("filled_by", "Filled By")
                .search("equipment.equipment_name")
                .search("filled_by"),
            Screen::Maintenance => builder
                .text("equipment.equipment_name", "Equipment")
                .text("service_type", "Service")
                .text("vendor.partner_name", "Vendor")
                .date("service_date", "Date")
                .number("cost", "Cost")
                .boolean("is_completed", "Completed")
                .search("equipment.equipment_name")
                .search("service_type")
                .search("vendor.partner_name"),
            Screen::Material => builder
                .text("material_name", "Material")
                .text("unit", "Unit")
                .number("quantity", "Quantity")
                .number("unit_price", "Unit Price")
                .text("supplier.partner_name", "Supplier")
                .date("received_date", "Received")
                .search("material_name")
                .search("supplier.partner_name"),
            Screen::Expenses => builder
                .text("category", "Category")
                .text("description", "Description")
                .number("amount", "Amount")
                .date("expense_date", "Date")
                .text("paid_by", "Paid By")
                .boolean("is_reimbursed", "Reimbursed")
                .search("category")
                .search("description")
                .search("paid_by"),
        }
        .build()
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Screen {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Screen::all()
            .iter()
            .copied()
            .find(|screen| screen.slug() == wanted)
            .ok_or_else(|| TableError::UnknownScreen(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::sorting::SemanticTypes;
    use fleetdesk_model::SemanticType;

    #[test]
    fn every_screen_is_searchable_and_typed() {
        for screen in Screen::all() {
            let schema = screen.schema();
            assert!(!schema.columns().is_empty(), "{screen} has no columns");
            assert!(!schema.search_fields().is_empty(), "{screen} has no search fields");
            assert_eq!(screen.slug().parse::<Screen>().unwrap(), *screen);
        }
    }

    #[test]
    fn shift_times_sort_as_time_of_day() {
        let schema = Screen::Shifts.schema();
        assert_eq!(schema.semantic_type("start_time"), SemanticType::TimeOfDay);
        assert_eq!(schema.semantic_type("is_night_shift"), SemanticType::Boolean);
    }

    #[test]
    fn unknown_slug_is_an_error() {
        assert!(matches!(
            "timesheets".parse::<Screen>(),
            Err(TableError::UnknownScreen(name)) if name == "timesheets"
        ));
    }
}

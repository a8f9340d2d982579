//! Free-text search over a screen's searchable fields.
//!
//! A row matches when at least one accessor yields text whose lowercase form
//! contains the lowercase query. Accessors that hit a missing or null value
//! simply do not match. Filtering never reorders rows.

use std::borrow::Cow;

use fleetdesk_model::FieldPath;
use serde_json::Value;
use tracing::trace;

use super::sorting::TableRow;

/// Extracts the searchable text of one field from a row.
pub trait FieldAccessor<T: ?Sized> {
    /// `None` means "nothing to match against".
    fn text<'a>(&self, row: &'a T) -> Option<Cow<'a, str>>;
}

impl<T: TableRow + ?Sized> FieldAccessor<T> for FieldPath {
    fn text<'a>(&self, row: &'a T) -> Option<Cow<'a, str>> {
        match row.field(self)? {
            Value::String(s) => Some(Cow::Borrowed(s.as_str())),
            Value::Number(n) => Some(Cow::Owned(n.to_string())),
            Value::Bool(b) => Some(Cow::Borrowed(if *b { "true" } else { "false" })),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }
}

impl<T: ?Sized, A: FieldAccessor<T> + ?Sized> FieldAccessor<T> for &A {
    fn text<'a>(&self, row: &'a T) -> Option<Cow<'a, str>> {
        (**self).text(row)
    }
}

impl<T: ?Sized, A: FieldAccessor<T> + ?Sized> FieldAccessor<T> for Box<A> {
    fn text<'a>(&self, row: &'a T) -> Option<Cow<'a, str>> {
        (**self).text(row)
    }
}

/// Adapter turning a closure into a [`FieldAccessor`].
#[derive(Debug, Clone, Copy)]
pub struct FnAccessor<F>(pub F);

impl<T: ?Sized, F> FieldAccessor<T> for FnAccessor<F>
where
    F: Fn(&T) -> Option<String>,
{
    fn text<'a>(&self, row: &'a T) -> Option<Cow<'a, str>> {
        (self.0)(row).map(Cow::Owned)
    }
}

/// True when the query is blank and filtering is a pass-through.
pub fn is_blank_query(query: &str) -> bool {
    query.trim().is_empty()
}

/// Return the rows where any of `fields` contains `query`, ignoring case.
///
/// A blank (empty or whitespace-only) query returns every row.
pub fn filter<T, A>(records: &[T], query: &str, fields: &[A]) -> Vec<T>
where
    T: Clone,
    A: FieldAccessor<T>,
{
    if is_blank_query(query) {
        return records.to_vec();
    }

    let needle = query.to_lowercase();
    let matched: Vec<T> = records
        .iter()
        .filter(|row| matches_any(*row, &needle, fields))
        .cloned()
        .collect();

    trace!(
        query,
        input = records.len(),
        matched = matched.len(),
        "filtered rows"
    );
    matched
}

fn matches_any<T, A>(row: &T, needle: &str, fields: &[A]) -> bool
where
    A: FieldAccessor<T>,
{
    fields.iter().any(|field| {
        field
            .text(row)
            .is_some_and(|text| text.to_lowercase().contains(needle))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use fleetdesk_model::Record;
    use serde_json::json;

    fn rows() -> Vec<Record> {
        [
            json!({ "id": 1, "name": "Excavator CAT 320", "customer": { "partner_name": "Northwind" } }),
            json!({ "id": 2, "name": "Wheel Loader", "customer": null }),
            json!({ "id": 3, "name": "Dump Truck", "customer": { "partner_name": "Contoso Haulage" } }),
            json!({ "id": 4, "name": null, "code": 320 }),
        ]
        .into_iter()
        .map(|value| Record::from_value(value).unwrap())
        .collect()
    }

    fn ids(rows: &[Record]) -> Vec<String> {
        rows.iter().filter_map(Record::id).map(|id| id.to_string()).collect()
    }

    #[test]
    fn blank_query_is_identity() {
        let records = rows();
        let fields = [FieldPath::new("name")];
        assert_eq!(filter(&records, "", &fields), records);
        assert_eq!(filter(&records, "   \t", &fields), records);
    }

    #[test]
    fn matches_case_insensitive_substring() {
        let records = rows();
        let fields = [FieldPath::new("name")];
        assert_eq!(ids(&filter(&records, "LOADER", &fields)), ["2"]);
        assert_eq!(ids(&filter(&records, "cat", &fields)), ["1"]);
    }

    #[test]
    fn surrounding_spaces_are_part_of_the_needle() {
        let records = rows();
        let fields = [FieldPath::new("name")];
        assert_eq!(ids(&filter(&records, " cat", &fields)), ["1"]);
        assert_eq!(ids(&filter(&records, " 320", &fields)), ["1"]);
        assert!(filter(&records, "320 ", &fields).is_empty());
    }

    #[test]
    fn any_field_may_match_and_order_is_kept() {
        let records = rows();
        let fields = [
            FieldPath::new("name"),
            FieldPath::new("customer.partner_name"),
            FieldPath::new("code"),
        ];
        assert_eq!(ids(&filter(&records, "320", &fields)), ["1", "4"]);
        assert_eq!(ids(&filter(&records, "u", &fields)), ["3"]);
        assert_eq!(ids(&filter(&records, "north", &fields)), ["1"]);
    }

    #[test]
    fn missing_nested_fields_do_not_match() {
        let records = rows();
        let fields = [FieldPath::new("customer.partner_name.first")];
        assert!(filter(&records, "north", &fields).is_empty());
    }

    #[test]
    fn absent_query_yields_nothing() {
        let records = rows();
        let fields = [FieldPath::new("name"), FieldPath::new("customer.partner_name")];
        assert!(filter(&records, "zzz-not-there", &fields).is_empty());
    }

    #[test]
    fn closures_can_be_accessors() {
        let records = rows();
        let upper_name = FnAccessor(|row: &Record| {
            row.get("name")
                .and_then(Value::as_str)
                .map(|name| name.to_uppercase())
        });
        assert_eq!(ids(&filter(&records, "dump", &[upper_name])), ["3"]);
    }
}

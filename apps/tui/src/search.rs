use crate::domain::Record;

/// Returns the subsequence of `records` matching `query`, in source order.
///
/// An empty (or whitespace-only after folding) query matches everything.
/// Otherwise a record matches when any of its searchable fields (name,
/// creation date, description, console list, any tag) or any of its
/// variation names contains the query as a case-insensitive substring.
pub fn filter_records<'a>(records: &'a [Record], query: &str) -> Vec<&'a Record> {
    filter_indices(records, query)
        .into_iter()
        .map(|index| &records[index])
        .collect()
}

/// Index-based variant of [`filter_records`], used by the app state to keep
/// positions into the immutable record set.
pub fn filter_indices(records: &[Record], query: &str) -> Vec<usize> {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return (0..records.len()).collect();
    }

    records
        .iter()
        .enumerate()
        .filter(|(_, record)| matches_query(record, &needle))
        .map(|(index, _)| index)
        .collect()
}

fn matches_query(record: &Record, needle: &str) -> bool {
    let field_matches = contains(Some(record.name.as_str()), needle)
        || contains(record.created.as_deref(), needle)
        || contains(record.description.as_deref(), needle)
        || contains(record.consoles.as_deref(), needle)
        || record.tags.iter().any(|tag| contains(Some(tag), needle));

    let variation_matches = record
        .variations
        .iter()
        .any(|variation| contains(variation.name.as_deref(), needle));

    field_matches || variation_matches
}

fn contains(field: Option<&str>, needle: &str) -> bool {
    field.is_some_and(|value| value.to_lowercase().contains(needle))
}

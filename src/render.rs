use crate::record::Record;

/// Render `records` as text: an empty line, the title, an empty line, then one
/// [Record::row] per line in slice order.
pub fn render_table<T: Record>(title: &str, records: &[T]) -> String {
    let mut table = format!("\n{}\n\n", title);
    for record in records {
        table.push_str(&record.row());
        table.push('\n');
    }
    table
}

use comfy_table::{Attribute, Cell, ColumnConstraint, ContentArrangement, Table, Width};

use crate::config::columns::ColumnDef;
use crate::data::pipeline::AlertView;

/// Render the derived row set with the user's visible column layout.
pub fn render_alerts(view: &AlertView, columns: &[&ColumnDef]) -> String {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(
        columns
            .iter()
            .map(|c| Cell::new(c.label).add_attribute(Attribute::Bold)),
    );
    table.set_constraints(
        columns
            .iter()
            .map(|c| ColumnConstraint::LowerBoundary(Width::Fixed(c.width))),
    );

    for row in view.rows() {
        table.add_row(columns.iter().map(|c| row.field(c.key).to_string()));
    }

    table.to_string()
}

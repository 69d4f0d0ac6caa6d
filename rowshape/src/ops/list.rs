//! List operation - declaration inventory from a lowered manifest.

use indexmap::IndexMap;
use rowshape_manifest::Lowered;

use crate::reports::ListReport;

/// Execute the list operation.
///
/// Groups declarations by namespace, preserving manifest order.
pub fn list(lowered: &Lowered) -> ListReport {
    let mut namespaces: IndexMap<String, Vec<String>> = IndexMap::new();

    for shape in &lowered.shapes {
        let columns = shape.columns.len();
        namespaces
            .entry(shape.namespace.to_string())
            .or_default()
            .push(format!(
                "{} ({} column{})",
                shape.name,
                columns,
                if columns == 1 { "" } else { "s" }
            ));
    }

    ListReport {
        namespaces,
        skipped: super::generate::skipped_lines(lowered),
    }
}

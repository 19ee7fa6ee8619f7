use crate::render::format;

use conv_core::ListPage;

pub const NO_RECORDS_MESSAGE: &str = "No records found.";
const NO_PARTICIPATION: &str = "N/A";

/// One block per record; no padding
pub fn render(page: &ListPage<'_>) -> String {
    if page.is_empty() {
        return format!("{NO_RECORDS_MESSAGE}\n");
    }

    let mut out = String::new();
    for record in &page.rows {
        let chip = record
            .tipo_asamblea
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(NO_PARTICIPATION);

        out.push_str(&format!("{} [{}]\n", record.full_name(), chip));
        out.push_str(&format!("  Age: {}\n", format::age(record.edad)));
        out.push_str(&format!(
            "  Registered: {}\n\n",
            format::date(record.fecha_registro.as_ref())
        ));
    }

    let (first, last) = page.range();
    out.push_str(&format!("{first}-{last} of {}\n", page.total));
    out
}

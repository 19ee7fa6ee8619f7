use crate::render::format;

use conv_core::{EnrollmentType, ListPage, PaymentType, Record, SortDirection, SortKey, SortSpec};

const COLUMNS: [(&str, SortKey); 8] = [
    ("Name", SortKey::Name),
    ("Surname", SortKey::Surname),
    ("Age", SortKey::Age),
    ("Enrollment", SortKey::EnrollmentType),
    ("Payment", SortKey::PaymentType),
    ("Reference", SortKey::PaymentReference),
    ("Amount", SortKey::Amount),
    ("Registered", SortKey::RegisteredAt),
];

fn cells(record: &Record) -> [String; 8] {
    [
        record.nombre.clone(),
        record.apellido.clone(),
        format::age(record.edad),
        EnrollmentType::label_for(&record.tipo_matricula).to_string(),
        PaymentType::label_for(&record.tipo_pago).to_string(),
        record.referencia_pago.clone(),
        format::amount(record.monto),
        format::date(record.fecha_registro.as_ref()),
    ]
}

fn header_cells(sort: SortSpec) -> [String; 8] {
    COLUMNS.map(|(title, key)| {
        if key != sort.key {
            return title.to_string();
        }
        match sort.direction {
            SortDirection::Asc => format!("{title} ^"),
            SortDirection::Desc => format!("{title} v"),
        }
    })
}

fn write_row(out: &mut String, cells: &[String; 8], widths: &[usize; 8]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect();
    out.push_str(line.join(" | ").trim_end());
    out.push('\n');
}

/// Fixed-height table: short pages are padded with blank rows, and the
/// footer reads `first-last of total`. The active sort column is marked.
pub fn render(page: &ListPage<'_>, sort: SortSpec) -> String {
    let header = header_cells(sort);
    let rows: Vec<[String; 8]> = page.rows.iter().map(|r| cells(r)).collect();

    let mut widths = header.clone().map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    write_row(&mut out, &header, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&rule.join("-+-"));
    out.push('\n');

    for row in &rows {
        write_row(&mut out, row, &widths);
    }
    for _ in 0..page.padding_rows() {
        out.push('\n');
    }

    let (first, last) = page.range();
    out.push_str(&format!("{first}-{last} of {}\n", page.total));
    out
}

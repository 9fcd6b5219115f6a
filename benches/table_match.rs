// benches/table_match.rs
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use cric_stats::specs::cricbuzz;

/// Synthetic stats page: noise tables up front, the batting table last.
fn sample_page(noise_tables: usize, rows_per_table: usize) -> String {
    let mut doc = String::from("<html><body>");
    for t in 0..noise_tables {
        doc.push_str("<table>");
        for r in 0..rows_per_table {
            doc.push_str(&format!(
                "<tr><td>link {t}-{r}</td><td>nav</td><td>more</td></tr>"
            ));
        }
        doc.push_str("</table>");
    }
    doc.push_str(
        "<table>\
         <tr><th>Format</th><th>Matches</th><th>Runs</th><th>Average</th></tr>",
    );
    for r in 0..rows_per_table {
        doc.push_str(&format!(
            "<tr><td>Test</td><td>{r}</td><td>{}</td><td>49.15</td></tr>",
            r * 37
        ));
    }
    doc.push_str("</table></body></html>");
    doc
}

fn bench_table_match(c: &mut Criterion) {
    let doc = sample_page(12, 40);

    c.bench_function("parse_tables", |b| {
        b.iter(|| {
            let tables = cricbuzz::parse_tables(black_box(&doc));
            black_box(tables.len())
        })
    });

    c.bench_function("parse_and_select_batting", |b| {
        b.iter(|| {
            let found = cricbuzz::parse_tables(black_box(&doc))
                .into_iter()
                .find(cricbuzz::is_batting_table);
            black_box(found.is_some())
        })
    });
}

criterion_group!(benches, bench_table_match);
criterion_main!(benches);

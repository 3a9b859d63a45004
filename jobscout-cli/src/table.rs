//! GitHub-flavoured console table for job listings.
use jobscout_common::JobListing;

const HEADERS: [&str; 5] = ["Title", "Company", "Location", "Posted", "URL"];

/// Render listings as a pipe-delimited table with a separator row, the same
/// shape GitHub markdown uses. An empty result set renders just the header.
pub fn render(jobs: &[JobListing]) -> String {
    let rows: Vec<[String; 5]> = jobs
        .iter()
        .map(|job| {
            [
                job.title.clone(),
                job.company.clone(),
                job.location.clone(),
                job.posted_day(),
                job.url.clone(),
            ]
        })
        .collect();

    let mut widths: [usize; 5] = HEADERS.map(str::len);
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    render_row(&mut out, &HEADERS.map(String::from), &widths);
    render_separator(&mut out, &widths);
    for row in &rows {
        render_row(&mut out, row, &widths);
    }
    out
}

fn render_row(out: &mut String, cells: &[String; 5], widths: &[usize; 5]) {
    let mut first = true;
    for (cell, width) in cells.iter().zip(widths.iter()) {
        out.push_str(if first { "| " } else { " | " });
        first = false;
        out.push_str(cell);
        for _ in cell.chars().count()..*width {
            out.push(' ');
        }
    }
    out.push_str(" |\n");
}

fn render_separator(out: &mut String, widths: &[usize; 5]) {
    let mut first = true;
    for width in widths {
        out.push_str(if first { "|-" } else { "-|-" });
        first = false;
        for _ in 0..*width {
            out.push('-');
        }
    }
    out.push_str("-|\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn listing(title: &str, company: &str) -> JobListing {
        JobListing {
            title: title.into(),
            company: company.into(),
            location: "Remote".into(),
            posted_at: Utc.with_ymd_and_hms(2026, 8, 20, 9, 0, 0).unwrap(),
            description: String::new(),
            url: "https://example.com/1".into(),
        }
    }

    #[test]
    fn renders_header_separator_and_rows() {
        let rendered = render(&[listing("Engineer", "Acme")]);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("| Title"));
        assert!(lines[1].starts_with("|--"));
        assert!(lines[2].contains("| Engineer"));
        assert!(lines[2].contains("| 2026-08-20"));
    }

    #[test]
    fn columns_align_across_rows() {
        let rendered = render(&[listing("Short", "A"), listing("A Much Longer Title", "B")]);
        let lines: Vec<&str> = rendered.lines().collect();
        let widths: Vec<usize> = lines.iter().map(|l| l.chars().count()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn empty_results_render_header_only() {
        let rendered = render(&[]);
        assert_eq!(rendered.lines().count(), 2);
    }
}

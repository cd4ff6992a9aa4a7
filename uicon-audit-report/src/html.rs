//! Static HTML rendering of the audit table.

use std::fs;
use std::path::Path;

use uicon_audit_core::IconStatus;

use crate::error::ReportError;
use crate::rows::ReportRow;

const STYLESHEET: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/4.7.0/css/font-awesome.min.css";

const CSS: &str = "\
body {
    font-family: arial, sans-serif;
}
table {
    border-collapse: collapse;
    width: 100%;
}
td, th {
    border: 1px solid #dddddd;
    text-align: left;
    padding: 8px;
}
tr:nth-child(even) {
    background-color: #eeeeee;
}
";

const HEADERS: [&str; 10] = [
    "Name",
    "Pokémon",
    "Form",
    "Costume",
    "Mega ID",
    "Full UICON",
    "Used UICON",
    "Status",
    "UICON",
    "In-game Icon",
];

/// Legend order is fixed: best outcome first.
const LEGEND_ORDER: [IconStatus; 4] = [
    IconStatus::Full,
    IconStatus::Fallback,
    IconStatus::Default,
    IconStatus::Missing,
];

/// Fixed presentation of one status: font-awesome glyph, color, short name,
/// and the legend description.
struct StatusStyle {
    glyph: &'static str,
    color: &'static str,
    name: &'static str,
    desc: &'static str,
}

fn status_style(status: IconStatus) -> StatusStyle {
    match status {
        IconStatus::Full => StatusStyle {
            glyph: "check",
            color: "green",
            name: "full",
            desc: "The Pokemon is represented correctly and no fallback was needed",
        },
        IconStatus::Fallback => StatusStyle {
            glyph: "minus",
            color: "green",
            name: "fallback",
            desc: "When the icon represents the correct Pokemon, but fallback was used. \
                   (e.g. you want to display Purified Pikachu but the icon of normal Pikachu is used)",
        },
        IconStatus::Default => StatusStyle {
            glyph: "times",
            color: "orange",
            name: "overlay",
            desc: "When the base Mon is the same, but an overlay (like a costume) is missing. \
                   (e.g. you want to display Party hat Bulbasaur but the icon of normal Bulbasaur is used)<br>\
                   <i>Warning: This is faulty for some Pokemon like FALL_2018 Pichu, 1st-form Spinda, \
                   trash-form Wormadam, standard Darmanitan and Galar evolutions like Obstagoon, Perrserker, \
                   Sirfetch\u{2019}d, Mr. Rime and Runerigus</i>",
        },
        IconStatus::Missing => StatusStyle {
            glyph: "times",
            color: "red",
            name: "missing",
            desc: "The Pokemon icon is missing and the default 0 icon is displayed",
        },
    }
}

/// Render the complete report document.
pub fn render(rows: &[ReportRow]) -> String {
    let mut html = String::new();
    html.push_str("<html>\n<head>\n");
    html.push_str(&format!("<link rel=\"stylesheet\" href=\"{STYLESHEET}\">\n"));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n</head>\n<body>\n");

    html.push_str("<h1>UICON Overview</h1>\n");
    html.push_str("<h2>Status Legend</h2>\n");
    for status in LEGEND_ORDER {
        let style = status_style(status);
        html.push_str(&format!(
            "<a>{} <b>{}</b><br>{}<br><br></a>\n",
            status_icon(&style),
            style.name,
            style.desc,
        ));
    }

    html.push_str("<table><tr>");
    for header in HEADERS {
        html.push_str("<th>");
        html.push_str(header);
        html.push_str("</th>");
    }
    html.push_str("</tr>\n");

    for row in rows {
        render_row(&mut html, row);
    }

    html.push_str("</table>\n");
    html.push_str(&format!(
        "<p><i>Generated {}</i></p>\n",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
    ));
    html.push_str("</body>\n</html>\n");
    html
}

/// Write the rendered report to `path`.
pub fn write_report(path: &Path, rows: &[ReportRow]) -> Result<(), ReportError> {
    fs::write(path, render(rows))?;
    Ok(())
}

fn status_icon(style: &StatusStyle) -> String {
    format!(
        "<i class=\"fa fa-{}\" style=\"font-size:20px;color:{};\"></i>",
        style.glyph, style.color,
    )
}

fn render_row(html: &mut String, row: &ReportRow) {
    let style = status_style(row.status);
    html.push_str("<tr>\n");
    push_cell(html, &escape_html(&row.name));
    push_cell(html, &escape_html(&row.species_label));
    push_cell(html, &escape_html(&row.form_label));
    push_cell(html, &escape_html(&row.costume_label));
    push_cell(html, &row.temp_evolution_id.to_string());
    push_cell(html, &escape_html(&row.full));
    push_cell(html, &escape_html(&row.used));
    push_cell(html, &format!("{} {}", status_icon(&style), style.name));
    push_cell(
        html,
        &format!(
            "<img src=\"{}\" width=\"40\" height=\"40\">",
            escape_html(&row.local_image),
        ),
    );
    push_cell(
        html,
        &format!(
            "<img src=\"{}\" width=\"60\" height=\"60\">",
            escape_html(&row.remote_image),
        ),
    );
    html.push_str("</tr>\n");
}

fn push_cell(html: &mut String, content: &str) {
    html.push_str("  <td>");
    html.push_str(content);
    html.push_str("</td>\n");
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> ReportRow {
        ReportRow {
            name: "Bulbasaur".to_string(),
            species_label: "BULBASAUR (1)".to_string(),
            form_label: "UNSET (0)".to_string(),
            costume_label: "0 (0)".to_string(),
            temp_evolution_id: 0,
            full: "1".to_string(),
            used: "1".to_string(),
            status: IconStatus::Full,
            local_image: "pokemon/1.png".to_string(),
            remote_image: "https://example.invalid/pm1.png".to_string(),
        }
    }

    #[test]
    fn renders_legend_and_headers() {
        let html = render(&[]);
        assert!(html.contains("<h1>UICON Overview</h1>"));
        for header in HEADERS {
            assert!(html.contains(&format!("<th>{header}</th>")), "{header}");
        }
        // All four legend entries, including the known-faulty caveat.
        for name in ["full", "fallback", "overlay", "missing"] {
            assert!(html.contains(&format!("<b>{name}</b>")), "{name}");
        }
        assert!(html.contains("Warning: This is faulty for some Pokemon"));
    }

    #[test]
    fn renders_row_cells() {
        let html = render(&[sample_row()]);
        assert!(html.contains("<td>BULBASAUR (1)</td>"));
        assert!(html.contains("fa fa-check"));
        assert!(html.contains("<img src=\"pokemon/1.png\" width=\"40\" height=\"40\">"));
    }

    #[test]
    fn escapes_dynamic_text() {
        let mut row = sample_row();
        row.name = "A&B <C>".to_string();
        let html = render(&[row]);
        assert!(html.contains("A&amp;B &lt;C&gt;"));
        assert!(!html.contains("A&B <C>"));
    }

    #[test]
    fn writes_report_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.html");
        write_report(&path, &[sample_row()]).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("</html>"));
    }
}

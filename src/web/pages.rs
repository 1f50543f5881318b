//! HTML templates for the dashboard page.
//!
//! The page is assembled from plain `format!` templates: a header with the
//! organization branding, a tab bar, the ownership analysis section, one
//! parameterized embed panel per external map, and the PDF browser.

use crate::config::Config;
use crate::models::{MapEntry, OwnershipTable, PdfCategory};

/// Escapes text for safe interpolation into HTML.
fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Renders the complete dashboard page.
pub fn render_dashboard(
    config: &Config,
    table: &anyhow::Result<OwnershipTable>,
    maps: &[MapEntry],
    categories: &[PdfCategory],
    show_tip: bool,
) -> String {
    let tip_html = if show_tip {
        config
            .ui
            .sidebar_tip
            .as_deref()
            .map(tip_banner)
            .unwrap_or_default()
    } else {
        String::new()
    };

    let mut tabs = String::new();
    let mut panels = String::new();

    tabs.push_str("<button class=\"tab active\" data-tab=\"analyza\">📊 Analýza vlastníckych vzťahov</button>\n");
    panels.push_str(&format!(
        "<section class=\"panel active\" id=\"tab-analyza\">\n{}\n</section>\n",
        analysis_section(table)
    ));

    for entry in maps {
        tabs.push_str(&format!(
            "<button class=\"tab\" data-tab=\"{id}\">🗺️ {label}</button>\n",
            id = entry.id,
            label = html_escape(entry.label),
        ));
        panels.push_str(&format!(
            "<section class=\"panel\" id=\"tab-{id}\">\n{panel}\n</section>\n",
            id = entry.id,
            panel = embed_panel(entry),
        ));
    }

    tabs.push_str("<button class=\"tab\" data-tab=\"pdf\">📁 Mapy na stiahnutie</button>\n");
    panels.push_str(&format!(
        "<section class=\"panel\" id=\"tab-pdf\">\n{}\n</section>\n",
        pdf_section(categories)
    ));

    let content = format!(
        r#"{tip_html}
    <header class="page-header">
        <div class="logo-box">🗺️</div>
        <div>
            <h1>{organization}</h1>
            <h2 class="subtitle">{subtitle}</h2>
        </div>
    </header>
    <nav class="tab-bar">
{tabs}    </nav>
    <main>
{panels}    </main>"#,
        organization = html_escape(&config.ui.organization),
        subtitle = html_escape(&config.ui.subtitle),
    );

    base_template("Mapa vlastníckych vzťahov", &content)
}

/// Base HTML document shell.
fn base_template(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="sk">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <link rel="stylesheet" href="/static/style.css">
    <script src="https://cdn.plot.ly/plotly-2.35.2.min.js"></script>
</head>
<body>
{content}
    <script src="/static/app.js"></script>
</body>
</html>
"#,
        title = html_escape(title),
    )
}

/// Dismissible one-time tip banner.
fn tip_banner(text: &str) -> String {
    format!(
        r#"    <div class="tip-banner" id="tip-banner">
        <span>💡 {text}</span>
        <button id="tip-dismiss" title="Zavrieť">✕</button>
    </div>"#,
        text = html_escape(text),
    )
}

/// Ownership analysis section: data table, chart-mode toggle, chart container.
///
/// A failed workbook load renders an inline error; the rest of the page is
/// unaffected.
fn analysis_section(table: &anyhow::Result<OwnershipTable>) -> String {
    match table {
        Ok(table) => format!(
            r#"    <h3>Výmery druhov pozemkov podľa vlastníctva (ha)</h3>
{table_html}
    <div class="chart-toggle">
        <label><input type="radio" name="chart-mode" value="proportion" checked> 📈 Percentuálny podiel druhov pozemkov</label>
        <label><input type="radio" name="chart-mode" value="magnitude"> 📊 Výmery pozemkov podľa vlastníctva</label>
    </div>
    <div class="chart-holder"><div id="chart"></div></div>"#,
            table_html = ownership_table_html(table),
        ),
        Err(err) => format!(
            r#"    <div class="error-box">Analýzu vlastníckych vzťahov sa nepodarilo načítať.<br><small>{details}</small></div>"#,
            details = html_escape(&format!("{err:#}")),
        ),
    }
}

/// Renders the raw ownership table (including the grand-total row).
fn ownership_table_html(table: &OwnershipTable) -> String {
    let mut header_cells = format!("<th>{}</th>", html_escape(&table.index_column));
    for column in &table.value_columns {
        header_cells.push_str(&format!("<th>{}</th>", html_escape(column)));
    }

    let mut rows = String::new();
    for row in &table.raw_rows {
        let mut cells = format!("<td>{}</td>", html_escape(&row.category));
        for value in &row.values {
            match value {
                Some(v) => cells.push_str(&format!("<td class=\"num\">{v:.2}</td>")),
                None => cells.push_str("<td class=\"num\"></td>"),
            }
        }
        rows.push_str(&format!("        <tr>{cells}</tr>\n"));
    }

    format!(
        r#"    <table class="data-table">
        <thead><tr>{header_cells}</tr></thead>
        <tbody>
{rows}        </tbody>
    </table>"#,
    )
}

/// One parameterized map embed panel: iframe plus an "open externally"
/// link-styled button. Every map tab reuses this component.
fn embed_panel(entry: &MapEntry) -> String {
    format!(
        r#"    <h3>🗺️ {label}</h3>
    <iframe src="{url}" width="100%" height="{height}" style="border:none;"></iframe>
    <a href="{url}" target="_blank" class="open-map-button">🌍 Otvoriť mapu v novom okne</a>"#,
        label = html_escape(entry.label),
        url = entry.url,
        height = entry.height,
    )
}

/// PDF browser section.
///
/// The document list is filled in by the client script when a category is
/// selected; an empty category tree shows an informational message and no
/// selector.
fn pdf_section(categories: &[PdfCategory]) -> String {
    if categories.is_empty() {
        return r#"    <h3>📁 Mapy na stiahnutie</h3>
    <p class="info-box">Nie sú dostupné žiadne kategórie máp.</p>"#
            .to_string();
    }

    let mut options = String::new();
    for category in categories {
        options.push_str(&format!(
            "        <option value=\"{name}\">{name}</option>\n",
            name = html_escape(&category.name),
        ));
    }

    format!(
        r#"    <h3>📁 Mapy na stiahnutie</h3>
    <label for="pdf-category">Kategória:</label>
    <select id="pdf-category">
        <option value="">— vyberte kategóriu —</option>
{options}    </select>
    <div id="pdf-documents"></div>"#,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OwnershipRow;

    fn sample_table() -> anyhow::Result<OwnershipTable> {
        Ok(OwnershipTable::new(
            "Druh vlastníctva".to_string(),
            vec!["orná pôda".to_string()],
            vec![
                OwnershipRow::new("štátne".to_string(), vec![Some(8.0)]),
                OwnershipRow::new("Celkový súčet".to_string(), vec![Some(8.0)]),
            ],
        ))
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("a<b>&\"c\""), "a&lt;b&gt;&amp;&quot;c&quot;");
    }

    #[test]
    fn test_dashboard_contains_all_tabs() {
        let config = Config::new();
        let page = render_dashboard(
            &config,
            &sample_table(),
            MapEntry::all(),
            &[],
            false,
        );
        assert!(page.contains("Analýza vlastníckych vzťahov"));
        for entry in MapEntry::all() {
            assert!(page.contains(entry.label));
            assert!(page.contains(entry.url));
        }
        assert!(page.contains("Mapy na stiahnutie"));
    }

    #[test]
    fn test_raw_table_keeps_totals_row() {
        let html = ownership_table_html(&sample_table().unwrap());
        assert!(html.contains("Celkový súčet"));
        assert!(html.contains("8.00"));
    }

    #[test]
    fn test_failed_load_renders_inline_error() {
        let config = Config::new();
        let table: anyhow::Result<OwnershipTable> = Err(anyhow::anyhow!("workbook missing"));
        let page = render_dashboard(&config, &table, MapEntry::all(), &[], false);
        assert!(page.contains("nepodarilo načítať"));
        // Other panels still render
        assert!(page.contains("Otvoriť mapu v novom okne"));
    }

    #[test]
    fn test_empty_pdf_tree_shows_info_message_without_selector() {
        let html = pdf_section(&[]);
        assert!(html.contains("Nie sú dostupné žiadne kategórie máp."));
        assert!(!html.contains("<select"));
    }

    #[test]
    fn test_tip_banner_rendered_only_when_shown() {
        let config = Config::new();
        let with_tip = render_dashboard(&config, &sample_table(), &[], &[], true);
        assert!(with_tip.contains("tip-banner"));

        let without_tip = render_dashboard(&config, &sample_table(), &[], &[], false);
        assert!(!without_tip.contains("tip-banner"));
    }
}

//! Integration tests for parsing a spreadsheet HTML export.

use tier_ingest::{IngestError, ParseOptions, parse_html};

/// Shaped like the published sheet: a `th` row-number column, a lettered
/// header row, title and label rows above the data, merged brand cells.
const SHEET: &str = r#"<html><body><div id="sheets-viewport">
<table class="waffle" cellspacing="0" cellpadding="0">
<thead><tr>
  <th class="row-header freezebar-origin-ltr"></th>
  <th>A</th><th>B</th><th>C</th><th>D</th><th>E</th><th>F</th><th>G</th><th>H</th><th>I</th><th>J</th>
  <th>K</th><th>L</th><th>M</th><th>N</th><th>O</th><th>P</th><th>Q</th><th>R</th><th>S</th><th>T</th>
</tr></thead>
<tbody>
<tr><th>1</th><td colspan="19"><div>SPL's PSU Tier List</div></td></tr>
<tr><th>2</th><td>Brand</td><td colspan="3">Series</td><td>Wattage</td><td>Tier</td><td>Year</td>
  <td></td><td>Form Factor</td><td>ATX</td><td>Input</td><td>Modular</td><td>80+</td>
  <td>Primary</td><td>Secondary</td><td>SR</td><td>ODM</td><td>Platform</td><td>Notes</td></tr>
<tr><th>3</th><td colspan="19"></td></tr>
<tr><th>4</th><td>1st Player</td><td colspan="3">NGDP</td><td>650-850W</td><td>A-</td><td>2021</td>
  <td></td><td>ATX</td><td>3.0</td><td>Full</td><td>Full</td><td>G</td>
  <td>LLC</td><td>DC-DC</td><td></td><td>HKC</td><td>Unknown</td><td></td></tr>
<tr><th>5</th><td rowspan="3">Corsair</td><td>RM-x 2018</td><td colspan="2">/ RM-x White</td><td>550-850W</td><td>A</td></tr>
<tr><th>6</th><td colspan="3">RM-e 2023 ("Gen 5")</td><td>550/650/750/850W</td><td>B+</td></tr>
<tr><th>7</th><td colspan="3">Series</td><td>Wattage</td><td>Tier</td></tr>
<tr><th>8</th><td></td><td colspan="3"></td></tr>
<tr><th>9</th><td>FSP (Fortron/Sparkle)</td><td colspan="3">Hydro G Pro</td><td>650-1000W</td><td>A-</td></tr>
</tbody></table></div></body></html>"#;

#[test]
fn extracts_records_from_merged_cells() {
    let outcome = parse_html(SHEET, &ParseOptions::default()).expect("parse sheet");

    assert_eq!(outcome.grid_width, 21);
    assert_eq!(outcome.grid_height, 10);
    assert_eq!(outcome.start_row, 4);
    assert_eq!(outcome.skipped_rows, 2);

    let summary: Vec<(&str, &str, Option<&str>, &str)> = outcome
        .records
        .iter()
        .map(|r| {
            (
                r.brand.as_str(),
                r.series.as_str(),
                r.wattage.as_deref(),
                r.tier.as_str(),
            )
        })
        .collect();
    assert_eq!(
        summary,
        vec![
            ("1st Player", "NGDP", Some("650-850W"), "A-"),
            ("Corsair", "RM-x 2018 / RM-x White", Some("550-850W"), "A"),
            ("Corsair", "RM-e 2023", Some("550/650/750/850W"), "B+"),
            ("FSP (Fortron/Sparkle)", "Hydro G Pro", Some("650-1000W"), "A-"),
        ]
    );
}

#[test]
fn no_record_carries_header_or_empty_tier() {
    let outcome = parse_html(SHEET, &ParseOptions::default()).expect("parse sheet");
    assert!(
        outcome
            .records
            .iter()
            .all(|r| !r.tier.is_empty() && r.tier != "Tier")
    );
}

#[test]
fn first_record_snapshot() {
    let outcome = parse_html(SHEET, &ParseOptions::default()).expect("parse sheet");
    insta::assert_json_snapshot!(outcome.records[0], @r#"
    {
      "brand": "1st Player",
      "series": "NGDP",
      "wattage": "650-850W",
      "tier": "A-",
      "year": "2021",
      "form_factor": "ATX",
      "atx_version": "3.0",
      "modular": "Full",
      "efficiency": "80+ Gold",
      "topology": "LLC + DC-DC",
      "odm": "HKC",
      "platform": "Unknown",
      "notes": null
    }
    "#);
}

#[test]
fn missing_table_is_a_distinct_error() {
    let err = parse_html(SHEET, &ParseOptions::default().with_selector("table.grid"))
        .expect_err("table should be missing");
    assert!(matches!(err, IngestError::TableNotFound { ref selector } if selector == "table.grid"));
}

#[test]
fn falls_back_when_sentinel_is_absent() {
    let options = ParseOptions {
        sentinel_brand: "No Such Brand".to_string(),
        fallback_start_row: 6,
        ..ParseOptions::default()
    };
    let outcome = parse_html(SHEET, &options).expect("parse sheet");
    assert_eq!(outcome.start_row, 6);
    let series: Vec<&str> = outcome.records.iter().map(|r| r.series.as_str()).collect();
    assert_eq!(series, vec!["RM-e 2023", "Hydro G Pro"]);
}

#[test]
fn rejects_invalid_layout_before_parsing() {
    let mut options = ParseOptions::default();
    options.layout.wattage = options.layout.brand;
    let err = parse_html(SHEET, &options).expect_err("layout should be rejected");
    assert!(matches!(err, IngestError::InvalidLayout(_)));
}

#[test]
fn oversized_rowspan_covers_the_rest_of_the_table() {
    let html = r#"<table class="waffle">
<tr><th>1</th><td rowspan="18446744073709551615">1st Player</td><td colspan="3">NGDP</td><td>650W</td><td>A</td><td>2021</td></tr>
<tr><th>2</th><td colspan="3">NGDP Gold</td><td>750W</td><td>A-</td><td>2022</td></tr>
</table>"#;
    let outcome = parse_html(html, &ParseOptions::default()).expect("parse sheet");
    assert_eq!(outcome.grid_height, 2);
    let rows: Vec<(&str, &str)> = outcome
        .records
        .iter()
        .map(|r| (r.brand.as_str(), r.tier.as_str()))
        .collect();
    assert_eq!(rows, vec![("1st Player", "A"), ("1st Player", "A-")]);
}

#[test]
fn oversized_colspan_is_clamped() {
    let html = r#"<table class="waffle">
<tr><th>1</th><td colspan="18446744073709551615">Title</td></tr>
<tr><th>2</th><td colspan="1000000000">Subtitle</td></tr>
</table>"#;
    let outcome = parse_html(html, &ParseOptions::default()).expect("parse sheet");
    assert_eq!(outcome.grid_width, 1 + tier_ingest::MAX_COL_SPAN);
    assert!(outcome.records.is_empty());
}

//! End-to-end run over a synthetic two-page Capital One checking statement,
//! the way the extractor actually hands it over: a cover blurb, a page-1
//! table with boilerplate above the header, and a continuation page without
//! the spacing column.

use chrono::NaiveDate;
use statement_core::{
    provider_config, Field, Pipeline, PipelineOptions, Provider, RawTable, ReportType,
};

fn grid(cells: &[&[&str]]) -> Vec<Vec<String>> {
    cells
        .iter()
        .map(|row| row.iter().map(|c| c.to_string()).collect())
        .collect()
}

fn two_page_statement() -> Vec<RawTable> {
    vec![
        // Marketing blurb the extractor reads as a table; matches no
        // fingerprint.
        RawTable::new(
            1,
            78.0,
            grid(&[&["Thanks for banking with us!", "Member FDIC"]]),
        ),
        RawTable::new(
            1,
            96.2,
            grid(&[
                &["360 Checking", "", "", "", "", ""],
                &["Jane Doe", "", "", "", "", ""],
                &["Statement: Jan 1 - Jan 31", "", "", "", "", ""],
                &["DATE", "DESCRIPTION", "CATEGORY", "", "AMOUNT", "BALANCE"],
                &["Jan 05", "COFFEE SHOP", "Dining", "", "- $4.50", "$995.50"],
                &["Jan 09", "PAYROLL DEPOSIT", "Income", "", "+ $1,200.00", "$2,195.50"],
            ]),
        ),
        RawTable::new(
            2,
            94.8,
            grid(&[
                &["DATE", "DESCRIPTION", "CATEGORY", "AMOUNT", "BALANCE"],
                &["Jan 17", "GROCERY MART", "Groceries", "- $82.13", "$2,113.37"],
                &["Jan 28", "RENT", "Housing", "- $1,150.00", "$963.37"],
            ]),
        ),
    ]
}

#[test]
fn test_two_page_statement_merges_in_order() {
    let config = provider_config(Provider::CapitalOne, ReportType::Checking).unwrap();
    let pipeline = Pipeline::new(&config, PipelineOptions::new(2024));

    let outcome = pipeline.run(two_page_statement()).unwrap();
    let table = &outcome.table;

    assert_eq!(
        table.columns,
        ["DATE", "DESCRIPTION", "CATEGORY", "AMOUNT", "BALANCE"]
    );
    assert_eq!(table.rows.len(), 4);
    // The marketing blurb was excluded, but recorded for audit.
    assert_eq!(outcome.unrecognized, vec![0]);
    assert!(outcome.skipped.is_empty());

    // Page order and row order survive the merge.
    let dates: Vec<_> = (0..4)
        .map(|r| match table.get(r, "DATE").unwrap() {
            Field::Date(d) => *d,
            other => panic!("expected date, got {other:?}"),
        })
        .collect();
    assert_eq!(
        dates,
        [
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 9).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 17).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 28).unwrap(),
        ]
    );

    assert_eq!(
        table.get(0, "AMOUNT").unwrap(),
        &Field::Amount(-4.50),
        "polarity and currency decorations normalize"
    );
    assert_eq!(table.get(1, "AMOUNT").unwrap(), &Field::Amount(1200.00));
    assert_eq!(
        table.get(3, "BALANCE").unwrap(),
        &Field::Amount(963.37)
    );
    assert_eq!(
        table.get(2, "CATEGORY").unwrap(),
        &Field::Category("Groceries".to_string())
    );
}

#[test]
fn test_vanguard_cover_page_contributes_nothing() {
    let config = provider_config(Provider::Vanguard, ReportType::ActivitySummary).unwrap();
    let pipeline = Pipeline::new(&config, PipelineOptions::new(2024));

    let cover = RawTable::new(
        1,
        91.0,
        config.noise[0]
            .grid
            .iter()
            .map(|row| row.iter().map(|c| c.to_string()).collect())
            .collect(),
    );
    let activity = RawTable::new(
        2,
        97.0,
        grid(&[
            &["TRADE DATE", "SETTLEMENT DATE", "DESCRIPTION", "AMOUNT"],
            &["01/05/2024", "01/07/2024", "VTSAX PURCHASE", "- $300.00"],
        ]),
    );

    let outcome = pipeline.run(vec![cover, activity]).unwrap();
    // Cover page is noise, not unrecognized: nothing to audit.
    assert!(outcome.unrecognized.is_empty());
    assert_eq!(outcome.table.rows.len(), 1);
    assert_eq!(
        outcome.table.get(0, "AMOUNT").unwrap(),
        &Field::Amount(-300.00)
    );
}

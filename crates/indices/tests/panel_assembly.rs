use indices::{IndexEngine, Indicator, IndicatorCategory, Safety};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use statements::{CompanyStatements, Field, StatementYear};

/// Three years of a mid-sized general contractor, as the loader would emit them.
const CONTRACTOR: &str = r#"{
    "company": {
        "code": "1801",
        "headquarters": "Tokyo",
        "market_segment": "Prime",
        "employees": 8500,
        "capital": "749.6",
        "industry": "Construction"
    },
    "years": [
        {
            "year": 2021,
            "income_statement": {
                "revenue": { "total": 800, "breakdown": { "completed_construction": 760 } },
                "cost_of_sales": { "total": 600 },
                "gross_profit": { "total": 200 },
                "sga": { "total": 300, "breakdown": { "personnel": 90, "depreciation": 10 } },
                "operating_income": -100,
                "ordinary_income": -90,
                "net_income": -120
            },
            "balance_sheet": {
                "assets": {
                    "current_assets": { "total": 450, "breakdown": {
                        "cash_and_deposits": 150,
                        "notes_and_accounts_receivable": 60,
                        "construction_receivables": 140,
                        "work_in_progress": 80
                    } },
                    "total_assets": 800
                },
                "liabilities": {
                    "current": { "total": 300, "breakdown": {
                        "short_term_borrowings": 40,
                        "construction_payables": 120,
                        "advances_received": 50
                    } },
                    "fixed": { "breakdown": { "long_term_debt": 100 } }
                },
                "net_assets": { "total": 360 }
            },
            "cash_flow": { "operating": 30, "investing": -20, "ending_cash": 150 }
        },
        {
            "year": 2022,
            "income_statement": {
                "revenue": { "total": 1000 },
                "cost_of_sales": { "total": 700 },
                "gross_profit": { "total": 300 },
                "sga": { "total": 250, "breakdown": { "personnel": 100 } },
                "operating_income": 50,
                "ordinary_income": 60,
                "net_income": 40
            },
            "balance_sheet": {
                "assets": {
                    "current_assets": { "total": 500, "breakdown": {
                        "cash_and_deposits": "180",
                        "notes_and_accounts_receivable": 70,
                        "construction_receivables": 130,
                        "work_in_progress": 90
                    } },
                    "total_assets": 1000
                },
                "liabilities": {
                    "current": { "total": 0, "breakdown": {
                        "short_term_borrowings": 40,
                        "construction_payables": 130,
                        "advances_received": 60
                    } },
                    "fixed": { "breakdown": { "long_term_debt": "-" } }
                },
                "net_assets": { "total": 400 }
            },
            "cash_flow": { "operating": 90, "investing": -30, "ending_cash": 180 }
        },
        {
            "year": "2023",
            "income_statement": {
                "revenue": { "total": 1200 },
                "operating_income": 90
            },
            "balance_sheet": {},
            "cash_flow": { "ending_cash": 210 }
        }
    ]
}"#;

fn contractor() -> CompanyStatements {
    serde_json::from_str(CONTRACTOR).expect("fixture should deserialize")
}

#[test]
fn panel_sequence_matches_input_years() {
    let statements = contractor();
    let series = IndexEngine::new().compute(&statements);

    assert_eq!(series.panels.len(), statements.years.len());
    for (panel, year) in series.panels.iter().zip(&statements.years) {
        assert_eq!(panel.year, year.year);
    }
    assert_eq!(series.company, statements.company);
}

#[test]
fn first_year_has_no_growth_or_cash_change() {
    let series = IndexEngine::new().compute(&contractor());
    let first = &series.panels[0];

    for (indicator, value) in first.category_values(IndicatorCategory::Growth) {
        assert_eq!(value, None, "{indicator} should be absent in the first year");
    }
    assert_eq!(first.get(Indicator::CashChange), None);
}

#[test]
fn profitability_and_growth_for_the_second_year() {
    let series = IndexEngine::new().compute(&contractor());
    let panel = series.panel("2022").expect("2022 panel");

    assert_eq!(panel.profitability.gross_margin, Some(dec!(30.00)));
    assert_eq!(panel.profitability.cost_ratio, Some(dec!(70.00)));
    assert_eq!(panel.profitability.operating_margin, Some(dec!(5.00)));
    assert_eq!(panel.growth.revenue_growth, Some(dec!(25.00)));
    assert_eq!(panel.growth.operating_income_growth, Some(dec!(150.00)));
    assert_eq!(panel.cash_flow.cash_change, Some(dec!(30)));
}

#[test]
fn zero_current_liabilities_make_liquidity_ratios_absent() {
    let series = IndexEngine::new().compute(&contractor());
    let panel = series.panel("2022").expect("2022 panel");

    assert_eq!(panel.safety.current_ratio, None);
    assert_eq!(panel.safety.quick_ratio, None);
    // The rest of the panel is unaffected.
    assert_eq!(panel.safety.equity_ratio, Some(dec!(40.00)));
}

#[test]
fn unparsable_long_term_debt_is_just_absent() {
    let series = IndexEngine::new().compute(&contractor());
    let panel = series.panel("2022").expect("2022 panel");

    // short-term borrowings alone: 40 / 400
    assert_eq!(panel.safety.debt_to_equity, Some(dec!(0.10)));
}

#[test]
fn first_year_returns_use_single_balances() {
    let series = IndexEngine::new().compute(&contractor());
    let first = &series.panels[0];

    // -120 / 800 and -120 / 360
    assert_eq!(first.efficiency.roa, Some(dec!(-15.00)));
    assert_eq!(first.efficiency.roe, Some(dec!(-33.33)));
    assert_eq!(first.efficiency.asset_turnover, Some(dec!(1.00)));
}

#[test]
fn missing_depreciation_falls_back_for_ebitda_only() {
    let series = IndexEngine::new().compute(&contractor());
    let panel = series.panel("2022").expect("2022 panel");

    assert_eq!(panel.profitability.ebitda, Some(dec!(50)));
    assert_eq!(panel.cost_structure.depreciation_ratio, None);
    assert_eq!(panel.cash_flow.operating_cf_to_ebitda, Some(dec!(1.80)));
}

#[test]
fn sparse_year_still_has_a_full_panel_shape() {
    let series = IndexEngine::new().compute(&contractor());
    let sparse = series.panel("2023").expect("2023 panel");

    assert_eq!(sparse.growth.revenue_growth, Some(dec!(20.00)));
    assert_eq!(sparse.profitability.operating_margin, Some(dec!(7.50)));
    assert_eq!(sparse.safety, Safety::default());
    // Receivable days fall back to the previous year's balance: 200 / 1200 * 365.
    assert_eq!(sparse.construction.receivable_days, Some(dec!(60.83)));

    let json = serde_json::to_value(sparse).unwrap();
    for category in IndicatorCategory::ALL {
        let key = serde_json::to_value(category).unwrap();
        assert!(json[key.as_str().unwrap()].is_object());
    }
}

#[test]
fn statement_year_built_from_fields() {
    let year = StatementYear::labelled(2023)
        .with(Field::Revenue, dec!(1000))
        .with(Field::CostOfSales, dec!(700))
        .with(Field::GrossProfit, dec!(300))
        .with(Field::OperatingIncome, dec!(50))
        .with(Field::SellingGeneralAdmin, dec!(250))
        .with(Field::TotalAssets, dec!(1000))
        .with(Field::NetIncome, dec!(20));

    let panel = IndexEngine::new().compute_panel(&year, None);
    assert_eq!(panel.get(Indicator::GrossMargin), Some(dec!(30.00)));
    assert_eq!(panel.get(Indicator::CostRatio), Some(dec!(70.00)));
    assert_eq!(panel.get(Indicator::OperatingMargin), Some(dec!(5.00)));
    assert_eq!(panel.get(Indicator::Roa), Some(dec!(2.00)));
    assert_eq!(panel.get(Indicator::Ebitda), Some(dec!(50)));
    assert_eq!(panel.get(Indicator::ValueAdded), None);
    assert_ne!(panel.get(Indicator::Ebitda), Some(Decimal::ZERO));
}

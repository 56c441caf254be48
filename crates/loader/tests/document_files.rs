use indices::{IndexEngine, Indicator};
use loader::{
    IndexDocument, LoaderError, read_index_document, read_statement_book, select_company,
    write_index_document,
};
use rust_decimal_macros::dec;
use std::fs;

const BOOK: &str = r#"{
    "1801": {
        "company": { "code": "1801", "employees": "8500" },
        "years": [
            { "year": 2022, "income_statement": {
                "revenue": { "total": 1000 }, "cost_of_sales": { "total": 700 },
                "operating_income": 50 } },
            { "year": 2023, "income_statement": {
                "revenue": { "total": 1200 }, "cost_of_sales": { "total": 900 },
                "operating_income": 0 } }
        ]
    },
    "1803": { "company": {}, "years": [ { "year": "2023/3" } ] }
}"#;

fn compute(book: loader::StatementBook) -> IndexDocument {
    let engine = IndexEngine::new();
    book.into_iter()
        .map(|(code, statements)| (code, engine.compute(&statements)))
        .collect()
}

#[test]
fn computed_document_survives_a_write_and_read() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("financial_statements.json");
    fs::write(&input, BOOK).unwrap();

    let document = compute(read_statement_book(&input).unwrap());
    let output = dir.path().join("nested/out/financial_indices.json");
    write_index_document(&output, &document, true).unwrap();

    let restored = read_index_document(&output).unwrap();
    assert_eq!(restored.keys().collect::<Vec<_>>(), vec!["1801", "1803"]);

    let series = &restored["1801"];
    let latest = series.panel("2023").unwrap();
    assert_eq!(latest.get(Indicator::RevenueGrowth), Some(dec!(20)));
    assert_eq!(latest.get(Indicator::CostRatio), Some(dec!(75)));
    // A zero operating income is absent, so its margin and growth are too.
    assert_eq!(latest.get(Indicator::OperatingMargin), None);
    assert_eq!(latest.get(Indicator::OperatingIncomeGrowth), None);

    assert_eq!(restored["1803"].company.code.as_deref(), Some("1803"));
    assert_eq!(restored["1803"].panels.len(), 1);
}

#[test]
fn absent_indicators_are_written_as_null() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("statements.json");
    fs::write(&input, BOOK).unwrap();

    let document = compute(read_statement_book(&input).unwrap());
    let output = dir.path().join("indices.json");
    write_index_document(&output, &document, false).unwrap();

    let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    let first = &raw["1801"]["panels"][0];
    assert_eq!(first["year"], "2022");
    assert!(first["growth"]["revenue_growth"].is_null());
    assert_eq!(first["profitability"]["cost_ratio"], serde_json::json!(70.0));
}

#[test]
fn selecting_an_unknown_company_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("statements.json");
    fs::write(&input, BOOK).unwrap();

    let book = read_statement_book(&input).unwrap();
    let one = select_company(book.clone(), "1801").unwrap();
    assert_eq!(one.len(), 1);

    let err = select_company(book, "0000").unwrap_err();
    assert!(matches!(err, LoaderError::CompanyNotFound(_)));
    assert_eq!(err.to_string(), "Company code '0000' not found in the statement book");
}

/// Two companies as the upstream statement loader writes them, deliberately not in code
/// order.
const UPSTREAM_BOOK: &str = r#"{
    "1803": {
        "企業情報": { "コード": "1803", "本社所在地": null, "従業員数（連結）": 0 },
        "財務データ": [ { "YEAR": 2023, "損益計算書": { "売上高": { "合計": 300, "内訳": {} } } } ]
    },
    "1801": {
        "企業情報": {
            "コード": "1801",
            "本社所在地": "東京都",
            "市場・商品区分": "プライム（内国株式）",
            "従業員数（連結）": 8500,
            "資本金（億円）": 749.6,
            "業種分類": "建設業"
        },
        "財務データ": [
            {
                "YEAR": 2022,
                "損益計算書": {
                    "売上高": { "合計": 1000, "内訳": { "売上高_完成工事高": 950 } },
                    "売上原価": { "合計": 700, "内訳": {} },
                    "営業利益": 50
                },
                "貸借対照表": {
                    "資産": {
                        "流動資産": { "合計": 500, "内訳": { "流動資産_現金及び預金": 100 } },
                        "固定資産": { "合計": 500, "内訳": {
                            "有形固定資産": { "合計": 300, "内訳": { "有形固定資産_土地": 120 } }
                        } },
                        "総資産": 1000
                    },
                    "負債・純資産": {
                        "負債": { "合計": 600, "内訳": {
                            "流動負債": { "合計": 250, "内訳": { "流動負債_短期借入金": 40 } },
                            "固定負債": { "合計": 350, "内訳": { "固定負債_長期借入金": 60 } }
                        } },
                        "純資産": { "合計": 400, "内訳": { "純資産_資本金": 100 } }
                    }
                },
                "キャッシュ・フロー計算書": { "現金及び現金同等物期末残高": 100 }
            },
            {
                "YEAR": 2023.0,
                "損益計算書": {
                    "売上高": { "合計": 1200, "内訳": {} },
                    "営業利益": 60
                },
                "貸借対照表": {
                    "資産": { "流動資産": { "合計": 600 }, "総資産": 1200 },
                    "負債・純資産": {
                        "負債": { "内訳": { "流動負債": { "合計": 300 } } },
                        "純資産": { "合計": 500 }
                    }
                },
                "キャッシュ・フロー計算書": { "現金及び現金同等物期末残高": 150 }
            }
        ]
    }
}"#;

#[test]
fn upstream_loader_documents_are_read_in_full() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("financial_statements.json");
    fs::write(&input, UPSTREAM_BOOK).unwrap();

    let book = read_statement_book(&input).unwrap();
    let statements = &book["1801"];
    assert_eq!(statements.years.len(), 2);
    assert_eq!(statements.company.industry.as_deref(), Some("建設業"));
    assert_eq!(statements.company.capital, Some(dec!(749.6)));
    assert_eq!(book["1803"].company.employees, Some(dec!(0)));

    let first = &statements.years[0];
    let fixed_assets = &first.balance_sheet.assets.fixed_assets;
    assert_eq!(fixed_assets.tangible.breakdown.land, Some(dec!(120)));
    assert_eq!(first.balance_sheet.net_assets.breakdown.capital_stock, Some(dec!(100)));

    let series = IndexEngine::new().compute(statements);
    let earlier = series.panel("2022").unwrap();
    assert_eq!(earlier.get(Indicator::CostRatio), Some(dec!(70)));
    assert_eq!(earlier.get(Indicator::EquityRatio), Some(dec!(40)));
    // (40 + 60) / 400
    assert_eq!(earlier.get(Indicator::DebtToEquity), Some(dec!(0.25)));

    let later = series.panel("2023").unwrap();
    assert_eq!(later.get(Indicator::RevenueGrowth), Some(dec!(20)));
    assert_eq!(later.get(Indicator::OperatingIncomeGrowth), Some(dec!(20)));
    assert_eq!(later.get(Indicator::CurrentRatio), Some(dec!(200)));
    assert_eq!(later.get(Indicator::CashChange), Some(dec!(50)));
}

#[test]
fn company_order_follows_the_statement_book() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("financial_statements.json");
    fs::write(&input, UPSTREAM_BOOK).unwrap();

    let book = read_statement_book(&input).unwrap();
    assert_eq!(book.keys().collect::<Vec<_>>(), vec!["1803", "1801"]);

    let output = dir.path().join("financial_indices.json");
    write_index_document(&output, &compute(book), true).unwrap();

    let restored = read_index_document(&output).unwrap();
    assert_eq!(restored.keys().collect::<Vec<_>>(), vec!["1803", "1801"]);
    let raw = fs::read_to_string(&output).unwrap();
    assert!(raw.find("\"1803\"").unwrap() < raw.find("\"1801\"").unwrap());
}

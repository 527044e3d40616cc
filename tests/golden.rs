//! Golden file integration tests.
//!
//! Reads tests/testdata/strassen_golden.json and verifies both algorithms
//! produce the known products with the exact operation counts.

use serde::Deserialize;

use strassen_cli::output::write_input_block;
use strassen_cli::{parse_blocks, BlockSummary, ReportWriter};
use strassen_core::complexity::{naive_multiplications, strassen_additions, strassen_multiplications};
use strassen_core::{default_multipliers, multiply_naive, multiply_strassen, Matrix};

// ---------------------------------------------------------------------------
// Golden data structures
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct GoldenData {
    #[allow(dead_code)]
    description: String,
    cases: Vec<GoldenCase>,
}

#[derive(Deserialize)]
struct GoldenCase {
    name: String,
    order: usize,
    a: Vec<Vec<i64>>,
    b: Vec<Vec<i64>>,
    product: Vec<Vec<i64>>,
    naive_multiplications: u64,
    strassen_multiplications: u64,
    strassen_additions: u64,
}

impl GoldenCase {
    fn matrices(&self) -> (Matrix<i64>, Matrix<i64>, Matrix<i64>) {
        (
            Matrix::from_rows(self.a.clone()).unwrap(),
            Matrix::from_rows(self.b.clone()).unwrap(),
            Matrix::from_rows(self.product.clone()).unwrap(),
        )
    }
}

fn load_golden_data() -> GoldenData {
    let path = concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/testdata/strassen_golden.json"
    );
    let data = std::fs::read_to_string(path).expect("failed to read golden file");
    serde_json::from_str(&data).expect("failed to parse golden JSON")
}

// ---------------------------------------------------------------------------
// Products and counts
// ---------------------------------------------------------------------------

#[test]
fn golden_products() {
    for case in load_golden_data().cases {
        let (a, b, expected) = case.matrices();

        let naive = multiply_naive(&a, &b).unwrap();
        assert_eq!(naive.result, expected, "naive product, case {}", case.name);

        let strassen = multiply_strassen(&a, &b).unwrap();
        assert_eq!(strassen.result, expected, "strassen product, case {}", case.name);
    }
}

#[test]
fn golden_counts() {
    for case in load_golden_data().cases {
        let (a, b, _) = case.matrices();

        let naive = multiply_naive(&a, &b).unwrap();
        assert_eq!(naive.multiplications(), case.naive_multiplications, "case {}", case.name);

        let strassen = multiply_strassen(&a, &b).unwrap();
        assert_eq!(strassen.multiplications(), case.strassen_multiplications, "case {}", case.name);
        assert_eq!(strassen.additions(), case.strassen_additions, "case {}", case.name);
    }
}

#[test]
fn golden_counts_match_closed_forms() {
    for case in load_golden_data().cases {
        assert_eq!(naive_multiplications(case.order), case.naive_multiplications);
        assert_eq!(strassen_multiplications(case.order), case.strassen_multiplications);
        assert_eq!(strassen_additions(case.order), case.strassen_additions);
    }
}

#[test]
fn golden_through_multiplier_trait() {
    let multipliers = default_multipliers::<i64>();
    for case in load_golden_data().cases {
        let (a, b, expected) = case.matrices();
        for multiplier in &multipliers {
            let result = multiplier.multiply(&a, &b).unwrap();
            assert_eq!(
                result.result, expected,
                "{} on case {}",
                multiplier.name(),
                case.name
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Text format
// ---------------------------------------------------------------------------

#[test]
fn golden_input_round_trip() {
    let data = load_golden_data();
    let mut buf = Vec::new();
    for case in &data.cases {
        let (a, b, _) = case.matrices();
        write_input_block(&mut buf, &a, &b).unwrap();
    }

    let blocks = parse_blocks(std::str::from_utf8(&buf).unwrap()).unwrap();
    assert_eq!(blocks.len(), data.cases.len());
    for (block, case) in blocks.iter().zip(&data.cases) {
        let (a, b, _) = case.matrices();
        assert_eq!(block.order, case.order);
        assert_eq!(block.a, a);
        assert_eq!(block.b, b);
    }
}

#[test]
fn golden_report_summary_lines() {
    for case in load_golden_data().cases {
        let (a, b, _) = case.matrices();
        let naive = multiply_naive(&a, &b).unwrap();
        let strassen = multiply_strassen(&a, &b).unwrap();
        let summary = BlockSummary::new(case.order, naive.counts, strassen.counts);

        let mut report = ReportWriter::new(Vec::new());
        report
            .write_block(&summary, &a, &b, &naive.result, &strassen.result)
            .unwrap();
        let text = String::from_utf8(report.into_inner()).unwrap();

        let expected = format!(
            "MatrixOrder={}\t\tSquareCountMultiplications={}\t\tStrassenCountMultiplications={}\t\tStrassenCountAddtions={}",
            case.order, case.naive_multiplications, case.strassen_multiplications, case.strassen_additions
        );
        assert_eq!(text.lines().next(), Some(expected.as_str()), "case {}", case.name);
        assert!(text.ends_with("\n\n\n"), "case {}", case.name);
    }
}

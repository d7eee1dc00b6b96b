mod common;

use std::fs;
use std::path::Path;

use messy_sales::{
    CsvSink, DefectRates, Field, RngMode, SynthError, Synthesizer, SynthesizerConfig,
};

use common::{anchor, parse_order_date};

const HEADER: [&str; 10] = [
    "OrderID",
    "Product",
    "Category",
    "Price",
    "Quantity",
    "OrderDate",
    "CustomerID",
    "Country",
    "Region",
    "Salesperson",
];

fn config(seed: u64) -> SynthesizerConfig {
    SynthesizerConfig {
        seed: Some(seed),
        anchor_date: Some(anchor()),
        ..SynthesizerConfig::default()
    }
}

fn write_csv(config: &SynthesizerConfig, n: usize, path: &Path) -> messy_sales::SynthesisReport {
    let synth = Synthesizer::new(config).unwrap();
    synth.synthesize(n, CsvSink::create(path).unwrap()).unwrap()
}

fn read_rows(path: &Path) -> (Vec<String>, Vec<Vec<String>>) {
    let mut reader = csv::Reader::from_path(path).unwrap();
    let header = reader
        .headers()
        .unwrap()
        .iter()
        .map(String::from)
        .collect();
    let rows = reader
        .records()
        .map(|row| row.unwrap().iter().map(String::from).collect())
        .collect();
    (header, rows)
}

#[test]
fn default_run_writes_header_and_bounded_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sales_data.csv");
    let report = write_csv(&config(99), 5000, &path);

    let (header, rows) = read_rows(&path);
    assert_eq!(header, HEADER);
    assert!((5000..=10_000).contains(&rows.len()));
    assert_eq!(rows.len(), report.emitted);
    assert!(rows.iter().all(|row| row.len() == HEADER.len()));
}

#[test]
fn single_clean_record_is_fully_valid() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("one.csv");
    let clean = SynthesizerConfig {
        rates: DefectRates::none(),
        ..config(1)
    };
    write_csv(&clean, 1, &path);

    let (_, rows) = read_rows(&path);
    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row[0], "1");
    let price: f64 = row[3].parse().unwrap();
    assert!((10.0..=500.0).contains(&price));
    let quantity: u64 = row[4].parse().unwrap();
    assert!((1..=10).contains(&quantity));
    let date = parse_order_date(&row[5]).expect("date in an accepted format");
    assert!(date <= anchor());
    assert!(row[6].starts_with("CUS"));
}

#[test]
fn same_seed_writes_identical_files() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("a.csv");
    let second = dir.path().join("b.csv");
    write_csv(&config(31), 800, &first);
    write_csv(&config(31), 800, &second);
    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());

    let other = dir.path().join("c.csv");
    write_csv(&config(32), 800, &other);
    assert_ne!(fs::read(&first).unwrap(), fs::read(&other).unwrap());
}

#[test]
fn per_record_files_do_not_depend_on_batch_size() {
    let dir = tempfile::tempdir().unwrap();
    let mut outputs = Vec::new();
    for batch_size in [1, 64, 4096] {
        let path = dir.path().join(format!("batch_{batch_size}.csv"));
        let cfg = SynthesizerConfig {
            rng_mode: RngMode::PerRecord,
            batch_size,
            ..config(5)
        };
        write_csv(&cfg, 300, &path);
        outputs.push(fs::read(&path).unwrap());
    }
    assert_eq!(outputs[0], outputs[1]);
    assert_eq!(outputs[1], outputs[2]);
}

#[test]
fn duplicates_are_adjacent_and_identical() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dups.csv");
    let cfg = SynthesizerConfig {
        rates: DefectRates {
            duplicate_row: 0.5,
            ..DefectRates::none()
        },
        ..config(12)
    };
    let report = write_csv(&cfg, 200, &path);
    let (_, rows) = read_rows(&path);
    let adjacent = rows.windows(2).filter(|pair| pair[0] == pair[1]).count();
    assert_eq!(adjacent, report.duplicates);
    let ids: Vec<u64> = rows.iter().map(|row| row[0].parse().unwrap()).collect();
    assert!(ids.windows(2).all(|pair| pair[1] == pair[0] || pair[1] == pair[0] + 1));
}

#[test]
fn unwritable_output_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    // A directory cannot be opened as the output file.
    let err = CsvSink::create(dir.path()).err().expect("directory is not a file");
    assert!(matches!(err, SynthError::Io(_)));
}

#[test]
fn padded_strings_keep_their_spaces_in_csv() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("padded.csv");
    let cfg = SynthesizerConfig {
        rates: DefectRates {
            product_whitespace: 1.0,
            country_whitespace: 1.0,
            ..DefectRates::none()
        },
        ..config(8)
    };
    write_csv(&cfg, 20, &path);
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::None)
        .from_path(&path)
        .unwrap();
    let product = Field::Product as usize;
    let country = Field::Country as usize;
    for row in reader.records() {
        let row = row.unwrap();
        assert!(row[product].starts_with("  ") && row[product].ends_with("  "));
        assert!(row[country].starts_with("  ") && row[country].ends_with("  "));
    }
}

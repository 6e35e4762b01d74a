// tests/property_summary.rs

use proptest::prelude::*;

use brewup::summary::{align_columns, installed_packages};

fn field() -> impl Strategy<Value = String> {
    "[a-z0-9@.]{1,8}"
}

fn row() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(field(), 1..5)
}

proptest! {
    #[test]
    fn aligned_rows_keep_their_fields(rows in prop::collection::vec(row(), 0..10)) {
        let joined: Vec<String> = rows.iter().map(|r| r.join(" ")).collect();
        let refs: Vec<&str> = joined.iter().map(String::as_str).collect();

        let aligned = align_columns(&refs);

        prop_assert_eq!(aligned.len(), rows.len());
        for (line, fields) in aligned.iter().zip(rows.iter()) {
            let got: Vec<&str> = line.split_whitespace().collect();
            prop_assert_eq!(got, fields.iter().map(String::as_str).collect::<Vec<_>>());
            prop_assert!(!line.ends_with(' '));
        }
    }

    #[test]
    fn aligned_columns_start_at_same_offset(rows in prop::collection::vec(prop::collection::vec(field(), 3), 1..10)) {
        let joined: Vec<String> = rows.iter().map(|r| r.join(" ")).collect();
        let refs: Vec<&str> = joined.iter().map(String::as_str).collect();

        let aligned = align_columns(&refs);
        let second_col: Vec<usize> = aligned
            .iter()
            .zip(rows.iter())
            .map(|(line, fields)| line.find(&format!("  {}", fields[1])).map(|i| i + 2).unwrap_or(usize::MAX))
            .collect();

        let widest = rows.iter().map(|r| r[0].len()).max().unwrap();
        for offset in second_col {
            prop_assert_eq!(offset, widest + 2);
        }
    }

    #[test]
    fn install_summary_never_exceeds_matching_lines(lines in prop::collection::vec("[ a-zA-Z]{0,20}", 0..20)) {
        let log = lines.join("\n");
        let matching = lines.iter().filter(|l| l.to_lowercase().contains("installing")).count();
        prop_assert!(installed_packages(&log).len() <= matching);
    }
}

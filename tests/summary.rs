// tests/summary.rs

use brewup::summary::{align_columns, installed_packages, line_count, upgraded_packages};

#[test]
fn install_summary_takes_second_word_of_installing_lines() {
    let log = "\
Using jq
Installing wget
INSTALLING ripgrep from tap
Tapping homebrew/cask
installing
Homebrew Bundle complete!
";
    assert_eq!(installed_packages(log), vec!["wget", "ripgrep"]);
}

#[test]
fn install_summary_of_empty_log_is_empty() {
    assert!(installed_packages("").is_empty());
}

#[test]
fn upgrade_summary_reads_second_line_only() {
    let log = "\
==> Upgrading 3 outdated packages:
python@3.12 3.12.1 -> 3.12.2, gh 2.40.0 -> 2.41.0, jq 1.7 -> 1.7.1
==> Upgrading python@3.12
gh 1 -> 2, ignored 1 -> 2
";
    assert_eq!(
        upgraded_packages(log),
        vec![
            "python@3.12  3.12.1  ->  3.12.2",
            "gh           2.40.0  ->  2.41.0",
            "jq           1.7     ->  1.7.1",
        ]
    );
}

#[test]
fn upgrade_summary_without_second_line_is_empty() {
    assert!(upgraded_packages("==> Upgrading 1 outdated package:\n").is_empty());
    assert!(upgraded_packages("").is_empty());
}

#[test]
fn align_columns_handles_ragged_rows() {
    let rows = ["a bb ccc", "dddd e", "", "f"];
    assert_eq!(align_columns(&rows), vec!["a     bb  ccc", "dddd  e", "f"]);
}

#[test]
fn line_count_counts_unterminated_last_line() {
    assert_eq!(line_count(""), 0);
    assert_eq!(line_count("Already up-to-date.\n"), 1);
    assert_eq!(line_count("one\ntwo"), 2);
}

//! Detection and parsing over realistic command output.

use blox_table::{parse_text, ColumnType, Parsed, SplitStrategy};

fn table_of(text: &str) -> (blox_table::Table, SplitStrategy) {
    match parse_text(text) {
        Parsed::Table(table, strategy) => (table, strategy),
        Parsed::Text(_) => panic!("expected a table for:\n{text}"),
    }
}

#[test]
fn tab_separated_people() {
    let (table, strategy) = table_of("Name\tAge\tCity\nAlice\t30\tNYC\nBob\t25\tLA\nCharlie\t35\tSF");

    assert_eq!(strategy, SplitStrategy::Tab);
    assert_eq!(table.headers(), ["Name", "Age", "City"]);
    assert_eq!(table.row_count(), 3);
    assert_eq!(
        table.column_types(),
        [ColumnType::Text, ColumnType::Integer, ColumnType::Text]
    );
}

#[test]
fn percent_column_is_numeric() {
    let (table, _) = table_of("ID\tValue\tPercent\n1\t1000\t95.5\n2\t2000\t87.3");

    assert_eq!(
        table.column_types(),
        [
            ColumnType::Integer,
            ColumnType::Integer,
            ColumnType::Percentage
        ]
    );
}

#[test]
fn df_style_output() {
    let text = "\
Filesystem      Size  Used Use%
/dev/sda1        50G   20G  42%
tmpfs           7.8G     0   0%
";
    let (table, strategy) = table_of(text);

    // "Used Use%" is split by a single space, so only the single-space
    // fallback lines the header up with the rows.
    assert_eq!(strategy, SplitStrategy::SingleSpace);
    assert_eq!(table.headers(), ["Filesystem", "Size", "Used", "Use%"]);
    assert_eq!(table.column_types()[1], ColumnType::Filesize);
    assert_eq!(table.column_types()[3], ColumnType::Percentage);
}

#[test]
fn two_word_header_without_matching_rows_is_text() {
    let text = "\
Filesystem      Size  Used Avail Use% Mounted on
/dev/sda1        50G   20G   28G  42% /
";
    assert!(matches!(parse_text(text), Parsed::Text(_)));
}

#[test]
fn docker_style_output() {
    let text = "\
CONTAINER ID   IMAGE          STATUS         NAMES
4f1c2a9d3b7e   nginx:latest   Up 2 hours     web
9a8b7c6d5e4f   redis:7        Up 5 minutes   cache
";
    let (table, strategy) = table_of(text);

    assert_eq!(strategy, SplitStrategy::MultiSpace);
    assert_eq!(table.headers(), ["CONTAINER ID", "IMAGE", "STATUS", "NAMES"]);
    assert_eq!(table.rows()[1][2], "Up 5 minutes");
}

#[test]
fn markdown_pipe_table() {
    let text = "| name | size |\n| a.txt | 12K |\n| b.txt | 3M |";
    let (table, strategy) = table_of(text);

    assert_eq!(strategy, SplitStrategy::Pipe);
    assert_eq!(table.headers(), ["name", "size"]);
    assert_eq!(table.column_types()[1], ColumnType::Filesize);
}

#[test]
fn csv_with_ragged_rows() {
    let text = "id,name,score\n1,ann,10\n2,bob\n3,cy,30,extra";
    let (table, strategy) = table_of(text);

    assert_eq!(strategy, SplitStrategy::Comma);
    assert_eq!(table.rows()[1], ["2", "bob", ""]);
    assert_eq!(table.rows()[2], ["3", "cy", "30"]);
}

#[test]
fn mixed_markers_still_numeric() {
    let text = "pid\tcpu\n1\t0.5\n2\t1.5\n3\t2.5\n4\t-";
    let (table, _) = table_of(text);
    assert_eq!(table.column_types()[1], ColumnType::Float);
}

#[test]
fn prose_is_passed_through() {
    let text = "Everything up-to-date\n";
    assert_eq!(parse_text(text), Parsed::Text(text.to_string()));
}

#[test]
fn header_only_is_text() {
    assert!(matches!(parse_text("a\tb\tc\n\n"), Parsed::Text(_)));
}

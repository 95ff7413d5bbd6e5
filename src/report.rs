//! Plain-text report output.
//!
//! The format is fixed: a tab-separated table with the package name
//! left-justified to 24 columns, then a summary naming only the
//! non-empty diagnostic lists, then a terminal "Done." line.

use crate::types::{Diagnostics, ReportRow};
use std::io::{self, Write};

const NAME_WIDTH: usize = 24;

/// Write the full report for one run.
pub fn write_report<W: Write>(
    w: &mut W,
    rows: &[ReportRow],
    diagnostics: &Diagnostics,
) -> io::Result<()> {
    writeln!(w, "{:<NAME_WIDTH$}\tOfficial\tAUR", "Package")?;
    for row in rows {
        writeln!(w, "{:<NAME_WIDTH$}\t{}\t{}", row.name, row.official, row.aur)?;
    }

    writeln!(w, "\nSummary:")?;
    write_list(w, " - In PAC_PKGS but AUR only:", &diagnostics.misplaced_to_official)?;
    write_list(w, " - In AUR_PKGS but official:", &diagnostics.misplaced_to_aur)?;
    write_list(
        w,
        " - Not found in official or AUR (check names):",
        &diagnostics.unresolved,
    )?;
    writeln!(w, "Done.")
}

/// Print one summary line; empty lists are suppressed entirely.
fn write_list<W: Write>(w: &mut W, label: &str, names: &[String]) -> io::Result<()> {
    if names.is_empty() {
        return Ok(());
    }
    writeln!(w, "{} {}", label, names.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PackageGroup;

    fn row(name: &str, group: PackageGroup, official: &str, aur: &str) -> ReportRow {
        ReportRow {
            name: name.to_string(),
            group,
            official: official.to_string(),
            aur: aur.to_string(),
        }
    }

    fn render(rows: &[ReportRow], diagnostics: &Diagnostics) -> String {
        let mut buf = Vec::new();
        write_report(&mut buf, rows, diagnostics).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_full_report_layout() {
        let rows = vec![
            row("foo", PackageGroup::Official, "core/x86_64", ""),
            row("bar", PackageGroup::Official, "", ""),
            row("baz", PackageGroup::Aur, "", "AUR"),
        ];
        let diagnostics = Diagnostics {
            misplaced_to_official: vec![],
            misplaced_to_aur: vec![],
            unresolved: vec!["bar".to_string()],
        };

        let output = render(&rows, &diagnostics);

        let expected = format!(
            "{:<24}\tOfficial\tAUR\n{:<24}\tcore/x86_64\t\n{:<24}\t\t\n{:<24}\t\tAUR\n\n\
             Summary:\n - Not found in official or AUR (check names): bar\nDone.\n",
            "Package", "foo", "bar", "baz"
        );
        assert_eq!(output, expected);
    }

    #[test]
    fn test_empty_lists_are_suppressed() {
        let rows = vec![row("foo", PackageGroup::Official, "core/x86_64", "")];
        let output = render(&rows, &Diagnostics::default());

        assert!(!output.contains("PAC_PKGS"));
        assert!(!output.contains("AUR_PKGS"));
        assert!(!output.contains("Not found"));
        assert!(output.ends_with("Done.\n"));
    }

    #[test]
    fn test_misplacement_lines_join_names() {
        let diagnostics = Diagnostics {
            misplaced_to_official: vec!["a".to_string(), "b".to_string()],
            misplaced_to_aur: vec!["c".to_string()],
            unresolved: vec![],
        };
        let output = render(&[], &diagnostics);

        assert!(output.contains(" - In PAC_PKGS but AUR only: a, b\n"));
        assert!(output.contains(" - In AUR_PKGS but official: c\n"));
        assert!(output.ends_with("Done.\n"));
    }

    #[test]
    fn test_long_names_are_not_truncated() {
        let rows = vec![row(
            "a-package-name-longer-than-the-column",
            PackageGroup::Aur,
            "",
            "AUR",
        )];
        let output = render(&rows, &Diagnostics::default());
        assert!(output.contains("a-package-name-longer-than-the-column\t\tAUR\n"));
    }
}

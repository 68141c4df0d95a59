//! Line patterns recognised in a code review diff

use regex::Regex;
use std::sync::OnceLock;

/// The named marker rules, in the order they are tried
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    /// `Index: <path>`
    Index,
    /// `deleted file mode <mode>`
    Deleted,
    /// `rename from <path>`
    RenameFrom,
    /// `rename to <path>`
    RenameTo,
    /// `copy from <path>`
    CopyFrom,
    /// `copy to <path>`
    CopyTo,
}

impl MarkerKind {
    pub const ALL: [MarkerKind; 6] = [
        MarkerKind::Index,
        MarkerKind::Deleted,
        MarkerKind::RenameFrom,
        MarkerKind::RenameTo,
        MarkerKind::CopyFrom,
        MarkerKind::CopyTo,
    ];

    pub fn pattern(&self) -> &'static str {
        match self {
            MarkerKind::Index => r"^Index: (\S+)$",
            MarkerKind::Deleted => r"^deleted file mode \S+$",
            MarkerKind::RenameFrom => r"^rename from (\S+)$",
            MarkerKind::RenameTo => r"^rename to (\S+)$",
            MarkerKind::CopyFrom => r"^copy from (\S+)$",
            MarkerKind::CopyTo => r"^copy to (\S+)$",
        }
    }

    fn regex(&self) -> &'static Regex {
        static RULES: OnceLock<Vec<Regex>> = OnceLock::new();
        let rules = RULES.get_or_init(|| {
            MarkerKind::ALL
                .iter()
                .map(|kind| Regex::new(kind.pattern()).expect("marker patterns are valid"))
                .collect()
        });
        &rules[*self as usize]
    }
}

/// A recognised marker line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker<'a> {
    pub kind: MarkerKind,
    /// The captured path; `None` for `deleted file mode`
    pub path: Option<&'a str>,
}

/// Match one diff line against the marker rules.
///
/// A trailing `\r` is ignored so CRLF diffs behave like LF ones.
pub fn match_line(line: &str) -> Option<Marker<'_>> {
    let line = line.strip_suffix('\n').unwrap_or(line);
    let line = line.strip_suffix('\r').unwrap_or(line);

    // Cheap prefix gate; nearly every diff line is content
    if !(line.starts_with("Index: ")
        || line.starts_with("deleted ")
        || line.starts_with("rename ")
        || line.starts_with("copy "))
    {
        return None;
    }

    MarkerKind::ALL.iter().find_map(|kind| {
        kind.regex().captures(line).map(|caps| Marker {
            kind: *kind,
            path: caps.get(1).map(|m| m.as_str()),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_each_rule() {
        let cases = [
            ("Index: src/a.rs", MarkerKind::Index, Some("src/a.rs")),
            ("deleted file mode 100644", MarkerKind::Deleted, None),
            ("rename from a.txt", MarkerKind::RenameFrom, Some("a.txt")),
            ("rename to b.txt", MarkerKind::RenameTo, Some("b.txt")),
            ("copy from a.txt", MarkerKind::CopyFrom, Some("a.txt")),
            ("copy to c.txt", MarkerKind::CopyTo, Some("c.txt")),
        ];
        for (line, kind, path) in cases {
            let marker = match_line(line).unwrap_or_else(|| panic!("no match for {line}"));
            assert_eq!(marker.kind, kind, "{line}");
            assert_eq!(marker.path, path, "{line}");
        }
    }

    #[test]
    fn test_content_lines_do_not_match() {
        assert_eq!(match_line("+rename from a.txt"), None);
        assert_eq!(match_line("-Index: foo"), None);
        assert_eq!(match_line(" copy to x"), None);
        assert_eq!(match_line("new file mode 100644"), None);
        assert_eq!(match_line(""), None);
    }

    #[test]
    fn test_paths_with_whitespace_are_rejected() {
        assert_eq!(match_line("rename from my file.txt"), None);
        assert_eq!(match_line("Index: "), None);
        assert_eq!(match_line("deleted file mode"), None);
    }

    #[test]
    fn test_line_endings_are_ignored() {
        let marker = match_line("Index: foo.txt\r\n").unwrap();
        assert_eq!(marker.path, Some("foo.txt"));
        let marker = match_line("copy to bar.txt\r").unwrap();
        assert_eq!(marker.kind, MarkerKind::CopyTo);
        assert_eq!(marker.path, Some("bar.txt"));
    }
}

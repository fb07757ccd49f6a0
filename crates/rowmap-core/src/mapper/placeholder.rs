use std::fmt::Write;

/// Parameter placeholder convention of a backend driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaceholderStyle {
    /// `?` (SQLite, ODBC)
    #[default]
    QuestionMark,
    /// `?1`, `?2`, ... (SQLite numbered)
    Numbered,
    /// `$1`, `$2`, ... (PostgreSQL native)
    Dollar,
    /// `%s` (Python DB-API `format` paramstyle)
    Format,
}

impl PlaceholderStyle {
    /// Placeholder for the parameter at zero-based `index`
    pub fn placeholder(&self, index: usize) -> String {
        let mut out = String::new();
        self.write_placeholder(&mut out, index);
        out
    }

    pub(crate) fn write_placeholder(&self, out: &mut String, index: usize) {
        // Writing to a String cannot fail
        let _ = match self {
            PlaceholderStyle::QuestionMark => write!(out, "?"),
            PlaceholderStyle::Numbered => write!(out, "?{}", index + 1),
            PlaceholderStyle::Dollar => write!(out, "${}", index + 1),
            PlaceholderStyle::Format => write!(out, "%s"),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholders_are_one_based() {
        assert_eq!(PlaceholderStyle::QuestionMark.placeholder(0), "?");
        assert_eq!(PlaceholderStyle::Numbered.placeholder(0), "?1");
        assert_eq!(PlaceholderStyle::Dollar.placeholder(2), "$3");
        assert_eq!(PlaceholderStyle::Format.placeholder(5), "%s");
    }

    #[test]
    fn test_default_is_question_mark() {
        assert_eq!(PlaceholderStyle::default(), PlaceholderStyle::QuestionMark);
    }
}

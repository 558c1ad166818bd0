/// Quotes an identifier for usage in MySQL. Identifiers are always quoted, so
/// reserved words and mixed case names survive unchanged.
pub(crate) fn quote_identifier(identifier: &str) -> String {
    format!("`{}`", identifier.replace('`', "``"))
}

/// A trait for types that can be quoted as an identifier.
pub(crate) trait Quotable {
    fn quote(&self) -> String;
}

impl<S> Quotable for S
where
    S: AsRef<str>,
{
    fn quote(&self) -> String {
        quote_identifier(self.as_ref())
    }
}

/// Quotes a string value for usage in MySQL.
pub(crate) fn quote_value_string(s: &str) -> String {
    format!("'{}'", s.replace('\\', "\\\\").replace('\'', "''"))
}

/// Quotes a possibly schema qualified object name.
pub(crate) fn quote_qualified(schema: Option<&str>, name: &str) -> String {
    match schema {
        Some(schema) => format!("{}.{}", schema.quote(), name.quote()),
        None => name.quote(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoting() {
        macro_rules! test_quote {
            ($identifier:literal, $expected:literal) => {
                let quoted = $identifier.quote();
                assert_eq!(quoted, $expected);
            };
        }

        test_quote!("table", "`table`");
        test_quote!("my_table", "`my_table`");
        test_quote!("MyTable", "`MyTable`");
        test_quote!("my`table", "`my``table`");
        test_quote!("", "``");
    }

    #[test]
    fn quoting_values() {
        assert_eq!(quote_value_string("it's"), "'it''s'");
        assert_eq!(quote_value_string(r"C:\temp"), r"'C:\\temp'");
    }

    #[test]
    fn quoting_qualified_names() {
        assert_eq!(quote_qualified(Some("db"), "users"), "`db`.`users`");
        assert_eq!(quote_qualified(None, "users"), "`users`");
    }
}

use encoding_rs::GBK;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use crate::models::datatype::DatatypeRegistry;
use crate::{Er2SqlError, Result};

#[derive(Debug, Eq, PartialEq, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ErColumn {
    pub name: String,
    /// The declared type including arguments and flags, eg `DECIMAL(10,2) UNSIGNED`.
    pub formatted_type: String,
    /// The registry datatype `formatted_type` resolved to.
    pub simple_type: Option<String>,
    pub character_set_name: String,
    pub is_not_null: bool,
    /// The default as a raw SQL literal, eg `'abc'`, `''` or `CURRENT_TIMESTAMP`.
    /// Empty when no default is set.
    pub default_value: String,
    pub auto_increment: bool,
    pub comment: String,
}

impl ErColumn {
    pub fn new(name: &str, formatted_type: &str) -> Self {
        ErColumn {
            name: name.to_string(),
            formatted_type: formatted_type.to_string(),
            ..Default::default()
        }
    }

    pub fn with_default(mut self, default_value: &str) -> Self {
        self.default_value = default_value.to_string();
        self
    }

    pub fn not_null(mut self) -> Self {
        self.is_not_null = true;
        self
    }

    /// Parses a type definition such as `varchar(45)` or `int unsigned` and resolves it
    /// against the datatype registry.
    pub fn set_parse_type(&mut self, type_definition: &str, datatypes: &DatatypeRegistry) -> Result<()> {
        let definition = type_definition.trim();

        let (base, arguments, flags) = match (definition.find('('), definition.rfind(')')) {
            (Some(open), Some(close)) if open < close => {
                (definition[..open].trim(), Some(definition[open + 1..close].trim()), definition[close + 1..].trim())
            }
            (None, None) => {
                if datatypes.lookup(definition).is_some() {
                    (definition, None, "")
                } else {
                    definition.split_once(char::is_whitespace)
                        .map(|(base, flags)| (base, None, flags.trim()))
                        .unwrap_or((definition, None, ""))
                }
            }
            _ => return Err(Er2SqlError::MalformedTypeDefinition(type_definition.to_string())),
        };

        if base.is_empty() {
            return Err(Er2SqlError::MalformedTypeDefinition(type_definition.to_string()));
        }

        let datatype = datatypes.lookup(base).ok_or_else(|| Er2SqlError::UnknownDatatype(base.to_string()))?;

        let mut formatted = datatype.name.clone();
        if let Some(arguments) = arguments {
            formatted.push('(');
            formatted.push_str(arguments);
            formatted.push(')');
        }
        if !flags.is_empty() {
            formatted.push(' ');
            formatted.push_str(&flags.split_whitespace().map(|f| f.to_ascii_uppercase()).join(" "));
        }

        self.formatted_type = formatted;
        self.simple_type = Some(datatype.name.clone());

        Ok(())
    }
}

/// Re-encodes a comment written by a GBK host: the text is encoded as GBK and the
/// resulting bytes are read back as UTF-8.
pub(crate) fn transcode_comment(column: &str, comment: &str) -> Result<String> {
    let (bytes, _, unmappable) = GBK.encode(comment);
    if unmappable {
        return Err(Er2SqlError::InvalidCommentEncoding {
            column: column.to_string(),
            reason: "the comment contains characters that cannot be represented in GBK".to_string(),
        });
    }

    String::from_utf8(bytes.into_owned()).map_err(|e| Er2SqlError::InvalidCommentEncoding {
        column: column.to_string(),
        reason: e.to_string(),
    })
}

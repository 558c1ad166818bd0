use std::path::PathBuf;
use clap::Parser;
use er2sql_tools::{PipelineConfig, TableFilter};

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about)]
/// Normalizes an ER model and writes the MySQL create script for it.
///
/// The first schema of the model is renamed to `db` and only the tables given in the
/// allow-list get statements, every other table is replaced by a skip comment.
pub struct Cli {
    /// The model file to generate the script from. Nothing is generated when it is not given
    #[arg(long, env = "IN")]
    pub model: Option<PathBuf>,

    /// Where the script is written to
    #[arg(long, env = "OUT", default_value = "./a.sql")]
    pub out: PathBuf,

    /// Comma separated list of the tables to generate statements for. If not specified, all tables are generated
    #[arg(long, env = "TABLE_FILTER_LIST")]
    pub tables: Option<TableFilter>,
}

impl Cli {
    pub(crate) fn into_pipeline_config(self) -> PipelineConfig {
        PipelineConfig {
            model_path: self.model,
            output_path: self.out,
            table_filter: self.tables,
        }
    }
}


#[test]
fn verify_cli() {
    use clap::CommandFactory;
    Cli::command().debug_assert()
}

#[test]
fn parses_arguments() {
    let cli = Cli::try_parse_from(["er2sql", "--model", "model.json", "--out", "schema.sql", "--tables", "users, orders"]).unwrap();

    let config = cli.into_pipeline_config();
    assert_eq!(config.model_path, Some(PathBuf::from("model.json")));
    assert_eq!(config.output_path, PathBuf::from("schema.sql"));
    assert_eq!(config.table_filter, Some(TableFilter::parse("orders,users")));
}

#[test]
fn empty_table_list() {
    let cli = Cli::try_parse_from(["er2sql", "--tables", ""]).unwrap();
    assert_eq!(cli.tables, Some(TableFilter::default()));

    // clap treats an empty environment value as unset
    std::env::set_var("TABLE_FILTER_LIST", "");
    let cli = Cli::try_parse_from(["er2sql"]).unwrap();
    std::env::remove_var("TABLE_FILTER_LIST");
    assert_eq!(cli.tables, None);
}

/// CLI argument definitions via clap derive.
use clap::Parser;

/// signature-names — list the signers of a petition, sorted by last name.
#[derive(Debug, Parser)]
#[command(
    name = "signature-names",
    about = "Fetch, clean, and sort the signer names of a MoveOn petition",
    version
)]
pub struct Cli {
    /// Signature list id, found in the petition page's
    /// `<meta property="list_id">` tag.
    ///
    /// Kept as a raw string so invalid values produce the usage text rather
    /// than a clap error.
    #[arg(long = "list_id", visible_alias = "list-id", value_name = "ID")]
    pub list_id: Option<String>,
}

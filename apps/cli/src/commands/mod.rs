//! Command implementations behind the binaries.

pub mod complete;
pub mod convert;
pub mod edit;

use anyhow::{anyhow, Result};

use crate::cli::ApiArgs;
use crate::credentials::{self, API_KEY_ENV, NETRC_HOST};
use crate::openai::OpenAiClient;

pub use complete::run_complete;
pub use convert::{convert, run_convert};
pub use edit::run_edit;

/// Build an API client, failing if no key can be found.
pub fn client_from_args(args: &ApiArgs) -> Result<OpenAiClient> {
    let api_key = credentials::get_api_key(args.netrc.as_deref())?.ok_or_else(|| {
        anyhow!(
            "no API key found: add a `machine {NETRC_HOST}` entry to your netrc file or set {API_KEY_ENV}"
        )
    })?;

    Ok(OpenAiClient::new(&args.api_base, api_key))
}

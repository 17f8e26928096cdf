use std::ffi::OsString;
use std::path::PathBuf;

use crate::error::Error;

#[derive(Debug, PartialEq, Eq)]
pub struct Args {
    pub text: String,
    pub output: PathBuf,
}

/// Parses `<text> <output-path>`, program name already stripped.
///
/// Asterisk passes AGI arguments positionally and only looks at the exit
/// status, so there are no flags and no usage text on stdout.
pub fn parse<I>(args: I) -> Result<Args, Error>
where
    I: IntoIterator<Item = OsString>,
{
    let args: Vec<OsString> = args.into_iter().collect();

    let [text, output]: [OsString; 2] = args
        .try_into()
        .map_err(|rest: Vec<OsString>| Error::Usage { got: rest.len() })?;

    Ok(Args {
        text: text.into_string().map_err(|_| Error::InvalidText)?,
        output: PathBuf::from(output),
    })
}

use parquet_fixgen_core::error::FixtureError;
use snafu::Snafu;

pub type CliResult<T> = std::result::Result<T, CliError>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum CliError {
    #[snafu(display(
        "Failed to generate fixture pattern {pattern}: {source}. \
         Ensure the output directory is writable."
    ))]
    Generate {
        pattern: u8,
        #[snafu(source(from(FixtureError, Box::new)))]
        source: Box<FixtureError>,
    },
}

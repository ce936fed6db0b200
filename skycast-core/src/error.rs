use std::path::PathBuf;
use thiserror::Error;

/// Everything that can fail between reading the credentials file and
/// rendering the weather line.
///
/// The `Display` strings are the exact messages shown to the user; the
/// binary prints them and exits, library code only returns them.
#[derive(Debug, Error)]
pub enum Error {
    #[error(
        "Missing configuration file {}. Create it with an [openweather] section containing your api_key.",
        .path.display()
    )]
    ConfigMissing { path: PathBuf },

    #[error("Couldn't read configuration file {}: {}", .path.display(), .source)]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration file {} has no usable [openweather] api_key entry.", .path.display())]
    ConfigInvalid { path: PathBuf },

    #[error("Access denied. Check your API key.")]
    AccessDenied,

    #[error("Can't find weather data for this city.")]
    CityNotFound,

    #[error("Something went wrong... ({0})")]
    UpstreamStatus(u16),

    #[error("Couldn't read the server response.")]
    MalformedResponse,

    #[error("The server response contained no weather conditions.")]
    NoConditions,

    #[error("Couldn't reach the weather service: {0}")]
    Transport(#[from] reqwest::Error),
}

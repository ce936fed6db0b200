use clap::Parser;
use skycast_core::{OpenWeatherClient, Secrets, display};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "skycast",
    version,
    about = "Current weather and temperature for a city"
)]
pub struct Cli {
    /// City name; multiple words are joined with spaces.
    #[arg(required = true)]
    pub city: Vec<String>,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let city = self.city.join(" ");

        let secrets = Secrets::load()?;
        let client = OpenWeatherClient::new(secrets.api_key());

        let weather = client.current(&city).await?;
        println!("{}", display::render(&weather)?);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requires_at_least_one_city_token() {
        assert!(Cli::try_parse_from(["skycast"]).is_err());
    }

    #[test]
    fn accepts_a_single_city_token() {
        let cli = Cli::try_parse_from(["skycast", "Paris"]).expect("parses");
        assert_eq!(cli.city, ["Paris"]);
    }

    #[test]
    fn joins_multi_word_cities_with_single_spaces() {
        let cli = Cli::try_parse_from(["skycast", "New", "York"]).expect("parses");
        assert_eq!(cli.city.join(" "), "New York");
    }
}

use clap::{Parser, Subcommand};
use tablemate::core::tagging::ResponseIntensity;

/// `Tablemate` - food personality tagging and social dining.
#[derive(Parser, Debug)]
#[command(name = "tablemate")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Find your food personality and someone to share a table with.", long_about = None)]
pub struct Cli {
    /// Load this config file instead of ~/.tablemate/config.toml
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the preference probe catalog
    Catalog,

    /// Answer every probe and derive food personality tags
    Tag {
        /// One intensity per probe, in catalog order (like, love, dislike, hate)
        #[arg(long, value_delimiter = ',', conflicts_with = "swipes", required_unless_present = "swipes")]
        responses: Vec<ResponseIntensity>,

        /// Horizontal drag distances in pixels; short drags are ignored
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        swipes: Vec<f64>,

        /// User the derived profile belongs to
        #[arg(long, default_value = "demo-user")]
        user: String,

        /// Card width the swipe distances are measured against
        #[arg(long, default_value_t = 390.0)]
        width: f64,
    },

    /// Search restaurants, or get mood-based recommendations without a query
    Discover {
        /// Free-text search, e.g. "spicy thai"
        query: Option<String>,

        /// Mood for recommendations (happy, stressed, adventurous, celebratory, tired, cozy)
        #[arg(long)]
        mood: Option<String>,

        /// Extra terms appended to the recommendation query
        #[arg(long = "craving")]
        cravings: Vec<String>,
    },

    /// Pair with a dining companion and receive a counter-sign
    Match {
        #[arg(long, default_value = "demo-user")]
        user: String,

        /// Companion id; defaults to the most compatible online candidate
        #[arg(long)]
        companion: Option<String>,
    },

    /// Book a table
    ///
    /// Reservations live only for this invocation, so each run's
    /// confirmation code is the first in its sequence (e.g. HF2024-001).
    Book {
        /// Restaurant id (see `tablemate book --list`)
        #[arg(long, required_unless_present = "list")]
        restaurant: Option<String>,

        /// Slot label, e.g. "7:30 PM"
        #[arg(long, required_unless_present = "list")]
        time: Option<String>,

        /// Date as YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,

        #[arg(long)]
        party_size: Option<u32>,

        #[arg(long)]
        special_requests: Option<String>,

        /// List bookable restaurants and their slots instead of booking
        #[arg(long)]
        list: bool,
    },

    /// Show the effective configuration
    Config,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn book_help_explains_fresh_code_sequence() {
        let cli = Cli::command();
        let book = cli.find_subcommand("book").unwrap();
        let long_about = book.get_long_about().unwrap().to_string();
        assert!(long_about.contains("only for this invocation"));
        assert!(long_about.contains("HF2024-001"));
    }

    #[test]
    fn tag_parses_comma_separated_responses() {
        let cli = Cli::parse_from(["tablemate", "tag", "--responses", "love,LIKE,dislike"]);
        match cli.command {
            Commands::Tag { responses, .. } => assert_eq!(
                responses,
                vec![
                    ResponseIntensity::Love,
                    ResponseIntensity::Like,
                    ResponseIntensity::Dislike
                ]
            ),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn tag_parses_negative_swipes() {
        let cli = Cli::parse_from(["tablemate", "tag", "--swipes", "-120,300,40"]);
        match cli.command {
            Commands::Tag { swipes, width, .. } => {
                assert_eq!(swipes, vec![-120.0, 300.0, 40.0]);
                assert!((width - 390.0).abs() < f64::EPSILON);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn tag_rejects_both_inputs() {
        let result = Cli::try_parse_from([
            "tablemate",
            "tag",
            "--responses",
            "like",
            "--swipes",
            "200",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn global_config_flag_after_subcommand() {
        let cli = Cli::parse_from(["tablemate", "catalog", "--config", "~/alt.toml"]);
        assert_eq!(cli.config.as_deref(), Some("~/alt.toml"));
    }

    #[test]
    fn book_requires_restaurant_unless_listing() {
        assert!(Cli::try_parse_from(["tablemate", "book", "--time", "6:00 PM"]).is_err());
        assert!(Cli::try_parse_from(["tablemate", "book", "--list"]).is_ok());
    }
}

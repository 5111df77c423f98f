use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use meliaf_geo::geography::{
    countries_for_subnational, region_options, regions_for_countries, scope_options, Gazetteer,
    GeographicScope, GeographySelection, RegionCode, StudyGeography,
};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// MELIAF geography: CGIAR country, region and subnational code resolution
///
/// Examples:
///   meliaf-geo regions KE UG BR
///   meliaf-geo countries KE-01 UG-314
///   meliaf-geo derive --scope national --countries KE,TZ
///   meliaf-geo catalog subnational --country KE
///   meliaf-geo serve --port 8080
#[derive(Parser)]
#[command(name = "meliaf-geo", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve country codes to their CGIAR regions.
    Regions {
        /// Country codes (ISO 3166-1 alpha-2, e.g. KE BR).
        codes: Vec<String>,
    },

    /// Extract country codes from subnational codes (e.g. KE-01).
    Countries {
        codes: Vec<String>,
    },

    /// Derive the study geography for a geographic scope.
    Derive {
        /// global, regional, national, sub_national or site_specific.
        #[arg(long, value_parser = parse_scope)]
        scope: GeographicScope,

        #[arg(long, value_delimiter = ',')]
        regions: Vec<String>,

        #[arg(long, value_delimiter = ',')]
        countries: Vec<String>,

        #[arg(long, value_delimiter = ',')]
        subnational: Vec<String>,
    },

    /// Print one of the built-in catalogs.
    Catalog {
        #[arg(value_enum)]
        kind: CatalogKind,

        /// Region filter for `countries`.
        #[arg(long, value_parser = parse_region)]
        region: Option<RegionCode>,

        /// Country for `subnational` (required there).
        #[arg(long)]
        country: Option<String>,
    },

    /// Serve the geography JSON API.
    Serve {
        #[arg(long, default_value = "127.0.0.1", env = "MELIAF_GEO_HOST")]
        host: String,

        #[arg(long, short = 'p', default_value_t = 8080, env = "MELIAF_GEO_PORT")]
        port: u16,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum CatalogKind {
    Regions,
    Countries,
    Scopes,
    Subnational,
}

fn parse_scope(s: &str) -> Result<GeographicScope, String> {
    s.parse::<GeographicScope>().map_err(|e| e.to_string())
}

fn parse_region(s: &str) -> Result<RegionCode, String> {
    s.parse::<RegionCode>().map_err(|e| e.to_string())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "meliaf_geo=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Regions { codes } => print_json(&regions_for_countries(&codes)),
        Command::Countries { codes } => print_json(&countries_for_subnational(&codes)),
        Command::Derive {
            scope,
            regions,
            countries,
            subnational,
        } => {
            let selection = GeographySelection {
                regions,
                countries,
                subnational,
            };
            print_json(&StudyGeography::derive(scope, &selection))
        }
        Command::Catalog {
            kind,
            region,
            country,
        } => {
            let g = Gazetteer::cgiar();
            match kind {
                CatalogKind::Regions => print_json(&region_options()),
                CatalogKind::Countries => print_json(&g.country_options(region)),
                CatalogKind::Scopes => print_json(&scope_options()),
                CatalogKind::Subnational => {
                    let country = country.context("`catalog subnational` needs --country")?;
                    print_json(&g.subnational_options(&country))
                }
            }
        }
        Command::Serve { host, port } => meliaf_geo::server::start(&host, port)
            .await
            .with_context(|| format!("serving on {}:{}", host, port)),
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value).context("serialising output")?;
    println!("{}", json);
    Ok(())
}

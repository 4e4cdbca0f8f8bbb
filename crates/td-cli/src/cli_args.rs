use clap::{Args, Parser, Subcommand, ValueEnum};
use td_core::Domain;

#[derive(Debug, Parser)]
#[command(name = "td-cli")]
#[command(about = "Terminal command drills for container, orchestration, and incident tooling")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Mode,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Mode {
    /// Line protocol over stdin/stdout, one submission per line.
    Agent(AgentArgs),
    /// Interactive terminal widget.
    Tui(TuiArgs),
    Catalog(CatalogArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum DomainArg {
    Docker,
    Kubernetes,
    Incident,
}

impl From<DomainArg> for Domain {
    fn from(value: DomainArg) -> Self {
        match value {
            DomainArg::Docker => Domain::Docker,
            DomainArg::Kubernetes => Domain::Kubernetes,
            DomainArg::Incident => Domain::Incident,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum MatcherArg {
    Substring,
    Token,
}

#[derive(Debug, Clone, Args)]
pub(crate) struct SessionArgs {
    #[arg(long = "domain", value_enum, default_value_t = DomainArg::Docker)]
    pub(crate) domain: DomainArg,
    /// Play a catalog file instead of the built-in one for the domain.
    #[arg(long = "catalog")]
    pub(crate) catalog: Option<String>,
    #[arg(long = "matcher", value_enum, default_value_t = MatcherArg::Substring)]
    pub(crate) matcher: MatcherArg,
}

#[derive(Debug, Args)]
pub(crate) struct AgentArgs {
    #[command(flatten)]
    pub(crate) session: SessionArgs,
}

#[derive(Debug, Args)]
pub(crate) struct TuiArgs {
    #[command(flatten)]
    pub(crate) session: SessionArgs,
}

#[derive(Debug, Args)]
pub(crate) struct CatalogArgs {
    #[command(subcommand)]
    pub(crate) command: CatalogCommand,
}

#[derive(Debug, Subcommand)]
pub(crate) enum CatalogCommand {
    List(ListArgs),
    Check(CheckArgs),
}

#[derive(Debug, Args)]
pub(crate) struct ListArgs {
    #[arg(long = "domain", value_enum, default_value_t = DomainArg::Docker)]
    pub(crate) domain: DomainArg,
    #[arg(long = "catalog")]
    pub(crate) catalog: Option<String>,
}

#[derive(Debug, Args)]
pub(crate) struct CheckArgs {
    #[arg(long = "catalog-dir")]
    pub(crate) catalog_dir: String,
}

use anyhow::bail;
use clap::Parser;
use hostident_common::credential::Credential;
use hostident_common::host::HostQuery;

#[derive(Parser)]
#[command(name = "hostident")]
#[command(about = "Resolve the canonical network identity of one or more hosts.")]
pub struct CommandLine {
    /// Hosts to resolve: a name, an IP literal, or name\instance.
    #[arg(required = true)]
    pub targets: Vec<HostQuery>,

    /// Username for the remote-management strategies.
    #[arg(short, long)]
    pub user: Option<String>,

    /// Password for the remote-management strategies.
    #[arg(short, long, requires = "user")]
    pub password: Option<String>,

    /// Per-strategy timeout in seconds.
    #[arg(short, long, default_value_t = 4)]
    pub timeout: u64,

    /// Skip the ICMP reachability probe.
    #[arg(long)]
    pub no_ping: bool,

    /// Allow instrumentation (CIM/WMI style) strategies to run.
    #[arg(long)]
    pub instrumentation: bool,

    /// One line per host instead of the tree view.
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn credential(&self) -> anyhow::Result<Option<Credential>> {
        match (&self.user, &self.password) {
            (Some(user), Some(password)) => Ok(Some(Credential::new(user, password))),
            (Some(_), None) => bail!("--user requires --password"),
            _ => Ok(None),
        }
    }
}

use clap::Parser;
use seo_audit::{AuditConfig, AuditError};
use std::io::{self, Read};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "seo-audit")]
#[command(about = "Batch technical SEO audit for up to 10 web pages")]
#[command(version)]
pub struct Args {
    /// File with one URL per line (reads stdin when omitted or "-")
    pub input: Option<PathBuf>,

    /// Path to a JSON config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the request timeout in seconds
    #[arg(short, long)]
    pub timeout: Option<u64>,

    /// Override the User-Agent header
    #[arg(short, long)]
    pub user_agent: Option<String>,
}

impl Args {
    /// Config file values (or defaults) with command-line overrides applied
    pub fn config(&self) -> Result<AuditConfig, AuditError> {
        let mut config = match &self.config {
            Some(path) => AuditConfig::from_file(path)?,
            None => AuditConfig::default(),
        };
        if let Some(timeout) = self.timeout {
            config.timeout_secs = timeout;
        }
        if let Some(user_agent) = &self.user_agent {
            config.user_agent = user_agent.clone();
        }
        Ok(config)
    }

    /// Raw URL list text
    pub fn read_input(&self) -> Result<String, AuditError> {
        match &self.input {
            Some(path) if path.as_os_str() != "-" => {
                std::fs::read_to_string(path).map_err(AuditError::Input)
            }
            _ => {
                let mut buf = String::new();
                io::stdin()
                    .read_to_string(&mut buf)
                    .map_err(AuditError::Input)?;
                Ok(buf)
            }
        }
    }
}

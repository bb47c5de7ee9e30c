use clap::Parser;
use std::path::PathBuf;

/// Harvest podcast analytics from Spotify and Apple into a JSON snapshot.
#[derive(Parser, Debug, Clone, Default)]
#[command(author, version = version(), about, long_about = None)]
pub struct Args {
    /// Credential document to use instead of `secrets.json` in the config directory.
    #[clap(long, value_name = "FILE")]
    pub secrets: Option<PathBuf>,

    /// Snapshot file to write instead of `data.json` in the data directory.
    #[clap(long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Log at debug level.
    #[clap(short, long = "verbose", action)]
    pub verbose: bool,
}

mod config_ext {
    use super::*;
    use config::{
        Map,
        Source,
        Value,
    };
    use std::collections::HashMap;

    impl Source for Args {
        fn clone_into_box(&self) -> Box<dyn Source + Send + Sync> {
            Box::new((*self).clone())
        }

        fn collect(&self) -> Result<Map<String, Value>, config::ConfigError> {
            let mut cache = HashMap::<String, Value>::new();
            if let Some(secrets) = &self.secrets {
                cache.insert("secrets_file".to_string(), secrets.display().to_string().into());
            }
            if let Some(output) = &self.output {
                cache.insert("output_file".to_string(), output.display().to_string().into());
            }
            Ok(cache.into_iter().collect())
        }
    }
}

pub fn version() -> String {
    let author = clap::crate_authors!();
    let config_dir_path = crate::get_config_dir().display().to_string();
    let data_dir_path = crate::get_data_dir().display().to_string();

    format!(
        "\
Authors: {author}

Config directory: {config_dir_path}
Data directory: {data_dir_path}"
    )
}
